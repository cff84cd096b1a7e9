//! `fexport name` – dry-run the filename resolver.

use fexport_core::config::ExportConfig;
use fexport_core::filename;
use fexport_core::transport::ResponseHeaders;
use fexport_core::DownloadOptions;

#[derive(Debug, Default)]
pub struct NameArgs {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub no_timestamp: bool,
    pub timestamp_format: Option<String>,
}

pub fn resolve_name(cfg: &ExportConfig, args: &NameArgs) -> String {
    let mut headers = ResponseHeaders::new();
    if let Some(ct) = &args.content_type {
        headers.insert("content-type", ct.as_str());
    }
    if let Some(cd) = &args.content_disposition {
        headers.insert("content-disposition", cd.as_str());
    }
    let options = DownloadOptions {
        filename: args.filename.clone(),
        use_timestamp: cfg.use_timestamp && !args.no_timestamp,
        timestamp_format: args
            .timestamp_format
            .clone()
            .unwrap_or_else(|| cfg.timestamp_format.clone()),
        ..DownloadOptions::default()
    };
    filename::resolve(&options, &headers, &[])
}

pub fn run_name(cfg: &ExportConfig, args: NameArgs) {
    println!("{}", resolve_name(cfg, &args));
}
