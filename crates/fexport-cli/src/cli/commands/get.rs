//! `fexport get <url>` – fetch a URL and save it.

use anyhow::{bail, Result};
use fexport_core::config::ExportConfig;
use fexport_core::sink::FileSystemSink;
use fexport_core::transport::CurlTransport;
use fexport_core::{DownloadOptions, Exporter};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct GetArgs {
    pub url: String,
    pub filename: Option<String>,
    pub method: String,
    pub headers: Vec<String>,
    pub params: Vec<String>,
    pub data: Option<String>,
    pub no_timestamp: bool,
    pub timestamp_format: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
}

/// Merges command-line arguments over config defaults.
pub fn build_options(cfg: &ExportConfig, args: &GetArgs) -> Result<DownloadOptions> {
    let mut options = DownloadOptions {
        filename: args.filename.clone(),
        method: args.method.clone(),
        use_timestamp: cfg.use_timestamp && !args.no_timestamp,
        timestamp_format: args
            .timestamp_format
            .clone()
            .unwrap_or_else(|| cfg.timestamp_format.clone()),
        ..DownloadOptions::default()
    };

    for h in &args.headers {
        let Some((name, value)) = h.split_once(':') else {
            bail!("invalid header {:?}: expected `Name: value`", h);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("invalid header {:?}: empty name", h);
        }
        options.headers.insert(name.to_string(), value.trim().to_string());
    }

    for p in &args.params {
        let Some((key, value)) = p.split_once('=') else {
            bail!("invalid param {:?}: expected `key=value`", p);
        };
        options.params.push((key.to_string(), value.to_string()));
    }

    options.data = args.data.as_ref().map(|d| {
        serde_json::from_str(d).unwrap_or_else(|_| serde_json::Value::String(d.clone()))
    });

    Ok(options)
}

/// Runs one export and prints the result. Returns whether it succeeded.
pub async fn run_get(cfg: &ExportConfig, args: GetArgs) -> Result<bool> {
    let options = build_options(cfg, &args)?;
    let dir = args.dir.clone().unwrap_or_else(|| cfg.download_dir.clone());
    let exporter = Exporter::new(
        Arc::new(CurlTransport::from_config(cfg)),
        Arc::new(FileSystemSink::new(dir)),
    );

    let result = exporter.export_file(&args.url, &options).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.success {
        println!("{}", result.message.as_deref().unwrap_or(&result.filename));
    } else {
        eprintln!(
            "export failed: {}",
            result.message.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(result.success)
}
