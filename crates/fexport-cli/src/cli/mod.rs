//! CLI for fexport.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fexport_core::config;
use std::path::PathBuf;

use commands::{run_ext, run_get, run_name, run_sniff, GetArgs, NameArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fexport")]
#[command(about = "Fetch a URL and save it under an automatically chosen filename", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL and save the response body.
    Get {
        /// HTTP/HTTPS URL to fetch.
        url: String,

        /// Filename to save as; the extension is added from Content-Type when missing.
        #[arg(short = 'o', long)]
        filename: Option<String>,

        /// HTTP method.
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// Extra request header, `Name: value`. Repeatable.
        #[arg(short = 'H', long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        /// Query parameter, `key=value`. Repeatable.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Request body. Valid JSON is sent as JSON; anything else as raw text.
        #[arg(short = 'd', long)]
        data: Option<String>,

        /// Name generated files `download.<ext>` instead of a timestamp.
        #[arg(long)]
        no_timestamp: bool,

        /// Timestamp pattern (YYYY MM DD HH mm ss SSS).
        #[arg(long, value_name = "FMT")]
        timestamp_format: Option<String>,

        /// Directory to save into (default from config).
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the file extension registered for a MIME type.
    Ext {
        /// MIME type, parameters allowed (e.g. "text/csv; charset=utf-8").
        mime: String,
    },

    /// Detect a local file's type from its leading bytes.
    Sniff {
        /// Path to the file.
        path: PathBuf,
    },

    /// Show the filename an export would get, without fetching anything.
    Name {
        /// Explicit filename.
        #[arg(long)]
        filename: Option<String>,

        /// Content-Type header value.
        #[arg(long)]
        content_type: Option<String>,

        /// Content-Disposition header value.
        #[arg(long)]
        content_disposition: Option<String>,

        #[arg(long)]
        no_timestamp: bool,

        #[arg(long, value_name = "FMT")]
        timestamp_format: Option<String>,
    },
}

impl CliCommand {
    /// Whether the command reads `config.toml`. `ext` and `sniff` are pure
    /// lookups and never touch (or create) the config file.
    pub fn needs_config(&self) -> bool {
        matches!(self, CliCommand::Get { .. } | CliCommand::Name { .. })
    }

    /// Parses arguments and runs the command. `Ok(false)` means the command
    /// ran but reported failure (exit status 1).
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = if cli.command.needs_config() {
            load_config()?
        } else {
            config::ExportConfig::default()
        };

        match cli.command {
            CliCommand::Get {
                url,
                filename,
                method,
                headers,
                params,
                data,
                no_timestamp,
                timestamp_format,
                dir,
                json,
            } => {
                let args = GetArgs {
                    url,
                    filename,
                    method,
                    headers,
                    params,
                    data,
                    no_timestamp,
                    timestamp_format,
                    dir,
                    json,
                };
                run_get(&cfg, args).await
            }
            CliCommand::Ext { mime } => {
                run_ext(&mime);
                Ok(true)
            }
            CliCommand::Sniff { path } => run_sniff(&path),
            CliCommand::Name {
                filename,
                content_type,
                content_disposition,
                no_timestamp,
                timestamp_format,
            } => {
                run_name(
                    &cfg,
                    NameArgs {
                        filename,
                        content_type,
                        content_disposition,
                        no_timestamp,
                        timestamp_format,
                    },
                );
                Ok(true)
            }
        }
    }
}

fn load_config() -> Result<config::ExportConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
