use crate::timestamp::DEFAULT_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/fexport/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory downloads are saved to. Relative paths are resolved against the working directory.
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
    /// Name generated files after the current time instead of `download`.
    #[serde(default = "default_true")]
    pub use_timestamp: bool,
    /// Timestamp pattern (`YYYY`, `MM`, `DD`, `HH`, `mm`, `ss`, `SSS`).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional User-Agent header; libcurl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            use_timestamp: true,
            timestamp_format: default_timestamp_format(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            max_redirections: default_max_redirections(),
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fexport")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ExportConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ExportConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ExportConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
