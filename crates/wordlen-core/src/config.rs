use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default fetch pool width.
pub const DEFAULT_WORKERS: usize = 3;

/// Global configuration loaded from `~/.config/wordlen/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlenConfig {
    /// Number of pages fetched concurrently.
    pub workers: usize,
    /// Seconds allowed to establish a connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole page transfer.
    pub timeout_secs: u64,
    /// Maximum redirects followed per page.
    pub max_redirections: u32,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Optional cap on a page body in bytes (None = no cap).
    #[serde(default)]
    pub max_body_bytes: Option<u64>,
}

fn default_user_agent() -> String {
    format!("wordlen/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WordlenConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            user_agent: default_user_agent(),
            max_body_bytes: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wordlen")?;
    Ok(xdg_dirs.get_config_home().join("wordlen").join("config.toml"))
}

/// Load configuration from the XDG config path. A missing file yields defaults;
/// nothing is written to disk.
pub fn load() -> Result<WordlenConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(WordlenConfig::default());
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<WordlenConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: WordlenConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Render a configuration as TOML, as it would appear in the config file.
pub fn to_toml(cfg: &WordlenConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
