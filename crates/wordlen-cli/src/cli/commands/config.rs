//! `wordlen config` – show the effective configuration.

use anyhow::Result;
use std::path::Path;
use wordlen_core::config::{self, WordlenConfig};

pub fn run_config(cfg: &WordlenConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    let state = if path.exists() { "" } else { " (not present, defaults)" };
    println!("# {}{}", path.display(), state);
    print!("{}", config::to_toml(cfg)?);
    Ok(())
}
