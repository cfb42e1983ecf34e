use std::path::{Path, PathBuf};

use anyhow::Context;
use cognate_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Explicit path, else `./config.json` if present, else env defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };

    match path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            tracing::info!("No config file, using environment defaults");
            Ok(Config::new())
        }
    }
}
