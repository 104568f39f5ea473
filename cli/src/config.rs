// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use termcal_core::{APP_NAME, Config};
use tokio::fs;

const TERMCAL_CONFIG_ENV: &str = "TERMCAL_CONFIG";

/// Locate and parse the configuration file.
///
/// Priority: the `--config` flag, then the `TERMCAL_CONFIG` environment
/// variable, then the user-specific default location. Every key has a
/// default, so a missing file at the default location yields the default
/// configuration; an explicitly requested file must exist.
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TERMCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let path = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        path
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?;
    toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {e}", path.display()).into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
