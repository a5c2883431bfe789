pub mod schema;
pub mod watcher;

pub use schema::{
    GlobalConfig, ProfileConfig, SeriesConfig, SeriesOverrides, VitalsConfig, WaterConfig,
};
pub use watcher::ConfigWatcher;

use std::path::{Path, PathBuf};
use vitals_core::{Result, VitalsError};

/// Load and validate configuration from a TOML file.  Returns
/// `VitalsConfig::default()` if the file doesn't exist so the dashboard
/// always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<VitalsConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(VitalsConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<VitalsConfig> {
    let config: VitalsConfig =
        toml::from_str(raw).map_err(|e| VitalsError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("vitals").join("vitals.toml")
}
