mod config;

pub use config::{Config, HighlightConfig, LoggingConfig, LuckConfig};

use std::path::PathBuf;

/// Returns `~/.config/fourpillars[-dev]/` based on FOURPILLARS_ENV.
///
/// Set FOURPILLARS_ENV=dev to use the development configuration directory.
/// The directory is not created here; [`Config::save_to`] creates it on write.
pub fn data_dir() -> crate::error::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .ok_or(crate::error::ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("FOURPILLARS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("fourpillars-dev")
    } else {
        base_dir.join("fourpillars")
    };

    Ok(dir)
}
