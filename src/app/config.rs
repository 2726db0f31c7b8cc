//! Configuration loading for the petitions CLI.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "petitions.toml";

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, `petitions.toml` in
/// the working directory is used when present, defaults otherwise. The
/// result is validated before being returned.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config = match path {
        Some(path) => parse_file(path)?,
        None => {
            let discovered = Path::new(CONFIG_FILE);
            if discovered.exists() { parse_file(discovered)? } else { AppConfig::default() }
        }
    };

    config.validate()?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<AppConfig, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
