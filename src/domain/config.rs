//! Configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::wire::{DateEncoding, DecodeOptions, KeyNaming};

/// Configuration loaded from `petitions.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Petitions endpoint configuration.
    #[serde(default)]
    pub petitions: PetitionsApiConfig,
    /// Wire-format configuration.
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.petitions.validate()
    }
}

/// Petitions endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetitionsApiConfig {
    /// Petitions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for PetitionsApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl PetitionsApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://www.hackingwithswift.com/samples/petitions.json")
        .expect("Default petitions URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// Wire-format configuration.
///
/// The codec itself takes explicit options at every call site; the defaults
/// matching the live endpoint (camelCase keys, second-precision dates) live
/// here in the configuration layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeConfig {
    /// Key naming convention of the payload.
    #[serde(default = "default_key_naming")]
    pub key_naming: KeyNaming,
    /// Date encoding of the payload.
    #[serde(default = "default_date_encoding")]
    pub date_encoding: DateEncoding,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { key_naming: default_key_naming(), date_encoding: default_date_encoding() }
    }
}

impl DecodeConfig {
    pub fn to_options(self) -> DecodeOptions {
        DecodeOptions { key_naming: self.key_naming, date_encoding: self.date_encoding }
    }
}

fn default_key_naming() -> KeyNaming {
    KeyNaming::CamelCase
}

fn default_date_encoding() -> DateEncoding {
    DateEncoding::SecondsSinceEpoch
}
