pub mod config;
pub mod error;
pub mod petition;
pub mod wire;

pub use config::{AppConfig, DecodeConfig, PetitionsApiConfig};
pub use error::AppError;
pub use petition::Petition;
pub use wire::{DateEncoding, DecodeOptions, KeyNaming, decode_petitions, encode_petitions};
