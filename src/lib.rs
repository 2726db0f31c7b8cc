//! petitions: Fetch remote petition lists and render signature progress.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::io;

use app::commands::{list, show};
use services::HttpPetitionClient;

pub use app::commands::list::{ListOptions, ListOutcome, OutputFormat};
pub use app::config::load_config;
pub use domain::{AppConfig, AppError, Petition};

/// Fetch the configured endpoint once and render the batch to stdout.
pub fn list(config: &AppConfig, format: OutputFormat) -> Result<ListOutcome, AppError> {
    config.validate()?;

    let decode_options = config.decode.to_options();
    let client = HttpPetitionClient::new(&config.petitions, decode_options)?;
    let options = ListOptions { format, decode_options };

    let stdout = io::stdout();
    list::execute(&client, &mut stdout.lock(), &options)
}

/// Fetch the configured endpoint once and print one petition in full.
pub fn show(config: &AppConfig, id: &str) -> Result<(), AppError> {
    config.validate()?;

    let client = HttpPetitionClient::new(&config.petitions, config.decode.to_options())?;

    let stdout = io::stdout();
    show::execute(&client, &mut stdout.lock(), id)
}
