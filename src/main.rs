use std::path::PathBuf;

use clap::{Parser, Subcommand};
use petitions::{AppError, OutputFormat};
use url::Url;

#[derive(Parser)]
#[command(name = "petitions")]
#[command(version)]
#[command(about = "Fetch and display remote petition lists", long_about = None)]
struct Cli {
    /// Override the petitions endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,
    /// Path to a petitions.toml configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the current petition list and render it
    #[clap(visible_alias = "ls")]
    List {
        /// Emit the canonical JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fetch once and show full detail for a single petition
    Show {
        /// Petition id within the fetched batch
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = petitions::load_config(cli.config.as_deref())?;

    if let Some(endpoint) = cli.endpoint {
        config.petitions.api_url = Url::parse(&endpoint).map_err(|e| {
            AppError::config_error(format!("Invalid endpoint URL '{}': {}", endpoint, e))
        })?;
    }

    match cli.command {
        Commands::List { json } => {
            let format = if json { OutputFormat::Json } else { OutputFormat::Text };
            petitions::list(&config, format).map(|_| ())
        }
        Commands::Show { id } => petitions::show(&config, &id),
    }
}
