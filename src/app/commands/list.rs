//! List command: fetch the current batch and render it.

use std::io::Write;

use crate::app::commands::DATE_FORMAT;
use crate::domain::{AppError, DecodeOptions, Petition, encode_petitions};
use crate::ports::PetitionClient;

const BAR_WIDTH: usize = 20;

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable listing with progress bars.
    #[default]
    Text,
    /// Canonical JSON envelope.
    Json,
}

/// Options for the list command.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub format: OutputFormat,
    /// Wire options used when re-encoding the batch as JSON.
    pub decode_options: DecodeOptions,
}

/// Result of a completed listing.
#[derive(Debug, Clone)]
pub struct ListOutcome {
    pub count: usize,
}

/// Fetch once and render the batch.
///
/// Nothing is written to `out` until the fetch has succeeded, so a failure
/// leaves the caller's output untouched.
pub fn execute<C: PetitionClient, W: Write>(
    client: &C,
    out: &mut W,
    options: &ListOptions,
) -> Result<ListOutcome, AppError> {
    let petitions = client.fetch_petitions()?;

    match options.format {
        OutputFormat::Json => {
            writeln!(out, "{}", encode_petitions(&petitions, options.decode_options))?;
        }
        OutputFormat::Text => render_text(&petitions, out)?,
    }

    Ok(ListOutcome { count: petitions.len() })
}

fn render_text<W: Write>(petitions: &[Petition], out: &mut W) -> Result<(), AppError> {
    if petitions.is_empty() {
        writeln!(out, "No petitions found.")?;
        return Ok(());
    }

    for petition in petitions {
        writeln!(out, "{}", petition.title)?;
        writeln!(out, "  Created on: {}", petition.created.format(DATE_FORMAT))?;
        writeln!(out, "  Deadline:   {}", petition.deadline.format(DATE_FORMAT))?;
        writeln!(out, "  {}", progress_bar(petition.progress()))?;
        writeln!(out)?;
    }

    Ok(())
}

/// Render a bounded progress bar; ratios past the goal are clamped for display.
fn progress_bar(progress: f64) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    let percent = (clamped * 100.0).round() as u32;
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled), percent)
}
