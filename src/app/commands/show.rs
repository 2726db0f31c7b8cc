//! Show command: fetch once and display a single petition in full.

use std::io::Write;

use crate::app::commands::DATE_FORMAT;
use crate::domain::AppError;
use crate::ports::PetitionClient;

/// Fetch once and print the petition with the given id.
///
/// The percentage here is the raw ratio, not clamped, so an over-goal
/// petition reads as more than 100%.
pub fn execute<C: PetitionClient, W: Write>(
    client: &C,
    out: &mut W,
    id: &str,
) -> Result<(), AppError> {
    let petitions = client.fetch_petitions()?;
    let petition = petitions
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::PetitionNotFound(id.to_string()))?;

    writeln!(out, "{}", petition.title)?;
    writeln!(out, "  Id:         {}", petition.id)?;
    writeln!(out, "  Created on: {}", petition.created.format(DATE_FORMAT))?;
    writeln!(out, "  Deadline:   {}", petition.deadline.format(DATE_FORMAT))?;
    writeln!(out, "  Signatures: {}", petition.signature_count)?;
    writeln!(out, "  Threshold:  {}", petition.signature_threshold)?;
    writeln!(out, "  Needed:     {}", petition.signatures_needed)?;
    writeln!(out, "  Progress:   {:.1}%", petition.progress() * 100.0)?;
    writeln!(out)?;
    writeln!(out, "{}", petition.body)?;

    Ok(())
}
