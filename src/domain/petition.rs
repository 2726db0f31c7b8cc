//! Petition domain model.

use chrono::{DateTime, Utc};

/// A single petition record.
///
/// Values are produced only by decoding a fetched payload and are never
/// mutated afterwards. `id` is unique within a fetched batch but carries no
/// global uniqueness guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Petition {
    /// Server-assigned identifier.
    pub id: String,
    /// Campaign title.
    pub title: String,
    /// Full campaign text.
    pub body: String,
    /// Point in time after which the petition closes.
    pub deadline: DateTime<Utc>,
    /// Point in time the petition was opened.
    pub created: DateTime<Utc>,
    /// Signatures collected so far.
    pub signature_count: u64,
    /// Count at which a governing body must formally respond.
    pub signature_threshold: u64,
    /// Remaining signatures toward a secondary goal; `0` means the threshold
    /// is the active goal.
    pub signatures_needed: u64,
}

impl Petition {
    /// Ratio of collected signatures toward the active goal.
    ///
    /// Nominally in `[0, 1]`; may exceed `1.0` once signatures pass the goal,
    /// so display layers should clamp. A record with neither a needed count
    /// nor a threshold reports `0.0`.
    pub fn progress(&self) -> f64 {
        let goal = if self.signatures_needed != 0 {
            self.signatures_needed
        } else {
            self.signature_threshold
        };

        if goal == 0 {
            return 0.0;
        }

        self.signature_count as f64 / goal as f64
    }
}
