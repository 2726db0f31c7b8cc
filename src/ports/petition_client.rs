//! Petition source port definition.

use crate::domain::{AppError, Petition};

/// Port for fetching the current petition list.
///
/// One call is one fetch attempt: no retry, no caching. Implementations
/// return the batch in server order or fail with a single terminal error.
pub trait PetitionClient {
    /// Fetch the current list of petitions.
    fn fetch_petitions(&self) -> Result<Vec<Petition>, AppError>;
}

/// Mock client serving a fixed batch without network calls.
#[derive(Debug, Clone, Default)]
pub struct MockPetitionClient {
    petitions: Vec<Petition>,
}

impl MockPetitionClient {
    /// Create a mock serving the given batch.
    pub fn with_petitions(petitions: Vec<Petition>) -> Self {
        Self { petitions }
    }
}

impl PetitionClient for MockPetitionClient {
    fn fetch_petitions(&self) -> Result<Vec<Petition>, AppError> {
        Ok(self.petitions.clone())
    }
}
