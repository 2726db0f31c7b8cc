mod petition_client;

pub use petition_client::{MockPetitionClient, PetitionClient};
