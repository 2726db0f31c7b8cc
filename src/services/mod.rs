mod petition_client_http;

pub use petition_client_http::HttpPetitionClient;
