//! Petitions endpoint client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, DecodeOptions, Petition, PetitionsApiConfig, decode_petitions};
use crate::ports::PetitionClient;

/// HTTP transport for the petitions endpoint.
///
/// This client performs a single GET per call. The status class is checked
/// before any decode attempt, so a failing server is reported as an HTTP
/// error rather than a schema mismatch.
#[derive(Debug, Clone)]
pub struct HttpPetitionClient {
    api_url: Url,
    decode_options: DecodeOptions,
    client: Client,
}

impl HttpPetitionClient {
    /// Create a new HTTP client for the configured endpoint.
    pub fn new(
        config: &PetitionsApiConfig,
        decode_options: DecodeOptions,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), decode_options, client })
    }

    fn send_request(&self) -> Result<Vec<Petition>, AppError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .send()
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        decode_petitions(&body, self.decode_options)
    }
}

impl PetitionClient for HttpPetitionClient {
    fn fetch_petitions(&self) -> Result<Vec<Petition>, AppError> {
        self.send_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateEncoding, KeyNaming};

    const OPTIONS: DecodeOptions = DecodeOptions {
        key_naming: KeyNaming::CamelCase,
        date_encoding: DateEncoding::SecondsSinceEpoch,
    };

    const PAYLOAD: &str = r#"{
        "results": [
            {
                "id": "131",
                "title": "Save the local library",
                "body": "Keep the branch open on weekends.",
                "deadline": 1630000000,
                "created": 1620000000,
                "signatureCount": 523,
                "signatureThreshold": 1000,
                "signaturesNeeded": 0
            }
        ]
    }"#;

    fn config(url: &str) -> PetitionsApiConfig {
        PetitionsApiConfig { api_url: Url::parse(url).unwrap(), timeout_secs: 1 }
    }

    #[test]
    fn fetch_petitions_success() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PAYLOAD)
            .create();

        let client = HttpPetitionClient::new(&config(&server.url()), OPTIONS).unwrap();
        let petitions = client.fetch_petitions().unwrap();

        assert_eq!(petitions.len(), 1);
        assert_eq!(petitions[0].title, "Save the local library");
    }

    #[test]
    fn fetch_petitions_empty_batch_succeeds() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/").with_status(200).with_body(r#"{"results": []}"#).create();

        let client = HttpPetitionClient::new(&config(&server.url()), OPTIONS).unwrap();
        assert!(client.fetch_petitions().unwrap().is_empty());
    }

    #[test]
    fn fetch_petitions_reports_status_on_404() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/").with_status(404).expect(1).create();

        let client = HttpPetitionClient::new(&config(&server.url()), OPTIONS).unwrap();
        let err = client.fetch_petitions().unwrap_err();

        assert!(matches!(err, AppError::HttpStatus(404)));
        mock.assert();
    }

    #[test]
    fn fetch_petitions_reports_status_before_decoding() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/").with_status(500).with_body(PAYLOAD).create();

        let client = HttpPetitionClient::new(&config(&server.url()), OPTIONS).unwrap();
        let err = client.fetch_petitions().unwrap_err();

        assert!(matches!(err, AppError::HttpStatus(500)));
    }

    #[test]
    fn fetch_petitions_reports_schema_mismatch_as_decode_error() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/").with_status(200).with_body(r#"{"items": []}"#).create();

        let client = HttpPetitionClient::new(&config(&server.url()), OPTIONS).unwrap();
        let err = client.fetch_petitions().unwrap_err();

        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn fetch_petitions_reports_unreachable_endpoint_as_network_error() {
        // Port 1 is never listening; the connection is refused immediately.
        let client = HttpPetitionClient::new(&config("http://127.0.0.1:1/"), OPTIONS).unwrap();
        let err = client.fetch_petitions().unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
    }
}
