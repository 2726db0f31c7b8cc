//! Shared testing utilities for petitions CLI tests.

use assert_cmd::Command;

/// Canonical two-petition payload served by mock endpoints.
#[allow(dead_code)]
pub const PAYLOAD: &str = r#"{
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
        },
        {
            "id": "132",
            "title": "Resurface Mill Road",
            "body": "The potholes are getting worse.",
            "deadline": 1631000000,
            "created": 1621000000,
            "signatureCount": 50,
            "signatureThreshold": 0,
            "signaturesNeeded": 100
        }
    ]
}"#;

/// Build a command for invoking the compiled `petitions` binary.
#[allow(dead_code)]
pub fn cli() -> Command {
    Command::cargo_bin("petitions").expect("Failed to locate petitions binary")
}
