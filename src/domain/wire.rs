//! Wire codec for the petitions JSON envelope.
//!
//! The payload is an object with a `results` array of petition records.
//! Record order is the server's order; the codec neither deduplicates nor
//! sorts. A payload that does not match the expected shape fails as a whole,
//! so callers never observe a partial batch.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Petition};

/// Key naming convention of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyNaming {
    /// `signatureCount`, `signaturesNeeded`, ...
    CamelCase,
    /// `signature_count`, `signatures_needed`, ...
    SnakeCase,
}

/// Numeric encoding of the `deadline` and `created` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateEncoding {
    /// Whole seconds since the Unix epoch.
    SecondsSinceEpoch,
    /// Whole milliseconds since the Unix epoch.
    MillisecondsSinceEpoch,
}

/// Wire-format options stated by the caller.
///
/// The codec carries no implicit defaults; every call site names the key
/// naming and date encoding of the payload it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub key_naming: KeyNaming,
    pub date_encoding: DateEncoding,
}

/// Decode a petitions envelope into domain records.
///
/// An empty `results` array is an empty vector, not an error.
pub fn decode_petitions(body: &str, options: DecodeOptions) -> Result<Vec<Petition>, AppError> {
    match options.key_naming {
        KeyNaming::CamelCase => {
            let envelope: Envelope<CamelRecord> =
                serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))?;
            envelope
                .results
                .into_iter()
                .map(|record| record.into_petition(options.date_encoding))
                .collect()
        }
        KeyNaming::SnakeCase => {
            let envelope: Envelope<SnakeRecord> =
                serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))?;
            envelope
                .results
                .into_iter()
                .map(|record| record.into_petition(options.date_encoding))
                .collect()
        }
    }
}

/// Re-encode domain records as the petitions envelope.
///
/// Decoding an encoded envelope with the same options reproduces the input
/// exactly.
pub fn encode_petitions(petitions: &[Petition], options: DecodeOptions) -> String {
    let body = match options.key_naming {
        KeyNaming::CamelCase => {
            let envelope = Envelope {
                results: petitions
                    .iter()
                    .map(|p| CamelRecord::from_petition(p, options.date_encoding))
                    .collect(),
            };
            serde_json::to_string_pretty(&envelope)
        }
        KeyNaming::SnakeCase => {
            let envelope = Envelope {
                results: petitions
                    .iter()
                    .map(|p| SnakeRecord::from_petition(p, options.date_encoding))
                    .collect(),
            };
            serde_json::to_string_pretty(&envelope)
        }
    };

    // Plain structs with string keys; serialization cannot fail.
    body.expect("petition envelope serialization is infallible")
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<R> {
    results: Vec<R>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CamelRecord {
    id: String,
    title: String,
    body: String,
    deadline: i64,
    created: i64,
    signature_count: u64,
    signature_threshold: u64,
    signatures_needed: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnakeRecord {
    id: String,
    title: String,
    body: String,
    deadline: i64,
    created: i64,
    signature_count: u64,
    signature_threshold: u64,
    signatures_needed: u64,
}

impl CamelRecord {
    fn into_petition(self, encoding: DateEncoding) -> Result<Petition, AppError> {
        Ok(Petition {
            id: self.id,
            title: self.title,
            body: self.body,
            deadline: decode_timestamp(self.deadline, encoding)?,
            created: decode_timestamp(self.created, encoding)?,
            signature_count: self.signature_count,
            signature_threshold: self.signature_threshold,
            signatures_needed: self.signatures_needed,
        })
    }

    fn from_petition(petition: &Petition, encoding: DateEncoding) -> Self {
        Self {
            id: petition.id.clone(),
            title: petition.title.clone(),
            body: petition.body.clone(),
            deadline: encode_timestamp(petition.deadline, encoding),
            created: encode_timestamp(petition.created, encoding),
            signature_count: petition.signature_count,
            signature_threshold: petition.signature_threshold,
            signatures_needed: petition.signatures_needed,
        }
    }
}

impl SnakeRecord {
    fn into_petition(self, encoding: DateEncoding) -> Result<Petition, AppError> {
        Ok(Petition {
            id: self.id,
            title: self.title,
            body: self.body,
            deadline: decode_timestamp(self.deadline, encoding)?,
            created: decode_timestamp(self.created, encoding)?,
            signature_count: self.signature_count,
            signature_threshold: self.signature_threshold,
            signatures_needed: self.signatures_needed,
        })
    }

    fn from_petition(petition: &Petition, encoding: DateEncoding) -> Self {
        Self {
            id: petition.id.clone(),
            title: petition.title.clone(),
            body: petition.body.clone(),
            deadline: encode_timestamp(petition.deadline, encoding),
            created: encode_timestamp(petition.created, encoding),
            signature_count: petition.signature_count,
            signature_threshold: petition.signature_threshold,
            signatures_needed: petition.signatures_needed,
        }
    }
}

fn decode_timestamp(raw: i64, encoding: DateEncoding) -> Result<DateTime<Utc>, AppError> {
    let parsed = match encoding {
        DateEncoding::SecondsSinceEpoch => Utc.timestamp_opt(raw, 0).single(),
        DateEncoding::MillisecondsSinceEpoch => Utc.timestamp_millis_opt(raw).single(),
    };

    parsed.ok_or_else(|| AppError::Decode(format!("timestamp {raw} is out of range")))
}

fn encode_timestamp(value: DateTime<Utc>, encoding: DateEncoding) -> i64 {
    match encoding {
        DateEncoding::SecondsSinceEpoch => value.timestamp(),
        DateEncoding::MillisecondsSinceEpoch => value.timestamp_millis(),
    }
}
