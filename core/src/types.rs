//! Request payloads for the comments API.
//!
//! Responses are never deserialized into these; the provider hands the raw
//! body back to the caller.

use serde::{Deserialize, Serialize};

/// A comment as submitted to `POST /comment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Example {
    pub id: u64,
    pub author: String,
    pub text: String,
}

/// Partial update for `PUT /comment/{id}`. Omitted fields are left out of
/// the JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
