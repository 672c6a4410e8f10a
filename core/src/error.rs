//! Error types for the comments API client.
//!
//! # Design
//! Every failure is raised synchronously to the caller; nothing is retried
//! or recovered internally. Transport failures carry the underlying
//! library's message verbatim. HTTP status codes are not errors here: a
//! 4xx/5xx response is still a response and is handed back unmodified.

use thiserror::Error;

/// Errors returned by `DefaultClient` and `ExampleProvider`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No service is registered under the given name. Kept for API parity;
    /// nothing in this crate raises it.
    #[error("Services not found: \"{0}\"")]
    ServiceNotFound(String),

    /// An empty API path was supplied.
    #[error("Api path cannot be empty or null.")]
    ApiPathCannotBeNull,

    /// The API path was read before being set.
    #[error("Api path not found.")]
    ApiPathNotFound,

    /// The network call itself failed (connect, DNS, I/O).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request arguments could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_service_contract() {
        assert_eq!(
            ClientError::ServiceNotFound("Example".to_string()).to_string(),
            r#"Services not found: "Example""#
        );
        assert_eq!(
            ClientError::ApiPathCannotBeNull.to_string(),
            "Api path cannot be empty or null."
        );
        assert_eq!(ClientError::ApiPathNotFound.to_string(), "Api path not found.");
        assert_eq!(
            ClientError::Transport("Connection refused".to_string()).to_string(),
            "Transport error: Connection refused"
        );
    }
}
