//! Per-call request state.
//!
//! A `RequestState` is created for each `execute` call and consumed when the
//! `HttpRequest` is produced. It is the only place the API path invariant
//! lives: the path must be set, non-empty, and carries exactly one leading
//! slash.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ClientError;
use crate::http::HttpMethod;

#[derive(Debug, Clone)]
pub struct RequestState {
    api_path: Option<String>,
    method: HttpMethod,
    body: String,
    request_id: Uuid,
}

impl RequestState {
    /// Start a request with a fresh id, no path and an empty body.
    pub fn new(method: HttpMethod) -> Self {
        Self {
            api_path: None,
            method,
            body: String::new(),
            request_id: Uuid::new_v4(),
        }
    }

    pub fn set_api_path(&mut self, path: &str) -> Result<(), ClientError> {
        if path.is_empty() {
            return Err(ClientError::ApiPathCannotBeNull);
        }
        self.api_path = Some(normalize_path(path));
        Ok(())
    }

    pub fn api_path(&self) -> Result<&str, ClientError> {
        self.api_path.as_deref().ok_or(ClientError::ApiPathNotFound)
    }

    /// Serialize `arguments` to the JSON body.
    pub fn set_arguments<A: Serialize + ?Sized>(&mut self, arguments: &A) -> Result<(), ClientError> {
        self.body = encode_arguments(arguments)?;
        Ok(())
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

/// Collapse any run of leading slashes into exactly one.
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// JSON-encode request arguments. Only "no arguments" (a value that
/// serializes to `null`, such as `()`) leaves the body empty; `{}` and `[]`
/// are sent as-is.
fn encode_arguments<A: Serialize + ?Sized>(arguments: &A) -> Result<String, ClientError> {
    match serde_json::to_value(arguments)? {
        Value::Null => Ok(String::new()),
        value => Ok(serde_json::to_string(&value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_api_path_prepends_slash() {
        let mut state = RequestState::new(HttpMethod::Get);
        state.set_api_path("comments").unwrap();
        assert_eq!(state.api_path().unwrap(), "/comments");
    }

    #[test]
    fn set_api_path_collapses_leading_slashes() {
        let mut state = RequestState::new(HttpMethod::Get);
        state.set_api_path("///comment/2").unwrap();
        assert_eq!(state.api_path().unwrap(), "/comment/2");
    }

    #[test]
    fn set_api_path_rejects_empty() {
        let mut state = RequestState::new(HttpMethod::Get);
        let err = state.set_api_path("").unwrap_err();
        assert!(matches!(err, ClientError::ApiPathCannotBeNull));
    }

    #[test]
    fn api_path_unset_is_not_found() {
        let state = RequestState::new(HttpMethod::Put);
        assert!(matches!(state.api_path(), Err(ClientError::ApiPathNotFound)));
    }

    #[test]
    fn request_ids_are_unique() {
        let a = RequestState::new(HttpMethod::Get);
        let b = RequestState::new(HttpMethod::Get);
        assert_ne!(a.request_id(), b.request_id());
    }

    #[test]
    fn no_arguments_encode_to_empty_body() {
        assert_eq!(encode_arguments(&()).unwrap(), "");
        assert_eq!(encode_arguments(&serde_json::Value::Null).unwrap(), "");
    }

    #[test]
    fn empty_collections_are_still_json() {
        assert_eq!(encode_arguments(&json!({})).unwrap(), "{}");
        assert_eq!(encode_arguments(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn arguments_encode_to_json() {
        let mut state = RequestState::new(HttpMethod::Post);
        state.set_arguments(&json!({"id": 2, "author": "2", "text": "2"})).unwrap();
        let body: Value = serde_json::from_str(state.body()).unwrap();
        assert_eq!(body, json!({"id": 2, "author": "2", "text": "2"}));
    }
}
