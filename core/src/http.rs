//! HTTP transport types.
//!
//! # Design
//! Requests and responses are plain data. `DefaultClient` builds an
//! `HttpRequest` fresh for every call and hands it to a `Transport`; nothing
//! about a request outlives the call that made it, so one client can be
//! shared across threads.

use std::fmt;

use uuid::Uuid;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute; `api_path` is the normalized path component used in
/// the request line of the preview. `body` is `None` when the arguments
/// serialized to nothing.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub api_path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub request_id: Uuid,
}

impl HttpRequest {
    /// Byte length of the body, `0` when there is none.
    pub fn content_length(&self) -> usize {
        self.body.as_deref().map_or(0, str::len)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data. The body is returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_displays_as_upper_case_verb() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://host/comments".to_string(),
            api_path: "/comments".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
            request_id: Uuid::nil(),
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert!(req.header("App-Uid").is_none());
        assert_eq!(req.content_length(), 0);
    }
}
