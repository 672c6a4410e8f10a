//! The I/O boundary.
//!
//! `DefaultClient` never touches the network itself: it hands a finished
//! `HttpRequest` to a `Transport` and gets an `HttpResponse` back. The
//! shipped implementation is a blocking `ureq` agent; tests plug in stubs.

use std::fmt;

use ureq::Agent;

use crate::config::CONNECT_TIMEOUT;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations return any status code as data. Only failures of the
/// network call itself become `ClientError::Transport`.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request)
    }
}

/// Blocking transport backed by `ureq`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(CONNECT_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();
        let body = request.body.as_deref();

        let result = match (request.method, body) {
            (HttpMethod::Get, None) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Get, Some(body)) => with_headers(self.agent.get(url), headers)
                .force_send_body()
                .send(body.as_bytes()),
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Delete, Some(body)) => with_headers(self.agent.delete(url), headers)
                .force_send_body()
                .send(body.as_bytes()),
            (HttpMethod::Post, body) => {
                with_headers(self.agent.post(url), headers).send(body.unwrap_or_default().as_bytes())
            }
            (HttpMethod::Put, body) => {
                with_headers(self.agent.put(url), headers).send(body.unwrap_or_default().as_bytes())
            }
        };

        let mut response = result.map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // The body is handed back whole; no size cap and no UTF-8 rejection.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpResponse { status, headers, body })
    }
}
