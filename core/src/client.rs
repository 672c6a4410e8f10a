//! Request building and execution for a single remote service.
//!
//! # Design
//! `DefaultClient` holds only its `ClientConfig` and a `Transport`. Every
//! call to `execute` builds a fresh `RequestState`, turns it into an
//! immutable `HttpRequest`, and returns the round-trip as an `Exchange`
//! value. Nothing is stored on the client between calls, so a response can
//! only be observed after a successful execution.

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::RequestState;
use crate::transport::{Transport, UreqTransport};

const CONTENT_TYPE: &str = "application/json";
const CACHE_CONTROL: &str = "no-cache";

/// Synchronous client for one service.
#[derive(Debug, Clone)]
pub struct DefaultClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl DefaultClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> DefaultClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn service_name(&self) -> &str {
        self.config.service_name()
    }

    pub fn host(&self) -> &str {
        self.config.host()
    }

    pub fn app_uid(&self) -> Option<&str> {
        self.config.app_uid()
    }

    pub fn port(&self) -> u16 {
        self.config.port()
    }

    pub fn dsn(&self) -> String {
        self.config.dsn()
    }

    pub fn get<A: Serialize + ?Sized>(&self, path: &str, arguments: &A) -> Result<Exchange, ClientError> {
        self.execute(path, arguments, HttpMethod::Get)
    }

    pub fn post<A: Serialize + ?Sized>(&self, path: &str, arguments: &A) -> Result<Exchange, ClientError> {
        self.execute(path, arguments, HttpMethod::Post)
    }

    pub fn put<A: Serialize + ?Sized>(&self, path: &str, arguments: &A) -> Result<Exchange, ClientError> {
        self.execute(path, arguments, HttpMethod::Put)
    }

    pub fn delete<A: Serialize + ?Sized>(&self, path: &str, arguments: &A) -> Result<Exchange, ClientError> {
        self.execute(path, arguments, HttpMethod::Delete)
    }

    /// Build the request for `path`, send it, and return the round-trip.
    ///
    /// Fails with `ApiPathCannotBeNull` for an empty path and with
    /// `Transport` when the network call fails. Non-2xx statuses are not
    /// errors.
    pub fn execute<A: Serialize + ?Sized>(
        &self,
        path: &str,
        arguments: &A,
        method: HttpMethod,
    ) -> Result<Exchange, ClientError> {
        let request = self.prepare(path, arguments, method)?;
        let preview = self.build_request(&request);

        debug!(
            service = self.config.service_name(),
            request_id = %request.request_id,
            method = %request.method,
            url = %request.url,
            content_length = request.content_length(),
            "dispatching request"
        );

        let response = self.transport.send(&request).inspect_err(|e| {
            warn!(
                service = self.config.service_name(),
                request_id = %request.request_id,
                error = %e,
                "request failed"
            );
        })?;

        debug!(request_id = %request.request_id, status = response.status, "response received");

        Ok(Exchange {
            request,
            preview,
            response,
        })
    }

    /// Turn caller arguments into an immutable request descriptor.
    pub fn prepare<A: Serialize + ?Sized>(
        &self,
        path: &str,
        arguments: &A,
        method: HttpMethod,
    ) -> Result<HttpRequest, ClientError> {
        let mut state = RequestState::new(method);
        state.set_api_path(path)?;
        state.set_arguments(arguments)?;

        let api_path = state.api_path()?.to_string();
        let mut headers = vec![
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ("Cache-Control".to_string(), CACHE_CONTROL.to_string()),
        ];
        if let Some(app_uid) = self.config.app_uid() {
            headers.push(("App-Uid".to_string(), app_uid.to_string()));
        }
        let body = match state.body() {
            "" => None,
            body => Some(body.to_string()),
        };

        Ok(HttpRequest {
            method: state.method(),
            url: format!("{}{api_path}", self.config.base_url()),
            api_path,
            headers,
            body,
            request_id: state.request_id(),
        })
    }

    /// Render `request` as an HTTP/1.0 message: request line, header block,
    /// blank line, body.
    pub fn build_request(&self, request: &HttpRequest) -> String {
        let mut lines = vec![
            format!("{} {} HTTP/1.0", request.method, request.api_path),
            format!("Host: {}", self.config.authority()),
            format!("Content-Type: {CONTENT_TYPE}"),
            format!("Cache-Control: {CACHE_CONTROL}"),
            format!("Content-Length: {}", request.content_length()),
        ];
        if let Some(app_uid) = self.config.app_uid() {
            lines.push(format!("App-Uid: {app_uid}"));
        }
        lines.push(String::new());
        lines.push(request.body.clone().unwrap_or_default());
        lines.join("\n")
    }
}

/// One completed round-trip: what was sent and what came back.
#[derive(Debug, Clone)]
pub struct Exchange {
    request: HttpRequest,
    preview: String,
    response: HttpResponse,
}

impl Exchange {
    /// Raw response body, unmodified.
    pub fn response(&self) -> &str {
        &self.response.body
    }

    pub fn into_response(self) -> String {
        self.response.body
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn http_response(&self) -> &HttpResponse {
        &self.response
    }

    /// The request as rendered by `DefaultClient::build_request`.
    pub fn request(&self) -> &str {
        &self.preview
    }

    pub fn http_request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn request_id(&self) -> Uuid {
        self.request.request_id
    }

    pub fn method(&self) -> HttpMethod {
        self.request.method
    }

    pub fn body(&self) -> &str {
        self.request.body.as_deref().unwrap_or_default()
    }
}
