//! Connection settings for a remote service.
//!
//! `ClientConfig` is immutable once built. The host may be given bare
//! (`example.com`) or with a scheme and trailing slash
//! (`http://example.com/`); both forms resolve to the same authority.

use std::time::Duration;

/// Port used when none was configured.
pub const DEFAULT_PORT: u16 = 80;

/// Fixed connect timeout applied to every request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    service_name: String,
    service_host: String,
    app_uid: Option<String>,
    port: Option<u16>,
}

impl ClientConfig {
    pub fn new(service_name: &str, service_host: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            service_host: service_host.to_string(),
            app_uid: None,
            port: None,
        }
    }

    /// Forward `app_uid` as an `App-Uid` header on every request.
    pub fn with_app_uid(mut self, app_uid: &str) -> Self {
        self.app_uid = Some(app_uid.to_string());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// The host exactly as configured.
    pub fn host(&self) -> &str {
        &self.service_host
    }

    pub fn app_uid(&self) -> Option<&str> {
        self.app_uid.as_deref()
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Host without scheme or trailing slashes, e.g. `example.com`.
    pub fn authority(&self) -> &str {
        let host = match self.service_host.split_once("://") {
            Some((_, rest)) => rest,
            None => &self.service_host,
        };
        host.trim_end_matches('/')
    }

    /// `tcp://{authority}:{port}`.
    pub fn dsn(&self) -> String {
        format!("tcp://{}:{}", self.authority(), self.port())
    }

    /// Base URL requests are issued against, without a trailing slash. The
    /// port is only spelled out when it was configured explicitly.
    pub fn base_url(&self) -> String {
        let scheme = match self.service_host.split_once("://") {
            Some((scheme, _)) => scheme,
            None => DEFAULT_SCHEME,
        };
        match self.port {
            Some(port) => format!("{scheme}://{}:{port}", self.authority()),
            None => format!("{scheme}://{}", self.authority()),
        }
    }
}
