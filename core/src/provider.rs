//! Thin façade over `DefaultClient` for the example comments service.
//!
//! Each operation is a fixed verb and sub-path; the raw response body is
//! returned exactly as the server sent it.

use std::fmt::Display;

use crate::client::DefaultClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Example, ExampleUpdate};

pub const BASE_URL: &str = "http://example.com/";
pub const SERVICE_NAME: &str = "Example";

#[derive(Debug, Clone)]
pub struct ExampleProvider<T = UreqTransport> {
    client: DefaultClient<T>,
}

impl ExampleProvider<UreqTransport> {
    pub fn new() -> Self {
        Self::with_client(DefaultClient::new(ClientConfig::new(SERVICE_NAME, BASE_URL)))
    }
}

impl Default for ExampleProvider<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ExampleProvider<T> {
    pub fn with_client(client: DefaultClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DefaultClient<T> {
        &self.client
    }

    pub fn add_example(&self, example: &Example) -> Result<String, ClientError> {
        Ok(self.client.post("comment", example)?.into_response())
    }

    pub fn update_example(&self, id: impl Display, update: &ExampleUpdate) -> Result<String, ClientError> {
        Ok(self.client.put(&format!("comment/{id}"), update)?.into_response())
    }

    pub fn get_examples(&self) -> Result<String, ClientError> {
        Ok(self.client.get("comments", &())?.into_response())
    }
}
