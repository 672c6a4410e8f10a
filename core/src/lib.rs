//! Synchronous HTTP client for the example comments service.
//!
//! # Overview
//! `DefaultClient` turns a path, a set of arguments and a verb into an
//! immutable `HttpRequest`, hands it to a `Transport`, and returns the raw
//! response. `ExampleProvider` binds the three operations of the comments
//! API to fixed sub-paths on top of it.
//!
//! # Design
//! - No per-request state lives on the client; each call builds its own
//!   request descriptor, so a client can be shared freely.
//! - Arguments are encoded once, as JSON, and that encoding is both the
//!   previewed body and the body on the wire.
//! - Responses are never parsed.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod request;
pub mod transport;
pub mod types;

pub use client::{DefaultClient, Exchange};
pub use config::{ClientConfig, CONNECT_TIMEOUT, DEFAULT_PORT};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use provider::ExampleProvider;
pub use request::RequestState;
pub use transport::{Transport, UreqTransport};
pub use types::{Example, ExampleUpdate};
