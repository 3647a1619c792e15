#![forbid(unsafe_code)]

//! Async client for the Postman REST API.
//!
//! Each resource method validates its identifiers, builds an immutable
//! request descriptor, and hands it to an [`HttpTransport`]; nothing is
//! cached or shared between calls beyond the process-wide [`Config`].

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod resources;
pub mod response;
pub mod retry;
pub mod task;
pub mod transport;

pub use crate::client::Client;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::request::{build_request, Method};
pub use crate::retry::{log_retry, retry_any, retry_transient, retry_with_backoff, RetryPolicy};
pub use crate::task::{poll_until_complete, PollConfig};
pub use crate::transport::{
    HttpRequestParts, HttpResponseParts, HttpTransport, ReqwestTransport, TransportError,
};
