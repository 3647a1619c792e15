use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Error;
use crate::request::{build_request, Method};
use crate::response::decode;
use crate::transport::{HttpTransport, ReqwestTransport};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Client for the Postman REST API.
///
/// Resource methods live in [`crate::resources`]; each builds one request
/// descriptor and hands it to the transport. The client holds no state
/// beyond configuration and the transport handle.
pub struct Client {
    config: Config,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::default()))
    }

    /// Construct with an injected transport (tests, instrumentation).
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        extra_header: Option<(&str, &str)>,
    ) -> Result<T, Error> {
        let req = build_request(&self.config, method, path, body, extra_header)?;
        let resp = self
            .transport
            .send(req, REQUEST_TIMEOUT, MAX_RESPONSE_BYTES)
            .await?;
        decode(resp)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send(Method::Get, path, None, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, Error> {
        self.send(Method::Post, path, Some(body), None).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, Error> {
        self.send(Method::Put, path, Some(body), None).await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, Error> {
        self.send(Method::Patch, path, Some(body), None).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send(Method::Delete, path, None, None).await
    }
}
