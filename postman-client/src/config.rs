use secrecy::{ExposeSecret, SecretString};

/// Production API origin; every request path is joined onto this.
pub const DEFAULT_BASE_URL: &str = "https://api.postman.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "POSTMAN_API_KEY";

/// Process-wide configuration: read once at startup, immutable afterwards,
/// passed by reference to the request builder.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: SecretString,
    base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the API key from `POSTMAN_API_KEY`.
    ///
    /// A missing variable is not an error here: the request goes out with
    /// an empty `X-Api-Key` header and the server answers 401. Entry-point
    /// binaries that want a friendlier failure check [`Config::has_api_key`]
    /// up front.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Override the API origin (test servers, enterprise gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}
