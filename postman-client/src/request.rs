//! Request descriptor construction.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::Config;
use crate::error::Error;
use crate::transport::HttpRequestParts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub(crate) const API_KEY_HEADER: &str = "X-Api-Key";

/// Build the immutable descriptor for one API call.
///
/// `path` is the resource path and already carries any query string. The
/// descriptor always includes `Content-Type: application/json` and the
/// `X-Api-Key` header (possibly empty when the key was never configured;
/// the server rejects that upstream). At most one `extra_header` is
/// supported, e.g. `Prefer: respond-async` on generation endpoints. No
/// I/O happens here.
pub fn build_request(
    config: &Config,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
    extra_header: Option<(&str, &str)>,
) -> Result<HttpRequestParts, Error> {
    let url = url::Url::parse(&format!("{}{}", config.base_url(), path))?;

    let mut headers = BTreeMap::new();
    headers.insert(
        CONTENT_TYPE_HEADER.to_string(),
        "application/json".to_string(),
    );
    headers.insert(API_KEY_HEADER.to_string(), config.api_key().to_string());
    if let Some((name, value)) = extra_header {
        headers.insert(name.to_string(), value.to_string());
    }

    let body = match body {
        Some(payload) => serde_json::to_vec(payload)?,
        None => Vec::new(),
    };

    Ok(HttpRequestParts {
        method,
        url,
        headers,
        body,
    })
}
