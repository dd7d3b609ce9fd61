//! Thin blocking HTTP wrapper around a base URL.

use crate::model::ApiError;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP client bound to one base URL.
///
/// Relative endpoint paths are resolved against the base; the base always
/// ends with `/` so that its last path segment is kept.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpClient {
    /// Build a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// `InvalidUrl` if the base URL does not parse, `Network` if the TLS
    /// backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url).map_err(|e| ApiError::invalid_url(base_url, e))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ecoleta/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::network(base_url, e))?;

        Ok(Self {
            client,
            base_url: base,
        })
    }

    /// Base URL with trailing slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::invalid_url(path, e))
    }

    /// GET a URL and return the body of a successful response.
    pub fn get_text(&self, url: &Url) -> Result<String, ApiError> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ApiError::network(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(url.as_str(), status.as_u16()));
        }

        response
            .text()
            .map_err(|e| ApiError::network(url.as_str(), e))
    }
}
