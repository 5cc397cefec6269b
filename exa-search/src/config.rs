//! # Config module
//!
//! Resolution of the API key and base URL, performed once before a client is built.

use super::{ExaError, Result};

/// Environment variable consulted when no API key is given explicitly.
pub const API_KEY_VAR: &str = "EXA_API_KEY";

/// Production endpoint of the service.
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Resolved client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    /// Resolve the configuration, falling back to [`API_KEY_VAR`] when `api_key` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingApiKey`](ExaError::MissingApiKey) if neither source provides a key.
    pub fn resolve(api_key: Option<String>) -> Result<Self> {
        Self::resolve_with(api_key, |name| std::env::var(name).ok())
    }

    /// Resolve the configuration, using `lookup` to read environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`MissingApiKey`](ExaError::MissingApiKey) if neither source provides a key.
    pub fn resolve_with<F>(api_key: Option<String>, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let api_key = api_key
            .or_else(|| lookup(API_KEY_VAR))
            .filter(|key| !key.is_empty())
            .ok_or(ExaError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    /// Override the base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keep the key out of logs
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
