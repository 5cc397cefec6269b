//! Configuration file parser.

use anyhow::Result as AnyResult;
use exa_search::ClientConfig;
use serde::Deserialize;
use std::path::Path;

/// Structure of the configuration file.
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

/// API configuration.
#[derive(Deserialize, Default)]
pub struct ApiConfig {
    /// API key for Exa. Falls back to `EXA_API_KEY` if absent.
    pub key: Option<String>,
    /// Base URL of the API. Defaults to the production endpoint.
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Resolve the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MissingApiKey`](exa_search::ExaError::MissingApiKey) if no key is configured and the environment variable is not set.
    pub fn client_config(&self) -> exa_search::Result<ClientConfig> {
        let config = ClientConfig::resolve(self.api.key.clone())?;
        Ok(match &self.api.base_url {
            Some(base_url) => config.with_base_url(base_url.as_str()),
            None => config,
        })
    }
}

/// Parse the configuration into a `Config` structure.
///
/// # Errors
///
/// Returns an [`Error`](toml::de::Error) if the configuration file is not valid, like wrongly typed fields.
fn parse_config_from_str(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Parse the configuration file into a `Config` structure.
///
/// # Errors
///
/// Returns an [IO error](std::io::Error) if reading fails, or a [TOML error](toml::de::Error) if parsing fails.
pub fn parse_config<T>(path: T) -> AnyResult<Config>
where
    T: AsRef<Path>,
{
    let content = std::fs::read_to_string(path)?;
    Ok(parse_config_from_str(&content)?)
}
