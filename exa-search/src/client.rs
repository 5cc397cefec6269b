//! # Client module
//!
//! The [`ExaClient`], a thin typed layer over the HTTP API.
//!
//! ## Endpoints
//!
//! | Operation | Path |
//! |---|---|
//! | [`search`](ExaClient::search), [`search_and_contents`](ExaClient::search_and_contents) | `/search` |
//! | [`find_similar`](ExaClient::find_similar), [`find_similar_and_contents`](ExaClient::find_similar_and_contents) | `/findSimilar` |
//! | [`get_contents`](ExaClient::get_contents) | `/contents` |

use super::{
    ClientConfig, ContentIds, ContentsOptions, ExaError, FindSimilarOptions, RegularSearchOptions,
    Result, SearchResponse,
};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client, Method,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const SEARCH_ENDPOINT: &str = "/search";
const FIND_SIMILAR_ENDPOINT: &str = "/findSimilar";
const CONTENTS_ENDPOINT: &str = "/contents";
const API_KEY_HEADER: &str = "x-api-key";
const USER_AGENT_VALUE: &str = concat!("exa-search-rs ", env!("CARGO_PKG_VERSION"));

/// A client for the Exa API.
///
/// Headers and base URL are fixed at construction, so one client can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct ExaClient {
    /// Base URL, without trailing slash.
    base_url: String,
    /// HTTP client carrying the fixed header set.
    client: Client,
}

/// Body of `/search` requests.
#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    #[serde(flatten)]
    options: &'a RegularSearchOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    contents: Option<&'a ContentsOptions>,
}

/// Body of `/findSimilar` requests.
#[derive(Serialize)]
struct UrlBody<'a> {
    url: &'a str,
    #[serde(flatten)]
    options: &'a FindSimilarOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    contents: Option<&'a ContentsOptions>,
}

/// Body of `/contents` requests.
#[derive(Serialize)]
struct ContentsBody<'a> {
    ids: Vec<String>,
    #[serde(flatten)]
    options: &'a ContentsOptions,
}

/// Error body returned alongside non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ExaClient {
    /// Create a new client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiKey`](ExaError::InvalidApiKey) if the key is not a valid header value, or an [`Http`](ExaError::Http) error if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key =
            HeaderValue::from_str(config.api_key()).map_err(|_| ExaError::InvalidApiKey)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: config.base_url().to_owned(),
            client,
        })
    }

    /// Create a new client with the given API key and the default base URL.
    ///
    /// # Errors
    ///
    /// See [`ExaClient::new`].
    pub fn with_api_key<T: Into<String>>(api_key: T) -> Result<Self> {
        Self::new(&ClientConfig::resolve(Some(api_key.into()))?)
    }

    /// Create a new client with the key from `EXA_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingApiKey`](ExaError::MissingApiKey) if the variable is unset, otherwise see [`ExaClient::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::resolve(None)?)
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and parse the JSON response as `T`.
    async fn request<T, B>(&self, endpoint: &str, method: Method, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{endpoint}", self.base_url);
        debug!("{method} {url}");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            // Body may be empty or not JSON, in which case there is no message
            let message = response
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
                .and_then(|body| body.error);
            warn!("{url} responded with {status}");
            return Err(ExaError::Request { status, message });
        }

        Ok(response.json().await?)
    }

    /// Search for pages matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`Request`](ExaError::Request) error on non-success status, or an [`Http`](ExaError::Http) error if sending or decoding fails.
    pub async fn search(
        &self,
        query: &str,
        options: &RegularSearchOptions,
    ) -> Result<SearchResponse> {
        let body = QueryBody {
            query,
            options,
            contents: None,
        };
        self.request(SEARCH_ENDPOINT, Method::POST, Some(&body))
            .await
    }

    /// Search for pages matching `query` and extract their contents.
    ///
    /// Text is extracted when `contents` requests nothing.
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search). Also returns [`MissingContent`](ExaError::MissingContent) if a result lacks a requested component.
    pub async fn search_and_contents(
        &self,
        query: &str,
        options: &RegularSearchOptions,
        contents: &ContentsOptions,
    ) -> Result<SearchResponse> {
        let contents = contents.or_text();
        let body = QueryBody {
            query,
            options,
            contents: Some(&contents),
        };
        let response: SearchResponse = self
            .request(SEARCH_ENDPOINT, Method::POST, Some(&body))
            .await?;
        response.ensure_contents(&contents)?;

        Ok(response)
    }

    /// Find pages similar to `url`.
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    pub async fn find_similar(
        &self,
        url: &str,
        options: &FindSimilarOptions,
    ) -> Result<SearchResponse> {
        let body = UrlBody {
            url,
            options,
            contents: None,
        };
        self.request(FIND_SIMILAR_ENDPOINT, Method::POST, Some(&body))
            .await
    }

    /// Find pages similar to `url` and extract their contents.
    ///
    /// Text is extracted when `contents` requests nothing.
    ///
    /// # Errors
    ///
    /// See [`search_and_contents`](Self::search_and_contents).
    pub async fn find_similar_and_contents(
        &self,
        url: &str,
        options: &FindSimilarOptions,
        contents: &ContentsOptions,
    ) -> Result<SearchResponse> {
        let contents = contents.or_text();
        let body = UrlBody {
            url,
            options,
            contents: Some(&contents),
        };
        let response: SearchResponse = self
            .request(FIND_SIMILAR_ENDPOINT, Method::POST, Some(&body))
            .await?;
        response.ensure_contents(&contents)?;

        Ok(response)
    }

    /// Retrieve contents of documents by id.
    ///
    /// Accepts anything convertible into [`ContentIds`]: `"id"`, `["id1", "id2"]`, `Vec<String>`, or earlier [`SearchResult`](crate::SearchResult)s.
    ///
    /// `options` is sent as given. The service extracts text when nothing is requested, so text is then expected on every result.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyIds`](ExaError::EmptyIds) without sending anything if there are no ids, otherwise see [`search_and_contents`](Self::search_and_contents).
    pub async fn get_contents<T: Into<ContentIds>>(
        &self,
        ids: T,
        options: &ContentsOptions,
    ) -> Result<SearchResponse> {
        let body = ContentsBody {
            ids: ids.into().into_ids()?,
            options,
        };
        let response: SearchResponse = self
            .request(CONTENTS_ENDPOINT, Method::POST, Some(&body))
            .await?;
        response.ensure_contents(&options.or_text())?;

        Ok(response)
    }
}
