//! # Options module
//!
//! Typed request options. Every field is optional; absent fields are left out of the request body entirely, so the service applies its own defaults.
//!
//! ## Types
//!
//! - [`BaseSearchOptions`]: Filters shared by search and "find similar".
//! - [`RegularSearchOptions`]: [`BaseSearchOptions`] plus autoprompt and search type.
//! - [`FindSimilarOptions`]: [`BaseSearchOptions`] plus source domain exclusion.
//! - [`ContentsOptions`]: Which content components ([`TextOptions`], [`HighlightsOptions`]) to extract.

use serde::{Serialize, Serializer};

/// Filters shared by search and "find similar".
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BaseSearchOptions {
    /// Number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,
    /// Only return results from these domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    /// Never return results from these domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    /// Earliest crawl date (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_crawl_date: Option<String>,
    /// Latest crawl date (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_crawl_date: Option<String>,
    /// Earliest publish date (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<String>,
    /// Latest publish date (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_published_date: Option<String>,
    /// Content category to focus on, e.g. `"company"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Options for a regular search.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegularSearchOptions {
    /// Shared filters.
    #[serde(flatten)]
    pub base: BaseSearchOptions,
    /// Let the service rewrite the query into a search-optimized form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_autoprompt: Option<bool>,
    /// Search type, conventionally `"keyword"` or `"neural"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
}

/// Options for a "find similar" lookup.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindSimilarOptions {
    /// Shared filters.
    #[serde(flatten)]
    pub base: BaseSearchOptions,
    /// Leave out results from the domain of the source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_source_domain: Option<bool>,
}

/// A content component that is either enabled with service defaults, or configured explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOption<T> {
    /// Use service defaults. Serialized as `true`.
    Enabled,
    /// Use the given options.
    Custom(T),
}

impl<T> From<T> for ContentOption<T> {
    fn from(options: T) -> Self {
        Self::Custom(options)
    }
}

impl<T: Serialize> Serialize for ContentOption<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Enabled => serializer.serialize_bool(true),
            Self::Custom(options) => options.serialize(serializer),
        }
    }
}

/// Text extraction options.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    /// Upper bound on the length of the returned text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    /// Keep HTML markup in the returned text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_html_tags: Option<bool>,
}

/// Highlight extraction options.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightsOptions {
    /// Query used to pick highlights, defaults to the search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Sentences per highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_sentences: Option<u32>,
    /// Highlights per URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights_per_url: Option<u32>,
}

/// Which content components to extract for each result.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentsOptions {
    /// Extract page text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ContentOption<TextOptions>>,
    /// Extract highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<ContentOption<HighlightsOptions>>,
}

impl ContentsOptions {
    /// Extract text with service defaults.
    #[must_use]
    pub const fn text() -> Self {
        Self {
            text: Some(ContentOption::Enabled),
            highlights: None,
        }
    }

    /// Extract highlights with service defaults.
    #[must_use]
    pub const fn highlights() -> Self {
        Self {
            text: None,
            highlights: Some(ContentOption::Enabled),
        }
    }

    /// Whether no component was requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.highlights.is_none()
    }

    /// The options actually sent along with a search: text is extracted when nothing was requested.
    #[must_use]
    pub fn or_text(&self) -> Self {
        if self.is_empty() {
            Self::text()
        } else {
            self.clone()
        }
    }
}
