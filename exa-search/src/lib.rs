//! # Exa Search Library
//!
//! `exa-search` is a typed client for the Exa search API.
//!
//! It wraps the HTTP endpoints for keyword/neural search, "find similar" lookup and content retrieval, building request bodies from typed options and parsing responses into [`SearchResponse`].
//!
//! ## Example
//!
//! ```no_run
//! use exa_search::{BaseSearchOptions, ContentsOptions, ExaClient, RegularSearchOptions};
//!
//! # async fn run() -> exa_search::Result<()> {
//! let client = ExaClient::from_env()?;
//! let options = RegularSearchOptions {
//!     base: BaseSearchOptions {
//!         num_results: Some(5),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let response = client
//!     .search_and_contents("rust async runtimes", &options, &ContentsOptions::default())
//!     .await?;
//! for result in response.results {
//!     println!("{}: {}", result.url, result.text.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::nursery, clippy::pedantic, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, reason = "Dependencies")]

mod client;
pub mod config;
mod error;
mod ids;
pub mod options;
mod response;

pub use client::ExaClient;
pub use config::ClientConfig;
pub use error::{ExaError, Result};
pub use ids::ContentIds;
pub use options::{
    BaseSearchOptions, ContentOption, ContentsOptions, FindSimilarOptions, HighlightsOptions,
    RegularSearchOptions, TextOptions,
};
pub use response::{SearchResponse, SearchResult};
