//! Identifier input for content retrieval.

use super::{ExaError, Result, SearchResult};

/// Documents to retrieve contents for.
///
/// Usually built through [`From`]: a single id, a list of ids, or results of an earlier search.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentIds {
    /// A single id.
    Single(String),
    /// A list of ids.
    Many(Vec<String>),
    /// Results of an earlier call, identified by their `id`.
    Results(Vec<SearchResult>),
}

impl ContentIds {
    /// Flatten into a list of ids.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyIds`](ExaError::EmptyIds) if there is nothing to retrieve.
    pub fn into_ids(self) -> Result<Vec<String>> {
        let ids = match self {
            Self::Single(id) => vec![id],
            Self::Many(ids) => ids,
            Self::Results(results) => results.into_iter().map(|result| result.id).collect(),
        };
        if ids.is_empty() {
            return Err(ExaError::EmptyIds);
        }

        Ok(ids)
    }
}

impl From<&str> for ContentIds {
    fn from(id: &str) -> Self {
        Self::Single(id.to_owned())
    }
}

impl From<String> for ContentIds {
    fn from(id: String) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<String>> for ContentIds {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[&str]> for ContentIds {
    fn from(ids: &[&str]) -> Self {
        Self::Many(ids.iter().map(|&id| id.to_owned()).collect())
    }
}

impl From<Vec<&str>> for ContentIds {
    fn from(ids: Vec<&str>) -> Self {
        Self::from(&ids[..])
    }
}

impl<const N: usize> From<[&str; N]> for ContentIds {
    fn from(ids: [&str; N]) -> Self {
        Self::from(&ids[..])
    }
}

impl From<Vec<SearchResult>> for ContentIds {
    fn from(results: Vec<SearchResult>) -> Self {
        Self::Results(results)
    }
}

impl From<&[SearchResult]> for ContentIds {
    fn from(results: &[SearchResult]) -> Self {
        Self::Results(results.to_vec())
    }
}

impl From<&Vec<SearchResult>> for ContentIds {
    fn from(results: &Vec<SearchResult>) -> Self {
        Self::from(&results[..])
    }
}
