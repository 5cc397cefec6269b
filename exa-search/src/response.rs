//! Response types.

use super::{ContentsOptions, ExaError, Result};
use serde::{Deserialize, Serialize};

/// A single search result.
///
/// Content fields are only filled in when the matching component was requested, see [`SearchResponse::ensure_contents`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Page title, if the service could determine one.
    pub title: Option<String>,
    /// Page URL.
    pub url: String,
    /// Estimated publish date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Author, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Relevance score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Stable identifier, usable with [`get_contents`](crate::ExaClient::get_contents).
    pub id: String,
    /// Extracted page text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extracted highlights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    /// Scores of [`highlights`](Self::highlights), in the same order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_scores: Option<Vec<f64>>,
}

/// Response of every endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Results, in ranking order.
    pub results: Vec<SearchResult>,
    /// The rewritten query, when autoprompt was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoprompt_string: Option<String>,
}

impl SearchResponse {
    /// Check that every result carries the components requested by `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingContent`](ExaError::MissingContent) naming the first result and field found missing.
    pub fn ensure_contents(&self, contents: &ContentsOptions) -> Result<()> {
        for result in &self.results {
            let missing = if contents.text.is_some() && result.text.is_none() {
                Some("text")
            } else if contents.highlights.is_some() && result.highlights.is_none() {
                Some("highlights")
            } else if contents.highlights.is_some() && result.highlight_scores.is_none() {
                Some("highlightScores")
            } else {
                None
            };
            if let Some(field) = missing {
                return Err(ExaError::MissingContent {
                    id: result.id.clone(),
                    field,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn minimal_result() {
        let body = json!({ "results": [{ "title": "T", "url": "u", "id": "1" }] });
        let response: SearchResponse = from_value(body.clone()).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title.as_deref(), Some("T"));
        assert_eq!(response.autoprompt_string, None);
        // Nothing is added on the way back out
        assert_eq!(to_value(&response).unwrap(), body);
    }

    #[test]
    fn full_result() {
        let response: SearchResponse = from_value(json!({
            "results": [{
                "title": null,
                "url": "https://example.com",
                "publishedDate": "2023-11-16",
                "author": "Jane",
                "score": 0.25,
                "id": "abc",
                "text": "Body",
                "highlights": ["Body"],
                "highlightScores": [0.5],
            }],
            "autopromptString": "Here is a page about:",
        }))
        .unwrap();
        let result = &response.results[0];
        assert_eq!(result.title, None);
        assert_eq!(result.published_date.as_deref(), Some("2023-11-16"));
        assert_eq!(result.author.as_deref(), Some("Jane"));
        assert_eq!(result.score, Some(0.25));
        assert_eq!(result.highlight_scores.as_deref(), Some(&[0.5][..]));
        assert_eq!(
            response.autoprompt_string.as_deref(),
            Some("Here is a page about:")
        );
    }

    fn response_with(result: serde_json::Value) -> SearchResponse {
        from_value(json!({ "results": [result] })).unwrap()
    }

    #[test]
    fn ensure_text() {
        let contents = ContentsOptions::text();
        let ok = response_with(json!({ "title": "T", "url": "u", "id": "1", "text": "" }));
        assert!(ok.ensure_contents(&contents).is_ok());

        let missing = response_with(json!({ "title": "T", "url": "u", "id": "1" }));
        let error = missing.ensure_contents(&contents).unwrap_err();
        assert!(matches!(
            error,
            ExaError::MissingContent { ref id, field: "text" } if id == "1"
        ));
    }

    #[test]
    fn ensure_highlights() {
        let contents = ContentsOptions::highlights();
        let ok = response_with(json!({
            "title": "T", "url": "u", "id": "1",
            "highlights": ["h"], "highlightScores": [0.1],
        }));
        assert!(ok.ensure_contents(&contents).is_ok());

        let missing = response_with(json!({
            "title": "T", "url": "u", "id": "1", "highlights": ["h"],
        }));
        assert!(matches!(
            missing.ensure_contents(&contents),
            Err(ExaError::MissingContent { field: "highlightScores", .. })
        ));
    }

    #[test]
    fn nothing_requested() {
        let response = response_with(json!({ "title": "T", "url": "u", "id": "1" }));
        assert!(response.ensure_contents(&ContentsOptions::default()).is_ok());
    }
}
