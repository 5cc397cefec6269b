//! `similar` subcommand

use super::{base_options, requested_contents};
use anyhow::Result;
use argh::FromArgs;
use exa_search::{ExaClient, FindSimilarOptions, SearchResponse};

/// find pages similar to a URL
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "similar", help_triggers("-h", "--help"))]
pub struct Similar {
    /// source URL
    #[argh(positional)]
    pub url: String,
    /// number of results to return
    #[argh(option, short = 'n')]
    pub num_results: Option<u32>,
    /// only return results from this domain (repeatable)
    #[argh(option)]
    pub include_domain: Vec<String>,
    /// never return results from this domain (repeatable)
    #[argh(option)]
    pub exclude_domain: Vec<String>,
    /// content category, e.g. "company"
    #[argh(option)]
    pub category: Option<String>,
    /// leave out results from the source URL's domain
    #[argh(switch)]
    pub exclude_source_domain: bool,
    /// extract page text
    #[argh(switch)]
    pub text: bool,
    /// extract highlights
    #[argh(switch)]
    pub highlights: bool,
}

impl Similar {
    fn options(&self) -> FindSimilarOptions {
        FindSimilarOptions {
            base: base_options(
                self.num_results,
                self.include_domain.clone(),
                self.exclude_domain.clone(),
                self.category.clone(),
            ),
            exclude_source_domain: self.exclude_source_domain.then_some(true),
        }
    }

    /// Run the lookup.
    pub async fn execute(&self, client: &ExaClient) -> Result<SearchResponse> {
        let options = self.options();

        let response = match requested_contents(self.text, self.highlights) {
            Some(contents) => {
                client
                    .find_similar_and_contents(&self.url, &options, &contents)
                    .await?
            }
            None => client.find_similar(&self.url, &options).await?,
        };

        Ok(response)
    }
}
