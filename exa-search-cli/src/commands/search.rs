//! `search` subcommand

use super::{base_options, requested_contents};
use anyhow::Result;
use argh::FromArgs;
use exa_search::{ExaClient, RegularSearchOptions, SearchResponse};
use log::debug;

/// search the web
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "search", help_triggers("-h", "--help"))]
pub struct Search {
    /// query string
    #[argh(positional)]
    pub query: String,
    /// number of results to return
    #[argh(option, short = 'n')]
    pub num_results: Option<u32>,
    /// search type, e.g. "keyword" or "neural"
    #[argh(option, long = "type")]
    pub search_type: Option<String>,
    /// let the service rewrite the query
    #[argh(switch)]
    pub autoprompt: bool,
    /// only return results from this domain (repeatable)
    #[argh(option)]
    pub include_domain: Vec<String>,
    /// never return results from this domain (repeatable)
    #[argh(option)]
    pub exclude_domain: Vec<String>,
    /// earliest publish date (ISO-8601)
    #[argh(option)]
    pub start_published_date: Option<String>,
    /// latest publish date (ISO-8601)
    #[argh(option)]
    pub end_published_date: Option<String>,
    /// content category, e.g. "company"
    #[argh(option)]
    pub category: Option<String>,
    /// extract page text
    #[argh(switch)]
    pub text: bool,
    /// extract highlights
    #[argh(switch)]
    pub highlights: bool,
}

impl Search {
    /// Build the request options.
    fn options(&self) -> RegularSearchOptions {
        let mut base = base_options(
            self.num_results,
            self.include_domain.clone(),
            self.exclude_domain.clone(),
            self.category.clone(),
        );
        base.start_published_date.clone_from(&self.start_published_date);
        base.end_published_date.clone_from(&self.end_published_date);

        RegularSearchOptions {
            base,
            use_autoprompt: self.autoprompt.then_some(true),
            search_type: self.search_type.clone(),
        }
    }

    /// Run the search.
    pub async fn execute(&self, client: &ExaClient) -> Result<SearchResponse> {
        let options = self.options();
        debug!("Search options: {:?}", options);

        let response = match requested_contents(self.text, self.highlights) {
            Some(contents) => {
                client
                    .search_and_contents(&self.query, &options, &contents)
                    .await?
            }
            None => client.search(&self.query, &options).await?,
        };

        Ok(response)
    }
}
