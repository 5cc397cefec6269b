//! `contents` subcommand

use anyhow::Result;
use argh::FromArgs;
use exa_search::{ContentOption, ContentsOptions, ExaClient, SearchResponse, TextOptions};

/// retrieve contents of documents by id
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "contents", help_triggers("-h", "--help"))]
pub struct Contents {
    /// document ids, as returned by `search`
    #[argh(positional)]
    pub ids: Vec<String>,
    /// upper bound on the length of the returned text
    #[argh(option)]
    pub max_characters: Option<u32>,
    /// keep HTML markup in the returned text
    #[argh(switch)]
    pub html: bool,
    /// extract highlights
    #[argh(switch)]
    pub highlights: bool,
}

impl Contents {
    fn options(&self) -> ContentsOptions {
        let text = if self.max_characters.is_some() || self.html {
            ContentOption::Custom(TextOptions {
                max_characters: self.max_characters,
                include_html_tags: self.html.then_some(true),
            })
        } else {
            ContentOption::Enabled
        };

        ContentsOptions {
            text: Some(text),
            highlights: self.highlights.then_some(ContentOption::Enabled),
        }
    }

    /// Retrieve the contents.
    pub async fn execute(&self, client: &ExaClient) -> Result<SearchResponse> {
        Ok(client.get_contents(self.ids.clone(), &self.options()).await?)
    }
}
