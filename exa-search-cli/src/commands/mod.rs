//! Subcommands for the Exa Search CLI.

mod contents;
mod search;
mod similar;

use argh::FromArgs;
use exa_search::{BaseSearchOptions, ContentOption, ContentsOptions};

/// Possible commands.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum Command {
    /// A search command.
    Search(search::Search),
    /// A find similar command.
    Similar(similar::Similar),
    /// A contents command.
    Contents(contents::Contents),
}

/// Content components requested on the command line, `None` if neither.
fn requested_contents(text: bool, highlights: bool) -> Option<ContentsOptions> {
    let contents = ContentsOptions {
        text: text.then_some(ContentOption::Enabled),
        highlights: highlights.then_some(ContentOption::Enabled),
    };
    (!contents.is_empty()).then_some(contents)
}

/// Build the shared filters from command line values.
fn base_options(
    num_results: Option<u32>,
    include_domains: Vec<String>,
    exclude_domains: Vec<String>,
    category: Option<String>,
) -> BaseSearchOptions {
    BaseSearchOptions {
        num_results,
        include_domains: non_empty(include_domains),
        exclude_domains: non_empty(exclude_domains),
        category,
        ..Default::default()
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}
