//! # Exa Search CLI
//!
//! This library provides basic functionality for the `exa` command line tool.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, reason = "Dependencies")]

pub mod commands;
mod config;

use anyhow::{Context, Result};
use argh::FromArgs;
use commands::Command;
pub use config::{parse_config, Config};
use exa_search::{ExaClient, SearchResponse};
use log::{debug, info};

/// 🔎 Search the web with Exa.
#[derive(FromArgs, Debug)]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// print the raw response as JSON.
    #[argh(switch)]
    pub json: bool,
    /// the command to execute.
    #[argh(subcommand)]
    pub command: Command,
}

/// Execute the command.
///
/// # Errors
///
/// Returns an error if no API key is configured, or if the request fails.
pub async fn execute(args: Args, config: Config) -> Result<()> {
    debug!("Executing command: {:?}", args.command);
    debug!("Config: {:?}", config);

    let client_config = config.client_config().with_context(|| {
        format!(
            "Set `key` under [api] in the config file, or {}",
            exa_search::config::API_KEY_VAR
        )
    })?;
    let client = ExaClient::new(&client_config)?;

    let response = match args.command {
        Command::Search(search) => search.execute(&client).await?,
        Command::Similar(similar) => similar.execute(&client).await?,
        Command::Contents(contents) => contents.execute(&client).await?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }

    Ok(())
}

/// Print results in a human-readable form.
fn print_response(response: &SearchResponse) {
    if let Some(autoprompt) = &response.autoprompt_string {
        info!("Autoprompt: {autoprompt}");
    }
    if response.results.is_empty() {
        info!("No results. 🫙");
    }

    for result in &response.results {
        let title = result.title.as_deref().unwrap_or("(untitled)");
        match result.score {
            Some(score) => println!("{score:.3}: {title} <{}>", result.url),
            None => println!("{title} <{}>", result.url),
        }
        if let Some(highlights) = &result.highlights {
            for highlight in highlights {
                println!("  > {}", highlight.trim());
            }
        }
        if let Some(text) = &result.text {
            println!("{}\n", text.trim());
        }
    }
}
