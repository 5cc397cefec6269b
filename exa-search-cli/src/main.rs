#![warn(clippy::all, clippy::nursery, clippy::pedantic, clippy::cargo)]

use anyhow::{Context, Result};
use env_logger::Env;
use exa_search_cli::{Args, Config, execute, parse_config};
use log::debug;
use std::io::Write;
use std::path::Path;

const CONFIG_PATH: &str = ".exa/config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let level = record.level();
            let style = buf.default_level_style(level);
            writeln!(buf, "[{style}{level}{style:#}] {}", record.args())
        })
        .init();

    let args: Args = argh::from_env();
    debug!("Args: {:?}", args);

    let path = Path::new(CONFIG_PATH);
    let config = if path.exists() {
        parse_config(path).with_context(|| format!("Failed to parse config file {CONFIG_PATH}"))?
    } else {
        debug!("No config file at {CONFIG_PATH}, using defaults");
        Config::default()
    };

    execute(args, config).await
}
