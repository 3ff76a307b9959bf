mod config;
mod constants;
mod csp;
mod errors;
mod filter;
mod http;
mod logging;
mod output;
mod runner;
mod types;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::debug;

use crate::config::Options;
use crate::csp::HttpCspSource;
use crate::http::build_http_client;
use crate::logging::setup_logging;
use crate::output::{OutputSink, show_banner};
use crate::runner::Runner;
use crate::types::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    setup_logging(cli.verbose, cli.silent);

    if !cli.silent {
        show_banner();
    }

    let stdin_piped = !std::io::stdin().is_terminal();
    let options = Options::from_cli(cli, stdin_piped)?;

    let client = build_http_client(&options)?;
    let source = HttpCspSource::new(client)?;
    let sink = OutputSink::create(options.output.as_deref(), true).await?;

    let summary = Runner::new(options, Arc::new(source), sink).run().await?;
    debug!(?summary, "Done");

    Ok(())
}
