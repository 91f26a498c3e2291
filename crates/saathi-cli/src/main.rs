//! Kisan Saathi CLI Application
//!
//! Command-line interface and MCP server for the crop advisory.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SaathiMcpServer};
use renderer::TerminalRenderer;
use saathi_core::{AdvisoryConfig, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        command,
    } = Args::parse();

    let config =
        AdvisoryConfig::load(config_file.as_deref()).context("Failed to load configuration")?;

    let tracker = TrackerBuilder::new()
        .with_config(&config)
        .build()
        .context("Failed to initialize crop tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Kisan Saathi started");

    match command {
        Some(Crops) => Cli::new(tracker, renderer).list_crops(),
        Some(Show(selection)) => Cli::new(tracker, renderer).show(selection),
        Some(Stage(selection)) => Cli::new(tracker, renderer).stage(selection),
        Some(Timeline(selection)) => Cli::new(tracker, renderer).timeline(selection),
        Some(Next(selection)) => Cli::new(tracker, renderer).next(selection),
        Some(Serve) => {
            info!("Starting Kisan Saathi MCP server");
            run_stdio_server(SaathiMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(tracker, renderer).show(Default::default()),
    }
}
