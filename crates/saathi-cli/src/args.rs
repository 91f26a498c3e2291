use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::SelectionArgs;

/// Crop advisory for farmers: cultivation stages, tasks and what comes next
///
/// Kisan Saathi tracks where a crop is in its cultivation timeline and shows
/// the guidance for that stage: key tasks, fertilizer, irrigation and pests
/// to watch for. Every invocation is one viewing session; pick the crop and
/// stage with `--crop` and `--stage`, or set defaults in the configuration
/// file. The `serve` command exposes the same advisory to AI assistants over
/// MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "saathi")]
pub struct Args {
    /// Path to the JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/kisan-saathi/config.json when it exists
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Kisan Saathi CLI
///
/// Without a command, `show` runs with the configured defaults.
#[derive(Subcommand)]
pub enum Commands {
    /// List the crops in the catalog
    #[command(alias = "ls")]
    Crops,
    /// Show the full advisory: progress, current stage, timeline, next action
    Show(SelectionArgs),
    /// Show the tasks, fertilizer, irrigation and pests for the current stage
    Stage(SelectionArgs),
    /// Show every stage of the crop and where the crop is now
    #[command(alias = "t")]
    Timeline(SelectionArgs),
    /// Show what to prepare for next
    #[command(alias = "n")]
    Next(SelectionArgs),
    /// Start the MCP server
    Serve,
}
