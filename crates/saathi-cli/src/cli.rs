//! Command-line interface handling
//!
//! Implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers → Tracker
//! ```
//!
//! CLI argument structures carry the clap derives and convert into the
//! interface-agnostic parameter types from [`saathi_core::params`], so help
//! text and flag spelling can change without touching the core.

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use saathi_core::{
    display::{AdvisoryReport, CropTimeline, CurrentStage, NextActionNotice, ProgressReport},
    handlers, CropStageTracker, ViewAdvisory,
};

use crate::renderer::TerminalRenderer;

/// Crop and stage to view
///
/// CLI wrapper for ViewAdvisory. The crop is applied first; switching to a
/// crop with fewer stages clamps the stage to its last one, then `--stage`
/// (if given) selects the stage explicitly.
#[derive(Args, Clone, Default)]
pub struct SelectionArgs {
    /// Crop identifier, e.g. wheat or rice (see `saathi crops`)
    #[arg(short, long, help = "Crop identifier, e.g. wheat or rice")]
    pub crop: Option<String>,
    /// Zero-based index of the current stage
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "Zero-based index of the current stage"
    )]
    pub stage: Option<i64>,
}

impl From<SelectionArgs> for ViewAdvisory {
    /// Convert CLI arguments to core parameter structure
    fn from(val: SelectionArgs) -> Self {
        ViewAdvisory {
            crop_id: val.crop,
            stage: val.stage,
        }
    }
}

/// Runs CLI commands against one viewing session.
pub struct Cli {
    tracker: CropStageTracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: CropStageTracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// List every crop in the catalog.
    pub fn list_crops(&self) -> Result<()> {
        let crops = handlers::handle_list_crops(self.tracker.catalog());
        self.renderer.render(&format!("# Crops\n\n{crops}"))
    }

    /// Show the full advisory.
    pub fn show(mut self, args: SelectionArgs) -> Result<()> {
        self.apply(args)?;
        self.renderer
            .render(&AdvisoryReport::new(&self.tracker).to_string())
    }

    /// Show the current stage with its progress header.
    pub fn stage(mut self, args: SelectionArgs) -> Result<()> {
        self.apply(args)?;
        let output = format!(
            "{}{}",
            ProgressReport::new(&self.tracker),
            CurrentStage::new(&self.tracker)
        );
        self.renderer.render(&output)
    }

    /// Show the cultivation timeline.
    pub fn timeline(mut self, args: SelectionArgs) -> Result<()> {
        self.apply(args)?;
        self.renderer
            .render(&CropTimeline::new(&self.tracker).to_string())
    }

    /// Show the next action.
    pub fn next(mut self, args: SelectionArgs) -> Result<()> {
        self.apply(args)?;
        let output = format!(
            "{}\n{}",
            handlers::selection_status(&self.tracker),
            NextActionNotice::new(&self.tracker)
        );
        self.renderer.render(&output)
    }

    fn apply(&mut self, args: SelectionArgs) -> Result<()> {
        let view = ViewAdvisory::from(args);
        debug!("Applying selection {:?}", view);
        handlers::handle_view(&mut self.tracker, &view).context("Invalid selection")
    }
}
