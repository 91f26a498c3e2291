//! Core library for the Kisan Saathi crop advisory.
//!
//! This crate holds the crop catalog and the session-scoped stage tracker
//! that drives the advisory: which stage a crop is in, how far along its
//! cultivation timeline it is, and what the farmer should prepare for next.
//!
//! # Overview
//!
//! - **Catalog** ([`catalog`]): immutable crop records, validated once
//! - **Tracker** ([`tracker`]): one viewing session's selection and the
//!   values derived from it
//! - **Display** ([`display`]): Markdown formatting for terminal and MCP
//!   output
//! - **Handlers** ([`handlers`]): selection workflows shared by every
//!   interface
//!
//! # Quick Start
//!
//! ```rust
//! use saathi_core::{display::AdvisoryReport, NextAction, TrackerBuilder};
//!
//! # fn example() -> saathi_core::Result<()> {
//! let mut tracker = TrackerBuilder::new().with_crop(Some("wheat")).build()?;
//! tracker.select_stage(2)?;
//!
//! assert_eq!(tracker.progress_percent(), 50);
//! if let NextAction::Pending { stage, .. } = tracker.next_action() {
//!     println!("Prepare for {}", stage.name);
//! }
//!
//! println!("{}", AdvisoryReport::new(&tracker));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::AdvisoryConfig;
pub use display::{
    AdvisoryReport, CropList, CropTimeline, CurrentStage, NextActionNotice, ProgressReport,
    SelectionStatus, Timeline,
};
pub use error::{AdvisoryError, Result};
pub use models::{
    Crop, CropSummary, NextAction, SelectionState, Stage, TimelineEntry, TimelineStatus,
};
pub use params::{SelectCrop, SelectStage, ViewAdvisory};
pub use tracker::{CropStageTracker, TrackerBuilder};
