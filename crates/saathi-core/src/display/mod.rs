//! Display formatting functions and report types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and report types that
//! format one panel of the advisory from a [`crate::CropStageTracker`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Tracker/Models │    │ Wrappers &      │    │   Markdown      │
//! │  (Crop, Stage)  │───▶│ Report Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (CropList, Timeline)
//! - [`results`]: Tracker reports (ProgressReport, CurrentStage,
//!   CropTimeline, NextActionNotice, AdvisoryReport)
//! - [`status`]: Confirmation line for selection changes (SelectionStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Design Principles
//!
//! 1. **Immutable Wrappers**: Reports borrow the tracker, never own it
//! 2. **Markdown Output**: All formatters produce markdown for rich terminal
//!    display
//! 3. **Bilingual Headings**: Section titles carry English and Hindi labels

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CropList, Timeline};
pub use results::{AdvisoryReport, CropTimeline, CurrentStage, NextActionNotice, ProgressReport};
pub use status::SelectionStatus;
