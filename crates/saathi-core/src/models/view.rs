//! Values derived from a selection: next action and timeline entries.

use super::{Stage, TimelineStatus};

/// What the farmer should prepare for after the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction<'a> {
    /// Another stage follows the current one
    Pending {
        /// Index of the next stage
        index: usize,
        /// The next stage
        stage: &'a Stage,
    },

    /// The current stage is the final one
    HarvestComplete,
}

/// One row of a crop's cultivation timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    /// Zero-based position in the timeline
    pub index: usize,
    /// The stage at this position
    pub stage: &'a Stage,
    /// Position relative to the current stage
    pub status: TimelineStatus,
}
