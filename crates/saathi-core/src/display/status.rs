//! Confirmation line reported after a selection change.

use std::fmt;

use crate::tracker::CropStageTracker;

/// Where a session stands after a crop or stage was selected.
///
/// # Examples
///
/// ```rust
/// use saathi_core::{display::SelectionStatus, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new().with_stage(Some(2)).build().unwrap();
/// assert_eq!(
///     SelectionStatus::new(&tracker).to_string(),
///     "Success: Wheat (wheat) is at stage 3 of 6: Vegetative Growth (50% complete)\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStatus {
    pub crop_name: String,
    pub crop_id: String,
    /// One-based position of the current stage
    pub stage_number: usize,
    pub stage_count: usize,
    pub stage_name: String,
    pub percent_complete: u8,
}

impl SelectionStatus {
    /// Capture the tracker's current selection.
    pub fn new(tracker: &CropStageTracker) -> Self {
        let crop = tracker.crop();
        Self {
            crop_name: crop.name.clone(),
            crop_id: crop.id.clone(),
            stage_number: tracker.stage_index() + 1,
            stage_count: tracker.stage_count(),
            stage_name: tracker.current_stage().name.clone(),
            percent_complete: tracker.progress_percent(),
        }
    }
}

impl fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Success: {} ({}) is at stage {} of {}: {} ({}% complete)",
            self.crop_name,
            self.crop_id,
            self.stage_number,
            self.stage_count,
            self.stage_name,
            self.percent_complete
        )
    }
}
