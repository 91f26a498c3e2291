//! Report wrapper types for displaying a tracker's derived views.
//!
//! Each report borrows a [`CropStageTracker`] and formats one panel of the
//! advisory. [`AdvisoryReport`] puts all of them together.

use std::fmt;

use super::collections::Timeline;
use crate::{models::NextAction, tracker::CropStageTracker};

/// Cultivation progress of the selected crop.
///
/// # Examples
///
/// ```rust
/// use saathi_core::{display::ProgressReport, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new().with_stage(Some(2)).build().unwrap();
/// let output = ProgressReport::new(&tracker).to_string();
/// assert!(output.contains("## Wheat Cultivation Progress"));
/// assert!(output.contains("- **Complete**: 50%"));
/// assert!(output.contains("- **Position**: Stage 3 of 6"));
/// ```
pub struct ProgressReport<'a> {
    tracker: &'a CropStageTracker,
}

impl<'a> ProgressReport<'a> {
    /// Create a new ProgressReport wrapper.
    pub fn new(tracker: &'a CropStageTracker) -> Self {
        Self { tracker }
    }
}

impl fmt::Display for ProgressReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crop = self.tracker.crop();
        writeln!(f, "## {} Cultivation Progress", crop.name)?;
        writeln!(f)?;
        writeln!(f, "{} • {}", crop.localized_name, crop.season)?;
        writeln!(f)?;
        writeln!(f, "- **Complete**: {}%", self.tracker.progress_percent())?;
        writeln!(f, "- **Position**: {}", self.tracker.stage_label())?;
        writeln!(
            f,
            "- **Duration**: {}",
            self.tracker.current_stage().duration
        )?;
        writeln!(f)
    }
}

/// Details of the stage the selected crop is in.
pub struct CurrentStage<'a> {
    tracker: &'a CropStageTracker,
}

impl<'a> CurrentStage<'a> {
    /// Create a new CurrentStage wrapper.
    pub fn new(tracker: &'a CropStageTracker) -> Self {
        Self { tracker }
    }
}

impl fmt::Display for CurrentStage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = self.tracker.current_stage();
        writeln!(f, "## Current Stage: {}", stage.name)?;
        writeln!(f)?;
        writeln!(f, "वर्तमान अवस्था: {}", stage.localized_name)?;
        writeln!(f)?;
        write!(f, "{stage}")
    }
}

/// The selected crop's timeline under a heading naming the crop.
///
/// # Examples
///
/// ```rust
/// use saathi_core::{display::CropTimeline, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new().with_crop(Some("rice")).build().unwrap();
/// let output = CropTimeline::new(&tracker).to_string();
/// assert!(output.starts_with("# Rice / चावल\n"));
/// assert!(output.contains("### 1. Nursery Preparation (➤ Current)"));
/// ```
pub struct CropTimeline<'a> {
    tracker: &'a CropStageTracker,
}

impl<'a> CropTimeline<'a> {
    /// Create a new CropTimeline wrapper.
    pub fn new(tracker: &'a CropStageTracker) -> Self {
        Self { tracker }
    }
}

impl fmt::Display for CropTimeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crop = self.tracker.crop();
        writeln!(f, "# {} / {}", crop.name, crop.localized_name)?;
        writeln!(f)?;
        write!(f, "{}", Timeline(self.tracker.timeline()))
    }
}

/// The action the farmer should prepare for next.
pub struct NextActionNotice<'a> {
    action: NextAction<'a>,
}

impl<'a> NextActionNotice<'a> {
    /// Create a new NextActionNotice wrapper.
    pub fn new(tracker: &'a CropStageTracker) -> Self {
        Self {
            action: tracker.next_action(),
        }
    }
}

impl fmt::Display for NextActionNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Next Action Required")?;
        writeln!(f)?;
        write!(f, "{}", self.action)
    }
}

/// The complete advisory: progress, current stage, timeline and next action.
///
/// # Examples
///
/// ```rust
/// use saathi_core::{display::AdvisoryReport, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new().with_stage(Some(5)).build().unwrap();
/// let output = AdvisoryReport::new(&tracker).to_string();
/// assert!(output.contains("## Current Stage: Maturity & Harvest"));
/// assert!(output.contains("No fertilizer required at this stage"));
/// assert!(output.contains("Prepare for harvest!"));
/// ```
pub struct AdvisoryReport<'a> {
    tracker: &'a CropStageTracker,
}

impl<'a> AdvisoryReport<'a> {
    /// Create a new AdvisoryReport wrapper.
    pub fn new(tracker: &'a CropStageTracker) -> Self {
        Self { tracker }
    }
}

impl fmt::Display for AdvisoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ProgressReport::new(self.tracker))?;
        write!(f, "{}", CurrentStage::new(self.tracker))?;
        write!(f, "{}", Timeline(self.tracker.timeline()))?;
        write!(f, "{}", NextActionNotice::new(self.tracker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackerBuilder;

    fn wheat_at(stage: usize) -> CropStageTracker {
        TrackerBuilder::new()
            .with_crop(Some("wheat"))
            .with_stage(Some(stage))
            .build()
            .expect("builtin tracker")
    }

    #[test]
    fn test_progress_report() {
        let tracker = wheat_at(0);
        let output = ProgressReport::new(&tracker).to_string();
        assert!(output.contains("गेहूं • Rabi (Oct - Apr)"));
        assert!(output.contains("- **Complete**: 17%"));
        assert!(output.contains("- **Duration**: 15-20 days before sowing"));
    }

    #[test]
    fn test_current_stage_sections() {
        let tracker = wheat_at(1);
        let output = CurrentStage::new(&tracker).to_string();
        assert!(output.contains("## Current Stage: Sowing Stage"));
        assert!(output.contains("वर्तमान अवस्था: बुवाई"));
        assert!(output.contains("#### Key Tasks / मुख्य कार्य"));
        assert!(output.contains("- Seed treatment with fungicide"));
        assert!(output.contains("- 40 kg Phosphorus"));
        assert!(output.contains("Light irrigation after sowing"));
        assert!(output.contains("- Cutworms"));
        assert!(!output.contains("No fertilizer required"));
    }

    #[test]
    fn test_next_action_pending() {
        let tracker = wheat_at(2);
        let output = NextActionNotice::new(&tracker).to_string();
        assert!(output.contains("## Next Action Required"));
        assert!(output.contains(
            "Prepare for **Flowering Stage** stage. Expected duration: 75-85 days after sowing"
        ));
    }

    #[test]
    fn test_next_action_complete() {
        let tracker = wheat_at(5);
        let output = NextActionNotice::new(&tracker).to_string();
        assert!(output.contains("Congratulations! You've reached the final stage."));
    }

    #[test]
    fn test_crop_timeline_names_crop() {
        let tracker = wheat_at(1);
        let output = CropTimeline::new(&tracker).to_string();
        assert!(output.starts_with("# Wheat / गेहूं\n\n## Cultivation Timeline\n"));
        assert!(output.contains("### 2. Sowing Stage (➤ Current)"));
        assert_eq!(output.matches("(○ Upcoming)").count(), 4);
    }

    #[test]
    fn test_advisory_report_order() {
        let tracker = wheat_at(3);
        let output = AdvisoryReport::new(&tracker).to_string();

        let progress = output.find("Cultivation Progress").unwrap();
        let current = output.find("## Current Stage").unwrap();
        let timeline = output.find("## Cultivation Timeline").unwrap();
        let next = output.find("## Next Action Required").unwrap();
        assert!(progress < current && current < timeline && timeline < next);

        assert!(output.contains("### 4. Flowering Stage (➤ Current)"));
        assert_eq!(output.matches("(✓ Completed)").count(), 3);
        assert_eq!(output.matches("(○ Upcoming)").count(), 2);
    }
}
