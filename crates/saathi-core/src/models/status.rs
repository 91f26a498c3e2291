//! Timeline status enumeration.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Where a stage sits relative to the current stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    /// Stage lies before the current stage
    Completed,

    /// Stage is the current stage
    Current,

    /// Stage lies after the current stage
    Upcoming,
}

impl TimelineStatus {
    /// Status of the stage at `index` when `current` is the current index.
    pub fn for_position(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            Ordering::Less => TimelineStatus::Completed,
            Ordering::Equal => TimelineStatus::Current,
            Ordering::Greater => TimelineStatus::Upcoming,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for stages already passed
    /// - `➤ Current` - Arrow for the stage the crop is in
    /// - `○ Upcoming` - Circle for stages still ahead
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saathi_core::models::TimelineStatus;
    ///
    /// assert_eq!(TimelineStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TimelineStatus::Current.with_icon(), "➤ Current");
    /// assert_eq!(TimelineStatus::Upcoming.with_icon(), "○ Upcoming");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "✓ Completed",
            TimelineStatus::Current => "➤ Current",
            TimelineStatus::Upcoming => "○ Upcoming",
        }
    }
}
