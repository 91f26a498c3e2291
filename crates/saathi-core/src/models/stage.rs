//! Stage model definition and related functionality.

use serde::{Deserialize, Serialize};

/// A single cultivation stage within a crop's timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stage {
    /// English name of the stage
    pub name: String,

    /// Hindi name of the stage
    pub localized_name: String,

    /// Free-text timing, e.g. "30-45 days after sowing"
    pub duration: String,

    /// What the stage is about
    pub description: String,

    /// Key tasks in suggested execution order
    #[serde(default)]
    pub tasks: Vec<String>,

    /// Fertilizer recommendations (empty when none is needed)
    #[serde(default)]
    pub fertilizer: Vec<String>,

    /// Irrigation guidance
    pub irrigation: String,

    /// Pests and diseases to watch for
    #[serde(default)]
    pub pest_watch: Vec<String>,
}

impl Stage {
    /// Whether this stage calls for any fertilizer.
    pub fn needs_fertilizer(&self) -> bool {
        !self.fertilizer.is_empty()
    }
}
