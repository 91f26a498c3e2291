//! Crop model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Stage;

/// A crop with its ordered cultivation stages.
///
/// The order of `stages` is the cultivation timeline. A crop obtained from a
/// [`crate::Catalog`] always has at least one stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Crop {
    /// Catalog identifier, e.g. "wheat"
    pub id: String,

    /// English display name
    pub name: String,

    /// Hindi display name
    pub localized_name: String,

    /// Growing season label, e.g. "Rabi (Oct - Apr)"
    pub season: String,

    /// Cultivation stages in timeline order
    pub stages: Vec<Stage>,
}

impl Crop {
    /// Number of stages in the timeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Index of the final stage.
    ///
    /// Only meaningful for validated crops, which are never empty.
    pub fn last_index(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }

    /// Get the stage at `index`, if any.
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Clamp a stage index into this crop's valid range.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}

/// Summary information about a crop for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropSummary {
    /// Catalog identifier
    pub id: String,
    /// English display name
    pub name: String,
    /// Hindi display name
    pub localized_name: String,
    /// Growing season label
    pub season: String,
    /// Total number of stages
    pub total_stages: usize,
}

impl CropSummary {
    /// Create a CropSummary from a Crop
    pub fn from_crop(crop: &Crop) -> Self {
        Self {
            id: crop.id.clone(),
            name: crop.name.clone(),
            localized_name: crop.localized_name.clone(),
            season: crop.season.clone(),
            total_stages: crop.stage_count(),
        }
    }
}

impl From<&Crop> for CropSummary {
    fn from(crop: &Crop) -> Self {
        Self::from_crop(crop)
    }
}
