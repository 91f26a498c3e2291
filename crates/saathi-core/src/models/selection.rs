//! Session-scoped selection state.

use serde::{Deserialize, Serialize};

/// The crop and stage a viewing session is looking at.
///
/// A `SelectionState` on its own is just data; it is only guaranteed to be
/// valid while held by a [`crate::CropStageTracker`], which checks it against
/// the catalog on every change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SelectionState {
    /// Catalog identifier of the selected crop
    pub crop_id: String,

    /// Zero-based index of the current stage
    pub stage_index: usize,
}

impl SelectionState {
    /// Create a new selection.
    pub fn new(crop_id: impl Into<String>, stage_index: usize) -> Self {
        Self {
            crop_id: crop_id.into(),
            stage_index,
        }
    }
}
