//! Crop stage tracking for a single viewing session.
//!
//! A [`CropStageTracker`] pairs a shared [`Catalog`] with the session's
//! [`SelectionState`] and derives everything the advisory shows from it:
//! progress, the current stage, the next action and the timeline.
//!
//! # Invariant
//!
//! The selected crop is always in the catalog and
//! `0 <= stage_index < stage_count`. Every mutation checks its input before
//! touching state, so a failed call leaves the tracker unchanged.
//!
//! # Transitions
//!
//! Any valid stage can be selected directly, forwards or backwards. Switching
//! crops keeps the stage index when the new crop has enough stages and clamps
//! it to the new crop's final stage otherwise.
//!
//! ```rust
//! use saathi_core::{NextAction, TrackerBuilder};
//!
//! let mut tracker = TrackerBuilder::new().build().unwrap();
//! tracker.select_crop("wheat").unwrap();
//! tracker.select_stage(2).unwrap();
//! assert_eq!(tracker.progress(), 0.5);
//!
//! tracker.select_stage(5).unwrap();
//! assert_eq!(tracker.next_action(), NextAction::HarvestComplete);
//!
//! // Rice has a single stage, so the index clamps to 0.
//! tracker.select_crop("rice").unwrap();
//! assert_eq!(tracker.stage_index(), 0);
//! ```

use std::sync::Arc;

use log::debug;

use crate::{
    catalog::Catalog,
    error::{AdvisoryError, Result},
    models::{Crop, NextAction, SelectionState, Stage, TimelineEntry, TimelineStatus},
};

pub mod builder;


pub use builder::TrackerBuilder;

/// Session-scoped view over the crop catalog.
#[derive(Debug, Clone)]
pub struct CropStageTracker {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    crop_position: usize,
}

impl CropStageTracker {
    /// Start a session on the catalog's first crop at stage 0.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let selection = SelectionState::new(catalog.first().id.clone(), 0);
        Self {
            catalog,
            selection,
            crop_position: 0,
        }
    }

    /// Resume a session from an externally held selection.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::UnknownCrop` if the crop is not in the catalog
    /// and `AdvisoryError::StageIndexOutOfRange` if the stage index is not
    /// valid for that crop.
    pub fn with_selection(catalog: Arc<Catalog>, selection: &SelectionState) -> Result<Self> {
        let mut tracker = Self::new(catalog);
        tracker.select_crop(&selection.crop_id)?;
        tracker.select_stage(selection.stage_index)?;
        Ok(tracker)
    }

    /// The catalog this session reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// End the session, handing back its selection.
    pub fn into_selection(self) -> SelectionState {
        self.selection
    }

    /// Switch to another crop, clamping the stage index into its range.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::UnknownCrop` if `crop_id` is not in the
    /// catalog. The selection is left unchanged in that case.
    pub fn select_crop(&mut self, crop_id: &str) -> Result<()> {
        let position = self
            .catalog
            .position(crop_id)
            .ok_or_else(|| AdvisoryError::UnknownCrop {
                id: crop_id.trim().to_string(),
            })?;

        let crop = self.catalog.crop_at(position);
        let stage_index = crop.clamp_index(self.selection.stage_index);
        if stage_index != self.selection.stage_index {
            debug!(
                "Clamped stage index {} to {} for crop '{}'",
                self.selection.stage_index, stage_index, crop.id
            );
        }

        self.selection = SelectionState::new(crop.id.clone(), stage_index);
        self.crop_position = position;
        debug!("Selected crop '{}' at stage {}", crop.id, stage_index);
        Ok(())
    }

    /// Jump to any stage of the selected crop.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::StageIndexOutOfRange` if `index` is not below
    /// the crop's stage count. The selection is left unchanged in that case.
    pub fn select_stage(&mut self, index: usize) -> Result<()> {
        let len = self.stage_count();
        if index >= len {
            return Err(AdvisoryError::stage_out_of_range(index, len));
        }

        self.selection.stage_index = index;
        debug!(
            "Selected stage {} of crop '{}'",
            index, self.selection.crop_id
        );
        Ok(())
    }

    /// The selected crop.
    pub fn crop(&self) -> &Crop {
        self.catalog.crop_at(self.crop_position)
    }

    /// Zero-based index of the current stage.
    pub fn stage_index(&self) -> usize {
        self.selection.stage_index
    }

    /// Number of stages of the selected crop.
    pub fn stage_count(&self) -> usize {
        self.crop().stage_count()
    }

    /// The stage the crop is currently in.
    pub fn current_stage(&self) -> &Stage {
        &self.crop().stages[self.selection.stage_index]
    }

    /// Fraction of the timeline reached, `(index + 1) / stage_count`.
    ///
    /// Exactly 1.0 at the final stage and never before it.
    pub fn progress(&self) -> f64 {
        (self.selection.stage_index + 1) as f64 / self.stage_count() as f64
    }

    /// Progress as a whole percentage, rounded to nearest.
    pub fn progress_percent(&self) -> u8 {
        // progress() is within [0, 1], so the rounded value fits.
        (self.progress() * 100.0).round() as u8
    }

    /// Human-readable position, e.g. "Stage 3 of 6".
    pub fn stage_label(&self) -> String {
        format!(
            "Stage {} of {}",
            self.selection.stage_index + 1,
            self.stage_count()
        )
    }

    /// What comes after the current stage.
    pub fn next_action(&self) -> NextAction<'_> {
        let next = self.selection.stage_index + 1;
        match self.crop().stage(next) {
            Some(stage) => NextAction::Pending { index: next, stage },
            None => NextAction::HarvestComplete,
        }
    }

    /// Every stage of the selected crop with its status relative to the
    /// current stage.
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        let current = self.selection.stage_index;
        self.crop()
            .stages
            .iter()
            .enumerate()
            .map(|(index, stage)| TimelineEntry {
                index,
                stage,
                status: TimelineStatus::for_position(index, current),
            })
            .collect()
    }
}
