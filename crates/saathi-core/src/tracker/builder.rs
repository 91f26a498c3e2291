//! Builder for creating and configuring CropStageTracker instances.

use std::sync::Arc;

use log::debug;

use super::CropStageTracker;
use crate::{catalog::Catalog, config::AdvisoryConfig, error::Result};

/// Builder for creating and configuring CropStageTracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    catalog: Option<Arc<Catalog>>,
    crop_id: Option<String>,
    stage: Option<usize>,
    default_stage: Option<usize>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog to track against.
    ///
    /// If not specified, the built-in catalog is used.
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the crop the session starts on.
    pub fn with_crop<S: Into<String>>(mut self, crop_id: Option<S>) -> Self {
        if let Some(crop_id) = crop_id {
            self.crop_id = Some(crop_id.into());
        }
        self
    }

    /// Sets the stage the session starts on.
    ///
    /// The index must exist for the starting crop; [`TrackerBuilder::build`]
    /// fails otherwise.
    pub fn with_stage(mut self, stage: Option<usize>) -> Self {
        if let Some(stage) = stage {
            self.stage = Some(stage);
        }
        self
    }

    /// Applies the session defaults from configuration.
    ///
    /// Unlike [`TrackerBuilder::with_stage`], a configured stage past the
    /// crop's final stage is clamped, the same way a crop switch clamps it.
    pub fn with_config(mut self, config: &AdvisoryConfig) -> Self {
        if config.default_stage.is_some() {
            self.default_stage = config.default_stage;
        }
        self.with_crop(config.default_crop.clone())
    }

    /// Builds the configured tracker.
    ///
    /// Without a crop the session starts on the catalog's first crop; without
    /// a stage it starts at stage 0.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::InvalidCatalog` if the built-in catalog fails
    /// validation, `AdvisoryError::UnknownCrop` if the starting crop is not
    /// in the catalog and `AdvisoryError::StageIndexOutOfRange` if a stage
    /// given with [`TrackerBuilder::with_stage`] does not exist for it.
    pub fn build(self) -> Result<CropStageTracker> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(Catalog::builtin()?),
        };

        let mut tracker = CropStageTracker::new(catalog);
        if let Some(stage) = self.default_stage {
            // Start from the configured index; select_crop clamps it below.
            tracker.selection.stage_index = stage;
        }
        match &self.crop_id {
            Some(crop_id) => tracker.select_crop(crop_id)?,
            None => {
                let first = tracker.crop().id.clone();
                tracker.select_crop(&first)?;
            }
        }
        if let Some(stage) = self.stage {
            tracker.select_stage(stage)?;
        }

        debug!(
            "Tracker started on crop '{}' at stage {}",
            tracker.selection.crop_id, tracker.selection.stage_index
        );
        Ok(tracker)
    }
}
