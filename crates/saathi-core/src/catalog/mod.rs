//! Immutable crop catalog.
//!
//! A [`Catalog`] maps crop identifiers to [`Crop`] records. It is validated
//! once at construction and never changes afterwards, so trackers share it
//! behind an [`std::sync::Arc`].
//!
//! ```rust
//! use saathi_core::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let wheat = catalog.first();
//! assert_eq!(wheat.id, "wheat");
//! assert_eq!(wheat.stage_count(), 6);
//!
//! let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
//! assert_eq!(ids, ["wheat", "rice"]);
//! ```

mod builtin;

use std::collections::HashSet;

use log::debug;

use crate::{
    error::{AdvisoryError, Result},
    models::{Crop, CropSummary},
};

/// Validated, read-only collection of crops in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    crops: Vec<Crop>,
}

impl Catalog {
    /// Build a catalog from crop records.
    ///
    /// # Errors
    ///
    /// Returns `AdvisoryError::InvalidCatalog` if there are no crops, a crop
    /// identifier is blank or duplicated (ignoring case), or a crop has no
    /// stages.
    pub fn new(crops: Vec<Crop>) -> Result<Self> {
        if crops.is_empty() {
            return Err(AdvisoryError::invalid_catalog("catalog has no crops"));
        }

        let mut seen = HashSet::new();
        for crop in &crops {
            let key = normalize(&crop.id);
            if key.is_empty() {
                return Err(AdvisoryError::invalid_catalog(format!(
                    "crop '{}' has a blank identifier",
                    crop.name
                )));
            }
            if !seen.insert(key) {
                return Err(AdvisoryError::invalid_catalog(format!(
                    "duplicate crop identifier '{}'",
                    crop.id
                )));
            }
            if crop.stages.is_empty() {
                return Err(AdvisoryError::invalid_catalog(format!(
                    "crop '{}' has no stages",
                    crop.id
                )));
            }
        }

        debug!("Catalog validated with {} crops", crops.len());
        Ok(Self { crops })
    }

    /// The catalog compiled into the program.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::crops())
    }

    /// The first crop in display order.
    pub fn first(&self) -> &Crop {
        // Construction rejects empty catalogs.
        &self.crops[0]
    }

    /// Position of a crop in display order, matching the identifier
    /// case-insensitively after trimming.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        self.crops.iter().position(|c| c.id.eq_ignore_ascii_case(id))
    }

    /// Crop at a position previously returned by [`Catalog::position`].
    pub(crate) fn crop_at(&self, position: usize) -> &Crop {
        &self.crops[position]
    }

    /// Iterate over crops in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Crop> {
        self.crops.iter()
    }

    /// Listing summaries of every crop.
    pub fn summaries(&self) -> Vec<CropSummary> {
        self.iter().map(CropSummary::from_crop).collect()
    }
}

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
