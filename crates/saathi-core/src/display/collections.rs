//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{CropSummary, TimelineEntry};

/// Newtype wrapper for displaying collections of crop summaries.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use saathi_core::{display::CropList, Catalog};
///
/// let catalog = Catalog::builtin().unwrap();
/// let crops = CropList(catalog.summaries());
/// let output = format!("{}", crops);
/// assert!(output.contains("## Wheat / गेहूं (ID: wheat)"));
/// assert!(output.contains("- **Stages**: 6"));
/// ```
pub struct CropList(pub Vec<CropSummary>);

impl CropList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of crop summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the crop summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, CropSummary> {
        self.0.iter()
    }
}

impl Index<usize> for CropList {
    type Output = CropSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CropList {
    type Item = &'a CropSummary;
    type IntoIter = std::slice::Iter<'a, CropSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CropList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No crops found.")
        } else {
            for crop in &self.0 {
                write!(f, "{}", crop)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a crop's cultivation timeline.
///
/// # Examples
///
/// ```rust
/// use saathi_core::{display::Timeline, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new().with_stage(Some(1)).build().unwrap();
/// let output = Timeline(tracker.timeline()).to_string();
/// assert!(output.contains("### 1. Land Preparation (✓ Completed)"));
/// assert!(output.contains("### 2. Sowing Stage (➤ Current)"));
/// assert!(output.contains("### 3. Vegetative Growth (○ Upcoming)"));
/// ```
pub struct Timeline<'a>(pub Vec<TimelineEntry<'a>>);

impl<'a> Timeline<'a> {
    /// Get the number of entries in the timeline.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry<'a>> {
        self.0.iter()
    }
}

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Cultivation Timeline")?;
        writeln!(f)?;
        if self.0.is_empty() {
            writeln!(f, "No stages found.")
        } else {
            for entry in &self.0 {
                write!(f, "{}", entry)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_crop_list() {
        let crops = CropList(vec![]);
        assert!(crops.is_empty());
        assert_eq!(crops.to_string(), "No crops found.\n");
    }

    #[test]
    fn test_crop_list_indexing() {
        let crops = CropList(vec![CropSummary {
            id: "rice".to_string(),
            name: "Rice".to_string(),
            localized_name: "चावल".to_string(),
            season: "Kharif (Jun - Nov)".to_string(),
            total_stages: 1,
        }]);
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].id, "rice");
        assert!(crops.to_string().contains("- **Season**: Kharif (Jun - Nov)"));
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline(vec![]);
        assert!(timeline.to_string().contains("No stages found."));
    }
}
