//! Core handler functions for unified business logic.
//!
//! The CLI and the MCP server both go through these handlers, so selection
//! rules and confirmation messages are identical on every interface.
//!
//! ```text
//! Interface → Handler → CropStageTracker → Models
//! ```
//!
//! Handlers that change the selection are atomic: they validate everything
//! against a copy of the tracker and only commit when every step succeeds.
//!
//! # Examples
//!
//! ```rust
//! use saathi_core::{handlers, params::ViewAdvisory, TrackerBuilder};
//!
//! let mut tracker = TrackerBuilder::new().build().unwrap();
//! let view = ViewAdvisory {
//!     crop_id: Some("wheat".to_string()),
//!     stage: Some(-1),
//! };
//! assert!(handlers::handle_view(&mut tracker, &view).is_err());
//! assert_eq!(tracker.stage_index(), 0);
//! ```

use log::debug;

use crate::{
    display::{CropList, SelectionStatus},
    error::{AdvisoryError, Result},
    params::{SelectCrop, SelectStage, ViewAdvisory},
    tracker::CropStageTracker,
    Catalog,
};

/// Convert a signed stage index from user input into a checked index.
///
/// # Errors
///
/// Returns `AdvisoryError::StageIndexOutOfRange` if `index` is negative or
/// not below `len`.
pub fn checked_stage_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < len)
        .ok_or_else(|| AdvisoryError::signed_stage_out_of_range(index, len))
}

/// Handle listing every crop in the catalog.
pub fn handle_list_crops(catalog: &Catalog) -> CropList {
    CropList(catalog.summaries())
}

/// Handle switching crops.
///
/// # Errors
///
/// Returns `AdvisoryError::UnknownCrop` if the crop is not in the catalog,
/// including a blank identifier.
pub fn handle_select_crop(
    tracker: &mut CropStageTracker,
    params: &SelectCrop,
) -> Result<SelectionStatus> {
    debug!("select_crop: {:?}", params);
    tracker.select_crop(&params.crop_id)?;
    Ok(selection_status(tracker))
}

/// Handle jumping to a stage.
///
/// # Errors
///
/// Returns `AdvisoryError::StageIndexOutOfRange` if the index is negative or
/// past the selected crop's final stage.
pub fn handle_select_stage(
    tracker: &mut CropStageTracker,
    params: &SelectStage,
) -> Result<SelectionStatus> {
    debug!("select_stage: {:?}", params);
    let index = checked_stage_index(params.index, tracker.stage_count())?;
    tracker.select_stage(index)?;
    Ok(selection_status(tracker))
}

/// Handle applying an optional crop and stage change before a view.
///
/// # Errors
///
/// Returns the first selection error; the tracker is unchanged on error.
pub fn handle_view(tracker: &mut CropStageTracker, params: &ViewAdvisory) -> Result<()> {
    if params.is_empty() {
        return Ok(());
    }
    debug!("view: {:?}", params);

    let mut next = tracker.clone();
    if let Some(crop_id) = &params.crop_id {
        handle_select_crop(
            &mut next,
            &SelectCrop {
                crop_id: crop_id.clone(),
            },
        )?;
    }
    if let Some(index) = params.stage {
        handle_select_stage(&mut next, &SelectStage { index })?;
    }

    *tracker = next;
    Ok(())
}

/// Confirmation line describing the tracker's current selection.
pub fn selection_status(tracker: &CropStageTracker) -> SelectionStatus {
    SelectionStatus::new(tracker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SelectionState, TrackerBuilder};

    fn tracker() -> CropStageTracker {
        TrackerBuilder::new().build().expect("builtin tracker")
    }

    #[test]
    fn test_checked_stage_index() {
        assert_eq!(checked_stage_index(0, 6).unwrap(), 0);
        assert_eq!(checked_stage_index(5, 6).unwrap(), 5);
        assert!(matches!(
            checked_stage_index(6, 6),
            Err(AdvisoryError::StageIndexOutOfRange { index: 6, len: 6 })
        ));
        assert!(matches!(
            checked_stage_index(-1, 6),
            Err(AdvisoryError::StageIndexOutOfRange { index: -1, len: 6 })
        ));
    }

    #[test]
    fn test_list_crops() {
        let tracker = tracker();
        let crops = handle_list_crops(tracker.catalog());
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].id, "wheat");
        assert_eq!(crops[1].id, "rice");
    }

    #[test]
    fn test_select_crop_status() {
        let mut tracker = tracker();
        let status = handle_select_crop(
            &mut tracker,
            &SelectCrop {
                crop_id: "rice".to_string(),
            },
        )
        .unwrap();
        assert_eq!(status.crop_id, "rice");
        assert_eq!(
            status.to_string(),
            "Success: Rice (rice) is at stage 1 of 1: Nursery Preparation (100% complete)\n"
        );
    }

    #[test]
    fn test_select_crop_blank_is_unknown_crop() {
        let mut tracker = tracker();
        tracker.select_stage(2).unwrap();

        for crop_id in ["", "   "] {
            let err = handle_select_crop(
                &mut tracker,
                &SelectCrop {
                    crop_id: crop_id.to_string(),
                },
            )
            .unwrap_err();
            assert!(matches!(err, AdvisoryError::UnknownCrop { ref id } if id.is_empty()));
            let direct = tracker.clone().select_crop(crop_id).unwrap_err();
            assert_eq!(err.to_string(), direct.to_string());
        }
        assert_eq!(tracker.selection(), &SelectionState::new("wheat", 2));
    }

    #[test]
    fn test_select_crop_unknown_keeps_selection() {
        let mut tracker = tracker();
        let err = handle_select_crop(
            &mut tracker,
            &SelectCrop {
                crop_id: "cotton".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown crop 'cotton'");
        assert_eq!(tracker.crop().id, "wheat");
    }

    #[test]
    fn test_select_stage_negative() {
        let mut tracker = tracker();
        tracker.select_stage(3).unwrap();
        let err = handle_select_stage(&mut tracker, &SelectStage { index: -2 }).unwrap_err();
        assert!(matches!(
            err,
            AdvisoryError::StageIndexOutOfRange { index: -2, len: 6 }
        ));
        assert_eq!(tracker.stage_index(), 3);
    }

    #[test]
    fn test_view_applies_crop_then_stage() {
        let mut tracker = tracker();
        tracker.select_stage(5).unwrap();
        handle_view(
            &mut tracker,
            &ViewAdvisory {
                crop_id: Some("rice".to_string()),
                stage: Some(0),
            },
        )
        .unwrap();
        assert_eq!(tracker.crop().id, "rice");
        assert_eq!(tracker.stage_index(), 0);
    }

    #[test]
    fn test_view_is_atomic() {
        let mut tracker = tracker();
        tracker.select_stage(4).unwrap();
        let before = tracker.selection().clone();

        // Crop switch would succeed but the stage does not exist for rice.
        let err = handle_view(
            &mut tracker,
            &ViewAdvisory {
                crop_id: Some("rice".to_string()),
                stage: Some(2),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AdvisoryError::StageIndexOutOfRange { index: 2, len: 1 }
        ));
        assert_eq!(tracker.selection(), &before);
    }

    #[test]
    fn test_empty_view_is_noop() {
        let mut tracker = tracker();
        handle_view(&mut tracker, &ViewAdvisory::default()).unwrap();
        assert_eq!(tracker.stage_index(), 0);
    }
}
