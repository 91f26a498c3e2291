mod common;

use std::{io::Write, sync::Arc};

use common::{builtin_catalog, create_test_tracker};
use saathi_core::{
    handlers, AdvisoryConfig, AdvisoryError, AdvisoryReport, NextAction, SelectionState,
    TimelineStatus, TrackerBuilder, ViewAdvisory,
};
use tempfile::NamedTempFile;

#[test]
fn test_progress_matches_formula_for_builtin_catalog() {
    let catalog = builtin_catalog();
    for crop in catalog.iter() {
        let mut tracker = TrackerBuilder::new()
            .with_catalog(Arc::clone(&catalog))
            .build()
            .expect("Failed to create tracker");
        tracker.select_crop(&crop.id).expect("crop exists");

        for i in 0..crop.stage_count() {
            tracker.select_stage(i).expect("index in range");
            assert_eq!(
                tracker.progress(),
                (i + 1) as f64 / crop.stage_count() as f64
            );
        }
        assert_eq!(tracker.progress(), 1.0);
    }
}

#[test]
fn test_wheat_walkthrough() {
    let mut tracker = create_test_tracker();
    tracker.select_crop("wheat").unwrap();
    tracker.select_stage(2).unwrap();

    assert_eq!(tracker.progress(), 0.5);
    assert_eq!(tracker.current_stage().name, "Vegetative Growth");

    match tracker.next_action() {
        NextAction::Pending { index, stage } => {
            assert_eq!(index, 3);
            assert_eq!(stage.name, "Flowering Stage");
            assert_eq!(stage.duration, "75-85 days after sowing");
        }
        NextAction::HarvestComplete => panic!("wheat has stages after index 2"),
    }

    tracker.select_stage(5).unwrap();
    assert_eq!(tracker.next_action(), NextAction::HarvestComplete);
    assert!(tracker.current_stage().fertilizer.is_empty());
}

#[test]
fn test_switch_from_final_wheat_stage_to_rice_clamps() {
    let mut tracker = create_test_tracker();
    tracker.select_crop("wheat").unwrap();
    tracker.select_stage(5).unwrap();

    tracker.select_crop("rice").unwrap();
    assert_eq!(tracker.selection(), &SelectionState::new("rice", 0));
    assert_eq!(tracker.current_stage().name, "Nursery Preparation");
    assert_eq!(tracker.next_action(), NextAction::HarvestComplete);
}

#[test]
fn test_timeline_has_single_current_entry() {
    let mut tracker = create_test_tracker();
    tracker.select_stage(4).unwrap();

    let timeline = tracker.timeline();
    assert_eq!(timeline.len(), 6);
    let statuses: Vec<_> = timeline.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            TimelineStatus::Completed,
            TimelineStatus::Completed,
            TimelineStatus::Completed,
            TimelineStatus::Completed,
            TimelineStatus::Current,
            TimelineStatus::Upcoming,
        ]
    );
}

#[test]
fn test_rejected_selections_leave_state_unchanged() {
    let mut tracker = create_test_tracker();
    tracker.select_stage(3).unwrap();
    let before = tracker.selection().clone();

    assert!(matches!(
        tracker.select_crop("nonexistent"),
        Err(AdvisoryError::UnknownCrop { .. })
    ));
    assert!(matches!(
        tracker.select_stage(6),
        Err(AdvisoryError::StageIndexOutOfRange { .. })
    ));
    assert!(matches!(
        handlers::handle_view(
            &mut tracker,
            &ViewAdvisory {
                crop_id: None,
                stage: Some(-1),
            },
        ),
        Err(AdvisoryError::StageIndexOutOfRange { index: -1, len: 6 })
    ));

    assert_eq!(tracker.selection(), &before);
}

#[test]
fn test_config_file_drives_initial_selection() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"default_crop": "wheat", "default_stage": 3}}"#).unwrap();

    let config = AdvisoryConfig::load(Some(file.path())).expect("Failed to load config");
    let tracker = TrackerBuilder::new()
        .with_config(&config)
        .build()
        .expect("Failed to create tracker");

    assert_eq!(tracker.selection(), &SelectionState::new("wheat", 3));
    let report = AdvisoryReport::new(&tracker).to_string();
    assert!(report.contains("## Current Stage: Flowering Stage"));
    assert!(report.contains("- **Complete**: 67%"));
}

#[test]
fn test_config_with_unknown_crop_fails_to_build() {
    let config = AdvisoryConfig {
        default_crop: Some("cotton".to_string()),
        default_stage: None,
    };
    let err = TrackerBuilder::new().with_config(&config).build().unwrap_err();
    assert_eq!(err.to_string(), "Unknown crop 'cotton'");
}
