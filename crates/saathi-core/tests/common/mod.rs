use std::sync::Arc;

use saathi_core::{Catalog, CropStageTracker, TrackerBuilder};

/// Helper function to create a tracker over the built-in catalog
#[allow(dead_code)]
pub fn create_test_tracker() -> CropStageTracker {
    TrackerBuilder::new()
        .build()
        .expect("Failed to create tracker")
}

/// Helper function to load the built-in catalog
#[allow(dead_code)]
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("Failed to load built-in catalog"))
}
