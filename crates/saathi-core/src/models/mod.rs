//! Data models for crops and cultivation stages.
//!
//! This module contains the domain models of the crop advisory: the catalog
//! records ([`Crop`], [`Stage`]), the session's [`SelectionState`] and the
//! values a tracker derives from it ([`NextAction`], [`TimelineEntry`],
//! [`TimelineStatus`]). Display implementations for these models live in
//! [`crate::display::models`], keeping data and presentation apart.
//!
//! # Examples
//!
//! ```rust
//! use saathi_core::models::{Stage, TimelineStatus};
//!
//! let stage = Stage {
//!     name: "Maturity & Harvest".to_string(),
//!     localized_name: "पकना और कटाई".to_string(),
//!     duration: "110-130 days after sowing".to_string(),
//!     description: "Harvest at proper maturity".to_string(),
//!     tasks: vec!["Harvest on clear weather".to_string()],
//!     fertilizer: vec![],
//!     irrigation: "Stop 10 days before harvest".to_string(),
//!     pest_watch: vec!["Rodents".to_string()],
//! };
//! assert!(!stage.needs_fertilizer());
//! println!("{}", stage); // Markdown with tasks, fertilizer, irrigation
//!
//! assert_eq!(TimelineStatus::for_position(5, 5), TimelineStatus::Current);
//! ```

pub mod crop;
pub mod selection;
pub mod stage;
pub mod status;
pub mod view;


// Re-export all public types at the models level
pub use crop::{Crop, CropSummary};
pub use selection::SelectionState;
pub use stage::Stage;
pub use status::TimelineStatus;
pub use view::{NextAction, TimelineEntry};
