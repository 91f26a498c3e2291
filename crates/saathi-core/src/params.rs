//! Parameter structures for advisory operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) without
//! framework-specific derives. JSON schema generation is available behind the
//! `schema` feature for the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap or convert into these types (`From<Args>` on the
//! CLI side, a transparent serde wrapper on the MCP side) and hand them to
//! [`crate::handlers`].
//!
//! Stage indices are signed here so that a negative index from user input
//! reaches the tracker's range check and fails there with
//! `StageIndexOutOfRange`, instead of failing as a parse error.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for switching crops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectCrop {
    /// Catalog identifier of the crop, e.g. "wheat"
    pub crop_id: String,
}

/// Parameters for jumping to a stage of the selected crop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectStage {
    /// Zero-based stage index
    pub index: i64,
}

/// Parameters for viewing the advisory with an optional selection change.
///
/// The crop is applied before the stage, so a crop switch clamps the index
/// first and an explicit stage then replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ViewAdvisory {
    /// Crop to switch to before viewing
    #[serde(default)]
    pub crop_id: Option<String>,
    /// Zero-based stage index to jump to before viewing
    #[serde(default)]
    pub stage: Option<i64>,
}

impl ViewAdvisory {
    /// Whether the view changes the selection at all.
    pub fn is_empty(&self) -> bool {
        self.crop_id.is_none() && self.stage.is_none()
    }
}
