//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use saathi_core::{
    display::{AdvisoryReport, CropTimeline, CurrentStage, NextActionNotice, ProgressReport},
    handlers, params as core, CropStageTracker,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container so that the
// MCP layer can add Deserialize/JsonSchema handling while the core types stay
// free of protocol concerns.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

// Type aliases for cleaner usage in function signatures
pub type SelectCrop = McpParams<core::SelectCrop>;
pub type SelectStage = McpParams<core::SelectStage>;
pub type ViewAdvisory = McpParams<core::ViewAdvisory>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Mutex<CropStageTracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<CropStageTracker>>) -> Self {
        Self { tracker }
    }

    pub async fn list_crops(&self) -> McpResult {
        debug!("list_crops");

        let tracker = self.tracker.lock().await;
        let crops = handlers::handle_list_crops(tracker.catalog());
        text_result(crops.to_string())
    }

    pub async fn select_crop(&self, Parameters(params): Parameters<SelectCrop>) -> McpResult {
        debug!("select_crop: {:?}", params);

        let mut tracker = self.tracker.lock().await;
        let status = handlers::handle_select_crop(&mut tracker, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to select crop", &e))?;
        text_result(status.to_string())
    }

    pub async fn select_stage(&self, Parameters(params): Parameters<SelectStage>) -> McpResult {
        debug!("select_stage: {:?}", params);

        let mut tracker = self.tracker.lock().await;
        let status = handlers::handle_select_stage(&mut tracker, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to select stage", &e))?;
        text_result(status.to_string())
    }

    pub async fn show_advisory(&self, Parameters(params): Parameters<ViewAdvisory>) -> McpResult {
        debug!("show_advisory: {:?}", params);

        let mut tracker = self.tracker.lock().await;
        Self::apply(&mut tracker, params.as_ref())?;
        text_result(AdvisoryReport::new(&tracker).to_string())
    }

    pub async fn show_stage(&self, Parameters(params): Parameters<ViewAdvisory>) -> McpResult {
        debug!("show_stage: {:?}", params);

        let mut tracker = self.tracker.lock().await;
        Self::apply(&mut tracker, params.as_ref())?;
        text_result(format!(
            "{}{}",
            ProgressReport::new(&tracker),
            CurrentStage::new(&tracker)
        ))
    }

    pub async fn show_timeline(&self, Parameters(params): Parameters<ViewAdvisory>) -> McpResult {
        debug!("show_timeline: {:?}", params);

        let mut tracker = self.tracker.lock().await;
        Self::apply(&mut tracker, params.as_ref())?;
        text_result(CropTimeline::new(&tracker).to_string())
    }

    pub async fn next_action(&self, Parameters(params): Parameters<ViewAdvisory>) -> McpResult {
        debug!("next_action: {:?}", params);

        let mut tracker = self.tracker.lock().await;
        Self::apply(&mut tracker, params.as_ref())?;
        text_result(format!(
            "{}\n{}",
            handlers::selection_status(&tracker),
            NextActionNotice::new(&tracker)
        ))
    }

    fn apply(tracker: &mut CropStageTracker, view: &core::ViewAdvisory) -> Result<(), ErrorData> {
        handlers::handle_view(tracker, view)
            .map_err(|e| to_mcp_error("Failed to apply selection", &e))
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use saathi_core::{SelectionState, TrackerBuilder};

    use super::*;

    fn create_handlers() -> (Arc<Mutex<CropStageTracker>>, McpHandlers) {
        let tracker = TrackerBuilder::new().build().expect("builtin tracker");
        let tracker = Arc::new(Mutex::new(tracker));
        (tracker.clone(), McpHandlers::new(tracker))
    }

    fn view(crop_id: Option<&str>, stage: Option<i64>) -> Parameters<ViewAdvisory> {
        Parameters(McpParams::from(core::ViewAdvisory {
            crop_id: crop_id.map(str::to_string),
            stage,
        }))
    }

    #[tokio::test]
    async fn test_select_stage_then_crop_clamps() {
        let (tracker, handlers) = create_handlers();

        handlers
            .select_stage(Parameters(McpParams::from(core::SelectStage { index: 5 })))
            .await
            .expect("stage 5 exists for wheat");
        handlers
            .select_crop(Parameters(McpParams::from(core::SelectCrop {
                crop_id: "rice".to_string(),
            })))
            .await
            .expect("rice exists");

        assert_eq!(
            tracker.lock().await.selection(),
            &SelectionState::new("rice", 0)
        );
    }

    #[tokio::test]
    async fn test_unknown_crop_is_invalid_params() {
        let (tracker, handlers) = create_handlers();

        let err = handlers
            .select_crop(Parameters(McpParams::from(core::SelectCrop {
                crop_id: "sugarcane".to_string(),
            })))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown crop 'sugarcane'"));
        assert_eq!(tracker.lock().await.crop().id, "wheat");
    }

    #[tokio::test]
    async fn test_blank_crop_is_unknown_crop() {
        let (tracker, handlers) = create_handlers();

        let err = handlers
            .select_crop(Parameters(McpParams::from(core::SelectCrop {
                crop_id: "  ".to_string(),
            })))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown crop ''"));
        assert_eq!(tracker.lock().await.crop().id, "wheat");
    }

    #[tokio::test]
    async fn test_view_with_bad_stage_keeps_session() {
        let (tracker, handlers) = create_handlers();

        let err = handlers
            .show_advisory(view(Some("rice"), Some(3)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            tracker.lock().await.selection(),
            &SelectionState::new("wheat", 0)
        );
    }

    #[tokio::test]
    async fn test_views_persist_selection_for_session() {
        let (tracker, handlers) = create_handlers();

        assert!(handlers.show_stage(view(None, Some(2))).await.is_ok());
        assert!(handlers.next_action(view(None, None)).await.is_ok());
        assert!(handlers.show_timeline(view(None, None)).await.is_ok());
        assert!(handlers.list_crops().await.is_ok());

        assert_eq!(tracker.lock().await.stage_index(), 2);
    }
}
