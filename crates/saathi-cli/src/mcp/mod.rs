//! MCP server implementation for Kisan Saathi
//!
//! This module implements the Model Context Protocol server, exposing the
//! crop advisory to AI assistants. One server process is one viewing
//! session: selections made through the tools persist between calls.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use saathi_core::CropStageTracker;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{McpResult, SelectCrop, SelectStage, ViewAdvisory};

/// MCP server for Kisan Saathi
#[derive(Clone)]
pub struct SaathiMcpServer {
    tracker: Arc<Mutex<CropStageTracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SaathiMcpServer {
    /// Create a new MCP server around a viewing session
    pub fn new(tracker: CropStageTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "list_crops",
        description = "List every crop in the advisory catalog with its identifier, Hindi name, growing season and number of cultivation stages. Use the identifier with select_crop or the crop_id field of the show tools."
    )]
    async fn list_crops(&self) -> McpResult {
        self.handlers().list_crops().await
    }

    #[tool(
        name = "select_crop",
        description = "Switch the session to another crop by identifier (e.g. 'wheat', 'rice'). The current stage index is kept when the new crop has enough stages, otherwise it is clamped to the crop's final stage. Fails with invalid params for unknown crops and leaves the selection unchanged."
    )]
    async fn select_crop(&self, params: Parameters<SelectCrop>) -> McpResult {
        self.handlers().select_crop(params).await
    }

    #[tool(
        name = "select_stage",
        description = "Jump to a cultivation stage of the selected crop by zero-based index. Any valid stage may be chosen, forwards or backwards. Fails with invalid params when the index is negative or past the final stage, leaving the selection unchanged."
    )]
    async fn select_stage(&self, params: Parameters<SelectStage>) -> McpResult {
        self.handlers().select_stage(params).await
    }

    #[tool(
        name = "show_advisory",
        description = "Show the full crop advisory: cultivation progress, current stage details (tasks, fertilizer, irrigation, pest watch), the complete timeline and the next action. Optional crop_id and stage change the session's selection first (crop is applied before stage)."
    )]
    async fn show_advisory(&self, params: Parameters<ViewAdvisory>) -> McpResult {
        self.handlers().show_advisory(params).await
    }

    #[tool(
        name = "show_stage",
        description = "Show progress and the details of the current stage only: description, key tasks, fertilizer recommendations, irrigation guidance and pests to watch for. Optional crop_id and stage change the selection first."
    )]
    async fn show_stage(&self, params: Parameters<ViewAdvisory>) -> McpResult {
        self.handlers().show_stage(params).await
    }

    #[tool(
        name = "show_timeline",
        description = "Show every cultivation stage of the selected crop marked as completed, current or upcoming, with durations. Optional crop_id and stage change the selection first."
    )]
    async fn show_timeline(&self, params: Parameters<ViewAdvisory>) -> McpResult {
        self.handlers().show_timeline(params).await
    }

    #[tool(
        name = "next_action",
        description = "Show what the farmer should prepare for next: the following stage and its expected duration, or a harvest message at the final stage. Optional crop_id and stage change the selection first."
    )]
    async fn next_action(&self, params: Parameters<ViewAdvisory>) -> McpResult {
        self.handlers().next_action(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SaathiMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kisan-saathi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Kisan Saathi is a crop advisory for farmers. It tracks which cultivation stage a crop is in and gives the guidance for that stage.

## Core Concepts
- **Crops**: catalog entries such as wheat and rice, each with a growing season and an ordered list of cultivation stages
- **Stages**: steps of the cultivation timeline with key tasks, fertilizer, irrigation guidance and pests to watch for
- **Session**: this server remembers one selection (crop + zero-based stage index) between calls

## Workflow
1. Call `list_crops` to see available crop identifiers
2. Pick a crop with `select_crop` and a stage with `select_stage`, or pass `crop_id`/`stage` to any show tool
3. Use `show_advisory` for everything at once, or `show_stage`, `show_timeline` and `next_action` for one panel

## Selection Rules
- Switching to a crop with fewer stages clamps the stage index to that crop's last stage
- Invalid crops or stage indices are rejected and the selection stays as it was"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SaathiMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Kisan Saathi MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
