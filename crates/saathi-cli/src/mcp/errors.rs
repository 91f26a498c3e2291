//! Error handling utilities for MCP server

use rmcp::ErrorData;
use saathi_core::AdvisoryError;

/// Helper to convert advisory errors to MCP errors
///
/// Selection mistakes are the caller's to fix and map to `invalid_params`;
/// anything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &AdvisoryError) -> ErrorData {
    let text = format!("{}: {}", message, error);
    if error.is_selection_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
