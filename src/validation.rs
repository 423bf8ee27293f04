//! Argument parsing for the MCP tools
//!
//! Converts raw tool arguments into domain values, mapping parse failures to
//! `INVALID_PARAMS` errors the client can show to the user.

use crate::todo::{Priority, SortMode};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a priority argument, defaulting to `low` when absent
pub fn parse_priority(priority: Option<&str>) -> McpResult<Priority> {
    match priority {
        None => Ok(Priority::default()),
        Some(s) => s.parse::<Priority>().map_err(invalid_params),
    }
}

/// Parse a sort mode argument
pub fn parse_sort_mode(mode: &str) -> McpResult<SortMode> {
    mode.parse::<SortMode>().map_err(invalid_params)
}

/// Trim surrounding whitespace from a task ID
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}
