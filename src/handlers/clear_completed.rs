//! Clear completed handler for the to-do MCP server

use crate::TodoServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Removes all completed tasks.
    pub async fn handle_clear_completed(&self) -> McpResult<String> {
        let result = self.lock_store().clear_completed();
        match result {
            Ok(count) => Ok(format!("Cleared {} completed task(s)", count)),
            Err(e) => {
                bail_public!(_, "Failed to save: {:#}", e);
            }
        }
    }
}
