//! Remove handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Deletes a single task permanently.
    pub async fn handle_remove(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);

        let result = self.lock_store().remove(&id);
        match result {
            Ok(true) => Ok(format!("Task {} removed", id)),
            Ok(false) => Ok(format!("No task with ID '{}'", id)),
            Err(e) => {
                bail_public!(_, "Failed to save: {:#}", e);
            }
        }
    }
}
