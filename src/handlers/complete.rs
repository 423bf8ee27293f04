//! Complete handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Checks a task off, or reopens it with `completed = false`.
    pub async fn handle_complete(&self, id: String, completed: Option<bool>) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let completed = completed.unwrap_or(true);

        let result = self.lock_store().set_completed(&id, completed);
        match result {
            Ok(true) if completed => Ok(format!("Task {} marked as completed", id)),
            Ok(true) => Ok(format!("Task {} marked as not completed", id)),
            Ok(false) => Ok(format!("No task with ID '{}'", id)),
            Err(e) => {
                bail_public!(_, "Failed to save: {:#}", e);
            }
        }
    }
}
