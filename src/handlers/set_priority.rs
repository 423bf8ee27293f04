//! Set priority handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    pub async fn handle_set_priority(&self, id: String, priority: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let priority = validation::parse_priority(Some(&priority))?;

        let result = self.lock_store().set_priority(&id, priority);
        match result {
            Ok(true) => Ok(format!("Task {} priority set to {}", id, priority)),
            Ok(false) => Ok(format!("No task with ID '{}'", id)),
            Err(e) => {
                bail_public!(_, "Failed to save: {:#}", e);
            }
        }
    }
}
