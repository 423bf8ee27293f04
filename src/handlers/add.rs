//! Add handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Creates a task; blank text is ignored rather than rejected.
    pub async fn handle_add(&self, text: String, priority: Option<String>) -> McpResult<String> {
        let priority = validation::parse_priority(priority.as_deref())?;

        let result = self.lock_store().add(&text, priority);
        let id = match result {
            Ok(Some(id)) => id,
            Ok(None) => return Ok("Nothing added: task text is empty".to_string()),
            Err(e) => {
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        Ok(format!(
            "Task created with ID: {} (priority: {})",
            id, priority
        ))
    }
}
