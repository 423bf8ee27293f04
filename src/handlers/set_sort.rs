//! Set sort handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    pub async fn handle_set_sort(&self, mode: String) -> McpResult<String> {
        let mode = validation::parse_sort_mode(&mode)?;
        self.set_current_sort(mode);
        Ok(format!("Tasks are now sorted by {}", mode))
    }
}
