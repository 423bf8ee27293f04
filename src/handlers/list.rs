//! List handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Handles list operations - sorts, applies filters and formats results for display.
    ///
    /// A `sort` argument also becomes the current sort mode for later listings.
    pub async fn handle_list(
        &self,
        sort: Option<String>,
        pending_only: Option<bool>,
        keyword: Option<String>,
        compact: Option<bool>,
    ) -> McpResult<String> {
        let mode = match sort {
            Some(ref name) => {
                let mode = validation::parse_sort_mode(name)?;
                self.set_current_sort(mode);
                mode
            }
            None => self.current_sort(),
        };

        let store = self.lock_store();
        if store.is_empty() {
            return Ok("No tasks yet. Add a new task with the add tool.".to_string());
        }

        let mut tasks = store.view(mode);

        if pending_only.unwrap_or(false) {
            formatting::apply_pending_filter(&mut tasks);
        }

        if let Some(ref keyword_filter) = keyword {
            formatting::apply_keyword_filter(&mut tasks, keyword_filter);
        }

        Ok(formatting::format_tasks(
            &tasks,
            mode,
            compact.unwrap_or(false),
        ))
    }
}
