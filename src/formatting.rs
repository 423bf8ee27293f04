//! Formatting helper functions for the to-do MCP server
//!
//! This module contains view filters and the text rendering of task lists.

use crate::todo::{SortMode, TIMESTAMP_FORMAT, Task};

/// Drop completed tasks from a view
pub fn apply_pending_filter(tasks: &mut Vec<&Task>) {
    tasks.retain(|task| !task.completed);
}

/// Keep tasks whose text contains `keyword` (case-insensitive)
pub fn apply_keyword_filter(tasks: &mut Vec<&Task>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    tasks.retain(|task| task.text.to_lowercase().contains(&keyword_lower));
}

fn check_mark(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// Render a view, one task per line
///
/// # Arguments
/// * `tasks` - Tasks already in presentation order
/// * `mode` - Sort mode the view was produced with (shown in the header)
/// * `compact` - Only the check mark and text, like the unfocused window
pub fn format_tasks(tasks: &[&Task], mode: SortMode, compact: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    if compact {
        return tasks
            .iter()
            .map(|task| format!("{} {}", check_mark(task), task.text))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut result = format!("Found {} task(s), sorted by {}:\n\n", tasks.len(), mode);
    for task in tasks {
        result.push_str(&format!(
            "- {} {} (id: {}, priority: {}, created: {})\n",
            check_mark(task),
            task.text,
            task.id,
            task.priority,
            task.created_at.format(TIMESTAMP_FORMAT)
        ));
    }
    result
}
