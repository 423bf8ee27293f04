//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use tempfile::TempDir;
use todo_mcp::{Priority, Storage, Task, TodoServerHandler, TodoStore};

/// Path of the tasks file inside a scratch directory
pub fn tasks_path(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

/// Create a store backed by a fresh scratch directory
pub fn get_test_store() -> (TodoStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = TodoStore::load(Storage::new(tasks_path(&dir), false));
    (store, dir)
}

/// Load a second, independent store from the same file
pub fn reload(dir: &TempDir) -> TodoStore {
    TodoStore::load(Storage::new(tasks_path(dir), false))
}

/// Create a handler backed by a fresh scratch directory
pub fn get_test_handler() -> (TodoServerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler = TodoServerHandler::new(tasks_path(&dir), false);
    (handler, dir)
}

/// 2025-03-01 at the given time
pub fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// Create a test task with an explicit creation time
pub fn create_test_task(
    id: &str,
    text: &str,
    priority: Priority,
    completed: bool,
    created_at: NaiveDateTime,
) -> Task {
    Task {
        id: id.to_string(),
        text: text.to_string(),
        completed,
        priority,
        created_at,
    }
}

/// Extract the task ID from an add() response
/// Response format: "Task created with ID: <id> (priority: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    let start = response.find("ID: ").expect("response has no ID") + 4;
    let id_part = &response[start..];
    let end = id_part.find(" (").unwrap_or(id_part.len());
    id_part[..end].trim().to_string()
}

pub fn texts<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<String> {
    tasks.into_iter().map(|t| t.text.clone()).collect()
}
