//! To-do MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a small,
//! prioritized to-do list persisted to a local JSON file, with optional
//! Git-based version control of that file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` module - Task model, task list and sort order
//! - **Persistence Layer**: `store` and `storage` modules - File-based JSON storage with Git sync
//!
//! The store can also be used without the MCP layer:
//!
//! ```no_run
//! use todo_mcp::{Priority, SortMode, Storage, TodoStore};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = TodoStore::load(Storage::new("tasks.json", false));
//!     store.add("Call dentist", Priority::High)?;
//!     for task in store.view(SortMode::Priority) {
//!         println!("{}", task.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
mod formatting;
mod git_ops;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod storage;
pub mod store;
pub mod todo;
mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

// Re-export commonly used types
pub use config::Config;
pub use storage::Storage;
pub use store::TodoStore;
pub use todo::{Priority, SortMode, Task, TodoList};

/// MCP Server handler for to-do list management
///
/// Owns the task store and the session's current sort mode. All changes are
/// persisted to the tasks file before a tool call returns.
pub struct TodoServerHandler {
    pub(crate) store: Mutex<TodoStore>,
    pub(crate) sort_mode: Mutex<SortMode>,
}

impl TodoServerHandler {
    /// Create a handler for the tasks file at `storage_path`
    ///
    /// # Arguments
    /// * `storage_path` - Path to the tasks file (JSON)
    /// * `sync_git` - Enable automatic Git synchronization
    ///
    /// # Example
    /// ```no_run
    /// # use todo_mcp::TodoServerHandler;
    /// let handler = TodoServerHandler::new("tasks.json", false);
    /// ```
    pub fn new(storage_path: impl AsRef<Path>, sync_git: bool) -> Self {
        Self::from_config(&Config {
            tasks_file: storage_path.as_ref().to_path_buf(),
            sync_git,
            ..Config::default()
        })
    }

    /// Create a handler from resolved configuration
    ///
    /// With git sync on, remote changes are pulled before the tasks file is read.
    pub fn from_config(config: &Config) -> Self {
        let storage = Storage::new(&config.tasks_file, config.sync_git);
        if let Err(e) = storage.pull() {
            warn!(error = %e, "git pull failed, continuing with local tasks file");
        }
        Self::with_store(TodoStore::load(storage), config.default_sort)
    }

    /// Create a handler around an existing store
    pub fn with_store(store: TodoStore, sort_mode: SortMode) -> Self {
        Self {
            store: Mutex::new(store),
            sort_mode: Mutex::new(sort_mode),
        }
    }

    /// Lock the store, recovering it if a previous holder panicked
    pub(crate) fn lock_store(&self) -> MutexGuard<'_, TodoStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sort mode used by `list` when no mode is given
    pub fn current_sort(&self) -> SortMode {
        *self.sort_mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_current_sort(&self, mode: SortMode) {
        *self.sort_mode.lock().unwrap_or_else(PoisonError::into_inner) = mode;
    }

    /// Snapshot of all tasks in storage order
    pub fn tasks(&self) -> Vec<Task> {
        self.lock_store().tasks().to_vec()
    }
}

impl Drop for TodoServerHandler {
    fn drop(&mut self) {
        // Push to git on shutdown if sync is enabled
        let store = self.store.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = store.storage().shutdown() {
            warn!(error = %e, "git push on shutdown failed");
        }
    }
}

/// A prioritized to-do list.
///
/// Tasks have a short text, a priority (high, medium, low) and a completed flag.
/// Every change is saved to a local file immediately.
///
/// Key concepts:
/// - **add**: Capture a new task (default priority: low)
/// - **complete**: Check a task off (or reopen it)
/// - **set_priority**: Reprioritize a task
/// - **remove** / **clear_completed**: Delete one task / all completed tasks
/// - **list**: View tasks; incomplete tasks always come first
///
/// Sort modes: priority (default), creation_date, alphabetical.
/// Task IDs are returned by add and shown by list.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Add**: Create a new task. Empty text is ignored.
    #[tool]
    async fn add(
        &self,
        /// Task text
        text: String,
        /// Priority: high/medium/low (optional, default low)
        priority: Option<String>,
    ) -> McpResult<String> {
        self.handle_add(text, priority).await
    }

    /// **Complete**: Mark a task as completed, or as not completed with completed=false.
    #[tool]
    async fn complete(
        &self,
        /// ID of the task
        id: String,
        /// New state (optional, default true)
        completed: Option<bool>,
    ) -> McpResult<String> {
        self.handle_complete(id, completed).await
    }

    /// **Set priority**: Change the priority of a task.
    #[tool]
    async fn set_priority(
        &self,
        /// ID of the task
        id: String,
        /// Priority: high/medium/low
        priority: String,
    ) -> McpResult<String> {
        self.handle_set_priority(id, priority).await
    }

    /// **Remove**: Permanently delete a task.
    #[tool]
    async fn remove(
        &self,
        /// ID of the task
        id: String,
    ) -> McpResult<String> {
        self.handle_remove(id).await
    }

    /// **Clear completed**: Permanently delete every completed task.
    #[tool]
    async fn clear_completed(&self) -> McpResult<String> {
        self.handle_clear_completed().await
    }

    /// **List**: Show tasks in display order. Incomplete tasks always come before completed ones.
    /// **Tip**: compact=true shows only check marks and text.
    #[tool]
    async fn list(
        &self,
        /// Sort mode: priority/creation_date/alphabetical. Also becomes the current mode (optional)
        sort: Option<String>,
        /// Hide completed tasks (optional, default false)
        pending_only: Option<bool>,
        /// Only tasks whose text contains this, case-insensitive (optional)
        keyword: Option<String>,
        /// Text-only output (optional, default false)
        compact: Option<bool>,
    ) -> McpResult<String> {
        self.handle_list(sort, pending_only, keyword, compact).await
    }

    /// **Set sort**: Change the current sort mode used by list.
    #[tool]
    async fn set_sort(
        &self,
        /// Sort mode: priority/creation_date/alphabetical
        mode: String,
    ) -> McpResult<String> {
        self.handle_set_sort(mode).await
    }
}
