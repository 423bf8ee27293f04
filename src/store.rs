//! Persisted task store
//!
//! [`TodoStore`] owns the canonical task list together with its
//! [`Storage`]. Every mutating operation rewrites the whole tasks file before
//! returning, so the file always reflects the last successful mutation.

use crate::storage::Storage;
use crate::todo::{Priority, SortMode, Task, TodoList};
use anyhow::Result;
use tracing::{debug, info, warn};

/// The task list and the file it is persisted to
pub struct TodoStore {
    list: TodoList,
    storage: Storage,
}

impl TodoStore {
    /// Load the store from `storage`
    ///
    /// Never fails: a missing file starts an empty list, and an unreadable or
    /// corrupt file is logged and also starts an empty list. The corrupt file
    /// is left in place until the next mutation overwrites it.
    pub fn load(storage: Storage) -> Self {
        let list = match storage.load() {
            Ok(list) => {
                info!(
                    path = %storage.file_path().display(),
                    tasks = list.len(),
                    "loaded tasks"
                );
                list
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(
                    path = %storage.file_path().display(),
                    error = %reason,
                    "could not load tasks, starting with an empty list"
                );
                TodoList::new()
            }
        };
        Self { list, storage }
    }

    /// Wrap an already-built list (nothing is written until the first mutation)
    pub fn with_list(list: TodoList, storage: Storage) -> Self {
        Self { list, storage }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// All tasks in storage order
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.list.find(id.trim())
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Tasks in presentation order for `mode`
    pub fn view(&self, mode: SortMode) -> Vec<&Task> {
        self.list.sorted(mode)
    }

    /// Write the whole list to the tasks file
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.list)
    }

    fn persist(&self, message: &str) -> Result<()> {
        self.storage.save_with_message(&self.list, message)?;
        debug!(tasks = self.list.len(), commit = message, "saved tasks");
        Ok(())
    }

    /// Add a task and persist
    ///
    /// # Returns
    /// `Ok(Some(id))` for the new task, `Ok(None)` when `text` is blank
    /// (nothing is added or written)
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<Option<String>> {
        let Some(id) = self.list.add(text, priority) else {
            debug!("ignoring task with empty text");
            return Ok(None);
        };
        self.persist(&format!("Add task {}", id))?;
        Ok(Some(id))
    }

    /// Mark a task completed or incomplete and persist
    ///
    /// # Returns
    /// `Ok(false)` when no task has `id` (nothing is written)
    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<bool> {
        let id = id.trim();
        if !self.list.set_completed(id, completed) {
            debug!(id, "set_completed: no such task");
            return Ok(false);
        }
        let verb = if completed { "Complete" } else { "Reopen" };
        self.persist(&format!("{} task {}", verb, id))?;
        Ok(true)
    }

    /// Change a task's priority and persist
    ///
    /// # Returns
    /// `Ok(false)` when no task has `id` (nothing is written)
    pub fn set_priority(&mut self, id: &str, priority: Priority) -> Result<bool> {
        let id = id.trim();
        if !self.list.set_priority(id, priority) {
            debug!(id, "set_priority: no such task");
            return Ok(false);
        }
        self.persist(&format!("Set priority of task {} to {}", id, priority))?;
        Ok(true)
    }

    /// Delete a task and persist
    ///
    /// # Returns
    /// `Ok(false)` when no task has `id` (nothing is written)
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let id = id.trim();
        if self.list.remove(id).is_none() {
            debug!(id, "remove: no such task");
            return Ok(false);
        }
        self.persist(&format!("Remove task {}", id))?;
        Ok(true)
    }

    /// Delete every completed task and persist
    ///
    /// # Returns
    /// Number of tasks removed
    pub fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.list.clear_completed();
        self.persist(&format!("Clear {} completed task(s)", removed))?;
        Ok(removed)
    }
}
