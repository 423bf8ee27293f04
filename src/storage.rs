use crate::git_ops::GitOps;
use crate::todo::TodoList;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed persistence for the task list
///
/// The whole list is written as one JSON array on every save and read back
/// in full on load. With git sync enabled each save is also committed.
pub struct Storage {
    file_path: PathBuf,
    sync_git: bool,
    git_ops: GitOps,
}

impl Storage {
    /// Create storage for `file_path`
    ///
    /// # Arguments
    /// * `file_path` - Path to the tasks file (JSON)
    /// * `sync_git` - Commit after every save and pull/push with `origin`
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git_ops = if sync_git {
            GitOps::new(&file_path)
        } else {
            GitOps::disabled()
        };
        if sync_git && !git_ops.is_git_managed() {
            warn!(path = %file_path.display(), "git sync requested but tasks file is not in a git repository");
        }
        Self {
            file_path,
            sync_git,
            git_ops,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the task list
    ///
    /// A missing file yields an empty list. An unreadable or malformed file
    /// is an error; see `TodoStore::load` for the recovering variant.
    pub fn load(&self) -> Result<TodoList> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "tasks file not found, starting empty");
            return Ok(TodoList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let list: TodoList = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(list)
    }

    /// Overwrite the tasks file with `list`
    pub fn save(&self, list: &TodoList) -> Result<()> {
        self.save_with_message(list, "Update tasks")
    }

    /// Overwrite the tasks file and, with git sync on, commit it with `message`
    ///
    /// A failed commit is logged and does not fail the save.
    pub fn save_with_message(&self, list: &TodoList, message: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(list)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;

        if self.sync_git
            && let Err(e) = self.git_ops.commit(&self.file_path, message)
        {
            warn!(error = %e, "git commit of tasks file failed");
        }
        Ok(())
    }

    /// Pull remote changes before the first load
    pub fn pull(&self) -> Result<()> {
        if !self.sync_git {
            return Ok(());
        }
        self.git_ops.pull()
    }

    /// Push local commits on shutdown
    pub fn shutdown(&self) -> Result<()> {
        if !self.sync_git {
            return Ok(());
        }
        self.git_ops.push()
    }
}
