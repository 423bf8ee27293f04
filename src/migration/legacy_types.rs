//! Permissive record shape for reading task files of any version

use serde::Deserialize;

/// A task record as it may appear in any version of the tasks file
///
/// Every field is optional so that a single missing key never fails the
/// whole load. New code should use `Task` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LegacyTask {
    /// Task identifier (older writers used a timestamp string)
    pub id: Option<String>,
    /// Task text
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Priority name; absent in files written before priorities existed
    pub priority: Option<String>,
    /// Creation time (format: YYYY-MM-DD HH:MM:SS)
    pub created_at: Option<String>,
}
