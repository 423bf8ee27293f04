//! Presentation order for the task list
//!
//! The view is a pure function of the collection and the selected
//! [`SortMode`]. It is recomputed in full after every mutation and every
//! sort-mode change.

use crate::todo::task::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the task list is ordered for display
///
/// In every mode incomplete tasks come before completed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Priority rank, then creation time
    #[default]
    Priority,
    /// Creation time, oldest first
    CreationDate,
    /// Task text, case-insensitive
    Alphabetical,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::Priority,
        SortMode::CreationDate,
        SortMode::Alphabetical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Priority => "priority",
            SortMode::CreationDate => "creation_date",
            SortMode::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(SortMode::Priority),
            "creation_date" | "creation date" | "created" | "date" => Ok(SortMode::CreationDate),
            "alphabetical" | "alpha" | "text" => Ok(SortMode::Alphabetical),
            _ => Err(format!(
                "Invalid sort mode '{}'. Valid options are: priority, creation_date, alphabetical",
                s
            )),
        }
    }
}

/// Compare two tasks for display under `mode`
pub fn compare(a: &Task, b: &Task, mode: SortMode) -> Ordering {
    let by_completion = a.completed.cmp(&b.completed);
    let by_mode = match mode {
        SortMode::Priority => a
            .priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| a.created_at.cmp(&b.created_at)),
        SortMode::CreationDate => a.created_at.cmp(&b.created_at),
        SortMode::Alphabetical => a.text.to_lowercase().cmp(&b.text.to_lowercase()),
    };
    by_completion.then(by_mode)
}

/// Return `tasks` in presentation order
///
/// The sort is stable: tasks with equal keys keep their storage order.
pub fn sorted(tasks: &[Task], mode: SortMode) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().collect();
    view.sort_by(|a, b| compare(a, b, mode));
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("priority".parse::<SortMode>().unwrap(), SortMode::Priority);
        assert_eq!(
            "Creation Date".parse::<SortMode>().unwrap(),
            SortMode::CreationDate
        );
        assert_eq!(
            "creation_date".parse::<SortMode>().unwrap(),
            SortMode::CreationDate
        );
        assert_eq!(
            "ALPHABETICAL".parse::<SortMode>().unwrap(),
            SortMode::Alphabetical
        );
        assert!("random".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_mode_display_round_trips() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_default_sort_mode_is_priority() {
        assert_eq!(SortMode::default(), SortMode::Priority);
    }
}
