use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format of `created_at` in the tasks file (local time, second resolution)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get the current local time, truncated to the resolution of the tasks file
///
/// Truncation keeps an in-memory task equal to the same task after a
/// save/load cycle.
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Task priority
///
/// Serialized as lowercase strings (`"high"`, `"medium"`, `"low"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Sorts first in priority mode
    High,
    Medium,
    /// Default for new tasks and for records written before priorities existed
    #[default]
    Low,
}

impl Priority {
    /// Ordinal weight used for sorting (lower sorts first)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: high, medium, low",
                s
            )),
        }
    }
}

/// A single to-do item
///
/// `id` is assigned once at creation and is the key for every mutation.
/// `created_at` is immutable and serves as a sort tiebreaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier derived from the creation time (e.g., "20250301143000123456")
    pub id: String,
    /// Task text (never empty for tasks created through `TodoList::add`)
    pub text: String,
    /// Whether the task has been checked off
    pub completed: bool,
    /// Task priority
    pub priority: Priority,
    /// Creation time (format: YYYY-MM-DD HH:MM:SS)
    #[serde(with = "timestamp_format")]
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Create an incomplete task created now
    pub fn new(id: impl Into<String>, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            priority,
            created_at: local_now(),
        }
    }
}

/// Serde helpers for `created_at`
pub(crate) mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
    }
}
