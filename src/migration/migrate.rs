//! Conversion of legacy task records into the current task model

use super::legacy_types::LegacyTask;
use crate::todo::{Priority, Task, TodoList, local_now, task_id_base, timestamp_format, unique_id};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use tracing::warn;

/// Parse a stored priority name, falling back to `low`
///
/// # Arguments
/// * `value` - The `priority` field of a record, if present
///
/// # Returns
/// The parsed priority; `Priority::Low` when the field is absent or unknown
pub fn parse_legacy_priority(value: Option<&str>) -> Priority {
    match value {
        None => Priority::Low,
        Some(name) => name.parse().unwrap_or_else(|_| {
            warn!(priority = name, "unknown task priority, treating as low");
            Priority::Low
        }),
    }
}

/// Parse a stored creation time, falling back to `fallback`
fn parse_legacy_created_at(value: Option<&str>, fallback: NaiveDateTime) -> NaiveDateTime {
    match value {
        None => {
            warn!("task record without created_at, using load time");
            fallback
        }
        Some(raw) => timestamp_format::parse(raw).unwrap_or_else(|e| {
            warn!(created_at = raw, error = %e, "unparseable created_at, using load time");
            fallback
        }),
    }
}

/// Convert one legacy record into a task with the given ID
///
/// # Arguments
/// * `record` - The record as read from the file
/// * `id` - The ID the task should carry
/// * `loaded_at` - Timestamp used when the record has no usable `created_at`
pub fn migrate_legacy_task(record: LegacyTask, id: String, loaded_at: NaiveDateTime) -> Task {
    Task {
        id,
        text: record.text,
        completed: record.completed,
        priority: parse_legacy_priority(record.priority.as_deref()),
        created_at: parse_legacy_created_at(record.created_at.as_deref(), loaded_at),
    }
}

/// Build a task list from legacy records, preserving record order
///
/// The first record carrying a given ID keeps it. Records with a missing,
/// blank, or already-used ID receive a fresh ID that collides with no
/// other record.
pub fn migrate_legacy_tasks(records: Vec<LegacyTask>) -> TodoList {
    let loaded_at = local_now();

    // Reserve every ID that will be kept before generating any new one
    let mut taken = HashSet::new();
    let keeps_id: Vec<bool> = records
        .iter()
        .map(|r| match stored_id(r) {
            Some(id) => taken.insert(id.to_string()),
            None => false,
        })
        .collect();

    let mut list = TodoList::new();
    for (record, keep) in records.into_iter().zip(keeps_id) {
        let id = match (keep, stored_id(&record)) {
            (true, Some(id)) => id.to_string(),
            (_, old) => {
                let fresh = unique_id(&taken, task_id_base(loaded_at));
                warn!(old_id = old, new_id = %fresh, "task record needs a new id");
                taken.insert(fresh.clone());
                fresh
            }
        };
        list.insert(migrate_legacy_task(record, id, loaded_at));
    }
    list
}

fn stored_id(record: &LegacyTask) -> Option<&str> {
    record
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
}
