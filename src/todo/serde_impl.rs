//! Serialization and deserialization implementations for TodoList
//!
//! The tasks file is a flat JSON array of task records. Reading goes
//! through the legacy record shape so that older files load cleanly.

use super::todo_list::TodoList;
use crate::migration::{LegacyTask, migrate_legacy_tasks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for TodoList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.tasks)
    }
}

impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<LegacyTask>::deserialize(deserializer)?;
        Ok(migrate_legacy_tasks(records))
    }
}
