//! Migration of task records written by older versions
//!
//! Task records have grown fields over time. Files from earlier versions may
//! lack `priority` (added after the first release), and hand-edited files may
//! carry values the current model does not know. Every record is read through
//! the permissive [`LegacyTask`] shape and normalized into a [`Task`].
//!
//! ## Normalization rules
//!
//! - Missing `priority` becomes `low`
//! - Unrecognized `priority` becomes `low` (logged)
//! - Missing `completed` becomes `false`
//! - Missing or unparseable `created_at` becomes the load time (logged)
//! - Missing, blank, or duplicate `id` is replaced with a freshly generated ID
//!
//! [`Task`]: crate::todo::Task

mod legacy_types;
mod migrate;

// Re-export public types and functions
pub use legacy_types::LegacyTask;
pub use migrate::{migrate_legacy_task, migrate_legacy_tasks, parse_legacy_priority};
