//! To-do domain models and business logic
//!
//! This module contains the core to-do data structures and their implementations.
//! It is split into submodules:
//! - `task`: The task record, its priority and timestamp helpers
//! - `todo_list`: In-memory task collection with all mutating operations
//! - `sorting`: Sort modes and the presentation-order comparator
//! - `serde_impl`: Serialization/deserialization of the whole collection

mod serde_impl;
pub mod sorting;
mod task;
mod todo_list;

// Re-export all public types
pub use sorting::{SortMode, sorted};
pub use task::{Priority, TIMESTAMP_FORMAT, Task, local_now};
pub use todo_list::TodoList;

pub(crate) use task::timestamp_format;
pub(crate) use todo_list::{task_id_base, unique_id};
