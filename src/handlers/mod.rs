//! MCP tool handlers for the to-do server
//!
//! Each handler lives in its own file and is exposed as a `handle_*` method
//! on `TodoServerHandler`.

pub mod add;
pub mod clear_completed;
pub mod complete;
pub mod list;
pub mod remove;
pub mod set_priority;
pub mod set_sort;
