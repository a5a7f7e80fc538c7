//! Domain types for MyTasks
//!
//! Core domain types: Task and its Priority level. The store persists
//! them; the view module orders them for display.

mod priority;
mod task;

pub use priority::Priority;
pub use task::Task;
