//! MyTasks - local to-do list with SQLite persistence
//!
//! Tasks carry a name, a priority level, and an optional due date. The
//! store persists them in a single SQLite table; the view module derives
//! the filtered, sorted sequence a frontend renders. Every mutation is
//! followed by a full re-fetch - the data volume of a personal task list
//! makes recomputation always cheap enough.
//!
//! # Example
//!
//! ```ignore
//! use mytasks::{Priority, SortKey, StatusFilter, TaskStore, derive_view};
//!
//! let store = TaskStore::open("mytasks.db")?;
//! store.init()?;
//! store.create("Buy milk", Priority::High, None)?;
//! let view = derive_view(&store.list_all()?, StatusFilter::Todo, SortKey::Priority);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
mod store;
pub mod view;

pub use config::Config;
pub use domain::{Priority, Task};
pub use store::TaskStore;
pub use view::{SortKey, StatusFilter, derive_view};
