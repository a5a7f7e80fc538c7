//! Pure derivation of the task list view
//!
//! Maps (full task list, filter selection, sort selection) to the
//! ordered sequence to render. Holds no state between calls; the list is
//! small enough that every render recomputes from scratch.

use crate::domain::Task;

/// Filter selection: which tasks to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    Done,
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Todo => write!(f, "todo"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            _ => Err(format!("Unknown filter: {}. Use: all, todo, or done", s)),
        }
    }
}

/// Sort selection: display order for the filtered tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Priority,
    Due,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Due => write!(f, "due"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "due" => Ok(Self::Due),
            _ => Err(format!("Unknown sort key: {}. Use: priority or due", s)),
        }
    }
}

/// Derive the render sequence: filter, then stable sort
///
/// `Priority` orders high before medium before low; `Due` orders by
/// ascending date with dateless tasks after every dated one. Ties keep
/// the relative order of the input (std's sort is stable), so the
/// store's most-recent-first ordering shows through within equal keys.
/// The input is not mutated.
pub fn derive_view(tasks: &[Task], filter: StatusFilter, sort: SortKey) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|t| match filter {
            StatusFilter::All => true,
            StatusFilter::Todo => !t.completed,
            StatusFilter::Done => t.completed,
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Priority => view.sort_by_key(|t| t.priority),
        SortKey::Due => view.sort_by_key(|t| (t.due_date.is_none(), t.due_date)),
    }

    view
}
