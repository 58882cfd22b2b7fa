//! Derived views over the task list.
//!
//! Sorting and filtering never touch the authoritative [`TaskList`]: every
//! operation borrows the tasks and returns a new `Vec` of references, so CRUD
//! operations keep addressing records by their original position. One sort key
//! or one filter predicate is applied per call; a view can be fed into the next
//! call when a caller wants to chain them.
//!
//! The functions are generic over [`AsTask`], so the same view can be built
//! from plain `&Task` items or from `(position, &Task)` pairs produced by
//! [`TaskList::positioned`] when the original position must be shown.
//!
//! ## Ordering rules
//!
//! - **Description**: case-insensitive on the trimmed text.
//! - **Due date**: chronological; tasks without a date always come after every
//!   dated task, in both directions.
//! - **Priority**: high, medium, low, then none; descending reverses the whole
//!   order, so tasks without a priority come first.
//!
//! All sorts are stable: equal tasks keep their repository order.

use super::repository::TaskList;
use super::task::{Priority, Task};
use super::validator::normalize_priority;
use std::cmp::{Ordering, Reverse};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Description,
    DueDate,
    Priority,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Description => "description",
            SortKey::DueDate => "due_date",
            SortKey::Priority => "priority",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(SortKey::Description),
            "due_date" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// A single predicate over tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Keeps tasks whose completion flag equals the value.
    Status(bool),
    /// Keeps tasks with exactly this priority; `None` selects tasks without one.
    Priority(Option<Priority>),
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::Status(completed) => task.completed == *completed,
            Filter::Priority(priority) => task.priority == *priority,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key '{0}', expected description, due_date or priority")]
    UnknownSortKey(String),
}

/// Anything a view can be built from.
pub trait AsTask {
    fn as_task(&self) -> &Task;
}

impl AsTask for &Task {
    fn as_task(&self) -> &Task {
        self
    }
}

impl AsTask for (usize, &Task) {
    fn as_task(&self) -> &Task {
        self.1
    }
}

fn description_key(task: &Task) -> String {
    task.description.trim().to_lowercase()
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Returns the tasks ordered by `key`.
pub fn sort<T, I>(tasks: I, key: SortKey, descending: bool) -> Vec<T>
where
    T: AsTask,
    I: IntoIterator<Item = T>,
{
    let mut view: Vec<T> = tasks.into_iter().collect();

    match key {
        SortKey::Description if descending => view.sort_by_cached_key(|item| Reverse(description_key(item.as_task()))),
        SortKey::Description => view.sort_by_cached_key(|item| description_key(item.as_task())),
        SortKey::DueDate => {
            // Undated tasks are split off so they stay last whichever direction is asked for
            let (mut dated, undated): (Vec<T>, Vec<T>) = view.into_iter().partition(|item| item.as_task().due_date.is_some());
            dated.sort_by(|a, b| directed(a.as_task().due_date.cmp(&b.as_task().due_date), descending));
            dated.extend(undated);
            view = dated;
        }
        SortKey::Priority => {
            view.sort_by(|a, b| directed(Priority::rank(a.as_task().priority).cmp(&Priority::rank(b.as_task().priority)), descending));
        }
    }

    view
}

/// Returns the tasks matching `filter`, in their incoming order.
pub fn filter<T, I>(tasks: I, filter: &Filter) -> Vec<T>
where
    T: AsTask,
    I: IntoIterator<Item = T>,
{
    tasks.into_iter().filter(|item| filter.matches(item.as_task())).collect()
}

/// Sorts by a key given as text. An unrecognized key leaves the order unchanged.
pub fn sort_by_name<T, I>(tasks: I, key: &str, descending: bool) -> Vec<T>
where
    T: AsTask,
    I: IntoIterator<Item = T>,
{
    match key.parse::<SortKey>() {
        Ok(key) => sort(tasks, key, descending),
        Err(_) => tasks.into_iter().collect(),
    }
}

/// Filters by a predicate kind given as text.
///
/// `status` expects `true` or `false`; `priority` expects a priority name or an
/// empty string for "no priority". A value that cannot match any task yields
/// an empty view. An unrecognized kind leaves the tasks unchanged.
pub fn filter_by_name<T, I>(tasks: I, kind: &str, value: &str) -> Vec<T>
where
    T: AsTask,
    I: IntoIterator<Item = T>,
{
    let predicate = match kind {
        "status" => value.parse::<bool>().ok().map(Filter::Status),
        "priority" => normalize_priority(value).ok().map(Filter::Priority),
        _ => return tasks.into_iter().collect(),
    };

    match predicate {
        Some(predicate) => filter(tasks, &predicate),
        None => Vec::new(),
    }
}

/// View helpers on the owned collection.
pub trait TaskQuery {
    fn sorted(&self, key: SortKey, descending: bool) -> Vec<&Task>;
    fn filtered(&self, predicate: &Filter) -> Vec<&Task>;
}

impl TaskQuery for [Task] {
    fn sorted(&self, key: SortKey, descending: bool) -> Vec<&Task> {
        sort(self.iter(), key, descending)
    }

    fn filtered(&self, predicate: &Filter) -> Vec<&Task> {
        filter(self.iter(), predicate)
    }
}

impl TaskQuery for TaskList {
    fn sorted(&self, key: SortKey, descending: bool) -> Vec<&Task> {
        self.as_slice().sorted(key, descending)
    }

    fn filtered(&self, predicate: &Filter) -> Vec<&Task> {
        self.as_slice().filtered(predicate)
    }
}
