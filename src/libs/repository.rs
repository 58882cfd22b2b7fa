//! The authoritative, ordered task collection and its CRUD operations.
//!
//! [`TaskList`] is the single owner of the tasks. Records are addressed by
//! their 0-based position in insertion order; deleting a record shifts every
//! later record down by one. There is no identifier independent of position.
//!
//! Invalid input never panics or errors here. Operations report failure with
//! `bool` or `Option` so the caller decides whether to re-prompt:
//!
//! - `add` refuses an empty description; an invalid due date or priority is
//!   silently stored as absent.
//! - `update` refuses an empty description. For due date and priority it
//!   replaces on a valid value, keeps the old value on an empty or invalid one,
//!   and clears on `None`. The caller is not told when a value was ignored.
//!
//! ```rust
//! use tasklist::libs::repository::TaskList;
//!
//! let mut tasks = TaskList::new();
//! tasks.add("Buy milk", Some("2025-13-40"), Some("URGENT"));
//! assert_eq!(tasks.get(0).unwrap().due_date, None);
//! assert!(tasks.toggle_completion(0));
//! assert!(tasks.delete(0));
//! assert!(tasks.is_empty());
//! ```

use super::task::{Priority, Task};
use super::validator::{normalize_date, normalize_description, normalize_priority};
use tracing::debug;

impl Task {
    /// Applies an edit in place. Returns `false`, leaving the task untouched,
    /// when the new description is empty after trimming.
    pub fn update(&mut self, new_description: &str, new_due_date: Option<&str>, new_priority: Option<&str>) -> bool {
        let description = match normalize_description(new_description) {
            Ok(description) => description,
            Err(_) => return false,
        };
        self.description = description;

        match new_due_date {
            None => self.due_date = None,
            Some(raw) => match normalize_date(raw) {
                Ok(Some(date)) => self.due_date = Some(date),
                Ok(None) => {}
                Err(e) => debug!(error = %e, "keeping previous due date"),
            },
        }

        match new_priority {
            None => self.priority = None,
            Some(raw) => match normalize_priority(raw) {
                Ok(Some(priority)) => self.priority = Some(priority),
                Ok(None) => {}
                Err(e) => debug!(error = %e, "keeping previous priority"),
            },
        }

        true
    }

    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    /// Appends a new pending task and returns it.
    ///
    /// Returns `None`, leaving the list unchanged, when the description is
    /// empty after trimming. An invalid due date or priority is stored as absent.
    pub fn add(&mut self, description: &str, due_date: Option<&str>, priority: Option<&str>) -> Option<&Task> {
        let description = normalize_description(description).ok()?;
        let due_date = due_date.and_then(|raw| normalize_date(raw).ok().flatten());
        let priority: Option<Priority> = priority.and_then(|raw| normalize_priority(raw).ok().flatten());

        self.tasks.push(Task::new(&description, due_date, priority));
        debug!(position = self.tasks.len() - 1, "task added");
        self.tasks.last()
    }

    /// Edits the task at `position`. Fails when the position is out of range or
    /// the new description is empty; see [`Task::update`] for the field policy.
    pub fn update(&mut self, position: usize, new_description: &str, new_due_date: Option<&str>, new_priority: Option<&str>) -> bool {
        match self.tasks.get_mut(position) {
            Some(task) => task.update(new_description, new_due_date, new_priority),
            None => false,
        }
    }

    pub fn toggle_completion(&mut self, position: usize) -> bool {
        match self.tasks.get_mut(position) {
            Some(task) => {
                task.toggle_completion();
                debug!(position, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Removes the task at `position`, shifting later tasks down by one.
    pub fn delete(&mut self, position: usize) -> bool {
        if position >= self.tasks.len() {
            return false;
        }
        self.tasks.remove(position);
        debug!(position, remaining = self.tasks.len(), "task deleted");
        true
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Task> {
        self.tasks.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks paired with their current position.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks.iter().enumerate()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_inner(self) -> Vec<Task> {
        self.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
