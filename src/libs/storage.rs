//! JSON persistence for the task list.
//!
//! The backing store is a single UTF-8 file holding a top-level array of task
//! records. It is read and written whole; there are no incremental updates and
//! no locking, so exactly one process is expected to use a file at a time.
//!
//! ## Loading
//!
//! Loading favours availability over fidelity. A missing file is an empty
//! list. A file that is not JSON, or whose top level is not an array, also
//! yields an empty list. Each element is sanitized on its own:
//!
//! - it must be an object with a string `description` that is not blank and a
//!   boolean `completed`, otherwise it is dropped;
//! - `due_date` and `priority` default to absent when missing;
//! - an invalid or non-string `due_date` or `priority` is coerced to absent
//!   instead of rejecting the record;
//! - a valid priority is lowercased.
//!
//! Dropped and coerced values are logged, never returned to the caller.
//!
//! ## Saving
//!
//! The list is written as pretty-printed JSON with four-space indentation and
//! non-ASCII text left unescaped. [`TaskStore::save`] reports success as a
//! `bool` so the caller can warn and keep running; the in-memory list stays
//! valid either way.

use super::config::Config;
use super::repository::TaskList;
use super::task::{Priority, Task};
use super::validator::{is_valid_date, normalize_priority};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

pub const TASKS_FILE_NAME: &str = "tasks.json";

const INDENT: &[u8] = b"    ";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access task file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse task file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task file does not contain a list of tasks")]
    NotAList,
}

#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Opens the store configured for this user, falling back to
    /// `tasks.json` in the application data directory.
    pub fn new() -> anyhow::Result<TaskStore> {
        let path = Config::read()?.data_file()?;
        Ok(TaskStore { path })
    }

    /// Opens a store backed by an explicit file.
    pub fn at<P: AsRef<Path>>(path: P) -> TaskStore {
        TaskStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the task list. Never fails; see the module docs for recovery rules.
    pub fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "task file unreadable, starting with an empty list");
                TaskList::new()
            }
        }
    }

    /// Loads the task list, reporting why the whole file was rejected.
    ///
    /// A missing file is not an error. Individual malformed records are still
    /// dropped silently.
    pub fn try_load(&self) -> Result<TaskList, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task file yet");
                return Ok(TaskList::new());
            }
            Err(e) => return Err(e.into()),
        };

        let items = match serde_json::from_str::<Value>(&content)? {
            Value::Array(items) => items,
            _ => return Err(StorageError::NotAList),
        };

        let total = items.len();
        let tasks: Vec<Task> = items.iter().enumerate().filter_map(|(index, item)| sanitize_record(index, item)).collect();
        debug!(path = %self.path.display(), loaded = tasks.len(), dropped = total - tasks.len(), "tasks loaded");

        Ok(TaskList::from_tasks(tasks))
    }

    /// Writes the whole list, replacing the file. Returns `false` on failure.
    pub fn save(&self, tasks: &[Task]) -> bool {
        match self.try_save(tasks) {
            Ok(()) => true,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to save tasks");
                false
            }
        }
    }

    pub fn try_save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        tasks.serialize(&mut serializer)?;
        buffer.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(&self.path)?;
        file.write_all(&buffer)?;
        file.flush()?;

        debug!(path = %self.path.display(), saved = tasks.len(), "tasks saved");
        Ok(())
    }
}

fn sanitize_record(index: usize, item: &Value) -> Option<Task> {
    let Some(record) = item.as_object() else {
        warn!(index, "dropping task record: not an object");
        return None;
    };

    let description = match record.get("description").and_then(Value::as_str) {
        Some(description) if !description.trim().is_empty() => description,
        _ => {
            warn!(index, "dropping task record: missing or empty description");
            return None;
        }
    };
    let Some(completed) = record.get("completed").and_then(Value::as_bool) else {
        warn!(index, "dropping task record: missing or non-boolean completed flag");
        return None;
    };

    Some(Task {
        description: description.to_string(),
        completed,
        due_date: sanitize_due_date(index, record),
        priority: sanitize_priority(index, record),
    })
}

fn sanitize_due_date(index: usize, record: &Map<String, Value>) -> Option<String> {
    match record.get("due_date") {
        None | Some(Value::Null) => None,
        Some(Value::String(date)) if date.is_empty() => None,
        Some(Value::String(date)) if is_valid_date(date) => Some(date.clone()),
        Some(other) => {
            debug!(index, value = %other, "invalid stored due date cleared");
            None
        }
    }
}

fn sanitize_priority(index: usize, record: &Map<String, Value>) -> Option<Priority> {
    match record.get("priority") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => normalize_priority(raw).unwrap_or_else(|e| {
            debug!(index, error = %e, "invalid stored priority cleared");
            None
        }),
        Some(other) => {
            debug!(index, value = %other, "invalid stored priority cleared");
            None
        }
    }
}
