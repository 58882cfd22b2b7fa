//! Human-readable text for every [`Message`].
//!
//! All user-facing wording lives here so commands only pick a variant and
//! its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(description) => format!("Task '{}' added.", description),
            Message::TaskCreateFailed => "Failed to add task. The description must not be empty.".to_string(),
            Message::TaskUpdated(position) => format!("Task {} updated.", position),
            Message::TaskUpdateFailed => "Failed to update task. The description must not be empty.".to_string(),
            Message::TaskMarkedCompleted(description) => format!("Task '{}' marked as completed.", description),
            Message::TaskMarkedPending(description) => format!("Task '{}' marked as pending.", description),
            Message::TaskDeleted(description) => format!("Task '{}' deleted.", description),
            Message::TaskNotFound(position) => format!("There is no task number {}.", position),
            Message::InvalidPosition(raw) => format!("'{}' is not a valid task number. Task numbers start at 1.", raw),
            Message::ConfirmDeleteTask(description) => format!("Delete task '{}'?", description),

            // === VIEW MESSAGES ===
            Message::TasksHeader => "Your tasks".to_string(),
            Message::TasksSortedHeader(key, descending) => {
                format!("Tasks sorted by {} ({})", key, if *descending { "descending" } else { "ascending" })
            }
            Message::TasksFilteredHeader(filter) => format!("Tasks where {}", filter),
            Message::NoTasks => "The task list is empty.".to_string(),
            Message::NoMatchingTasks => "No tasks match this view.".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidDate(date) => format!("Invalid date '{}'. Use the YYYY-MM-DD format, e.g. 2025-01-31.", date),
            Message::InvalidPriority(priority) => format!("Invalid priority '{}'. Use high, medium or low.", priority),
            Message::EmptyDescription => "Task description cannot be empty.".to_string(),

            // === STORAGE MESSAGES ===
            Message::SaveFailed(path) => format!("Failed to save tasks to {}. Changes are kept until the program exits.", path),
            Message::DataFileLocation(path) => format!("Tasks are stored in {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptDataFile => "Path of the task file".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
