use super::validator::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Display text used wherever an optional field has no value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Urgency of a task. "No priority" is modelled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Rank used when ordering tasks by urgency. Absent priority ranks last.
    pub fn rank(priority: Option<Priority>) -> u8 {
        match priority {
            Some(Priority::High) => 0,
            Some(Priority::Medium) => 1,
            Some(Priority::Low) => 2,
            None => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Capitalized form for tables and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

/// A single to-do item.
///
/// The field order is the order written to the backing file. Optional fields
/// are always written, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub description: String,
    pub completed: bool,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
}

impl Task {
    /// Builds a pending task from already validated parts.
    pub fn new(description: &str, due_date: Option<String>, priority: Option<Priority>) -> Self {
        Task {
            description: description.to_string(),
            completed: false,
            due_date,
            priority,
        }
    }

    pub fn due_date_label(&self) -> &str {
        self.due_date.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn priority_label(&self) -> &'static str {
        self.priority.map(|p| p.label()).unwrap_or(NOT_AVAILABLE)
    }

    pub fn status_mark(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (due: {}, priority: {})",
            self.status_mark(),
            self.description,
            self.due_date_label(),
            self.priority_label()
        )
    }
}
