#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),     // description
    TaskCreateFailed,
    TaskUpdated(usize),      // 1-based position
    TaskUpdateFailed,
    TaskMarkedCompleted(String),
    TaskMarkedPending(String),
    TaskDeleted(String),     // description
    TaskNotFound(usize),     // 1-based position
    InvalidPosition(String), // raw input
    ConfirmDeleteTask(String),

    // === VIEW MESSAGES ===
    TasksHeader,
    TasksSortedHeader(String, bool), // key, descending
    TasksFilteredHeader(String),     // filter description
    NoTasks,
    NoMatchingTasks,

    // === VALIDATION MESSAGES ===
    InvalidDate(String),
    InvalidPriority(String),
    EmptyDescription,

    // === STORAGE MESSAGES ===
    SaveFailed(String), // path
    DataFileLocation(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleStorage,
    PromptDataFile,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
