#[cfg(test)]
mod tests {
    use tasklist::libs::messages::Message;
    use tasklist::libs::task::{Priority, Task, NOT_AVAILABLE};
    use tasklist::libs::view::View;
    use tasklist::msg_error_anyhow;

    #[test]
    fn test_task_labels() {
        let task = Task::new("Write report", Some("2025-03-01".to_string()), Some(Priority::High));
        assert_eq!(task.due_date_label(), "2025-03-01");
        assert_eq!(task.priority_label(), "High");
        assert_eq!(task.status_mark(), "[ ]");

        let bare = Task {
            completed: true,
            ..Task::new("Buy milk", None, None)
        };
        assert_eq!(bare.due_date_label(), NOT_AVAILABLE);
        assert_eq!(bare.priority_label(), NOT_AVAILABLE);
        assert_eq!(bare.to_string(), "[x] Buy milk (due: N/A, priority: N/A)");
    }

    #[test]
    fn test_shorten_long_descriptions() {
        assert_eq!(View::shorten("short"), "short");

        let exact = "a".repeat(38);
        assert_eq!(View::shorten(&exact), exact);

        let long = "b".repeat(50);
        assert_eq!(View::shorten(&long), format!("{}..", "b".repeat(38)));

        // Multi-byte characters are counted, not bytes
        let wide = "买".repeat(40);
        assert_eq!(View::shorten(&wide).chars().count(), 40);
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::TaskCreated("Buy milk".to_string()).to_string(), "Task 'Buy milk' added.");
        assert_eq!(Message::TaskNotFound(4).to_string(), "There is no task number 4.");
        assert_eq!(
            Message::TasksSortedHeader("due_date".to_string(), true).to_string(),
            "Tasks sorted by due_date (descending)"
        );
        assert!(Message::InvalidDate("2025-13-40".to_string()).to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_error_macro_wraps_message() {
        let error = msg_error_anyhow!(Message::EmptyDescription);
        assert_eq!(error.to_string(), "❌ Task description cannot be empty.");
    }
}
