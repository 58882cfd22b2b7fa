#[cfg(test)]
mod tests {
    use tasklist::libs::query::{self, Filter, SortKey, TaskQuery};
    use tasklist::libs::storage::TaskStore;
    use tasklist::libs::task::Priority;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WorkflowTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::at(temp_dir.path().join("tasks.json"));
            WorkflowTestContext { _temp_dir: temp_dir, store }
        }
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_load_mutate_save_cycle(ctx: &mut WorkflowTestContext) {
        // 1. Start from nothing and add a few tasks, saving after each change
        let mut tasks = ctx.store.load();
        assert!(tasks.add("Pay rent", Some("2025-02-01"), Some("high")).is_some());
        assert!(ctx.store.save(tasks.as_slice()));
        assert!(tasks.add("Call plumber", None, None).is_some());
        assert!(ctx.store.save(tasks.as_slice()));
        assert!(tasks.add("Buy milk", Some("2025-01-15"), Some("low")).is_some());
        assert!(ctx.store.save(tasks.as_slice()));

        // 2. A fresh load sees the same list
        let mut tasks = ctx.store.load();
        assert_eq!(tasks.len(), 3);

        // 3. Edit and complete by position, then persist
        assert!(tasks.update(1, "Call plumber about the sink", Some("2025-01-20"), Some("MEDIUM")));
        assert!(tasks.toggle_completion(2));
        assert!(ctx.store.save(tasks.as_slice()));

        let tasks = ctx.store.load();
        let plumber = tasks.get(1).unwrap();
        assert_eq!(plumber.description, "Call plumber about the sink");
        assert_eq!(plumber.priority, Some(Priority::Medium));
        assert!(tasks.get(2).unwrap().completed);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_view_positions_address_the_original_list(ctx: &mut WorkflowTestContext) {
        let mut tasks = ctx.store.load();
        tasks.add("Zebra feeding", Some("2025-06-01"), None);
        tasks.add("Alpha release", None, Some("high"));
        tasks.add("Mid review", Some("2025-01-01"), Some("medium"));

        // The view is sorted, but CRUD uses the position it carries
        let view = query::sort(tasks.positioned(), SortKey::Description, false);
        let (position, first) = view[0];
        assert_eq!(first.description, "Alpha release");
        assert_eq!(position, 1);

        assert!(tasks.delete(position));
        assert!(ctx.store.save(tasks.as_slice()));

        let tasks = ctx.store.load();
        let remaining: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(remaining, vec!["Zebra feeding", "Mid review"]);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_views_survive_round_trip(ctx: &mut WorkflowTestContext) {
        let mut tasks = ctx.store.load();
        tasks.add("A", None, None);
        tasks.add("B", Some("2024-01-01"), Some("high"));
        tasks.toggle_completion(1);
        assert!(ctx.store.save(tasks.as_slice()));

        let tasks = ctx.store.load();
        let by_date: Vec<&str> = tasks.sorted(SortKey::DueDate, false).into_iter().map(|t| t.description.as_str()).collect();
        assert_eq!(by_date, vec!["B", "A"]);

        let done: Vec<&str> = tasks.filtered(&Filter::Status(true)).into_iter().map(|t| t.description.as_str()).collect();
        assert_eq!(done, vec!["B"]);
    }
}
