#[cfg(test)]
mod tests {
    use tasklist::libs::query::{self, Filter, SortKey, TaskQuery};
    use tasklist::libs::repository::TaskList;
    use tasklist::libs::task::{Priority, Task};

    fn task(description: &str, completed: bool, due_date: Option<&str>, priority: Option<Priority>) -> Task {
        Task {
            description: description.to_string(),
            completed,
            due_date: due_date.map(str::to_string),
            priority,
        }
    }

    fn descriptions(view: &[&Task]) -> Vec<String> {
        view.iter().map(|t| t.description.clone()).collect()
    }

    fn mixed() -> TaskList {
        TaskList::from_tasks(vec![
            task("banana", false, None, Some(Priority::Low)),
            task("Apple", true, Some("2024-05-01"), None),
            task("cherry", false, Some("2023-12-31"), Some(Priority::High)),
            task("  apricot", true, None, Some(Priority::Medium)),
            task("date", false, Some("2024-01-15"), Some(Priority::High)),
        ])
    }

    #[test]
    fn test_scenario_two_tasks() {
        let mut tasks = TaskList::from_tasks(vec![
            task("A", false, None, None),
            task("B", true, Some("2024-01-01"), Some(Priority::High)),
        ]);

        assert_eq!(descriptions(&tasks.sorted(SortKey::DueDate, false)), vec!["B", "A"]);
        assert_eq!(descriptions(&tasks.filtered(&Filter::Status(true))), vec!["B"]);

        assert!(tasks.delete(0));
        assert_eq!(tasks.get(0).unwrap().description, "B");
        assert!(tasks.delete(0));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_sort_by_description_ignores_case_and_padding() {
        let tasks = mixed();

        assert_eq!(descriptions(&tasks.sorted(SortKey::Description, false)), vec!["Apple", "  apricot", "banana", "cherry", "date"]);
        assert_eq!(descriptions(&tasks.sorted(SortKey::Description, true)), vec!["date", "cherry", "banana", "  apricot", "Apple"]);
    }

    #[test]
    fn test_sort_by_due_date_puts_undated_last() {
        let tasks = mixed();

        assert_eq!(descriptions(&tasks.sorted(SortKey::DueDate, false)), vec!["cherry", "date", "Apple", "banana", "  apricot"]);
        assert_eq!(descriptions(&tasks.sorted(SortKey::DueDate, true)), vec!["Apple", "date", "cherry", "banana", "  apricot"]);
    }

    #[test]
    fn test_undated_never_precede_dated() {
        let tasks = mixed();

        for descending in [false, true] {
            let view = tasks.sorted(SortKey::DueDate, descending);
            let first_undated = view.iter().position(|t| t.due_date.is_none()).unwrap();
            assert!(view[first_undated..].iter().all(|t| t.due_date.is_none()));
        }
    }

    #[test]
    fn test_sort_by_priority() {
        let tasks = mixed();

        assert_eq!(descriptions(&tasks.sorted(SortKey::Priority, false)), vec!["cherry", "date", "  apricot", "banana", "Apple"]);
        assert_eq!(descriptions(&tasks.sorted(SortKey::Priority, true)), vec!["Apple", "banana", "  apricot", "cherry", "date"]);
    }

    #[test]
    fn test_sort_does_not_touch_the_list() {
        let tasks = mixed();
        let before = tasks.clone();

        let _ = tasks.sorted(SortKey::Priority, true);
        let _ = tasks.filtered(&Filter::Status(false));
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_positioned_view_keeps_original_positions() {
        let tasks = mixed();
        let view = query::sort(tasks.positioned(), SortKey::DueDate, false);
        let positions: Vec<usize> = view.iter().map(|(position, _)| *position).collect();

        assert_eq!(positions, vec![2, 4, 1, 0, 3]);
        assert!(std::ptr::eq(view[0].1, tasks.get(2).unwrap()));
    }

    #[test]
    fn test_filter_by_status() {
        let tasks = mixed();

        assert_eq!(descriptions(&tasks.filtered(&Filter::Status(true))), vec!["Apple", "  apricot"]);
        assert_eq!(descriptions(&tasks.filtered(&Filter::Status(false))), vec!["banana", "cherry", "date"]);
    }

    #[test]
    fn test_opposite_status_filters_yield_nothing() {
        let tasks = mixed();
        let done = query::filter(tasks.iter(), &Filter::Status(true));

        assert!(query::filter(done, &Filter::Status(false)).is_empty());
    }

    #[test]
    fn test_filter_by_priority() {
        let tasks = mixed();

        assert_eq!(descriptions(&tasks.filtered(&Filter::Priority(Some(Priority::High)))), vec!["cherry", "date"]);
        assert_eq!(descriptions(&tasks.filtered(&Filter::Priority(None))), vec!["Apple"]);
    }

    #[test]
    fn test_named_sort_and_filter() {
        let tasks = mixed();

        let view: Vec<&Task> = query::sort_by_name(tasks.iter(), "due_date", false);
        assert_eq!(descriptions(&view), vec!["cherry", "date", "Apple", "banana", "  apricot"]);

        let view: Vec<&Task> = query::filter_by_name(tasks.iter(), "priority", "HIGH");
        assert_eq!(descriptions(&view), vec!["cherry", "date"]);

        let view: Vec<&Task> = query::filter_by_name(tasks.iter(), "priority", "");
        assert_eq!(descriptions(&view), vec!["Apple"]);

        let view: Vec<&Task> = query::filter_by_name(tasks.iter(), "status", "false");
        assert_eq!(descriptions(&view), vec!["banana", "cherry", "date"]);

        let view: Vec<&Task> = query::filter_by_name(tasks.iter(), "priority", "urgent");
        assert!(view.is_empty());
    }

    #[test]
    fn test_unknown_key_or_kind_returns_tasks_unchanged() {
        let tasks = mixed();
        let original = descriptions(&tasks.iter().collect::<Vec<_>>());

        let view: Vec<&Task> = query::sort_by_name(tasks.iter(), "colour", true);
        assert_eq!(descriptions(&view), original);

        let view: Vec<&Task> = query::filter_by_name(tasks.iter(), "colour", "red");
        assert_eq!(descriptions(&view), original);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let tasks = TaskList::from_tasks(vec![
            task("first", false, None, Some(Priority::High)),
            task("second", false, None, Some(Priority::High)),
            task("third", false, None, None),
        ]);

        assert_eq!(descriptions(&tasks.sorted(SortKey::Priority, false)), vec!["first", "second", "third"]);
        assert_eq!(descriptions(&tasks.sorted(SortKey::Priority, true)), vec!["third", "first", "second"]);
        assert_eq!(descriptions(&tasks.sorted(SortKey::DueDate, true)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_description_ties_keep_list_order_in_both_directions() {
        let tasks = TaskList::from_tasks(vec![
            task("Milk", false, None, None),
            task("apples", false, None, None),
            task(" milk", true, None, None),
            task("MILK ", false, None, None),
        ]);

        assert_eq!(descriptions(&tasks.sorted(SortKey::Description, false)), vec!["apples", "Milk", " milk", "MILK "]);
        assert_eq!(descriptions(&tasks.sorted(SortKey::Description, true)), vec!["Milk", " milk", "MILK ", "apples"]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("priority".parse::<SortKey>().unwrap(), SortKey::Priority);
        assert_eq!("due_date".parse::<SortKey>().unwrap().as_str(), "due_date");
        assert!("Priority".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_empty_list_views() {
        let tasks = TaskList::new();

        assert!(tasks.sorted(SortKey::Description, false).is_empty());
        assert!(tasks.filtered(&Filter::Status(true)).is_empty());
    }
}
