use super::task::Task;
use prettytable::{row, Table};

const MAX_DESCRIPTION_CHARS: usize = 38;

pub struct View {}

impl View {
    /// Renders tasks with their 1-based repository position in the first column.
    pub fn tasks(tasks: &[(usize, &Task)]) {
        let mut table = Table::new();

        table.add_row(row!["#", "STATUS", "DESCRIPTION", "DUE DATE", "PRIORITY"]);
        for (position, task) in tasks {
            table.add_row(row![
                position + 1,
                task.status_mark(),
                Self::shorten(&task.description),
                task.due_date_label(),
                task.priority_label()
            ]);
        }
        table.printstd();
    }

    pub fn shorten(description: &str) -> String {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            let head: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
            format!("{}..", head)
        } else {
            description.to_string()
        }
    }
}
