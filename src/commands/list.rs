use super::parse_priority_filter;
use crate::libs::messages::Message;
use crate::libs::query::{self, Filter, SortKey};
use crate::libs::storage::TaskStore;
use crate::libs::view::View;
use crate::{msg_debug, msg_info, msg_print};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Done,
    Pending,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort by description, due_date or priority
    #[arg(short, long, conflicts_with_all = ["status", "priority"])]
    sort: Option<String>,

    /// Reverse the sort order
    #[arg(short, long, requires = "sort")]
    desc: bool,

    /// Show only completed or only pending tasks
    #[arg(long, value_enum, conflicts_with = "priority")]
    status: Option<StatusArg>,

    /// Show only tasks with this priority (high, medium, low or none)
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let tasks = TaskStore::new()?.load();

    if tasks.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    let (header, view) = if let Some(key) = &args.sort {
        let key: SortKey = key.parse()?;
        (Message::TasksSortedHeader(key.as_str().to_string(), args.desc), query::sort(tasks.positioned(), key, args.desc))
    } else if let Some(status) = args.status {
        let filter = Filter::Status(matches!(status, StatusArg::Done));
        let label = match status {
            StatusArg::Done => "completed",
            StatusArg::Pending => "pending",
        };
        (Message::TasksFilteredHeader(format!("status is {}", label)), query::filter(tasks.positioned(), &filter))
    } else if let Some(raw) = &args.priority {
        let priority = parse_priority_filter(raw)?;
        let label = priority.map(|p| p.as_str()).unwrap_or("none");
        (
            Message::TasksFilteredHeader(format!("priority is {}", label)),
            query::filter(tasks.positioned(), &Filter::Priority(priority)),
        )
    } else {
        (Message::TasksHeader, tasks.positioned().collect())
    };

    msg_debug!(format!("showing {} of {} tasks", view.len(), tasks.len()));
    if view.is_empty() {
        msg_info!(Message::NoMatchingTasks);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(&view);
    Ok(())
}
