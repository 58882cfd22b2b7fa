use super::{check_priority, persist, resolve_due_date};
use crate::libs::messages::Message;
use crate::libs::storage::TaskStore;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    description: String,

    /// Due date in YYYY-MM-DD format, or 'today'
    #[arg(short, long)]
    due: Option<String>,

    /// Priority: high, medium or low
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    if args.description.trim().is_empty() {
        msg_bail_anyhow!(Message::EmptyDescription);
    }
    let due_date = resolve_due_date(args.due)?;
    check_priority(args.priority.as_deref())?;

    let store = TaskStore::new()?;
    let mut tasks = store.load();

    let description = match tasks.add(&args.description, due_date.as_deref(), args.priority.as_deref().map(str::trim)) {
        Some(task) => task.description.clone(),
        None => msg_bail_anyhow!(Message::TaskCreateFailed),
    };

    persist(&store, &tasks);
    msg_success!(Message::TaskCreated(description));
    Ok(())
}
