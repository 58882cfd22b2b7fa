//! Edit command.
//!
//! Flags map onto the repository's three-way field policy: an omitted flag
//! keeps the current value, a value replaces it, and `--clear-*` removes it.
//! Values are validated here first, so the repository never has to ignore one.

use super::{check_priority, field_update, persist, resolve_due_date, to_position};
use crate::libs::messages::Message;
use crate::libs::storage::TaskStore;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task number as shown by `list`
    number: usize,

    /// New description; the current one is kept when omitted
    description: Option<String>,

    /// New due date in YYYY-MM-DD format, or 'today'
    #[arg(short, long, conflicts_with = "clear_due")]
    due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    clear_due: bool,

    /// New priority: high, medium or low
    #[arg(short, long, conflicts_with = "clear_priority")]
    priority: Option<String>,

    /// Remove the priority
    #[arg(long)]
    clear_priority: bool,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let position = to_position(args.number)?;
    let due_date = resolve_due_date(args.due)?;
    check_priority(args.priority.as_deref())?;

    let store = TaskStore::new()?;
    let mut tasks = store.load();

    let task = tasks.get_mut(position).ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(args.number)))?;
    let description = args.description.unwrap_or_else(|| task.description.clone());

    let new_due_date = field_update(due_date.as_deref(), args.clear_due);
    let new_priority = field_update(args.priority.as_deref().map(str::trim), args.clear_priority);

    if !task.update(&description, new_due_date, new_priority) {
        msg_bail_anyhow!(Message::TaskUpdateFailed);
    }

    persist(&store, &tasks);
    msg_success!(Message::TaskUpdated(args.number));
    Ok(())
}
