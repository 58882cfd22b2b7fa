use super::{persist, to_position};
use crate::libs::messages::Message;
use crate::libs::storage::TaskStore;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task number as shown by `list`
    number: usize,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let position = to_position(args.number)?;
    let store = TaskStore::new()?;
    let mut tasks = store.load();

    if !tasks.toggle_completion(position) {
        return Err(msg_error_anyhow!(Message::TaskNotFound(args.number)));
    }
    persist(&store, &tasks);

    if let Some(task) = tasks.get(position) {
        let description = task.description.clone();
        if task.completed {
            msg_success!(Message::TaskMarkedCompleted(description));
        } else {
            msg_success!(Message::TaskMarkedPending(description));
        }
    }
    Ok(())
}
