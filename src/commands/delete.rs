use super::{persist, to_position};
use crate::libs::messages::Message;
use crate::libs::storage::TaskStore;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task number as shown by `list`
    number: usize,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let position = to_position(args.number)?;
    let store = TaskStore::new()?;
    let mut tasks = store.load();

    let description = tasks
        .get(position)
        .map(|task| task.description.clone())
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(args.number)))?;

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(description.clone()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if tasks.delete(position) {
        persist(&store, &tasks);
        msg_success!(Message::TaskDeleted(description));
    }
    Ok(())
}
