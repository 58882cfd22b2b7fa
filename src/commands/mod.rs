pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;

use crate::libs::messages::Message;
use crate::libs::repository::TaskList;
use crate::libs::storage::TaskStore;
use crate::libs::task::Priority;
use crate::libs::validator::{is_valid_date, is_valid_priority, normalize_priority, DATE_FORMAT};
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow};
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Show tasks, optionally sorted or filtered")]
    List(list::ListArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Toggle the completion of a task")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Executes the parsed subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
        }
    }
}

/// Converts a 1-based task number from the command line into a list position.
pub fn to_position(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(position) => Ok(position),
        None => msg_bail_anyhow!(Message::InvalidPosition(number.to_string())),
    }
}

/// Expands the `today` keyword and rejects anything that is not a valid date.
pub fn resolve_due_date(raw: Option<String>) -> Result<Option<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("today") {
        return Ok(Some(Local::now().date_naive().format(DATE_FORMAT).to_string()));
    }
    if !is_valid_date(raw) {
        msg_bail_anyhow!(Message::InvalidDate(raw.to_string()));
    }
    Ok(Some(raw.to_string()))
}

/// Resolves a priority filter value; `none` selects tasks without a priority.
pub fn parse_priority_filter(raw: &str) -> Result<Option<Priority>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    normalize_priority(raw).map_err(|_| msg_error_anyhow!(Message::InvalidPriority(raw.to_string())))
}

/// Maps an optional new value and its `--clear-*` flag onto the field policy of
/// [`Task::update`](crate::libs::task::Task::update): `None` clears, `""` keeps, anything else replaces.
pub fn field_update(value: Option<&str>, clear: bool) -> Option<&str> {
    if clear {
        None
    } else {
        Some(value.unwrap_or(""))
    }
}

pub fn check_priority(raw: Option<&str>) -> Result<()> {
    if let Some(priority) = raw {
        if !is_valid_priority(priority.trim()) {
            msg_bail_anyhow!(Message::InvalidPriority(priority.to_string()));
        }
    }
    Ok(())
}

/// Writes the list back, reporting a failure without aborting the command.
pub fn persist(store: &TaskStore, tasks: &TaskList) -> bool {
    let saved = store.save(tasks.as_slice());
    if !saved {
        msg_error!(Message::SaveFailed(store.path().display().to_string()));
    }
    saved
}
