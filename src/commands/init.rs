//! Configuration initialization command.
//!
//! Runs the setup wizard that chooses where the task file lives, or removes
//! the saved configuration with `--delete`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_warning!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;

    msg_success!(Message::ConfigSaved);
    msg_info!(Message::DataFileLocation(config.data_file()?.display().to_string()));
    Ok(())
}
