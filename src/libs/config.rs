//! Configuration management for the tasklist application.
//!
//! Settings live in a pretty-printed `config.json` inside the platform data
//! directory resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\tasklist\tasklist\config.json`
//! - **macOS**: `~/Library/Application Support/tasklist/tasklist/config.json`
//! - **Linux**: `~/.local/share/tasklist/tasklist/config.json`
//!
//! Every section is optional. A missing file means defaults, and an absent
//! section is omitted from the written JSON. Only the command layer reads
//! configuration; the task core works on explicit paths and values.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::config::{Config, StorageConfig};
//!
//! let mut config = Config::read()?;
//! config.storage = Some(StorageConfig { data_file: "/tmp/tasks.json".into() });
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::storage::TASKS_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the task list is persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Absolute or working-directory-relative path of the task file.
    pub data_file: PathBuf,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Task file location. Defaults to `tasks.json` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads configuration from the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. A
    /// missing file yields [`Config::default`].
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration, replacing any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Resolves the task file path, applying the default when unset.
    pub fn data_file(&self) -> Result<PathBuf> {
        match &self.storage {
            Some(storage) => Ok(storage.data_file.clone()),
            None => DataStorage::new().get_path(TASKS_FILE_NAME),
        }
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default_file = config.data_file()?;

        msg_print!(Message::ConfigModuleStorage);
        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(default_file.display().to_string())
            .interact_text()?;

        config.storage = Some(StorageConfig {
            data_file: PathBuf::from(data_file.trim()),
        });

        Ok(config)
    }
}
