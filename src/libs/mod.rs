//! Core library modules for the tasklist application.
//!
//! ## Layout
//!
//! - **Task core**: [`task`] (record and priority), [`validator`] (field rules),
//!   [`repository`] (ordered list and CRUD), [`query`] (sorted and filtered views),
//!   [`storage`] (JSON file persistence)
//! - **Infrastructure**: [`config`], [`data_storage`], [`logging`], [`messages`]
//! - **Presentation**: [`view`] (terminal table)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::query::{SortKey, TaskQuery};
//! use tasklist::libs::storage::TaskStore;
//!
//! let store = TaskStore::at("tasks.json");
//! let mut tasks = store.load();
//! tasks.add("Write report", Some("2025-03-01"), Some("high"));
//! store.save(tasks.as_slice());
//!
//! for task in tasks.sorted(SortKey::DueDate, false) {
//!     println!("{}", task);
//! }
//! ```

pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod query;
pub mod repository;
pub mod storage;
pub mod task;
pub mod validator;
pub mod view;
