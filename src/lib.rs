//! # Tasklist - personal task-list manager
//!
//! A small library and command-line utility for keeping a list of tasks with
//! an optional due date and priority, persisted to a single JSON file.
//!
//! ## Features
//!
//! - **Validation**: real `YYYY-MM-DD` calendar dates and a fixed high/medium/low priority set
//! - **Task Management**: add, edit, toggle and delete tasks addressed by position
//! - **Tolerant Loading**: malformed or legacy records are repaired or dropped instead of failing
//! - **Views**: sort by description, due date or priority, filter by status or priority
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
