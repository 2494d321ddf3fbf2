//! taskline - a task line parser
//!
//! This crate turns a single free-form line of text into a structured task
//! (labels, priority, project, due-date phrase, notes and the remaining todo
//! text), and maps that task onto a Todoist-style creation payload.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod nlp;
pub mod output;
pub mod todoist;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TasklineError;
pub use nlp::{parse_task, ParsedTask, TaskParser};
