//! Natural language parsing for task entry.
//!
//! This module turns a single free-form line such as
//! `"pick up groceries !!1 #{grocery shopping} @errands due: tomorrow note: check milk"`
//! into a [`ParsedTask`]:
//! - `@label` tokens become labels
//! - `!!N` or `pN` (N in 1-4) sets the priority
//! - `#project`, or a multi-word name wrapped in braces, parentheses,
//!   backticks, double or single quotes (`#{grocery shopping}`), sets the project
//! - `due: <phrase>` sets the due-date phrase (up to the next `note:`)
//! - each `note: <text>` adds a note
//!
//! Whatever is left becomes the todo text.

mod parser;
pub mod stages;

pub use parser::{parse_task, ParsedTask, TaskParser};
