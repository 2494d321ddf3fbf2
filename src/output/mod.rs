//! Output formatting for taskline.
//!
//! This module provides formatters for displaying parsed tasks, previews and
//! plans in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TasklineError;
use crate::feedback::Preview;
use crate::nlp::ParsedTask;
use crate::todoist::Plan;

pub use json::*;
pub use pretty::*;

/// Format a parsed task based on output format
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn format_parsed(task: &ParsedTask, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(task)),
        OutputFormat::Json => format_parsed_json(task),
    }
}

/// Format a preview row based on output format
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn format_preview(preview: &Preview, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_preview_pretty(preview)),
        OutputFormat::Json => format_preview_json(preview),
    }
}

/// Format a plan based on output format
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn format_plan(plan: &Plan, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(plan)),
        OutputFormat::Json => format_plan_json(plan),
    }
}
