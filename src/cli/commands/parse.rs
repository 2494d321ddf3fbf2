//! `taskline parse` and `taskline preview`.

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::FeedbackConfig;
use crate::error::TasklineError;
use crate::feedback::Preview;
use crate::nlp::TaskParser;
use crate::output::{format_parsed, format_preview};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(text: &str, format: OutputFormat) -> Result<String, TasklineError> {
    info!(%text, "parsing task");
    let task = TaskParser::new().parse(text);
    format_parsed(&task, format)
}

/// Execute the preview command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn preview(
    text: &str,
    config: &FeedbackConfig,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    info!(%text, "previewing task");
    let task = TaskParser::new().parse(text);
    format_preview(&Preview::new(text, &task, config), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let result = parse("buy milk #groceries", OutputFormat::Json).unwrap();
        assert!(result.contains("\"todo\": \"buy milk\""));
        assert!(result.contains("\"project\": \"groceries\""));
    }

    #[test]
    fn test_preview_json() {
        let result = preview("buy milk due: today", &FeedbackConfig::default(), OutputFormat::Json)
            .unwrap();
        assert!(result.contains("\"title\": \"Add task: buy milk\""));
        assert!(result.contains("due: today"));
    }
}
