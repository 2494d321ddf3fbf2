//! JSON output formatting for taskline.

use serde::Serialize;

use crate::error::TasklineError;
use crate::feedback::{FeedbackItems, Preview};
use crate::nlp::ParsedTask;
use crate::todoist::Plan;

/// Format a parsed task as JSON
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn format_parsed_json(task: &ParsedTask) -> Result<String, TasklineError> {
    to_json(task)
}

/// Format a preview as a script-filter document
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn format_preview_json(preview: &Preview) -> Result<String, TasklineError> {
    to_json(&FeedbackItems::from(preview.clone()))
}

/// Format a plan as JSON
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn format_plan_json(plan: &Plan) -> Result<String, TasklineError> {
    to_json(plan)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TasklineError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedbackConfig;
    use crate::nlp::parse_task;
    use crate::todoist::{plan_task, YamlCatalog, INBOX_ID};

    #[test]
    fn test_format_parsed_json() {
        let task = parse_task("buy milk @errands p2");
        let value: serde_json::Value =
            serde_json::from_str(&format_parsed_json(&task).unwrap()).unwrap();

        assert_eq!(value["todo"], "buy milk");
        assert_eq!(value["labels"], serde_json::json!(["errands"]));
        assert_eq!(value["priority"], "2");
        assert_eq!(value["notes"], serde_json::json!([]));
    }

    #[test]
    fn test_format_preview_json() {
        let task = parse_task("buy milk");
        let preview = Preview::new("buy milk", &task, &FeedbackConfig::default());
        let value: serde_json::Value =
            serde_json::from_str(&format_preview_json(&preview).unwrap()).unwrap();

        assert_eq!(value["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["items"][0]["arg"], "buy milk");
    }

    #[test]
    fn test_format_plan_json() {
        let plan = plan_task(parse_task("buy milk note: 2%"), &mut YamlCatalog::default(), INBOX_ID)
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&format_plan_json(&plan).unwrap()).unwrap();

        assert_eq!(value["payload"]["project_id"], 0);
        assert_eq!(value["operations"][0]["op"], "add_item");
        assert_eq!(value["operations"][1]["content"], "2%");
        assert_eq!(value["operations"][2]["op"], "commit");
    }
}
