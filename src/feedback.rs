//! Preview line shown before a task is submitted.
//!
//! A launcher shows one result row while the user types: the title is the
//! todo text, the subtitle summarizes the other fields, e.g.
//! `labels: errands, grocery | priority: 3 | project: shopping | due: tomorrow | notelen: 2`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FeedbackConfig;
use crate::nlp::ParsedTask;

/// One result row for a launcher script filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// `Add task: <todo>`.
    pub title: String,
    /// Summary of the extracted fields.
    pub subtitle: String,
    /// The raw input, handed back to the launcher on selection.
    pub arg: String,
    /// Whether the row can be actioned.
    pub valid: bool,
}

/// Script-filter document: `{"items": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItems {
    /// Rows to display.
    pub items: Vec<Preview>,
}

impl From<Preview> for FeedbackItems {
    fn from(preview: Preview) -> Self {
        Self {
            items: vec![preview],
        }
    }
}

/// Summary fields in display order.
///
/// `due` is omitted when empty. Notes are summarized as a `notelen` count and
/// only when there are any.
#[must_use]
pub fn summary_fields(task: &ParsedTask, config: &FeedbackConfig) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("labels", task.labels.join(&config.label_separator)),
        ("priority", task.priority.clone()),
        ("project", task.project.clone()),
    ];
    if !task.due.is_empty() {
        fields.push(("due", task.due.clone()));
    }
    if !task.notes.is_empty() {
        fields.push(("notelen", task.notes.len().to_string()));
    }
    fields
}

impl Preview {
    /// Build the preview row for `raw`, which parsed into `task`.
    #[must_use]
    pub fn new(raw: &str, task: &ParsedTask, config: &FeedbackConfig) -> Self {
        let subtitle = summary_fields(task, config)
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(&config.field_separator);
        debug!(%subtitle, "built preview");

        Self {
            title: format!("Add task: {}", task.todo),
            subtitle,
            arg: raw.to_string(),
            valid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::parse_task;

    fn preview(raw: &str) -> Preview {
        Preview::new(raw, &parse_task(raw), &FeedbackConfig::default())
    }

    #[test]
    fn test_preview_full_task() {
        let raw = "pick up groceries !!3 #{grocery shopping} @errands @grocery_store due: tomorrow \
                   note: get whole milk note: check the expiration date";
        let row = preview(raw);

        assert_eq!(row.title, "Add task: pick up groceries");
        assert_eq!(
            row.subtitle,
            "labels: errands, grocery_store | priority: 3 | project: grocery shopping | due: tomorrow | notelen: 2"
        );
        assert_eq!(row.arg, raw);
        assert!(row.valid);
    }

    #[test]
    fn test_preview_omits_empty_due_and_notes() {
        let row = preview("call mom");
        assert_eq!(row.subtitle, "labels:  | priority:  | project: ");
    }

    #[test]
    fn test_preview_custom_separators() {
        let config = FeedbackConfig {
            label_separator: "+".to_string(),
            field_separator: "; ".to_string(),
        };
        let task = parse_task("x @a @b p2");
        let row = Preview::new("x @a @b p2", &task, &config);
        assert_eq!(row.subtitle, "labels: a+b; priority: 2; project: ");
    }

    #[test]
    fn test_summary_fields_order() {
        let task = parse_task("x @a due: friday note: n");
        let keys: Vec<_> = summary_fields(&task, &FeedbackConfig::default())
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["labels", "priority", "project", "due", "notelen"]);
    }

    #[test]
    fn test_feedback_items_json() {
        let items = FeedbackItems::from(preview("x"));
        let value = serde_json::to_value(&items).unwrap();
        assert_eq!(value["items"][0]["title"], "Add task: x");
        assert_eq!(value["items"][0]["valid"], true);
    }
}
