//! Natural language task parser.
//!
//! Parses strings like
//! `"pick up groceries !!1 #{grocery shopping} @errands due: tomorrow note: check milk"`
//! into structured task data.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::stages;

/// Result of parsing a task line.
///
/// Absent fields are empty strings or empty lists, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Labels from `@label` tokens, in order of appearance.
    pub labels: Vec<String>,
    /// Priority digit `1`..`4` from `!!N` or `pN`, or empty.
    pub priority: String,
    /// Project name from `#project` or `#{multi word project}`, or empty.
    pub project: String,
    /// Free-text due-date phrase following `due:`, or empty.
    pub due: String,
    /// One entry per `note:` marker.
    pub notes: Vec<String>,
    /// The text left over once every other field has been removed.
    pub todo: String,
}

impl ParsedTask {
    /// Check if the task needs catalog lookups (labels or a project).
    #[must_use]
    pub fn needs_lookup(&self) -> bool {
        !self.labels.is_empty() || !self.project.is_empty()
    }
}

/// Parser for free-form task lines.
///
/// Holds no state besides the shared compiled patterns, so one instance can
/// be reused for any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskParser;

impl TaskParser {
    /// Create a parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a task line.
    ///
    /// Stages run from the most rigidly delimited tokens to the most
    /// free-flowing text: labels, priority, project, due date, notes. The
    /// due stage must precede the notes stage because a due phrase ends at
    /// the first `note:` marker, and the notes stage consumes everything
    /// after that marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskline::nlp::TaskParser;
    ///
    /// let task = TaskParser::new().parse("get milk !!3 #{grocery shopping} @errands due: tomorrow");
    /// assert_eq!(task.todo, "get milk");
    /// assert_eq!(task.priority, "3");
    /// assert_eq!(task.project, "grocery shopping");
    /// assert_eq!(task.labels, vec!["errands"]);
    /// assert_eq!(task.due, "tomorrow");
    /// ```
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedTask {
        let (labels, text) = stages::pop_labels(text);
        trace!(?labels, remaining = %text, "labels extracted");

        let (priority, text) = stages::pop_priority(&text);
        trace!(%priority, remaining = %text, "priority extracted");

        let (project, text) = stages::pop_project(&text);
        trace!(%project, remaining = %text, "project extracted");

        let (due, text) = stages::pop_due(&text);
        trace!(%due, remaining = %text, "due date extracted");

        let (notes, text) = stages::pop_notes(&text);
        trace!(notes = notes.len(), remaining = %text, "notes extracted");

        let task = ParsedTask {
            labels,
            priority,
            project,
            due,
            notes,
            todo: text.trim().to_string(),
        };
        debug!(?task, "parsed task");
        task
    }
}

/// Parse a task line with a default [`TaskParser`].
///
/// # Examples
///
/// ```
/// use taskline::nlp::parse_task;
///
/// let task = parse_task("call mom p1 note: ask about sunday");
/// assert_eq!(task.todo, "call mom");
/// assert_eq!(task.priority, "1");
/// assert_eq!(task.notes, vec!["ask about sunday"]);
/// ```
#[must_use]
pub fn parse_task(text: &str) -> ParsedTask {
    TaskParser::new().parse(text)
}
