//! Task creation against a backend.
//!
//! [`TaskBackend`] is the seam where a remote task service plugs in.
//! [`RecordingBackend`] performs no I/O; it records the calls that would be
//! made so they can be previewed.

use serde::Serialize;
use tracing::{debug, info};

use super::payload::ItemProperties;
use crate::error::TasklineError;

/// Operations understood by a task service.
#[cfg_attr(test, mockall::automock)]
pub trait TaskBackend {
    /// Create an item and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the item.
    fn add_item(
        &mut self,
        content: &str,
        project_id: u64,
        properties: &ItemProperties,
    ) -> Result<u64, TasklineError>;

    /// Attach a note to an existing item.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the note.
    fn add_note(&mut self, item_id: u64, content: &str) -> Result<(), TasklineError>;

    /// Flush queued operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    fn commit(&mut self) -> Result<(), TasklineError>;
}

/// Create a task and attach its notes.
///
/// Notes are added after the item exists, in order. The backend is committed
/// only when at least one note was queued.
///
/// # Errors
///
/// Returns the first backend error encountered.
pub fn create_task<B: TaskBackend + ?Sized>(
    content: &str,
    project_id: u64,
    backend: &mut B,
    properties: &ItemProperties,
    notes: &[String],
) -> Result<u64, TasklineError> {
    let item_id = backend.add_item(content, project_id, properties)?;
    info!(item_id, project_id, "task created");

    for note in notes {
        backend.add_note(item_id, note)?;
    }

    if !notes.is_empty() {
        backend.commit()?;
        debug!(item_id, notes = notes.len(), "notes committed");
    }

    Ok(item_id)
}

/// A call made against a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// `add_item` with the id that was handed out.
    AddItem {
        /// Assigned item id.
        id: u64,
        /// Task content.
        content: String,
        /// Target project id.
        project_id: u64,
        /// Item properties.
        #[serde(flatten)]
        properties: ItemProperties,
    },
    /// `add_note`.
    AddNote {
        /// Item the note is attached to.
        item_id: u64,
        /// Note text.
        content: String,
    },
    /// `commit`.
    Commit,
}

/// Backend that records operations instead of sending them.
///
/// Item ids are handed out sequentially starting at 1.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    operations: Vec<Operation>,
    next_id: u64,
}

impl RecordingBackend {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations recorded so far, in call order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Consume the recorder, returning its operations.
    #[must_use]
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

impl TaskBackend for RecordingBackend {
    fn add_item(
        &mut self,
        content: &str,
        project_id: u64,
        properties: &ItemProperties,
    ) -> Result<u64, TasklineError> {
        self.next_id += 1;
        self.operations.push(Operation::AddItem {
            id: self.next_id,
            content: content.to_string(),
            project_id,
            properties: properties.clone(),
        });
        Ok(self.next_id)
    }

    fn add_note(&mut self, item_id: u64, content: &str) -> Result<(), TasklineError> {
        self.operations.push(Operation::AddNote {
            item_id,
            content: content.to_string(),
        });
        Ok(())
    }

    fn commit(&mut self) -> Result<(), TasklineError> {
        self.operations.push(Operation::Commit);
        Ok(())
    }
}
