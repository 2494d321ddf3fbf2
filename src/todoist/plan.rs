//! Dry-run planning: everything task creation would do, without sending it.

use serde::Serialize;

use super::backend::{create_task, Operation, RecordingBackend};
use super::catalog::Catalog;
use super::payload::{build_payload, Payload};
use crate::error::TasklineError;
use crate::nlp::ParsedTask;

/// The resolved payload and the backend calls it would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Parsed fields.
    pub task: ParsedTask,
    /// Resolved ids and properties.
    pub payload: Payload,
    /// Backend calls in order.
    pub operations: Vec<Operation>,
}

/// Resolve `task` against `catalog` and record the resulting backend calls.
///
/// # Errors
///
/// Returns an error if the catalog cannot be synced.
pub fn plan_task<C: Catalog + ?Sized>(
    task: ParsedTask,
    catalog: &mut C,
    inbox_id: u64,
) -> Result<Plan, TasklineError> {
    let payload = build_payload(&task, catalog, inbox_id)?;

    let mut backend = RecordingBackend::new();
    create_task(
        &task.todo,
        payload.project_id,
        &mut backend,
        &payload.properties,
        &task.notes,
    )?;

    Ok(Plan {
        task,
        payload,
        operations: backend.into_operations(),
    })
}
