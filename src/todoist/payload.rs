//! Mapping a parsed task onto task-creation payload fields.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::Catalog;
use crate::error::TasklineError;
use crate::nlp::ParsedTask;

/// Project id used when a task names no project, or an unknown one.
pub const INBOX_ID: u64 = 0;

/// Priority sent when the parsed priority is missing or invalid.
pub const LOWEST_API_PRIORITY: u8 = 1;

/// Extra fields sent alongside the task content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProperties {
    /// Label ids.
    pub labels: Vec<u64>,
    /// API priority, 4 = most urgent, 1 = none.
    pub priority: u8,
    /// Natural-language due date, passed through verbatim.
    pub date_string: String,
}

impl Default for ItemProperties {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            priority: LOWEST_API_PRIORITY,
            date_string: String::new(),
        }
    }
}

/// Everything needed to create a task, minus its content and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Target project id.
    pub project_id: u64,
    /// Item properties.
    pub properties: ItemProperties,
    /// Whether the catalog was synced to resolve names.
    pub synced: bool,
}

/// Convert a UI priority (1 = most urgent) to the API scale (4 = most urgent).
///
/// Anything that is not a digit from 1 to 4 maps to the lowest priority.
#[must_use]
pub fn convert_priority(priority: &str) -> u8 {
    match priority.parse::<u8>() {
        Ok(p @ 1..=4) => 4 - p + 1,
        _ => LOWEST_API_PRIORITY,
    }
}

/// Look up label ids by name, in the order requested.
///
/// Unknown names are skipped and repeated names resolve once.
pub fn label_ids_from_names<C: Catalog + ?Sized>(names: &[String], catalog: &C) -> Vec<u64> {
    if names.is_empty() {
        return Vec::new();
    }

    let known = catalog.labels();
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        match known.iter().find(|label| &label.name == name) {
            Some(label) if !ids.contains(&label.id) => ids.push(label.id),
            Some(_) => {},
            None => {
                debug!(label = %name, "unknown label ignored");
            },
        }
    }
    ids
}

/// Look up a project id by name, falling back to `inbox_id`.
pub fn project_id_from_name<C: Catalog + ?Sized>(name: &str, catalog: &C, inbox_id: u64) -> u64 {
    if name.is_empty() {
        return inbox_id;
    }

    catalog
        .projects()
        .into_iter()
        .find(|project| project.name == name)
        .map_or_else(
            || {
                debug!(project = %name, "unknown project, using inbox");
                inbox_id
            },
            |project| project.id,
        )
}

/// Build the creation payload for a parsed task.
///
/// The catalog is synced once, and only when the task has labels or a
/// project to resolve.
///
/// # Errors
///
/// Returns an error if the catalog sync fails.
pub fn build_payload<C: Catalog + ?Sized>(
    task: &ParsedTask,
    catalog: &mut C,
    inbox_id: u64,
) -> Result<Payload, TasklineError> {
    let synced = task.needs_lookup();
    if synced {
        catalog.sync()?;
    }

    let payload = Payload {
        project_id: project_id_from_name(&task.project, catalog, inbox_id),
        properties: ItemProperties {
            labels: label_ids_from_names(&task.labels, catalog),
            priority: convert_priority(&task.priority),
            date_string: task.due.clone(),
        },
        synced,
    };
    debug!(?payload, "built payload");
    Ok(payload)
}
