//! Task creation for a Todoist-style service.
//!
//! A [`ParsedTask`](crate::nlp::ParsedTask) is mapped onto payload fields
//! here:
//! - label names and the project name are resolved to ids through a [`Catalog`]
//! - the 1 (urgent) to 4 UI priority is inverted onto the 4 (urgent) to 1 API scale
//! - the due phrase is sent verbatim as `date_string`
//! - notes are attached after the item is created
//!
//! No network client lives in this crate; [`TaskBackend`] is the seam.

mod backend;
mod catalog;
mod payload;
mod plan;

pub use backend::{create_task, Operation, RecordingBackend, TaskBackend};
pub use catalog::{Catalog, CatalogEntry, YamlCatalog};
pub use payload::{
    build_payload, convert_priority, label_ids_from_names, project_id_from_name, ItemProperties,
    Payload, INBOX_ID, LOWEST_API_PRIORITY,
};
pub use plan::{plan_task, Plan};
