//! `taskline plan`.

use std::path::Path;

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::TasklineError;
use crate::nlp::TaskParser;
use crate::output::format_plan;
use crate::todoist::{plan_task, YamlCatalog};

/// Execute the plan command.
///
/// `catalog` overrides the catalog file named in the config.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output formatting fails.
pub fn plan(
    text: &str,
    catalog: Option<&Path>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let catalog_path = catalog.map_or_else(
        || config.todoist.catalog_path(&Paths::default()),
        Path::to_path_buf,
    );
    info!(%text, catalog = %catalog_path.display(), "planning task");

    let mut catalog = YamlCatalog::load_from_path(&catalog_path)?;
    let task = TaskParser::new().parse(text);
    let plan = plan_task(task, &mut catalog, config.todoist.inbox_project_id)?;

    format_plan(&plan, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plan_with_catalog_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.yaml");
        std::fs::write(&path, "projects:\n  - { id: 77, name: groceries }\n").unwrap();

        let result = plan("buy milk #groceries", Some(&path), &Config::default(), OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["payload"]["project_id"], 77);
        assert_eq!(value["operations"][0]["content"], "buy milk");
    }

    #[test]
    fn test_plan_uses_configured_inbox() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.todoist.inbox_project_id = 5;
        config.todoist.catalog_file = Some(temp_dir.path().join("missing.yaml"));

        let result = plan("buy milk", None, &config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["payload"]["project_id"], 5);
    }

    #[test]
    fn test_plan_invalid_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.yaml");
        std::fs::write(&path, "labels: 3").unwrap();

        let err = plan("x", Some(&path), &Config::default(), OutputFormat::Json).unwrap_err();
        assert!(matches!(err, TasklineError::Yaml(_)));
    }
}
