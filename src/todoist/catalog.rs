//! Label and project catalogs.
//!
//! A catalog answers "which id does this name have" for labels and projects.
//! The file-backed [`YamlCatalog`] reads `~/.taskline/catalog.yaml`:
//!
//! ```yaml
//! labels:
//!   - { id: 1, name: errands }
//! projects:
//!   - { id: 10, name: grocery shopping }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TasklineError;

/// A named object with a numeric id (a label or a project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Remote identifier.
    pub id: u64,
    /// Display name, matched exactly against parsed names.
    pub name: String,
}

impl CatalogEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Source of known labels and projects.
#[cfg_attr(test, mockall::automock)]
pub trait Catalog {
    /// Refresh the catalog state before lookups.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be refreshed.
    fn sync(&mut self) -> Result<(), TasklineError>;

    /// All known labels.
    fn labels(&self) -> Vec<CatalogEntry>;

    /// All known projects.
    fn projects(&self) -> Vec<CatalogEntry>;
}

/// Catalog loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YamlCatalog {
    /// Known labels.
    pub labels: Vec<CatalogEntry>,
    /// Known projects.
    pub projects: Vec<CatalogEntry>,
}

impl YamlCatalog {
    /// Load a catalog from a specific path.
    ///
    /// If the file doesn't exist, returns an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TasklineError> {
        if !path.exists() {
            debug!(path = %path.display(), "catalog file not found, using empty catalog");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&contents)?;
        debug!(
            path = %path.display(),
            labels = catalog.labels.len(),
            projects = catalog.projects.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `TasklineError::Yaml` if the text is not a valid catalog.
    pub fn from_yaml_str(contents: &str) -> Result<Self, TasklineError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

impl Catalog for YamlCatalog {
    fn sync(&mut self) -> Result<(), TasklineError> {
        debug!("catalog is file-backed; sync is a no-op");
        Ok(())
    }

    fn labels(&self) -> Vec<CatalogEntry> {
        self.labels.clone()
    }

    fn projects(&self) -> Vec<CatalogEntry> {
        self.projects.clone()
    }
}
