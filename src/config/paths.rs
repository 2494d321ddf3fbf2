//! Path resolution for taskline configuration and data files.
//!
//! All taskline data is stored in `~/.taskline/` (or `$TASKLINE_HOME`):
//! - `config.yaml` - Main configuration file
//! - `catalog.yaml` - Known labels and projects with their ids

use std::path::PathBuf;

use crate::error::TasklineError;

/// Environment variable that overrides the root directory.
pub const HOME_ENV: &str = "TASKLINE_HOME";

/// Paths to taskline configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskline/`
    pub root: PathBuf,
    /// Config file: `~/.taskline/config.yaml`
    pub config_file: PathBuf,
    /// Catalog file: `~/.taskline/catalog.yaml`
    pub catalog_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$TASKLINE_HOME`, falling back to `$HOME/.taskline`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, TasklineError> {
        if let Ok(root) = std::env::var(HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            TasklineError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskline")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            catalog_file: root.join("catalog.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".taskline"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-taskline");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.catalog_file, root.join("catalog.yaml"));
    }
}
