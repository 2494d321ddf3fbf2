//! Configuration settings for taskline.
//!
//! Settings are loaded from `~/.taskline/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TasklineError;
use crate::todoist::INBOX_ID;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Preview line settings.
    pub feedback: FeedbackConfig,
    /// Task-creation settings.
    pub todoist: TodoistConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the process-wide color override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Preview line settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Separator placed between label names.
    #[serde(default = "default_label_separator")]
    pub label_separator: String,
    /// Separator placed between `key: value` fields.
    #[serde(default = "default_field_separator")]
    pub field_separator: String,
}

/// Task-creation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoistConfig {
    /// Project id used when no (known) project is given.
    #[serde(default = "default_inbox_project_id")]
    pub inbox_project_id: u64,
    /// Catalog file; defaults to `catalog.yaml` under the taskline home
    /// (`~/.taskline` or `$TASKLINE_HOME`), not next to a `--config` file.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_label_separator() -> String {
    ", ".to_string()
}

fn default_field_separator() -> String {
    " | ".to_string()
}

const fn default_inbox_project_id() -> u64 {
    INBOX_ID
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            label_separator: default_label_separator(),
            field_separator: default_field_separator(),
        }
    }
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            inbox_project_id: default_inbox_project_id(),
            catalog_file: None,
        }
    }
}

impl TodoistConfig {
    /// Resolve the catalog path against the default paths.
    #[must_use]
    pub fn catalog_path(&self, paths: &Paths) -> PathBuf {
        self.catalog_file
            .clone()
            .unwrap_or_else(|| paths.catalog_file.clone())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TasklineError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TasklineError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TasklineError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            TasklineError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
