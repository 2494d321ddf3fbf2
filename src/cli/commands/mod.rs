//! Command implementations for taskline.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod parse;
mod plan;

pub use completions::completions;
pub use parse::{parse, preview};
pub use plan::plan;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::TasklineError;
use crate::output::to_json;

/// Execute config command
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn show_config(config: &Config, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?.trim_end().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_config_yaml() {
        let output = show_config(&Config::default(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("default_output: pretty"));
        assert!(output.contains("inbox_project_id: 0"));
    }

    #[test]
    fn test_show_config_json() {
        let output = show_config(&Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["feedback"]["field_separator"], " | ");
    }
}
