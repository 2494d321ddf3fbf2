//! Configuration management for taskline.
//!
//! This module handles loading configuration from `~/.taskline/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, FeedbackConfig, GeneralConfig, TodoistConfig};
