//! Style configuration
//!
//! Configuration is read from JSON. Every field has a default, so an empty
//! object (`{}`) is a valid configuration.

use crate::error::Result;
use crate::scales::breakpoints;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for theme construction and resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Breakpoint widths, ascending
    #[serde(default = "breakpoints::defaults")]
    pub breakpoints: Vec<String>,

    /// Override for the theme's initial color mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_color_mode: Option<String>,

    /// Treat mode overrides of unknown roles as errors instead of warnings
    #[serde(default)]
    pub strict_modes: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            breakpoints: breakpoints::defaults(),
            initial_color_mode: None,
            strict_modes: false,
        }
    }
}

impl StyleConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            breakpoints = config.breakpoints.len(),
            "Loaded style configuration"
        );
        Ok(config)
    }

    /// Set the breakpoints
    pub fn with_breakpoints(mut self, widths: &[&str]) -> Self {
        self.breakpoints = widths.iter().map(|w| w.to_string()).collect();
        self
    }

    /// Set the initial color mode
    pub fn with_initial_color_mode(mut self, mode: impl Into<String>) -> Self {
        self.initial_color_mode = Some(mode.into());
        self
    }

    /// Enable or disable strict mode checking
    pub fn strict_modes(mut self, strict: bool) -> Self {
        self.strict_modes = strict;
        self
    }
}
