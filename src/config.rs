//! Configuration for the layout engine
//!
//! Configuration can be built in code with the `with_*` builders or loaded
//! from a TOML document:
//!
//! ```toml
//! layout_direction = "right_to_left"
//! intrinsic_priority = 250
//!
//! [safe_area_insets]
//! top = 44
//! bottom = 34
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::host::{EdgeInsets, LayoutDirection, Priority};

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for an [`Engine`](crate::Engine)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Insets of every view's safe-area guide relative to the view
    pub safe_area_insets: EdgeInsets,

    /// Which physical edge leading and trailing anchors resolve to
    pub layout_direction: LayoutDirection,

    /// Priority of intrinsic content size constraints
    pub intrinsic_priority: Priority,

    /// Average glyph advance as a fraction of the font size (labels)
    pub char_width_ratio: f64,

    /// Line height as a multiple of the font size (labels)
    pub line_height_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            safe_area_insets: EdgeInsets::zero(),
            layout_direction: LayoutDirection::LeftToRight,
            intrinsic_priority: Priority::DEFAULT_LOW,
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the safe-area insets
    pub fn with_safe_area_insets(mut self, insets: EdgeInsets) -> Self {
        self.safe_area_insets = insets;
        self
    }

    /// Set the layout direction
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Set the intrinsic content size priority
    pub fn with_intrinsic_priority(mut self, priority: Priority) -> Self {
        self.intrinsic_priority = priority;
        self
    }

    /// Set the text metrics used by labels
    pub fn with_text_metrics(mut self, char_width_ratio: f64, line_height_ratio: f64) -> Self {
        self.char_width_ratio = char_width_ratio;
        self.line_height_ratio = line_height_ratio;
        self
    }
}
