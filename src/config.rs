//! Persisted view configuration

use crate::columns::{self, ColumnPreset};
use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Explicit UI state for one page view
///
/// Read once at startup and written on user action; nothing reads or
/// writes it mid-render. Replaces what used to live as ambient
/// page-level state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Color theme
    pub theme: Theme,
    /// Active column preset
    pub preset: ColumnPreset,
    /// Explicit visible-column override; when set it wins over the preset
    pub visible_columns: Option<Vec<String>>,
    /// Rows per table page
    pub page_length: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            theme: Theme::Light,
            preset: ColumnPreset::Core,
            visible_columns: None,
            page_length: 25,
        }
    }
}

impl ViewConfig {
    /// Whether the named column starts visible
    ///
    /// The repository column is always visible and cannot be hidden by
    /// either the preset or the override.
    pub fn is_visible(&self, column: &str) -> bool {
        if column == columns::REPOSITORY {
            return true;
        }
        match &self.visible_columns {
            Some(cols) => cols.iter().any(|c| c == column),
            None => self.preset.shows(column),
        }
    }

    /// Load configuration from a JSON file
    ///
    /// A missing file yields the defaults; an unreadable or malformed
    /// file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ViewConfig> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(ViewConfig::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| MetricsError::ConfigError(format!("Failed to read config: {}", e)))?;
        serde_json::from_str(&text)
            .map_err(|e| MetricsError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| MetricsError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, text)
            .map_err(|e| MetricsError::ConfigError(format!("Failed to write config: {}", e)))
    }
}
