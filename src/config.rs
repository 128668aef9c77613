//! Dashboard configuration.
//!
//! Values come from built-in defaults, optionally overridden by a JSON file
//! (`--config PATH`), then by command-line flags applied by the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::table::{DEFAULT_MAX_SELECTION, DEFAULT_PAGE_SIZE_OPTIONS};

/// Error types that can occur while loading configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(String),
    /// Config file is not valid JSON for [`DashboardConfig`].
    Parse(String),
    /// Values parsed but break a constraint.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Behaviour of the data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Cap on selected rows.
    pub max_rows_selection: usize,
    /// Checkbox column and selection actions.
    pub enable_row_selection: bool,
    /// Expand-affordance column after the checkbox.
    pub enable_expand: bool,
    /// Column id the filter bar is bound to.
    pub filter_key: String,
    /// Noun used in notices ("8 vessels"). Falls back to `filter_key`.
    pub entity_label: Option<String>,
    pub show_filter_bar: bool,
    pub show_selection_banner: bool,
    pub show_footer: bool,
    pub page_size_options: Vec<usize>,
    pub page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_rows_selection: DEFAULT_MAX_SELECTION,
            enable_row_selection: true,
            enable_expand: true,
            filter_key: "vessels".to_string(),
            entity_label: None,
            show_filter_bar: true,
            show_selection_banner: true,
            show_footer: true,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl TableOptions {
    /// Noun for notices and the selection banner.
    pub fn entity_label(&self) -> &str {
        self.entity_label.as_deref().unwrap_or(&self.filter_key)
    }

    /// Number of non-data columns drawn next to the data columns.
    pub fn extra_columns(&self) -> usize {
        usize::from(self.enable_row_selection) + usize::from(self.enable_expand)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub table: TableOptions,
    /// Simulated fetch latency before rows appear.
    pub loading_delay_ms: u64,
    /// How long a notice toast stays on screen.
    pub notice_duration_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            table: TableOptions::default(),
            loading_delay_ms: 100,
            notice_duration_ms: 4000,
        }
    }
}

impl DashboardConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config: DashboardConfig =
            serde_json::from_str(&text).map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = &self.table;
        if table.page_size_options.is_empty() {
            return Err(ConfigError::Invalid("page_size_options is empty".into()));
        }
        if table.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid("page_size_options contains 0".into()));
        }
        if !table.page_size_options.contains(&table.page_size) {
            return Err(ConfigError::Invalid(format!(
                "page_size {} is not one of {:?}",
                table.page_size, table.page_size_options
            )));
        }
        if table.max_rows_selection == 0 {
            return Err(ConfigError::Invalid("max_rows_selection must be at least 1".into()));
        }
        if table.filter_key.trim().is_empty() {
            return Err(ConfigError::Invalid("filter_key is empty".into()));
        }
        Ok(())
    }
}
