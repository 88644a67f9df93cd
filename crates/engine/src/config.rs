//! Page wiring configuration
//!
//! Describes which controls on a page drive which visibility rules. Loaded
//! from JSON; every field is optional.
//!
//! ```json
//! {
//!   "locale": "de",
//!   "column_toggles": [{ "checkbox": "show-cpp", "class": "column-cpp" }],
//!   "row_filter": { "body": "#results", "menus": ["sign-select", "bits-select"] },
//!   "target_select": { "select": "targets-select", "class": "target" }
//! }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A checkbox that shows or hides every element with a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleBinding {
    pub checkbox: String,
    pub class: String,
}

/// Selects whose values filter the rows of a table body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowFilterBinding {
    /// Body element id; the document's first `<tbody>` when absent.
    pub body: Option<String>,
    pub menus: Vec<String>,
}

/// A select whose value names the one element of `class` to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBinding {
    pub select: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub locale: String,
    pub column_toggles: Vec<ToggleBinding>,
    pub row_toggles: Vec<ToggleBinding>,
    pub row_filter: Option<RowFilterBinding>,
    pub target_select: Option<TargetBinding>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            column_toggles: Vec::new(),
            row_toggles: Vec::new(),
            row_filter: None,
            target_select: None,
        }
    }
}

impl PageConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.normalize();
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Ids written `#id` and classes written `.class` are stored bare.
    fn normalize(&mut self) {
        for toggle in self.column_toggles.iter_mut().chain(&mut self.row_toggles) {
            strip_prefix(&mut toggle.checkbox, '#');
            strip_prefix(&mut toggle.class, '.');
        }
        if let Some(filter) = &mut self.row_filter {
            if let Some(body) = &mut filter.body {
                strip_prefix(body, '#');
            }
            for menu in &mut filter.menus {
                strip_prefix(menu, '#');
            }
        }
        if let Some(target) = &mut self.target_select {
            strip_prefix(&mut target.select, '#');
            strip_prefix(&mut target.class, '.');
        }
    }
}

fn strip_prefix(value: &mut String, prefix: char) {
    if let Some(stripped) = value.strip_prefix(prefix) {
        *value = stripped.to_string();
    }
}
