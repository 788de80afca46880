//! Dropdown configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DropdownError;
use crate::family::DropdownFamily;

/// The set of dropdown families installed on a page.
///
/// Loaded from JSON of the form:
///
/// ```json
/// {
///   "families": [
///     {
///       "name": "dropdown",
///       "trigger": ".dropdown-btn",
///       "panel_id": "dropdown",
///       "panel_selector": ".dropdown-content",
///       "visibility_class": "show"
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub families: Vec<DropdownFamily>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            families: vec![DropdownFamily::generic(), DropdownFamily::faq()],
        }
    }
}

impl DropdownConfig {
    pub fn new(families: impl IntoIterator<Item = DropdownFamily>) -> Self {
        Self {
            families: families.into_iter().collect(),
        }
    }

    /// Add a family.
    pub fn family(mut self, family: DropdownFamily) -> Self {
        self.families.push(family);
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, DropdownError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DropdownError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DropdownError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, DropdownError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every family, and require unique names and panel IDs.
    pub fn validate(&self) -> Result<(), DropdownError> {
        let mut names = HashSet::new();
        let mut panels = HashSet::new();

        for family in &self.families {
            family.validate()?;

            if !names.insert(family.name.as_str()) {
                return Err(DropdownError::Duplicate {
                    field: "family name",
                    value: family.name.clone(),
                });
            }
            if !panels.insert(family.panel_id.as_str()) {
                return Err(DropdownError::Duplicate {
                    field: "panel id",
                    value: family.panel_id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DropdownFamily> {
        self.families.iter().find(|f| f.name == name)
    }
}
