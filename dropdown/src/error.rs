//! Error types for the dropdown controller.

use std::path::PathBuf;

use pagedom::DomError;

#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    /// The panel a trigger toggles is not in the page.
    #[error("panel not found: #{id}")]
    PanelNotFound { id: String },

    /// A selector or class token was rejected by the page model.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// A family definition is incomplete or malformed.
    #[error("invalid family '{name}': {reason}")]
    InvalidFamily { name: String, reason: String },

    /// Two families in one config share a name or a panel.
    #[error("duplicate {field} '{value}' in dropdown config")]
    Duplicate { field: &'static str, value: String },

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
