//! Error types for DOM lookups, selectors and class tokens.

/// Errors raised by the page model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element with the given id exists in the tree.
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// No element matches the selector.
    #[error("no element matches {selector:?}")]
    NoMatch { selector: String },

    /// The selector text could not be parsed.
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The selector is well formed but uses syntax this matcher does not support.
    #[error("unsupported selector {selector:?}: {reason}")]
    UnsupportedSelector { selector: String, reason: String },

    /// A class token was empty or contained whitespace.
    #[error("invalid class token {token:?}")]
    InvalidClassToken { token: String },
}

impl DomError {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::UnsupportedSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}
