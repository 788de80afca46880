use std::fmt;

use pagedom::{find_element, Element};

/// Whether a panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn from_class_present(present: bool) -> Self {
        if present { Self::Open } else { Self::Closed }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// State of the panel with the given ID, or None if it is not in the page.
pub fn panel_state(root: &Element, panel_id: &str, visibility_class: &str) -> Option<PanelState> {
    find_element(root, panel_id)
        .map(|el| PanelState::from_class_present(el.has_class(visibility_class)))
}
