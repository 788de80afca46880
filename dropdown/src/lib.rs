//! Click-to-toggle dropdown panels with dismiss-on-outside-click.
//!
//! A [`DropdownFamily`] names a trigger selector, the panel it toggles, the
//! class shared by every panel of the family and the class that marks a
//! panel as open. [`install`] wires one family into a [`pagedom::Document`];
//! any number of families can be installed side by side.

pub mod config;
pub mod controller;
pub mod error;
pub mod family;
pub mod page;
pub mod state;

pub use config::DropdownConfig;
pub use controller::{
    close_open_panels, dismiss_others, dismiss_others_matching, install, install_all,
    is_trigger_click, toggle, uninstall, FamilyHandle,
};
pub use error::DropdownError;
pub use family::{DropdownFamily, FamilySelectors, TriggerMatch};
pub use state::{panel_state, PanelState};
