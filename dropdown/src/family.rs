//! Dropdown family definitions.

use pagedom::{validate_class_token, Selector};
use serde::{Deserialize, Serialize};

use crate::error::DropdownError;

/// How a click target is checked against the trigger selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMatch {
    /// Only the clicked element itself is tested.
    #[default]
    Target,
    /// The clicked element or any of its ancestors may match, so clicks on
    /// an icon inside the trigger count as trigger clicks.
    SelfOrAncestor,
}

/// One trigger/panel pair and the outside-click rule for its panel class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownFamily {
    /// Name used in logs and for duplicate detection.
    pub name: String,

    /// Selector for the element(s) that toggle the panel.
    pub trigger: String,

    /// ID of the panel toggled by the trigger.
    pub panel_id: String,

    /// Selector shared by every panel of the family. Open panels matching it
    /// are closed by an outside click.
    pub panel_selector: String,

    /// Class whose presence marks a panel as open.
    pub visibility_class: String,

    #[serde(default)]
    pub trigger_match: TriggerMatch,
}

/// Parsed selectors of a validated family.
#[derive(Debug, Clone)]
pub struct FamilySelectors {
    pub trigger: Selector,
    pub panels: Selector,
}

impl DropdownFamily {
    /// Create a family using the conventional names for `name`:
    /// trigger `.{name}-btn`, panel `#{name}`, panels `.{name}-content`,
    /// visibility class `show`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            trigger: format!(".{name}-btn"),
            panel_id: name.clone(),
            panel_selector: format!(".{name}-content"),
            visibility_class: "show".to_string(),
            trigger_match: TriggerMatch::Target,
            name,
        }
    }

    /// The site-wide navigation dropdown.
    pub fn generic() -> Self {
        Self::new("dropdown")
    }

    /// The FAQ dropdown.
    pub fn faq() -> Self {
        Self::new("faq-dropdown").visibility_class("faq-show")
    }

    pub fn trigger(mut self, selector: impl Into<String>) -> Self {
        self.trigger = selector.into();
        self
    }

    pub fn panel(mut self, panel_id: impl Into<String>) -> Self {
        self.panel_id = panel_id.into();
        self
    }

    pub fn panel_selector(mut self, selector: impl Into<String>) -> Self {
        self.panel_selector = selector.into();
        self
    }

    pub fn visibility_class(mut self, class: impl Into<String>) -> Self {
        self.visibility_class = class.into();
        self
    }

    pub fn trigger_match(mut self, trigger_match: TriggerMatch) -> Self {
        self.trigger_match = trigger_match;
        self
    }

    /// Check the definition and parse its selectors.
    pub fn validate(&self) -> Result<FamilySelectors, DropdownError> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name is empty"));
        }

        if self.panel_id.is_empty() || self.panel_id.chars().any(char::is_whitespace) {
            return Err(self.invalid(format!("bad panel id {:?}", self.panel_id)));
        }

        if self.panel_id.starts_with('#') {
            return Err(self.invalid(format!(
                "panel id {:?} is an id, not a selector; drop the leading '#'",
                self.panel_id
            )));
        }

        validate_class_token(&self.visibility_class)?;

        Ok(FamilySelectors {
            trigger: Selector::parse(&self.trigger)?,
            panels: Selector::parse(&self.panel_selector)?,
        })
    }

    fn invalid(&self, reason: impl Into<String>) -> DropdownError {
        DropdownError::InvalidFamily {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let generic = DropdownFamily::generic();
        assert_eq!(generic.trigger, ".dropdown-btn");
        assert_eq!(generic.panel_id, "dropdown");
        assert_eq!(generic.panel_selector, ".dropdown-content");
        assert_eq!(generic.visibility_class, "show");

        let faq = DropdownFamily::faq();
        assert_eq!(faq.trigger, ".faq-dropdown-btn");
        assert_eq!(faq.panel_id, "faq-dropdown");
        assert_eq!(faq.panel_selector, ".faq-dropdown-content");
        assert_eq!(faq.visibility_class, "faq-show");
    }

    #[test]
    fn test_validate_ok() {
        let selectors = DropdownFamily::faq().validate().unwrap();
        assert_eq!(selectors.trigger.as_str(), ".faq-dropdown-btn");
        assert_eq!(selectors.panels.as_str(), ".faq-dropdown-content");
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert!(matches!(
            DropdownFamily::new(" ").validate(),
            Err(DropdownError::InvalidFamily { .. })
        ));
        assert!(matches!(
            DropdownFamily::generic().panel("two ids").validate(),
            Err(DropdownError::InvalidFamily { .. })
        ));
        assert!(matches!(
            DropdownFamily::generic().panel("#dropdown").validate(),
            Err(DropdownError::InvalidFamily { .. })
        ));
        assert!(matches!(
            DropdownFamily::generic().visibility_class("").validate(),
            Err(DropdownError::Dom(_))
        ));
        assert!(matches!(
            DropdownFamily::generic().trigger("nav .btn").validate(),
            Err(DropdownError::Dom(_))
        ));
    }
}
