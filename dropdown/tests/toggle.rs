use dropdown::page::sample_page;
use dropdown::{panel_state, toggle, DropdownError, PanelState};
use pagedom::{DomError, Element};

fn panel(root: &Element, id: &str, class: &str) -> PanelState {
    panel_state(root, id, class).unwrap()
}

// ============================================================================
// toggle
// ============================================================================

#[test]
fn test_toggle_opens_then_closes() {
    let mut root = sample_page();
    assert_eq!(panel(&root, "dropdown", "show"), PanelState::Closed);

    assert_eq!(toggle(&mut root, "dropdown", "show").unwrap(), PanelState::Open);
    assert!(root_has(&root, "dropdown", "show"));

    assert_eq!(toggle(&mut root, "dropdown", "show").unwrap(), PanelState::Closed);
    assert!(!root_has(&root, "dropdown", "show"));
}

#[test]
fn test_toggle_touches_only_its_panel() {
    let mut root = sample_page();
    toggle(&mut root, "faq-dropdown", "faq-show").unwrap();

    assert_eq!(panel(&root, "faq-dropdown", "faq-show"), PanelState::Open);
    assert_eq!(panel(&root, "dropdown", "show"), PanelState::Closed);

    // Other classes on the panel are left alone
    let faq = pagedom::find_element(&root, "faq-dropdown").unwrap();
    assert_eq!(faq.classes(), ["faq-dropdown-content", "faq-show"]);
}

#[test]
fn test_toggle_missing_panel() {
    let mut root = sample_page();
    let err = toggle(&mut root, "no-such-panel", "show").unwrap_err();
    assert!(matches!(err, DropdownError::PanelNotFound { ref id } if id == "no-such-panel"));
    assert_eq!(err.to_string(), "panel not found: #no-such-panel");
}

#[test]
fn test_toggle_rejects_bad_visibility_class() {
    let mut root = sample_page();
    for class in ["", "a b", "tab\tclass"] {
        let err = toggle(&mut root, "dropdown", class).unwrap_err();
        assert!(matches!(
            err,
            DropdownError::Dom(DomError::InvalidClassToken { ref token }) if token == class
        ));
    }

    // The class list is unchanged and survives a class attribute round trip
    let panel = pagedom::find_element(&root, "dropdown").unwrap();
    assert_eq!(panel.classes(), ["dropdown-content"]);
    assert_eq!(
        Element::div().class(&panel.class_name()).classes(),
        panel.classes()
    );
}

#[test]
fn test_panel_state() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("p").class("menu show"));
    assert_eq!(panel_state(&root, "p", "show"), Some(PanelState::Open));
    assert_eq!(panel_state(&root, "p", "faq-show"), Some(PanelState::Closed));
    assert_eq!(panel_state(&root, "missing", "show"), None);
    assert!(PanelState::Open.is_open());
    assert_eq!(PanelState::default(), PanelState::Closed);
    assert_eq!(PanelState::Open.to_string(), "open");
}

fn root_has(root: &Element, id: &str, class: &str) -> bool {
    pagedom::find_element(root, id).is_some_and(|el| el.has_class(class))
}
