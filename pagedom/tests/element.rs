use pagedom::{
    ancestors_of, find_element, find_element_mut, validate_class_token, Content, DomError,
    Element,
};

fn page() -> Element {
    Element::body().id("body").child(
        Element::div()
            .id("nav")
            .class("dropdown")
            .child(Element::button().id("btn").class("dropdown-btn"))
            .child(
                Element::div()
                    .id("dropdown")
                    .class("dropdown-content")
                    .child(Element::link().id("home")),
            ),
    )
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_class_attribute_splits_on_whitespace() {
    let el = Element::div().class("  a b\tc  a ");
    assert_eq!(el.classes(), ["a", "b", "c"]);
    assert_eq!(el.class_name(), "a b c");
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("div-"));
}

#[test]
fn test_tag_is_lowercased() {
    assert_eq!(Element::new("BUTTON").tag, "button");
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::text("hello").child(Element::span().id("inner"));
    match &el.content {
        Content::Children(children) => assert_eq!(children[0].id, "inner"),
        other => panic!("expected children, got {other:?}"),
    }
}

#[test]
fn test_data() {
    let el = Element::div().data("family", "faq");
    assert_eq!(el.get_data("family").map(String::as_str), Some("faq"));
    assert_eq!(el.get_data("missing"), None);
}

// ============================================================================
// Class List
// ============================================================================

#[test]
fn test_toggle_flips_once_per_call() {
    let mut el = Element::div();
    assert!(el.toggle_class("show"));
    assert!(el.has_class("show"));
    assert!(!el.toggle_class("show"));
    assert!(!el.has_class("show"));
}

#[test]
fn test_add_and_remove_report_changes() {
    let mut el = Element::div().class("a");
    assert!(!el.add_class("a"));
    assert!(el.add_class("b"));
    assert!(el.remove_class("a"));
    assert!(!el.remove_class("a"));
    assert_eq!(el.classes(), ["b"]);
}

#[test]
fn test_validate_class_token() {
    assert!(validate_class_token("faq-show").is_ok());
    assert_eq!(
        validate_class_token(""),
        Err(DomError::InvalidClassToken {
            token: String::new()
        })
    );
    assert!(validate_class_token("two words").is_err());
    assert!(validate_class_token("tab\there").is_err());
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element() {
    let root = page();
    assert_eq!(find_element(&root, "home").map(|e| e.tag.as_str()), Some("a"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut() {
    let mut root = page();
    find_element_mut(&mut root, "dropdown").unwrap().add_class("show");
    assert!(find_element(&root, "dropdown").unwrap().has_class("show"));
}

#[test]
fn test_ancestors_of() {
    let root = page();
    assert_eq!(
        ancestors_of(&root, "home"),
        Some(vec![
            "body".to_string(),
            "nav".to_string(),
            "dropdown".to_string(),
            "home".to_string()
        ])
    );
    assert_eq!(ancestors_of(&root, "body"), Some(vec!["body".to_string()]));
    assert_eq!(ancestors_of(&root, "missing"), None);
}
