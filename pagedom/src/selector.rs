//! A small CSS selector matcher.
//!
//! Supports compound simple selectors (`button`, `*`, `#id`, `.class` and
//! combinations such as `button.dropdown-btn#main`) and comma-separated
//! selector groups. Combinators, attribute selectors and pseudo-classes are
//! rejected as unsupported.

use std::fmt;
use std::str::FromStr;

use crate::element::{Content, Element};
use crate::error::DomError;

/// One compound selector: an optional tag plus any number of id/class conditions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    /// None means universal.
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if element.id != *id {
                return false;
            }
        }

        self.classes.iter().all(|class| element.has_class(class))
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, DomError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(DomError::invalid_selector(source, "empty selector"));
        }

        let groups = trimmed
            .split(',')
            .map(|group| parse_compound(source, group.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: trimmed.to_string(),
            groups,
        })
    }

    /// Selector matching a single class, e.g. `.dropdown-content`.
    pub fn class(class: &str) -> Result<Self, DomError> {
        Self::parse(&format!(".{class}"))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the element itself matches any group of this selector.
    pub fn matches(&self, element: &Element) -> bool {
        self.groups.iter().any(|group| group.matches(element))
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn parse_compound(source: &str, group: &str) -> Result<Compound, DomError> {
    if group.is_empty() {
        return Err(DomError::invalid_selector(source, "empty selector group"));
    }

    let mut compound = Compound::default();
    let mut chars = group.chars().peekable();

    // Leading type selector or universal
    match chars.peek().copied() {
        Some('*') => {
            chars.next();
        }
        Some(c) if is_ident_char(c) => {
            let mut tag = String::new();
            while let Some(c) = chars.next_if(|c| is_ident_char(*c)) {
                tag.push(c);
            }
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        _ => {}
    }

    while let Some(c) = chars.next() {
        match c {
            '.' | '#' => {
                let mut name = String::new();
                while let Some(c) = chars.next_if(|c| is_ident_char(*c)) {
                    name.push(c);
                }
                if name.is_empty() {
                    return Err(DomError::invalid_selector(
                        source,
                        format!("expected a name after '{c}'"),
                    ));
                }
                if c == '.' {
                    compound.classes.push(name);
                } else if compound.id.replace(name).is_some() {
                    return Err(DomError::unsupported_selector(
                        source,
                        "more than one id in a compound selector",
                    ));
                }
            }
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                return Err(DomError::unsupported_selector(source, "combinators"));
            }
            '[' => {
                return Err(DomError::unsupported_selector(source, "attribute selectors"));
            }
            ':' => {
                return Err(DomError::unsupported_selector(source, "pseudo-classes"));
            }
            other => {
                return Err(DomError::invalid_selector(
                    source,
                    format!("unexpected character {other:?}"),
                ));
            }
        }
    }

    Ok(compound)
}

/// Whether the element matches the selector.
pub fn matches(element: &Element, selector: &Selector) -> bool {
    selector.matches(element)
}

/// All elements matching the selector, in document order (pre-order, root included).
pub fn query_selector_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_matching(root, selector, &mut out);
    out
}

/// The first element in document order matching the selector.
pub fn query_selector<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    if selector.matches(root) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = query_selector(child, selector) {
                return Some(found);
            }
        }
    }

    None
}

/// The element with the given ID, or its nearest ancestor, that matches the selector.
pub fn closest<'a>(root: &'a Element, id: &str, selector: &Selector) -> Option<&'a Element> {
    let mut path = Vec::new();
    if !element_path(root, id, &mut path) {
        return None;
    }
    path.into_iter().rev().find(|el| selector.matches(el))
}

fn element_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if element_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// Visit every matching element mutably, in document order.
/// Returns the number of elements visited.
pub fn for_each_matching_mut<F>(root: &mut Element, selector: &Selector, mut f: F) -> usize
where
    F: FnMut(&mut Element),
{
    visit_matching_mut(root, selector, &mut f)
}

fn collect_matching<'a>(element: &'a Element, selector: &Selector, out: &mut Vec<&'a Element>) {
    if selector.matches(element) {
        out.push(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_matching(child, selector, out);
        }
    }
}

fn visit_matching_mut<F>(element: &mut Element, selector: &Selector, f: &mut F) -> usize
where
    F: FnMut(&mut Element),
{
    let mut count = 0;
    if selector.matches(element) {
        f(element);
        count += 1;
    }

    if let Content::Children(children) = &mut element.content {
        for child in children {
            count += visit_matching_mut(child, selector, f);
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class() {
        let selector = Selector::parse(".dropdown-btn").unwrap();
        assert_eq!(
            selector.groups,
            vec![Compound {
                tag: None,
                id: None,
                classes: vec!["dropdown-btn".to_string()],
            }]
        );
    }

    #[test]
    fn test_parse_compound() {
        let selector = Selector::parse("BUTTON#main.a.b").unwrap();
        assert_eq!(
            selector.groups,
            vec![Compound {
                tag: Some("button".to_string()),
                id: Some("main".to_string()),
                classes: vec!["a".to_string(), "b".to_string()],
            }]
        );
    }

    #[test]
    fn test_parse_groups_and_universal() {
        let selector = Selector::parse(" * , .x ").unwrap();
        assert_eq!(selector.groups.len(), 2);
        assert_eq!(selector.groups[0], Compound::default());
        assert_eq!(selector.as_str(), "* , .x");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Selector::parse("   "),
            Err(DomError::InvalidSelector { .. })
        ));
        assert!(matches!(
            Selector::parse(".a,"),
            Err(DomError::InvalidSelector { .. })
        ));
        assert!(matches!(
            Selector::parse("."),
            Err(DomError::InvalidSelector { .. })
        ));
        assert!(matches!(
            Selector::parse("div .a"),
            Err(DomError::UnsupportedSelector { .. })
        ));
        assert!(matches!(
            Selector::parse("a[href]"),
            Err(DomError::UnsupportedSelector { .. })
        ));
        assert!(matches!(
            Selector::parse("a:hover"),
            Err(DomError::UnsupportedSelector { .. })
        ));
        assert!(matches!(
            Selector::parse("#a#b"),
            Err(DomError::UnsupportedSelector { .. })
        ));
    }
}
