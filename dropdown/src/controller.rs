//! Toggle and dismiss behavior, and wiring families into a document.

use log::{debug, warn};
use pagedom::{
    closest, find_element, find_element_mut, for_each_matching_mut, query_selector_all,
    validate_class_token, ClickEvent, Document, Element, ListenerId, Selector,
};

use crate::config::DropdownConfig;
use crate::error::DropdownError;
use crate::family::{DropdownFamily, TriggerMatch};
use crate::state::PanelState;

// =============================================================================
// Operations
// =============================================================================

/// Flip the visibility class on the panel with the given ID.
pub fn toggle(
    root: &mut Element,
    panel_id: &str,
    visibility_class: &str,
) -> Result<PanelState, DropdownError> {
    validate_class_token(visibility_class)?;
    let panel = find_element_mut(root, panel_id).ok_or_else(|| DropdownError::PanelNotFound {
        id: panel_id.to_string(),
    })?;
    Ok(PanelState::from_class_present(
        panel.toggle_class(visibility_class),
    ))
}

/// Whether the click came from a trigger of the family.
pub fn is_trigger_click(
    root: &Element,
    event: &ClickEvent,
    trigger: &Selector,
    trigger_match: TriggerMatch,
) -> bool {
    match trigger_match {
        TriggerMatch::Target => {
            find_element(root, event.target()).is_some_and(|el| trigger.matches(el))
        }
        TriggerMatch::SelfOrAncestor => closest(root, event.target(), trigger).is_some(),
    }
}

/// Remove the visibility class from every open panel matching `panels`.
/// Returns how many panels were closed.
pub fn close_open_panels(
    root: &mut Element,
    panels: &Selector,
    visibility_class: &str,
) -> Result<usize, DropdownError> {
    validate_class_token(visibility_class)?;
    let mut closed = 0;
    for_each_matching_mut(root, panels, |panel| {
        if panel.remove_class(visibility_class) {
            closed += 1;
        }
    });
    Ok(closed)
}

/// Close the family's open panels unless the click target is a trigger.
/// Returns how many panels were closed.
pub fn dismiss_others(
    root: &mut Element,
    event: &ClickEvent,
    trigger: &Selector,
    panels: &Selector,
    visibility_class: &str,
) -> Result<usize, DropdownError> {
    dismiss_others_matching(
        root,
        event,
        trigger,
        TriggerMatch::Target,
        panels,
        visibility_class,
    )
}

/// [`dismiss_others`] with a choice of how the target is tested against the trigger.
pub fn dismiss_others_matching(
    root: &mut Element,
    event: &ClickEvent,
    trigger: &Selector,
    trigger_match: TriggerMatch,
    panels: &Selector,
    visibility_class: &str,
) -> Result<usize, DropdownError> {
    if is_trigger_click(root, event, trigger, trigger_match) {
        return Ok(0);
    }
    close_open_panels(root, panels, visibility_class)
}

// =============================================================================
// Installation
// =============================================================================

/// Listeners registered for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyHandle {
    pub family: String,
    /// One per trigger element found at install time.
    pub toggle_listeners: Vec<ListenerId>,
    pub dismiss_listener: ListenerId,
}

/// Register a family's listeners on the document.
///
/// Every element matching the trigger selector at install time gets a click
/// listener toggling the panel, and the document gets one listener closing
/// the family's open panels on outside clicks. Listeners are added alongside
/// whatever is already registered.
pub fn install(
    document: &mut Document,
    family: &DropdownFamily,
) -> Result<FamilyHandle, DropdownError> {
    let selectors = family.validate()?;

    let trigger_ids: Vec<String> = query_selector_all(document.root(), &selectors.trigger)
        .into_iter()
        .map(|el| el.id.clone())
        .collect();

    if trigger_ids.is_empty() {
        warn!(
            "[{}] no element matches trigger {}",
            family.name, selectors.trigger
        );
    }
    if document.get_element_by_id(&family.panel_id).is_none() {
        warn!("[{}] panel #{} is not in the page", family.name, family.panel_id);
    }

    let mut toggle_listeners = Vec::with_capacity(trigger_ids.len());
    for trigger_id in trigger_ids {
        let name = family.name.clone();
        let panel_id = family.panel_id.clone();
        let class = family.visibility_class.clone();
        let id = document.on_click(trigger_id, move |root, _event| {
            let state = toggle(root, &panel_id, &class)?;
            debug!("[{name}] #{panel_id} is now {state}");
            Ok(())
        });
        toggle_listeners.push(id);
    }

    let name = family.name.clone();
    let class = family.visibility_class.clone();
    let trigger_match = family.trigger_match;
    let trigger = selectors.trigger;
    let panels = selectors.panels;
    let dismiss_listener = document.on_document_click(move |root, event| {
        let closed =
            dismiss_others_matching(root, event, &trigger, trigger_match, &panels, &class)?;
        if closed > 0 {
            debug!(
                "[{name}] closed {closed} panel(s) on click outside, target #{}",
                event.target()
            );
        }
        Ok(())
    });

    debug!(
        "[{}] installed with {} trigger(s)",
        family.name,
        toggle_listeners.len()
    );

    Ok(FamilyHandle {
        family: family.name.clone(),
        toggle_listeners,
        dismiss_listener,
    })
}

/// Install every family of a config, after validating it as a whole.
pub fn install_all(
    document: &mut Document,
    config: &DropdownConfig,
) -> Result<Vec<FamilyHandle>, DropdownError> {
    config.validate()?;
    config
        .families
        .iter()
        .map(|family| install(document, family))
        .collect()
}

/// Remove a family's listeners. Returns how many were removed.
pub fn uninstall(document: &mut Document, handle: &FamilyHandle) -> usize {
    let mut removed = 0;
    for id in handle
        .toggle_listeners
        .iter()
        .chain(std::iter::once(&handle.dismiss_listener))
    {
        if document.remove_event_listener(*id) {
            removed += 1;
        }
    }
    debug!("[{}] uninstalled {removed} listener(s)", handle.family);
    removed
}
