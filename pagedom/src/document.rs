//! The page: an element tree plus its click listeners.

use std::sync::Arc;

use log::{debug, warn};

use crate::element::{ancestors_of, find_element, find_element_mut, Element};
use crate::error::DomError;
use crate::event::{ClickEvent, Phase};
use crate::listener::{Listener, ListenerId, ListenerResult, ListenerStore, ListenerTarget};
use crate::selector::{query_selector, Selector};

/// A listener that returned an error during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFault {
    pub listener: ListenerId,
    pub current_target: ListenerTarget,
    pub message: String,
}

/// What happened while dispatching one click.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// The event after dispatch (phase and propagation flags as left by listeners).
    pub event: ClickEvent,
    /// Number of listeners invoked, faulted ones included.
    pub listeners_run: usize,
    pub faults: Vec<ListenerFault>,
}

impl DispatchOutcome {
    /// True if every listener ran without error.
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// An element tree with click listeners attached to elements or to the page.
#[derive(Debug, Default)]
pub struct Document {
    root: Element,
    listeners: ListenerStore,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            listeners: ListenerStore::default(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    // =========================================================================
    // Listener registration
    // =========================================================================

    /// Attach a listener. Existing listeners on the same target are kept.
    pub fn add_event_listener<F>(&mut self, target: ListenerTarget, listener: F) -> ListenerId
    where
        F: Fn(&mut Element, &mut ClickEvent) -> ListenerResult + Send + Sync + 'static,
    {
        self.add_listener(target, Arc::new(listener))
    }

    /// Attach an already shared listener.
    pub fn add_listener(&mut self, target: ListenerTarget, listener: Listener) -> ListenerId {
        let id = self.listeners.add(target.clone(), listener);
        debug!("added {id} on {target}");
        id
    }

    /// Attach a listener to the element with the given ID.
    pub fn on_click<F>(&mut self, element_id: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&mut Element, &mut ClickEvent) -> ListenerResult + Send + Sync + 'static,
    {
        self.add_event_listener(ListenerTarget::Element(element_id.into()), listener)
    }

    /// Attach a page-wide listener that sees every click.
    pub fn on_document_click<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&mut Element, &mut ClickEvent) -> ListenerResult + Send + Sync + 'static,
    {
        self.add_event_listener(ListenerTarget::Document, listener)
    }

    /// Detach one listener. Returns false if it was not registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        if removed {
            debug!("removed {id}");
        }
        removed
    }

    pub fn listener_count(&self, target: &ListenerTarget) -> usize {
        self.listeners.count(target)
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Click the element with the given ID.
    ///
    /// Listeners run on the element, then on each ancestor up to the root,
    /// then on the document. A listener error is recorded as a fault and
    /// does not stop the remaining listeners.
    pub fn click(&mut self, target_id: &str) -> Result<DispatchOutcome, DomError> {
        let mut path = ancestors_of(&self.root, target_id).ok_or_else(|| {
            DomError::ElementNotFound {
                id: target_id.to_string(),
            }
        })?;
        path.reverse();

        let mut walk = Vec::with_capacity(path.len() + 1);
        for (depth, id) in path.into_iter().enumerate() {
            let phase = if depth == 0 { Phase::Target } else { Phase::Bubble };
            walk.push((ListenerTarget::Element(id), phase));
        }
        walk.push((ListenerTarget::Document, Phase::Document));

        let mut event = ClickEvent::new(target_id);
        let mut listeners_run = 0;
        let mut faults = Vec::new();

        debug!("click on #{target_id}");

        for (target, phase) in walk {
            let listeners = self.listeners.get(&target);
            if listeners.is_empty() {
                continue;
            }

            event.enter(target.clone(), phase);
            for (id, listener) in listeners {
                listeners_run += 1;
                if let Err(e) = listener(&mut self.root, &mut event) {
                    warn!("{id} on {target} failed for click on #{target_id}: {e}");
                    faults.push(ListenerFault {
                        listener: id,
                        current_target: target.clone(),
                        message: e.to_string(),
                    });
                }
            }

            if event.is_propagation_stopped() {
                debug!("propagation stopped at {target}");
                break;
            }
        }

        Ok(DispatchOutcome {
            event,
            listeners_run,
            faults,
        })
    }

    /// Click the first element (in document order) matching the selector.
    pub fn click_selector(&mut self, selector: &str) -> Result<DispatchOutcome, DomError> {
        let parsed = Selector::parse(selector)?;
        let target = query_selector(&self.root, &parsed)
            .map(|el| el.id.clone())
            .ok_or_else(|| DomError::NoMatch {
                selector: selector.to_string(),
            })?;
        self.click(&target)
    }
}
