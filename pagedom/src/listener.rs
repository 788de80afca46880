//! Additive click listener registration.
//!
//! Any number of listeners may be attached to the same target; adding one
//! never replaces another. Each registration gets a unique [`ListenerId`]
//! that removes exactly that listener.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::element::Element;
use crate::event::ClickEvent;

static NEXT_LISTENER: AtomicU64 = AtomicU64::new(1);

/// Handle for one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// What a listener is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The page as a whole. Sees every click after the bubble walk.
    Document,
    /// A single element, by ID.
    Element(String),
}

impl ListenerTarget {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }
}

impl fmt::Display for ListenerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Element(id) => write!(f, "#{id}"),
        }
    }
}

/// Result of running a listener. An error is reported as a fault of that
/// listener only; dispatch carries on.
pub type ListenerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A click listener. Receives the page root and the click.
pub type Listener = Arc<dyn Fn(&mut Element, &mut ClickEvent) -> ListenerResult + Send + Sync>;

#[derive(Default, Clone)]
pub(crate) struct ListenerStore {
    map: HashMap<ListenerTarget, Vec<(ListenerId, Listener)>>,
}

impl fmt::Debug for ListenerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&ListenerTarget, usize> =
            self.map.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("ListenerStore").field("listeners", &counts).finish()
    }
}

impl ListenerStore {
    pub(crate) fn add(&mut self, target: ListenerTarget, listener: Listener) -> ListenerId {
        let id = ListenerId::next();
        self.map.entry(target).or_default().push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let mut emptied = None;
        let mut removed = false;

        for (target, listeners) in self.map.iter_mut() {
            if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
                listeners.remove(pos);
                removed = true;
                if listeners.is_empty() {
                    emptied = Some(target.clone());
                }
                break;
            }
        }

        if let Some(target) = emptied {
            self.map.remove(&target);
        }
        removed
    }

    /// Snapshot of the listeners on a target, in registration order.
    pub(crate) fn get(&self, target: &ListenerTarget) -> Vec<(ListenerId, Listener)> {
        self.map.get(target).cloned().unwrap_or_default()
    }

    pub(crate) fn count(&self, target: &ListenerTarget) -> usize {
        self.map.get(target).map_or(0, Vec::len)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}
