use crate::listener::ListenerTarget;

/// Where a click currently is in its dispatch walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Listeners on the clicked element itself.
    Target,
    /// Listeners on an ancestor of the clicked element.
    Bubble,
    /// Document-level listeners, run last.
    Document,
}

/// A click, as seen by listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: String,
    current_target: ListenerTarget,
    phase: Phase,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            current_target: ListenerTarget::Element(target.clone()),
            target,
            phase: Phase::Target,
            propagation_stopped: false,
        }
    }

    /// ID of the element that was clicked.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The listener target currently being processed.
    pub fn current_target(&self) -> &ListenerTarget {
        &self.current_target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Stop the click from reaching listeners further along the walk.
    /// Remaining listeners on the current target still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn enter(&mut self, current_target: ListenerTarget, phase: Phase) {
        self.current_target = current_target;
        self.phase = phase;
    }
}
