pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod listener;
pub mod selector;

pub use document::{DispatchOutcome, Document, ListenerFault};
pub use element::{
    ancestors_of, find_element, find_element_mut, validate_class_token, Content, Element,
};
pub use error::DomError;
pub use event::{ClickEvent, Phase};
pub use listener::{Listener, ListenerId, ListenerResult, ListenerTarget};
pub use selector::{
    closest, for_each_matching_mut, matches, query_selector, query_selector_all, Selector,
};
