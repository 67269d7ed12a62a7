//! Click events and listener plumbing.

use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// Error type a click listener may surface through dispatch.
pub type HandlerError = Box<dyn Error + Send + Sync>;

/// A click listener, registered per element id.
pub type ClickHandler = Arc<dyn Fn(&ClickEvent) -> Result<(), HandlerError> + Send + Sync>;

/// A click delivered to a registered listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element id of the click target.
    pub target: String,
    /// Snapshot of the target's `data-*` entries at dispatch time.
    pub dataset: HashMap<String, String>,
}

impl ClickEvent {
    /// Look up a `data-*` entry on the target.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }
}
