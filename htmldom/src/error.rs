use thiserror::Error;

use crate::event::HandlerError;

/// Errors raised by the document surface.
#[derive(Debug, Error)]
pub enum DomError {
    /// No element in the tree matches the given id or selector.
    #[error("no element matches `{0}`")]
    NoSuchElement(String),

    /// A click listener reported a failure.
    #[error("click handler for `{target}` failed")]
    Handler {
        target: String,
        #[source]
        source: HandlerError,
    },
}
