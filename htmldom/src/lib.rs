pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod event;
pub mod render;

pub use document::{Document, Selector};
pub use element::{find_by, find_by_mut, find_element, find_element_mut, Content, Element};
pub use error::DomError;
pub use event::{ClickEvent, ClickHandler, HandlerError};
pub use render::to_html;
