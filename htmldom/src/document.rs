//! Shared document handle: one element tree plus the listeners attached to it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::element::{find_by, find_by_mut, find_element, Element};
use crate::error::DomError;
use crate::event::{ClickEvent, ClickHandler, HandlerError};
use crate::render::to_html;

/// Simple selector: `#id`, `.class`, or a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    pub fn parse(input: &str) -> Self {
        if let Some(id) = input.strip_prefix('#') {
            Self::Id(id.to_string())
        } else if let Some(class) = input.strip_prefix('.') {
            Self::Class(class.to_string())
        } else {
            Self::Tag(input.to_string())
        }
    }

    pub fn matches(&self, el: &Element) -> bool {
        match self {
            Self::Id(id) => el.id == *id,
            Self::Class(class) => el.has_class(class),
            Self::Tag(tag) => el.tag == *tag,
        }
    }
}

/// A document holding an element tree and a click-listener registry.
///
/// Cloning is cheap; clones share the same tree and listeners, so a widget
/// can keep one handle while the handlers it registers keep another.
#[derive(Clone)]
pub struct Document {
    tree: Arc<RwLock<Element>>,
    listeners: Arc<RwLock<HashMap<String, ClickHandler>>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty `<body>` root.
    pub fn new() -> Self {
        Self::with_root(Element::new("body"))
    }

    /// Create a document around an existing element tree.
    pub fn with_root(root: Element) -> Self {
        Self {
            tree: Arc::new(RwLock::new(root)),
            listeners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Read the tree through a closure.
    pub fn read<R>(&self, f: impl FnOnce(&Element) -> R) -> Option<R> {
        self.tree.read().ok().map(|root| f(&root))
    }

    /// Mutate the tree through a closure.
    pub fn update<R>(&self, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        self.tree.write().ok().map(|mut root| f(&mut root))
    }

    /// Whether any element matches the selector.
    pub fn exists(&self, selector: &str) -> bool {
        let selector = Selector::parse(selector);
        self.read(|root| find_by(root, &|el| selector.matches(el)).is_some())
            .unwrap_or(false)
    }

    /// Read the first element matching the selector, in document order.
    pub fn with_selected<R>(&self, selector: &str, f: impl FnOnce(&Element) -> R) -> Option<R> {
        let selector = Selector::parse(selector);
        self.read(|root| find_by(root, &|el| selector.matches(el)).map(f))
            .flatten()
    }

    /// Mutate the first element matching the selector, in document order.
    pub fn update_selected<R>(
        &self,
        selector: &str,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Option<R> {
        let selector = Selector::parse(selector);
        self.update(|root| find_by_mut(root, &|el| selector.matches(el)).map(f))
            .flatten()
    }

    /// Serialize the whole tree to HTML.
    pub fn html(&self) -> String {
        self.read(to_html).unwrap_or_default()
    }

    /// Register a click listener for an element id.
    ///
    /// Any listener already registered for that id is replaced, so repeated
    /// installation never accumulates handlers.
    pub fn add_click_listener(
        &self,
        id: impl Into<String>,
        handler: impl Fn(&ClickEvent) -> Result<(), HandlerError> + Send + Sync + 'static,
    ) {
        let id = id.into();
        if let Ok(mut listeners) = self.listeners.write() {
            log::trace!("[document] installing click listener on {id}");
            listeners.insert(id, Arc::new(handler));
        }
    }

    /// Remove the click listener for an element id, if any.
    pub fn remove_click_listener(&self, id: &str) -> bool {
        self.listeners
            .write()
            .map(|mut listeners| listeners.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Dispatch a synthetic click to the element with the given id.
    ///
    /// Fails if no such element exists. An element without a listener
    /// swallows the click; a listener error propagates to the caller.
    pub fn click(&self, id: &str) -> Result<(), DomError> {
        let dataset = self
            .read(|root| find_element(root, id).map(|el| el.data.clone()))
            .flatten()
            .ok_or_else(|| DomError::NoSuchElement(format!("#{id}")))?;

        // Clone the handler out of the registry so no lock is held while it
        // runs; the handler may mutate the tree or the registry itself.
        let handler = self
            .listeners
            .read()
            .ok()
            .and_then(|listeners| listeners.get(id).cloned());

        let Some(handler) = handler else {
            log::trace!("[document] click on {id}: no listener");
            return Ok(());
        };

        log::debug!("[document] dispatching click to {id}");
        let event = ClickEvent {
            target: id.to_string(),
            dataset,
        };
        handler(&event).map_err(|source| DomError::Handler {
            target: id.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self
            .listeners
            .read()
            .map(|listeners| listeners.len())
            .unwrap_or(0);
        f.debug_struct("Document")
            .field("tree", &self.tree)
            .field("listeners", &listeners)
            .finish()
    }
}
