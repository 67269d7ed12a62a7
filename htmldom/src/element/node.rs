use std::collections::HashMap;

use super::Content;

/// A single element in the document tree.
///
/// Elements are built with chained builder methods and mutated in place
/// once mounted in a [`Document`](crate::Document):
///
/// ```
/// use htmldom::Element;
///
/// let cell = Element::th()
///     .id("age")
///     .data("id", "age")
///     .flag("sortable")
///     .text("Age");
/// assert_eq!(cell.to_string(), r#"<th id="age" sortable data-id="age">Age</th>"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub tag: String,
    /// Element id; empty means unset (not serialized).
    pub id: String,

    // Attributes
    pub classes: Vec<String>,
    /// Plain attributes in insertion order. An empty value serializes as a
    /// bare boolean attribute.
    pub attrs: Vec<(String, String)>,
    /// `data-*` entries, keyed without the `data-` prefix.
    pub data: HashMap<String, String>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".into(),
            id: String::new(),
            classes: Vec::new(),
            attrs: Vec::new(),
            data: HashMap::new(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn th() -> Self {
        Self::new("th")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a boolean attribute (serialized as a bare name).
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.push((name.into(), String::new()));
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Set raw markup content, injected verbatim on serialization.
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Markup(markup.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors
    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Child elements; empty when the content is not `Children`.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable child list. Replaces non-children content with an empty list.
    pub fn child_nodes_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!(),
        }
    }

    // Mutators
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn append_child(&mut self, child: Element) {
        self.child_nodes_mut().push(child);
    }
}
