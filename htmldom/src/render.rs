//! HTML serialization of the element tree.

use std::fmt::{self, Write};

use crate::element::{Content, Element};
use crate::escape::{escape_attr, escape_text};

/// Tags that never carry content and serialize self-contained.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize an element (and its subtree) to compact HTML.
pub fn to_html(el: &Element) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_html(el, &mut out);
    out
}

/// Write an element (and its subtree) as compact HTML.
///
/// Attribute order is deterministic: `id`, `class`, plain attributes in
/// insertion order, then `data-*` entries sorted by key. Empty-valued
/// attributes are written as bare boolean attributes.
pub fn write_html(el: &Element, out: &mut impl Write) -> fmt::Result {
    write!(out, "<{}", el.tag)?;

    if !el.id.is_empty() {
        write!(out, " id=\"{}\"", escape_attr(&el.id))?;
    }

    if !el.classes.is_empty() {
        write!(out, " class=\"{}\"", escape_attr(&el.classes.join(" ")))?;
    }

    for (name, value) in &el.attrs {
        if value.is_empty() {
            write!(out, " {name}")?;
        } else {
            write!(out, " {}=\"{}\"", name, escape_attr(value))?;
        }
    }

    let mut data_keys: Vec<&String> = el.data.keys().collect();
    data_keys.sort();
    for key in data_keys {
        write!(out, " data-{}=\"{}\"", key, escape_attr(&el.data[key]))?;
    }

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return write!(out, "/>");
    }

    write!(out, ">")?;

    match &el.content {
        Content::None => {}
        Content::Text(text) => write!(out, "{}", escape_text(text))?,
        Content::Markup(markup) => write!(out, "{markup}")?,
        Content::Children(children) => {
            for child in children {
                write_html(child, out)?;
            }
        }
    }

    write!(out, "</{}>", el.tag)
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_html(self, f)
    }
}
