#[derive(Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Plain text, escaped on serialization.
    Text(String),
    /// Raw markup, written verbatim on serialization.
    Markup(String),
    Children(Vec<super::Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Markup(s) => write!(f, "Markup({s:?})"),
            Self::Children(c) => write!(f, "Children({} nodes)", c.len()),
        }
    }
}
