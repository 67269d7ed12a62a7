use serde::{Deserialize, Serialize};

/// Direction a column is ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Class marker communicated to external styling.
    pub fn class_marker(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// The direction a repeated activation of the same column switches to.
    ///
    /// Unset flips to ascending, same as descending.
    pub fn flipped(current: Option<SortDirection>) -> SortDirection {
        match current {
            Some(Self::Ascending) => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// A table column definition.
///
/// Serializable so a header schema can be loaded from configuration; the
/// last-applied sort direction is runtime state and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique, stable key into row cells. Doubles as the header cell's
    /// element id and `data-id`.
    pub id: String,
    /// Header text displayed at the top.
    pub label: String,
    /// Whether clicking this header sorts the table.
    #[serde(default)]
    pub sortable: bool,
    /// Current or last-applied direction; `None` until first activation.
    #[serde(skip)]
    pub(crate) sort_direction: Option<SortDirection>,
}

impl Column {
    /// Create a new column with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sortable: false,
            sort_direction: None,
        }
    }

    /// Set whether this column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Current or last-applied sort direction.
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }
}
