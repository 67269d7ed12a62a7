use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps a cell's raw value to markup injected verbatim into the cell.
///
/// The output is trusted and is not escaped; callers must not wrap
/// untrusted input.
pub type CellRenderer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A single table cell: a raw value plus an optional markup renderer.
#[derive(Clone, Default)]
pub struct Cell {
    value: String,
    renderer: Option<CellRenderer>,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            renderer: None,
        }
    }

    /// Attach a markup renderer.
    pub fn renderer(mut self, renderer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// The raw string value; sorting always compares this, not the markup.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renderer output for this cell, if a renderer is attached.
    pub(crate) fn rendered(&self) -> Option<String> {
        self.renderer.as_ref().map(|render| render(&self.value))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.value)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// One data record, keyed by column id.
///
/// A row must carry a cell for every column id the header declares;
/// rendering a row with a missing cell is a contract violation surfaced
/// as [`TableError::MissingCell`](crate::error::TableError::MissingCell).
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the cell for a column id.
    pub fn cell(mut self, column_id: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.cells.insert(column_id.into(), cell.into());
        self
    }

    pub fn insert(&mut self, column_id: impl Into<String>, cell: impl Into<Cell>) {
        self.cells.insert(column_id.into(), cell.into());
    }

    pub fn get(&self, column_id: &str) -> Option<&Cell> {
        self.cells.get(column_id)
    }

    /// The raw value for a column, if the row carries that cell.
    pub fn value(&self, column_id: &str) -> Option<&str> {
        self.cells.get(column_id).map(Cell::value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
