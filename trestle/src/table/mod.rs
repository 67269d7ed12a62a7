//! The table controller: header schema, row dataset, sort selection.

mod events;
mod render;

use std::sync::{Arc, PoisonError, RwLock};

use htmldom::{find_element, find_element_mut, Document, Element};

use crate::column::{Column, SortDirection};
use crate::error::TableError;
use crate::row::Row;
use crate::sort;

/// Internal state for a table controller.
#[derive(Debug, Default)]
struct TableInner {
    /// Column definitions, in header order.
    columns: Vec<Column>,
    /// Column ids derived from the header, in header order.
    column_ids: Vec<String>,
    /// Canonical dataset; sorting reorders it in place. Display order is
    /// this order, and the pre-sort order is not recoverable.
    rows: Vec<Row>,
    /// Column id currently driving sort order.
    selected_column: Option<String>,
}

/// Renders header and body markup for a structured dataset into a
/// pre-existing container element, and re-sorts the dataset in place when
/// a sortable column header is clicked.
///
/// The controller is a cheap-clone handle; clones share state, which is
/// how the click handlers it installs reach back into it.
#[derive(Debug, Clone)]
pub struct TableController {
    doc: Document,
    selector: String,
    inner: Arc<RwLock<TableInner>>,
}

impl TableController {
    /// Attach to the container matched by `selector`.
    ///
    /// The component never creates its own container; if the selector
    /// matches nothing, construction fails.
    pub fn attach(doc: &Document, selector: impl Into<String>) -> Result<Self, TableError> {
        let selector = selector.into();
        if !doc.exists(&selector) {
            return Err(TableError::ContainerNotFound(selector));
        }
        log::debug!("[table] attached to {selector}");
        Ok(Self {
            doc: doc.clone(),
            selector,
            inner: Arc::new(RwLock::new(TableInner::default())),
        })
    }

    /// Store the header schema and render the `<thead>`.
    ///
    /// An empty list is a no-op. Otherwise the previous header -- stored
    /// schema, rendered `<thead>` and click listeners -- is replaced
    /// wholesale.
    pub fn set_header(&self, columns: Vec<Column>) -> Result<(), TableError> {
        if columns.is_empty() {
            log::debug!("[table] ignoring empty header");
            return Ok(());
        }

        let thead = render::header(&columns);
        self.replace_section("thead", thead)?;

        let old_ids = self
            .inner
            .read()
            .map(|inner| inner.column_ids.clone())
            .unwrap_or_default();
        self.install_header_listeners(&old_ids, &columns);

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.column_ids = columns.iter().map(|col| col.id.clone()).collect();
        log::debug!("[table] header set: {} columns", columns.len());
        inner.columns = columns;
        Ok(())
    }

    /// Store the dataset and render the `<tbody>`.
    ///
    /// An empty list is a no-op. Freshly set data renders in the given
    /// order -- it is not auto-sorted, even when a sort selection exists.
    pub fn set_data(&self, rows: Vec<Row>) -> Result<(), TableError> {
        if rows.is_empty() {
            log::debug!("[table] ignoring empty dataset");
            return Ok(());
        }

        let column_ids = self
            .inner
            .read()
            .map(|inner| inner.column_ids.clone())
            .unwrap_or_default();
        let tbody = render::body(&column_ids, &rows)?;
        self.replace_section("tbody", tbody)?;

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        log::debug!("[table] dataset set: {} rows", rows.len());
        inner.rows = rows;
        Ok(())
    }

    /// The dataset in its currently rendered order (post most-recent sort,
    /// or as last set).
    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|inner| inner.rows.clone())
            .unwrap_or_default()
    }

    /// The header schema, including last-applied sort directions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|inner| inner.columns.clone())
            .unwrap_or_default()
    }

    /// The column id currently driving sort order, if any.
    pub fn selected_column(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.selected_column.clone())
    }

    /// Sort by the given column and re-render the body.
    ///
    /// Activating the selected column again flips its direction; any other
    /// column starts fresh at ascending. Exactly one header cell carries a
    /// direction marker afterwards.
    pub fn sort(&self, column_id: &str) -> Result<(), TableError> {
        let cell_found = self
            .doc
            .with_selected(&self.selector, |container| {
                find_element(container, column_id).is_some()
            })
            .ok_or_else(|| TableError::ContainerNotFound(self.selector.clone()))?;
        if !cell_found {
            return Err(TableError::HeaderCellNotFound(column_id.to_string()));
        }

        let direction = self.advance_direction(column_id)?;

        self.doc
            .update_selected(&self.selector, |container| {
                render::clear_sort_markers(container);
                if let Some(cell) = find_element_mut(container, column_id) {
                    cell.add_class(direction.class_marker());
                }
            })
            .ok_or_else(|| TableError::ContainerNotFound(self.selector.clone()))?;

        let (column_ids, rows) = {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            sort::sort_rows(&mut inner.rows, column_id, direction);
            (inner.column_ids.clone(), inner.rows.clone())
        };

        let tbody = render::body(&column_ids, &rows)?;
        self.replace_section("tbody", tbody)?;
        log::debug!("[table] sorted by {column_id} {direction:?}");
        Ok(())
    }

    /// Step the direction state machine for an activation of `column_id`.
    fn advance_direction(&self, column_id: &str) -> Result<SortDirection, TableError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let position = inner
            .columns
            .iter()
            .position(|col| col.id == column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))?;

        let same_column = inner.selected_column.as_deref() == Some(column_id);
        let column = &mut inner.columns[position];
        let direction = if same_column {
            SortDirection::flipped(column.sort_direction)
        } else {
            SortDirection::Ascending
        };
        column.sort_direction = Some(direction);
        inner.selected_column = Some(column_id.to_string());
        Ok(direction)
    }

    /// Replace the container's section with the given tag by a fresh one.
    /// The header always stays ahead of the body.
    fn replace_section(&self, tag: &str, section: Element) -> Result<(), TableError> {
        self.doc
            .update_selected(&self.selector, |container| {
                let children = container.child_nodes_mut();
                children.retain(|child| child.tag != tag);
                if tag == "thead" {
                    children.insert(0, section);
                } else {
                    children.push(section);
                }
            })
            .ok_or_else(|| TableError::ContainerNotFound(self.selector.clone()))
    }
}
