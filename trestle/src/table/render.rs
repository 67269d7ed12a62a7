//! Header and body markup construction.

use htmldom::{Content, Element};

use crate::column::{Column, SortDirection};
use crate::error::TableError;
use crate::row::Row;

/// Build the `<thead>` for a header schema.
///
/// Each header cell carries the column id as element id and `data-id`, and
/// a bare `sortable` attribute when the column is interactive.
pub(super) fn header(columns: &[Column]) -> Element {
    let mut row = Element::tr();
    for column in columns {
        let mut cell = Element::th()
            .id(&column.id)
            .data("id", &column.id)
            .text(&column.label);
        if column.sortable {
            cell = cell.flag("sortable");
        }
        row = row.child(cell);
    }
    Element::thead().child(row)
}

/// Build the `<tbody>` for a dataset, rows in dataset order, cells in
/// header order.
///
/// A cell with a renderer contributes trusted markup; all other values are
/// inserted as escaped text.
pub(super) fn body(column_ids: &[String], rows: &[Row]) -> Result<Element, TableError> {
    let mut tbody = Element::tbody();
    for (index, row) in rows.iter().enumerate() {
        let mut tr = Element::tr();
        for column_id in column_ids {
            let cell = row.get(column_id).ok_or_else(|| TableError::MissingCell {
                row: index,
                column: column_id.clone(),
            })?;
            let td = match cell.rendered() {
                Some(markup) => Element::td().markup(markup),
                None => Element::td().text(cell.value()),
            };
            tr = tr.child(td);
        }
        tbody = tbody.child(tr);
    }
    Ok(tbody)
}

/// Strip both direction markers from every header cell in the subtree.
pub(super) fn clear_sort_markers(el: &mut Element) {
    if el.tag == "th" {
        el.remove_class(SortDirection::Ascending.class_marker());
        el.remove_class(SortDirection::Descending.class_marker());
    }
    if let Content::Children(children) = &mut el.content {
        for child in children {
            clear_sort_markers(child);
        }
    }
}
