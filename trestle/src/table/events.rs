//! Click wiring for sortable header cells.

use htmldom::ClickEvent;

use super::TableController;
use crate::column::Column;
use crate::error::TableError;

impl TableController {
    /// Remove the previous header's listeners, then install one click
    /// listener per sortable header cell.
    ///
    /// Installation goes through the replacing registry, so repeated
    /// `set_header` calls never stack handlers.
    pub(super) fn install_header_listeners(&self, old_ids: &[String], columns: &[Column]) {
        for id in old_ids {
            self.doc.remove_click_listener(id);
        }
        for column in columns.iter().filter(|col| col.sortable) {
            let controller = self.clone();
            self.doc
                .add_click_listener(column.id.clone(), move |event: &ClickEvent| {
                    controller.on_header_click(event).map_err(Into::into)
                });
        }
    }

    /// A click arrived on a sortable header cell.
    fn on_header_click(&self, event: &ClickEvent) -> Result<(), TableError> {
        let column_id = event
            .data("id")
            .ok_or_else(|| TableError::MissingSortKey(event.target.clone()))?;
        log::trace!("[table] header click on {column_id}");
        self.sort(column_id)
    }
}
