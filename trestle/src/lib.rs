//! Sortable HTML table rendering.
//!
//! `trestle` renders header and body markup for a structured dataset into a
//! pre-existing container element of an [`htmldom::Document`], and re-sorts
//! the dataset in place when a sortable column header is clicked.
//!
//! # Example
//!
//! ```
//! use htmldom::{Document, Element};
//! use trestle::{Column, Row, TableController};
//!
//! let doc = Document::with_root(Element::new("body").child(Element::table().id("people")));
//! let table = TableController::attach(&doc, "#people").unwrap();
//!
//! table.set_header(vec![
//!     Column::new("name", "Name").sortable(true),
//!     Column::new("age", "Age").sortable(true),
//! ]).unwrap();
//! table.set_data(vec![
//!     Row::new().cell("name", "Bob").cell("age", "30"),
//!     Row::new().cell("name", "Ann").cell("age", "5"),
//! ]).unwrap();
//!
//! // A click on the "age" header sorts ascending; a second click flips.
//! doc.click("age").unwrap();
//! assert_eq!(table.rows()[0].value("name"), Some("Ann"));
//! ```

pub mod column;
pub mod error;
pub mod row;
mod sort;
pub mod table;

pub use column::{Column, SortDirection};
pub use error::TableError;
pub use row::{Cell, CellRenderer, Row};
pub use table::TableController;
