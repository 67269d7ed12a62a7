use thiserror::Error;

/// Errors raised by the table component.
///
/// Every variant is fatal to the operation that raised it; there is no
/// retry or degraded mode. Callers avoid these by correct sequencing
/// (header before data, data before sort).
#[derive(Debug, Error)]
pub enum TableError {
    /// The configured container selector matched nothing.
    #[error("container `{0}` not found in document")]
    ContainerNotFound(String),

    /// Sort was requested for a column id that is not part of the header.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// The rendered header has no cell for the column.
    #[error("header cell for column `{0}` not found")]
    HeaderCellNotFound(String),

    /// A sort click arrived from an element without a `data-id` entry.
    #[error("sort target `{0}` carries no data-id")]
    MissingSortKey(String),

    /// A row lacks a cell for a declared column id.
    #[error("row {row} has no cell for column `{column}`")]
    MissingCell { row: usize, column: String },
}
