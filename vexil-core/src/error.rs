use thiserror::Error;

use vexil_model::ModelError;

/// Errors raised while locating, validating, or rewriting a report table.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no table with id {table_id:?} in the report")]
    TableNotFound {
        /// The id attribute the locator searched for.
        table_id: String,
    },

    #[error("table {table_id:?} has no tbody section")]
    BodyNotFound {
        /// The id attribute of the table that was found.
        table_id: String,
    },

    #[error("malformed report markup: {0}")]
    InvalidReport(String),

    #[error("row {row} cannot be sorted: {source}")]
    RowIntegrity {
        /// Zero-based position of the row in the table body.
        row: usize,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
