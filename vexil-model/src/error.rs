use std::fmt::{self, Display};

use crate::columns::ColumnMarker;

/// Errors produced when a row fails validation for a sort pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A row does not carry a cell with the marker class the active
    /// sort mode reads.
    MissingColumn(ColumnMarker),
    /// A priority cell holds text that does not parse as an integer, in a
    /// mode that needs the numeric value.
    InvalidPriority(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingColumn(marker) => {
                write!(f, "row has no {marker} cell")
            }
            ModelError::InvalidPriority(text) => {
                write!(f, "priority text {text:?} is not an integer")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
