//! The seam between row storage and the sort pass
//!
//! Anything that can surface the text of its marker-classed cells can be
//! sorted; rows parsed out of a report and plain [`RowValues`] both qualify.

use vexil_model::{ColumnMarker, RowValues};

/// A table row exposing the text of its marker-classed cells.
///
/// Returning `None` means the row carries no cell with that marker class.
/// The sort pass treats that as a data-integrity failure when the active
/// mode reads the column.
pub trait SortableRow {
    /// The text of the cell carrying `marker`, if the row has one.
    fn cell_text(&self, marker: ColumnMarker) -> Option<&str>;
}

impl SortableRow for RowValues {
    fn cell_text(&self, marker: ColumnMarker) -> Option<&str> {
        Some(self.column_text(marker))
    }
}
