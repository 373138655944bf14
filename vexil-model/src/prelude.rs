//! One-stop import surface for consumers of the model.
//! Prefer importing from this module instead of individual submodules when
//! working in vexil-core or the CLI.

pub use super::columns::ColumnMarker;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::priority::Priority;
pub use super::row::RowValues;
pub use super::sort::{SortDirection, SortMode};
