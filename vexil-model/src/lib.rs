//! Core data model definitions shared across vexil crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod columns;
pub mod error;
pub mod prelude;
pub mod priority;
pub mod row;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use columns::ColumnMarker;
pub use error::{ModelError, Result as ModelResult};
pub use priority::Priority;
pub use row::RowValues;
pub use sort::{SortDirection, SortMode};
