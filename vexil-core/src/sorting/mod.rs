//! Row ordering for violations tables
//!
//! This module provides:
//! - The seam between row storage and the sort pass ([`SortableRow`])
//! - Per-pass occurrence counting ([`SortContext`])
//! - Sort key extraction and comparison ([`RowKey`])
//! - The stable, fail-fast sort pass ([`sort_rows`])

pub mod context;
pub mod keys;
pub mod pass;
pub mod traits;


pub use context::*;
pub use keys::*;
pub use pass::*;
pub use traits::*;
