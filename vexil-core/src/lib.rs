//! # Vexil Core
//!
//! Core library for the vexil violations-report tooling. It parses the
//! violations table out of a generated HTML report and reorders the table's
//! rows by one of four column-derived sort modes, leaving every other byte of
//! the document untouched.
//!
//! ## Overview
//!
//! `vexil-core` offers:
//!
//! - **Report parsing**: a small quote-aware tag scanner that locates the
//!   violations table and splits its body into row fragments
//! - **Sorting**: stable, fail-fast reordering by priority text, rule
//!   frequency, rule name, or a per-file composite key
//! - **Byte fidelity**: serializing an unsorted document reproduces the
//!   input exactly; sorting permutes row fragments verbatim
//!
//! ## Architecture
//!
//! The crate is organized into a few key modules:
//!
//! - [`report`]: locating the table, extracting rows, re-emitting HTML
//! - [`sorting`]: sort keys, per-pass counting context, and the sort pass
//! - [`error`]: the [`ReportError`] type shared by both layers
//!
//! ## Examples
//!
//! ```no_run
//! use vexil_core::{ReportDocument, TableLocator};
//! use vexil_model::SortMode;
//!
//! fn reorder(html: &str) -> Result<String, vexil_core::ReportError> {
//!     let mut doc = ReportDocument::parse(html, &TableLocator::default())?;
//!     doc.sort(SortMode::RuleFrequency)?;
//!     Ok(doc.to_html())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Error types shared by the report and sorting layers
pub mod error;

/// Report document parsing and serialization
pub mod report;

/// Row ordering by column-derived sort keys
pub mod sorting;

pub use error::{ReportError, Result};
pub use report::{DEFAULT_TABLE_ID, ReportDocument, ReportRow, TableLocator};
pub use sorting::{SortableRow, sort_rows};
