//! Report document handling
//!
//! This module provides:
//! - A forward-only tag scanner that survives generated markup ([`scanner`])
//! - Table location, row splitting, and byte-preserving serialization
//!   ([`document`])

pub mod document;
pub mod scanner;

pub use document::*;
pub use scanner::*;
