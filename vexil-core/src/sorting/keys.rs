//! Sort key extraction and comparison
//!
//! Every mode reduces a row to one [`RowKey`] up front. Extraction is where
//! row validation happens: a missing cell or a non-numeric priority surfaces
//! here, before the pass has moved anything.

use std::cmp::Ordering;

use vexil_model::{ColumnMarker, ModelError, ModelResult, Priority, SortMode};

use super::context::SortContext;
use super::traits::SortableRow;

/// The comparison key extracted from one row for one pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowKey {
    /// Cell text compared lexicographically, byte by byte.
    Text(String),
    /// An occurrence tally compared numerically.
    Count(u32),
}

impl Ord for RowKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // A single pass only ever compares like variants; the cross arms
        // exist to keep the ordering total.
        match (self, other) {
            (RowKey::Text(a), RowKey::Text(b)) => a.cmp(b),
            (RowKey::Count(a), RowKey::Count(b)) => a.cmp(b),
            (RowKey::Text(_), RowKey::Count(_)) => Ordering::Less,
            (RowKey::Count(_), RowKey::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for RowKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RowKey {
    /// Build the key `mode` compares `row` by.
    ///
    /// Fails if the row lacks a cell the mode reads, or if file mode finds a
    /// priority cell whose text is not an integer.
    pub fn extract<R: SortableRow>(
        row: &R,
        mode: SortMode,
        ctx: &SortContext,
    ) -> ModelResult<RowKey> {
        match mode {
            SortMode::Priority => {
                let text = cell(row, ColumnMarker::Priority)?;
                Ok(RowKey::Text(text.to_string()))
            }
            SortMode::RuleFrequency => {
                let rule = cell(row, ColumnMarker::Rule)?;
                Ok(RowKey::Count(ctx.rule_count(rule)))
            }
            SortMode::RuleName => {
                let rule = cell(row, ColumnMarker::Rule)?;
                Ok(RowKey::Text(rule.to_string()))
            }
            SortMode::File => {
                let path = cell(row, ColumnMarker::Path)?;
                let text = cell(row, ColumnMarker::Priority)?;
                let value = Priority::numeric(text)
                    .ok_or_else(|| ModelError::InvalidPriority(text.to_string()))?;
                Ok(RowKey::Text(file_key(ctx.file_count(path), path, value)))
            }
        }
    }
}

fn cell<R: SortableRow>(row: &R, marker: ColumnMarker) -> ModelResult<&str> {
    row.cell_text(marker).ok_or(ModelError::MissingColumn(marker))
}

/// The composite key file mode compares rows by:
/// `"{count} {path} {100 - priority}"`.
///
/// The whole string compares lexicographically: first the per-file violation
/// tally, then the path, then the inverse priority. The inverse fragment is
/// plain decimal with no zero padding, so `100 - 10` renders as `90` and
/// `100 - 9` as `91`, placing a priority 10 row before a priority 9 row of
/// the same file. Long-standing report behavior; do not normalize.
pub fn file_key(count: u32, path: &str, priority: i64) -> String {
    // The subtraction runs in i128: 100 - i64::MIN does not fit in i64.
    format!("{count} {path} {}", 100i128 - i128::from(priority))
}
