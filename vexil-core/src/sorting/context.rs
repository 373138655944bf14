//! Per-pass occurrence counting
//!
//! Frequency-based modes need to know how often a rule name or file path
//! occurs in the table. Those tallies are built fresh for every sort pass and
//! dropped with it, so they can never go stale against an edited table.

use std::collections::HashMap;

use tracing::debug;
use vexil_model::{ColumnMarker, SortMode};

use super::traits::SortableRow;

/// Occurrence tallies for one sort pass.
///
/// Only the map the active mode reads is populated; the other stays `None`.
#[derive(Debug, Default)]
pub struct SortContext {
    rule_counts: Option<HashMap<String, u32>>,
    file_counts: Option<HashMap<String, u32>>,
}

impl SortContext {
    /// Tally whatever `mode` needs over `rows`.
    ///
    /// Rows missing the counted cell are skipped here; key extraction
    /// reports them afterwards, before any tally is consulted.
    pub fn for_mode<R: SortableRow>(rows: &[R], mode: SortMode) -> Self {
        let mut ctx = Self::default();
        match mode {
            SortMode::RuleFrequency => {
                let counts = count_column(rows, ColumnMarker::Rule);
                debug!(distinct = counts.len(), "tallied rule occurrences");
                ctx.rule_counts = Some(counts);
            }
            SortMode::File => {
                let counts = count_column(rows, ColumnMarker::Path);
                debug!(distinct = counts.len(), "tallied file occurrences");
                ctx.file_counts = Some(counts);
            }
            SortMode::Priority | SortMode::RuleName => {}
        }
        ctx
    }

    /// How many rows name `rule`, per the tally built for this pass.
    pub fn rule_count(&self, rule: &str) -> u32 {
        lookup(self.rule_counts.as_ref(), rule)
    }

    /// How many rows point at `path`, per the tally built for this pass.
    pub fn file_count(&self, path: &str) -> u32 {
        lookup(self.file_counts.as_ref(), path)
    }
}

fn lookup(counts: Option<&HashMap<String, u32>>, text: &str) -> u32 {
    counts
        .and_then(|map| map.get(text).copied())
        .unwrap_or(0)
}

/// Tally cell texts for `marker` across `rows`, skipping rows without one.
pub(crate) fn count_column<R: SortableRow>(
    rows: &[R],
    marker: ColumnMarker,
) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for row in rows {
        if let Some(text) = row.cell_text(marker) {
            *counts.entry(text.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use vexil_model::RowValues;

    fn row(rule: &str, path: &str) -> RowValues {
        RowValues::new("2", rule, path)
    }

    #[test]
    fn test_only_the_needed_tally_is_built() {
        let rows = vec![row("A", "x.groovy"), row("A", "y.groovy")];

        let ctx = SortContext::for_mode(&rows, SortMode::RuleFrequency);
        assert_eq!(ctx.rule_count("A"), 2);
        assert_eq!(ctx.file_count("x.groovy"), 0, "file tally should be absent");

        let ctx = SortContext::for_mode(&rows, SortMode::Priority);
        assert_eq!(ctx.rule_count("A"), 0, "priority mode needs no tallies");
    }

    #[test]
    fn test_counts_reflect_the_rows_given() {
        let rows = vec![
            row("A", "x.groovy"),
            row("B", "x.groovy"),
            row("A", "y.groovy"),
        ];
        let ctx = SortContext::for_mode(&rows, SortMode::File);
        assert_eq!(ctx.file_count("x.groovy"), 2);
        assert_eq!(ctx.file_count("y.groovy"), 1);
        assert_eq!(ctx.file_count("z.groovy"), 0);
    }
}
