//! The sort pass itself
//!
//! A pass snapshots one key per row, orders row indices with a stable sort,
//! and applies the resulting permutation in place. Nothing moves until every
//! key has been extracted, so a failing row leaves the slice untouched.

use tracing::debug;
use vexil_model::{SortDirection, SortMode};

use crate::error::{ReportError, Result};

use super::context::SortContext;
use super::keys::RowKey;
use super::traits::SortableRow;

/// Reorder `rows` in place according to `mode`.
///
/// The sort is stable: rows whose keys compare equal keep their relative
/// positions. On error the slice is guaranteed to be in its original order.
pub fn sort_rows<R: SortableRow>(rows: &mut [R], mode: SortMode) -> Result<()> {
    let ctx = SortContext::for_mode(rows, mode);
    let keys = rows
        .iter()
        .enumerate()
        .map(|(row, r)| {
            RowKey::extract(r, mode, &ctx)
                .map_err(|source| ReportError::RowIntegrity { row, source })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = keys[a].cmp(&keys[b]);
        if mode.direction() == SortDirection::Descending {
            ord.reverse()
        } else {
            ord
        }
    });

    debug!(%mode, rows = rows.len(), "applying row order");
    apply_order(rows, order);
    Ok(())
}

/// Permute `items` so that position `i` ends up holding the element that
/// started at `order[i]`. Walks each cycle once, consuming `order` as the
/// visited marker.
fn apply_order<T>(items: &mut [T], mut order: Vec<usize>) {
    const DONE: usize = usize::MAX;
    for i in 0..order.len() {
        if order[i] == DONE {
            continue;
        }
        let mut current = i;
        loop {
            let next = order[current];
            order[current] = DONE;
            if next == i {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}
