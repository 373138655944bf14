//! Plain in-memory violation rows.

use crate::columns::ColumnMarker;
use crate::priority::Priority;

/// The extracted text of one row's three marked cells.
///
/// This is the minimal value object the sorter needs; callers sorting rows
/// they already hold in memory (rather than inside a report document) build
/// these directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowValues {
    /// Text of the `priorityColumn` cell.
    pub priority: Priority,
    /// Text of the `ruleColumn` cell.
    pub rule: String,
    /// Text of the `pathColumn` cell.
    pub path: String,
}

impl RowValues {
    /// Build a row from its three cell texts.
    pub fn new(
        priority: impl Into<Priority>,
        rule: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            priority: priority.into(),
            rule: rule.into(),
            path: path.into(),
        }
    }

    /// The text of the cell carrying `marker`.
    pub fn column_text(&self, marker: ColumnMarker) -> &str {
        match marker {
            ColumnMarker::Priority => self.priority.as_str(),
            ColumnMarker::Rule => &self.rule,
            ColumnMarker::Path => &self.path,
        }
    }
}
