//! The stable column markers a violations row exposes.

use std::fmt::Display;
use std::fmt::Formatter;

/// The three recognized columns of a violations row.
///
/// Each marker maps to the class-like attribute value that identifies the
/// cell carrying it in the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColumnMarker {
    /// The violation priority cell (`priorityColumn`).
    Priority,
    /// The rule name cell (`ruleColumn`).
    Rule,
    /// The source path cell (`pathColumn`).
    Path,
}

impl ColumnMarker {
    /// Every marker, in the order the report renders the columns.
    pub const ALL: [ColumnMarker; 3] =
        [ColumnMarker::Priority, ColumnMarker::Rule, ColumnMarker::Path];

    /// The class attribute token identifying this column in a row.
    pub fn class_name(&self) -> &'static str {
        match self {
            ColumnMarker::Priority => "priorityColumn",
            ColumnMarker::Rule => "ruleColumn",
            ColumnMarker::Path => "pathColumn",
        }
    }

    /// Reverse lookup from a class attribute token.
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            "priorityColumn" => Some(ColumnMarker::Priority),
            "ruleColumn" => Some(ColumnMarker::Rule),
            "pathColumn" => Some(ColumnMarker::Path),
            _ => None,
        }
    }
}

impl Display for ColumnMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnMarker::Priority => write!(f, "priority"),
            ColumnMarker::Rule => write!(f, "rule"),
            ColumnMarker::Path => write!(f, "path"),
        }
    }
}
