//! Sort modes the report exposes.

use std::fmt::Display;
use std::fmt::Formatter;

/// The four sort operations a violations table supports.
///
/// Every mode orders the full table in one pass; its key and direction are
/// fixed (only [`SortMode::RuleName`] is descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortMode {
    /// Ascending lexicographic comparison of the priority cell text.
    Priority,
    /// Ascending occurrence count of the row's rule text (rarer rules first).
    RuleFrequency,
    /// Descending lexicographic comparison of the rule cell text.
    RuleName,
    /// Ascending comparison of the composite file key
    /// `"{count} {path} {100 - priority}"`, compared as a string.
    File,
}

/// Direction a key comparison is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortMode {
    /// Every mode, in the order the report header exposes them.
    pub const ALL: [SortMode; 4] = [
        SortMode::Priority,
        SortMode::RuleFrequency,
        SortMode::RuleName,
        SortMode::File,
    ];

    /// The direction this mode's key is ordered in.
    pub fn direction(&self) -> SortDirection {
        match self {
            SortMode::RuleName => SortDirection::Descending,
            SortMode::Priority | SortMode::RuleFrequency | SortMode::File => {
                SortDirection::Ascending
            }
        }
    }

    /// Stable identifier used in CLI flags and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Priority => "priority",
            SortMode::RuleFrequency => "rule-frequency",
            SortMode::RuleName => "rule-name",
            SortMode::File => "file",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rule_name_is_descending() {
        for mode in SortMode::ALL {
            let expected = if mode == SortMode::RuleName {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            assert_eq!(mode.direction(), expected, "direction of {mode}");
        }
    }

    #[test]
    fn test_identifiers_are_distinct() {
        let names: Vec<&str> = SortMode::ALL.iter().map(|m| m.as_str()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate identifier {name}");
        }
    }
}
