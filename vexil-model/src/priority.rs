//! Priority cell values.

use std::fmt::Display;
use std::fmt::Formatter;

/// The raw text of a row's priority cell.
///
/// The priority sort mode compares this text lexicographically, not
/// numerically (`"10"` sorts before `"9"`). The numeric view exists only
/// for the inverse-priority fragment of the file composite key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Priority(String);

impl Priority {
    /// Wrap the rendered cell text.
    pub fn new(text: impl Into<String>) -> Self {
        Priority(text.into())
    }

    /// The raw cell text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the cell, if its text is an integer.
    pub fn value(&self) -> Option<i64> {
        Self::numeric(&self.0)
    }

    /// Numeric value of arbitrary priority text, if it is an integer.
    ///
    /// Surrounding whitespace is tolerated; anything else is not a number.
    pub fn numeric(text: &str) -> Option<i64> {
        text.trim().parse().ok()
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Priority {
    fn from(text: &str) -> Self {
        Priority::new(text)
    }
}

impl From<String> for Priority {
    fn from(text: String) -> Self {
        Priority(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parses_integers() {
        assert_eq!(Priority::new("1").value(), Some(1));
        assert_eq!(Priority::new("  3 ").value(), Some(3));
        assert_eq!(Priority::new("-2").value(), Some(-2));
    }

    #[test]
    fn test_numeric_rejects_non_integers() {
        assert_eq!(Priority::new("").value(), None);
        assert_eq!(Priority::new("high").value(), None);
        assert_eq!(Priority::new("1.5").value(), None);
        assert_eq!(Priority::new("3a").value(), None);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // Text ordering, deliberately: "10" < "9".
        assert!(Priority::new("10") < Priority::new("9"));
        assert!(Priority::new("10") < Priority::new("50"));
    }
}
