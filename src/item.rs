//! List item definition

use std::fmt;

use crate::codec;

/// A single `(value, comment)` pair
///
/// `value` is the identity key. An item with an empty value is the
/// "nothing here" sentinel: it is returned by failed lookups and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Item {
    pub value: String,
    pub comment: String,
}

impl Item {
    pub fn new(value: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: comment.into(),
        }
    }

    /// True for the sentinel item (empty value)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Formats the canonical file line (empty for the sentinel)
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_line(self))
    }
}

impl From<&str> for Item {
    fn from(line: &str) -> Self {
        codec::parse_line(line)
    }
}
