use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a column: its name and whether it belongs to the row's
/// primary key.
///
/// Two headers are the same column only when BOTH fields match;
/// [`Table::normalize`](crate::Table::normalize) relies on this full-value
/// equality when it looks columns up in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableHeader {
    name: String,
    primary_key: bool,
}

impl TableHeader {
    /// Sentinel standing in for a positional lookup beyond the declared
    /// header list. Never part of a primary key.
    pub const NON_EXISTING: TableHeader = TableHeader {
        name: String::new(),
        primary_key: false,
    };

    /// Create a header. Names are taken as-is: duplicates and empty names
    /// are permitted and simply make positional resolution ambiguous for
    /// the caller.
    pub fn new(name: impl Into<String>, primary_key: bool) -> Self {
        Self {
            name: name.into(),
            primary_key,
        }
    }

    /// Shorthand for a primary-key column.
    pub fn key(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }
}

impl fmt::Display for TableHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
