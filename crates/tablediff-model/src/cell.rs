use serde::{Deserialize, Serialize};

/// The content of a cell: text, or nothing at all.
///
/// `Missing` stands for "this column has no value in the source row" and
/// is distinct from empty text, so comparators can choose whether the two
/// are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// The textual form of this value; `Missing` reads as the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Text(text) => text,
            CellValue::Missing => "",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// A single value positioned at a column, tagged with a snapshot of that
/// column's primary-key flag.
///
/// The flag is copied from the positional header when the cell is built
/// and never re-derived, so a cell cannot drift from the header that
/// created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    value: CellValue,
    primary_key: bool,
}

impl TableCell {
    /// Placeholder for "column present in the target shape but absent in
    /// the source row". Its value is [`CellValue::Missing`] and it never
    /// counts toward a primary key.
    pub const MISSING: TableCell = TableCell {
        value: CellValue::Missing,
        primary_key: false,
    };

    pub fn new(value: impl Into<String>, primary_key: bool) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            primary_key,
        }
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// The textual form of the value; missing cells read as empty.
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sentinel_is_not_empty_text() {
        assert_ne!(TableCell::MISSING, TableCell::new("", false));
        assert_eq!(TableCell::MISSING.as_str(), "");
        assert!(TableCell::MISSING.is_missing());
        assert!(!TableCell::MISSING.is_primary_key());
    }
}
