use std::collections::HashMap;

use crate::{Table, TableRow};

/// An index from [`TableRow::primary_key_value`] to the rows carrying
/// that key, built over one table.
///
/// Keys are not guaranteed unique: the no-separator key concatenation can
/// collide, and source data can simply repeat keys. Each key therefore
/// maps to every matching row, in table order. Building the index on both
/// sides of a comparison gives a diff renderer its matched pairs and its
/// one-side-only keys.
#[derive(Debug, Clone)]
pub struct RowIndex<'a> {
    map: HashMap<String, Vec<&'a TableRow>>,
    // First-seen key order, so iteration is deterministic.
    keys: Vec<String>,
}

impl<'a> RowIndex<'a> {
    pub fn build(table: &'a Table) -> Self {
        let mut map: HashMap<String, Vec<&'a TableRow>> = HashMap::new();
        let mut keys = Vec::new();
        for row in table.rows() {
            let key = row.primary_key_value();
            let rows = map.entry(key.clone()).or_default();
            if rows.is_empty() {
                keys.push(key);
            }
            rows.push(row);
        }
        Self { map, keys }
    }

    /// Rows whose key equals `key`, in table order; empty when absent.
    pub fn get(&self, key: &str) -> &[&'a TableRow] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Distinct keys in first-seen row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableHeader;

    #[test]
    fn duplicate_keys_keep_every_row() {
        let table = Table::create(vec![TableHeader::key("id"), TableHeader::new("v", false)])
            .add_row(["1", "a"])
            .add_row(["1", "b"])
            .add_row(["2", "c"]);
        let index = RowIndex::build(&table);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("1").len(), 2);
        assert_eq!(index.get("1")[1].cells()[1].as_str(), "b");
        assert_eq!(index.get("missing"), &[] as &[&TableRow]);
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["1", "2"]);
    }
}
