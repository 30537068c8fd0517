use serde::{Deserialize, Serialize};

use crate::{TableCell, TableHeader, TableRow};

/// An ordered header list plus an ordered row list.
///
/// Every row holds exactly `headers.len()` cells. Appends that do not fit
/// are structurally adjusted rather than rejected, so shape mismatches
/// never surface as errors. Tables are immutable values: every
/// mutating-looking operation returns a new table, and sharing one across
/// threads needs no locking.
///
/// Row order is insertion order and is semantically meaningful for
/// downstream rendering; row identity for cross-table matching comes from
/// [`TableRow::primary_key_value`], not position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<TableHeader>,
    rows: Vec<TableRow>,
}

impl Table {
    /// An empty table over `headers`.
    ///
    /// Header names are not checked for uniqueness or emptiness; duplicate
    /// names resolve positionally and are the caller's problem to avoid.
    pub fn create(headers: Vec<TableHeader>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[TableHeader] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns a new table with one row appended, built from `values`.
    ///
    /// Values are zipped against the headers positionally; positions past
    /// the declared headers zip against [`TableHeader::NON_EXISTING`]. The
    /// cell list is then adjusted to exactly the header count: excess tail
    /// cells are dropped and short rows are padded at the tail with
    /// [`TableCell::MISSING`]. Mismatched lengths are corrected, never
    /// rejected.
    pub fn add_row<I, V>(&self, values: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let primary_key = self
                    .headers
                    .get(index)
                    .unwrap_or(&TableHeader::NON_EXISTING)
                    .is_primary_key();
                TableCell::new(value, primary_key)
            })
            .collect();
        self.push_row(TableRow::from_cells(self.adjust_to_header_count(cells)))
    }

    /// Returns a new table with a pre-built row appended, without
    /// re-checking its cell count.
    ///
    /// Callers are trusted to supply a row that already matches the header
    /// count; this is the append used for rows produced by
    /// [`Table::normalize`].
    pub fn push_row(&self, row: TableRow) -> Table {
        let mut rows = self.rows.clone();
        rows.push(row);
        Table {
            headers: self.headers.clone(),
            rows,
        }
    }

    /// Reshape this table so its header list equals `target_headers`,
    /// making it positionally comparable with any other table normalized
    /// to the same target.
    ///
    /// Target columns found in this table keep their values; target
    /// columns with no match become all-[`TableCell::MISSING`] columns,
    /// and source columns absent from the target are dropped. Membership
    /// is decided by full header equality: a header with the same name but
    /// a different primary-key flag is a different column and will NOT be
    /// matched. That sharp edge silently drops columns callers may have
    /// expected to match by name alone.
    pub fn normalize(&self, target_headers: &[TableHeader]) -> Table {
        let mapping: Vec<Option<usize>> = target_headers
            .iter()
            .map(|target| self.headers.iter().position(|header| header == target))
            .collect();

        let unmatched = mapping.iter().filter(|index| index.is_none()).count();
        if unmatched > 0 {
            tracing::debug!(
                unmatched,
                targets = target_headers.len(),
                "normalize: target columns without a source match"
            );
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells = mapping
                    .iter()
                    .map(|index| row.cell_or_missing(*index))
                    .collect();
                TableRow::from_cells(cells)
            })
            .collect();

        Table {
            headers: target_headers.to_vec(),
            rows,
        }
    }

    fn adjust_to_header_count(&self, mut cells: Vec<TableCell>) -> Vec<TableCell> {
        cells.resize(self.headers.len(), TableCell::MISSING);
        cells
    }
}
