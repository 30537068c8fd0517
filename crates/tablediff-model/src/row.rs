use serde::{Deserialize, Serialize};

use crate::TableCell;

/// An ordered sequence of cells belonging to one table.
///
/// Rows are immutable values: every mutating-looking operation returns a
/// new row. The cells-per-row-equals-header-count invariant is enforced
/// where rows are admitted into a [`Table`](crate::Table), not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    /// An empty row, grown cell by cell via [`TableRow::add_cell`].
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cells(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns a new row with `cell` appended.
    pub fn add_cell(&self, cell: TableCell) -> TableRow {
        let mut cells = self.cells.clone();
        cells.push(cell);
        Self { cells }
    }

    /// The cell at `index`, or [`TableCell::MISSING`] when the position is
    /// absent or out of range.
    pub fn cell_or_missing(&self, index: Option<usize>) -> TableCell {
        index
            .and_then(|idx| self.cells.get(idx))
            .cloned()
            .unwrap_or(TableCell::MISSING)
    }

    /// This row's cross-table matching key: the values of all primary-key
    /// cells concatenated in cell order, with no separator. Rows without
    /// any primary-key cell fall back to concatenating every cell value.
    ///
    /// The lack of a separator means distinct value splits can collide
    /// (`["a", "bc"]` and `["ab", "c"]` both key as `"abc"`). Callers that
    /// match on this value inherit that collision behavior.
    pub fn primary_key_value(&self) -> String {
        let has_key = self.cells.iter().any(TableCell::is_primary_key);
        self.cells
            .iter()
            .filter(|cell| !has_key || cell.is_primary_key())
            .map(TableCell::as_str)
            .collect()
    }

    /// Whether `other` holds the same data as this row, cell for cell,
    /// according to `comparison`.
    ///
    /// Both rows are assumed to already share a header order (see
    /// [`Table::normalize`](crate::Table::normalize)); rows of different
    /// lengths are never the same, whatever the comparator says. The
    /// comparator is the injection point for custom equality: exact text,
    /// case-insensitive, numeric tolerance, and so on (see
    /// [`compare`](crate::compare)).
    pub fn is_same_as<F>(&self, other: &TableRow, comparison: F) -> bool
    where
        F: Fn(&TableCell, &TableCell) -> bool,
    {
        if self.cells.len() != other.cells.len() {
            return false;
        }
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(left, right)| comparison(left, right))
    }
}
