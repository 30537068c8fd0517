//! Stock cell comparators.
//!
//! [`TableRow::is_same_as`](crate::TableRow::is_same_as) accepts any
//! `Fn(&TableCell, &TableCell) -> bool`; these cover the comparisons most
//! callers want. None of them can fail: cells that do not fit a
//! comparator's notion of the value (e.g. non-numeric text under
//! [`numeric`]) fall back to exact equality instead of erroring.

use crate::{CellValue, TableCell};

/// Exact value equality. A missing cell equals only another missing cell.
pub fn exact(left: &TableCell, right: &TableCell) -> bool {
    left.value() == right.value()
}

/// ASCII-case-insensitive text equality; anything involving a missing
/// cell falls back to [`exact`].
pub fn case_insensitive(left: &TableCell, right: &TableCell) -> bool {
    match (left.value(), right.value()) {
        (CellValue::Text(a), CellValue::Text(b)) => a.eq_ignore_ascii_case(b),
        _ => exact(left, right),
    }
}

/// Builds a comparator that treats two cells as equal when both parse as
/// numbers no further than `tolerance` apart. Sides that do not parse
/// fall back to [`exact`].
pub fn numeric(tolerance: f64) -> impl Fn(&TableCell, &TableCell) -> bool {
    move |left, right| {
        let parsed = (
            left.as_str().trim().parse::<f64>(),
            right.as_str().trim().parse::<f64>(),
        );
        match parsed {
            (Ok(a), Ok(b)) => (a - b).abs() <= tolerance,
            _ => exact(left, right),
        }
    }
}

/// Like [`exact`], but a missing cell and empty text are interchangeable.
/// Useful when one side was padded and the other genuinely holds "".
pub fn missing_as_empty(left: &TableCell, right: &TableCell) -> bool {
    left.as_str() == right.as_str()
}
