//! Immutable table data model for table diffing.
//!
//! Two snapshots of the same logical dataset rarely arrive with identical
//! shapes: columns get reordered, added, or dropped between versions. This
//! crate turns both snapshots into structurally comparable tables and
//! provides the row identity and equality primitives a diff renderer needs:
//!
//! - [`Table::normalize`] reprojects a table onto a target header list,
//!   synthesizing placeholder cells for missing columns and dropping
//!   columns the target does not declare.
//! - [`TableRow::primary_key_value`] derives each row's cross-table
//!   matching key from its primary-key columns.
//! - [`TableRow::is_same_as`] compares two normalized rows cell by cell
//!   through a caller-supplied comparator; [`compare`] has stock ones.
//! - [`RowIndex`] builds the key-to-rows lookup used to pair rows across
//!   two normalized tables.
//!
//! Shape mismatches are absorbed into the [`TableCell::MISSING`] and
//! [`TableHeader::NON_EXISTING`] sentinels rather than surfaced as errors.
//! Nothing in this crate fails: short rows are padded, long rows are
//! truncated, and unmatched columns materialize as missing cells. That
//! tolerant-defaulting policy is what lets drifted schemas reconcile, and
//! it is deliberate; do not bolt strict validation onto these types.

pub mod cell;
pub mod compare;
pub mod header;
pub mod lookup;
pub mod row;
pub mod table;

pub use cell::{CellValue, TableCell};
pub use header::TableHeader;
pub use lookup::RowIndex;
pub use row::TableRow;
pub use table::Table;
