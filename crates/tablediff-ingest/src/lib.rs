//! CSV ingestion for the table diff model.
//!
//! Bridges delimited files to [`tablediff_model::Table`]: the first record
//! becomes the header list (with caller-chosen primary-key columns) and
//! every following record becomes a row. Records whose shape does not
//! match the header row are handed to the model's tolerant append, which
//! pads or truncates them rather than rejecting the file.

pub mod csv_ingest;
pub mod error;

pub use csv_ingest::{CsvReadOptions, read_table, read_table_from_reader};
pub use error::{IngestError, Result};
