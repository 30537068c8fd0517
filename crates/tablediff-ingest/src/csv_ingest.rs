use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use tablediff_model::{Table, TableHeader};

use crate::error::Result;

/// Options controlling how delimited data becomes a [`Table`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvReadOptions {
    /// Field delimiter. Default: comma.
    pub delimiter: u8,

    /// Trim surrounding whitespace and a leading BOM from every field.
    /// Default: true.
    pub trim: bool,

    /// Names of the columns to flag as primary-key columns, matched
    /// exactly against the header record.
    pub primary_keys: Vec<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            primary_keys: Vec::new(),
        }
    }
}

impl CsvReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_primary_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Read a delimited file into a [`Table`].
pub fn read_table(path: &Path, options: &CsvReadOptions) -> Result<Table> {
    let file = File::open(path)?;
    let table = read_table_from_reader(file, options)?;
    tracing::debug!(rows = table.row_count(), path = %path.display(), "read csv table");
    Ok(table)
}

/// Read delimited data from any reader into a [`Table`].
///
/// The first record is the header record; a column becomes a primary-key
/// column when its name appears in `options.primary_keys`. Records
/// shorter or longer than the header record are admitted as-is and
/// shape-adjusted by [`Table::add_row`]. Records whose fields are all
/// empty are skipped. Empty input yields a table with no headers and no
/// rows.
pub fn read_table_from_reader<R: Read>(reader: R, options: &CsvReadOptions) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let headers = match records.next() {
        Some(record) => record?
            .iter()
            .map(|field| {
                let name = clean_field(field, options.trim);
                let primary_key = options.primary_keys.iter().any(|key| key == &name);
                TableHeader::new(name, primary_key)
            })
            .collect(),
        None => Vec::new(),
    };

    let mut table = Table::create(headers);
    for record in records {
        let record = record?;
        let fields: Vec<String> = record
            .iter()
            .map(|field| clean_field(field, options.trim))
            .collect();
        if fields.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        table = table.add_row(fields);
    }
    Ok(table)
}

fn clean_field(raw: &str, trim: bool) -> String {
    if trim {
        raw.trim().trim_matches('\u{feff}').to_string()
    } else {
        raw.to_string()
    }
}
