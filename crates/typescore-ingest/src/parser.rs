//! Dialect-driven table parsing.
//!
//! Scoring treats the parser as a collaborator: anything implementing
//! [`TableParser`] can feed rows to the scorer. [`CsvTableParser`] is the
//! default, backed by the `csv` crate.

use csv::{ReaderBuilder, Trim};
use tracing::debug;
use typescore_model::Dialect;

use crate::error::{IngestError, Result};

/// Turns raw text into rows of cells according to a dialect.
///
/// Implementations own all segmentation and quoting rules. Cells are returned
/// verbatim; callers never re-split or trim them.
pub trait TableParser {
    fn parse(&self, data: &str, dialect: &Dialect) -> Result<Vec<Vec<String>>>;
}

impl<P: TableParser + ?Sized> TableParser for &P {
    fn parse(&self, data: &str, dialect: &Dialect) -> Result<Vec<Vec<String>>> {
        (**self).parse(data, dialect)
    }
}

/// [`TableParser`] backed by `csv::Reader`.
///
/// Rows may have differing lengths. There is no header row: every record is
/// data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableParser;

impl CsvTableParser {
    pub fn new() -> Self {
        Self
    }
}

fn reader_builder(dialect: &Dialect) -> Result<ReaderBuilder> {
    if !dialect.is_ascii() {
        return Err(IngestError::NonAsciiDialect {
            dialect: dialect.to_string(),
        });
    }

    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .delimiter(dialect.delimiter as u8);

    if let Some(quote) = dialect.quote_char {
        builder.quoting(true).quote(quote as u8);
    } else {
        builder.quoting(false);
    }

    if let Some(escape) = dialect.escape_char {
        builder.escape(Some(escape as u8)).double_quote(false);
    }

    Ok(builder)
}

impl TableParser for CsvTableParser {
    fn parse(&self, data: &str, dialect: &Dialect) -> Result<Vec<Vec<String>>> {
        let mut reader = reader_builder(dialect)?.from_reader(data.as_bytes());
        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|source| IngestError::CsvRecord {
                record: idx + 1,
                source,
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        debug!(rows = rows.len(), dialect = %dialect, "parsed table");
        Ok(rows)
    }
}
