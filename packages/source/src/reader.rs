//! Streaming reader for well completion report exports.
//!
//! Yields one [`RawRow`] at a time without materializing the table. The
//! export is decoded best-effort: malformed encoding bytes are replaced
//! rather than failing the scan. A second pass requires reopening the
//! source.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::SourceError;

/// Row interval between advisory progress log lines.
const PROGRESS_LOG_INTERVAL: u64 = 100_000;

/// A single raw row, keyed by the column headers from the first line.
#[derive(Debug, Clone)]
pub struct RawRow {
    headers: Arc<[String]>,
    fields: Vec<String>,
}

impl RawRow {
    /// Returns the trimmed value of the named column.
    ///
    /// A missing column, a short row, and a blank value all read as `None`,
    /// so "no value" is uniform for downstream field parsing.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == name)?;
        let value = self.fields.get(idx)?.trim();
        if value.is_empty() { None } else { Some(value) }
    }
}

/// Streaming reader over a delimited well report export with a header row.
pub struct WellReportReader<R> {
    reader: csv::Reader<R>,
    headers: Arc<[String]>,
}

impl WellReportReader<File> {
    /// Opens the export at `path` and reads its header row.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be opened or the header
    /// row cannot be read.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        log::info!("Reading {}...", path.display());
        Self::from_reader(file)
    }
}

impl<R: Read> WellReportReader<R> {
    /// Creates a reader over any byte source (used by tests and [`open`]).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the header row cannot be read or is empty.
    ///
    /// [`open`]: WellReportReader::open
    pub fn from_reader(input: R) -> Result<Self, SourceError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_owned())
            .collect();

        if headers.is_empty() {
            return Err(SourceError::Parse(
                "export contains no header row".to_owned(),
            ));
        }

        Ok(Self {
            reader,
            headers: headers.into(),
        })
    }

    /// Consumes the reader, returning a lazy single-pass row iterator.
    pub fn rows(self) -> Rows<R> {
        Rows {
            reader: self.reader,
            headers: self.headers,
            row_count: 0,
        }
    }
}

/// Lazy iterator over the rows of a [`WellReportReader`].
///
/// Logs an advisory line every 100,000 rows.
pub struct Rows<R> {
    reader: csv::Reader<R>,
    headers: Arc<[String]>,
    row_count: u64,
}

impl<R: Read> Iterator for Rows<R> {
    type Item = Result<RawRow, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::ByteRecord::new();
        match self.reader.read_byte_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                self.row_count += 1;
                if self.row_count % PROGRESS_LOG_INTERVAL == 0 {
                    log::info!("  Processed {} rows...", self.row_count);
                }

                let fields = record
                    .iter()
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect();

                Some(Ok(RawRow {
                    headers: Arc::clone(&self.headers),
                    fields,
                }))
            }
            Err(e) => Some(Err(SourceError::Csv(e))),
        }
    }
}
