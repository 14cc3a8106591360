use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::error::Result;
use crate::model::FlatRecord;

/// Streams flat records into a CSV file, one row at a time.
///
/// The header row is written as soon as the sink is created. Dropping the sink
/// without calling [`CsvSink::finish`] still flushes buffered rows and closes
/// the file.
pub struct CsvSink {
    writer: Writer<File>,
    rows: usize,
}

impl CsvSink {
    /// Creates (or truncates) the file at `path` and writes the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(FlatRecord::COLUMNS)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Encodes one row.
    pub fn write(&mut self, record: &FlatRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes outstanding rows, closes the file, and returns the data row count.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}
