//! Comma-separated output

use std::io::Write;

use serde::Serialize;

use super::{ReportSink, summary_line};
use crate::error::{Error, Result};
use crate::report::ReportRow;

fn writer_for<W: Write>(out: W, has_headers: bool) -> ::csv::Writer<W> {
    ::csv::WriterBuilder::new()
        .has_headers(has_headers)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(out)
}

/// Streams the report as a summary line followed by one CSV line per row.
///
/// Each row is flushed as soon as it is written, so a run that aborts part
/// way still leaves every earlier row on the output.
pub struct CsvSink<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: writer_for(out, false),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(out) => out,
            Err(e) => panic!("flush failed: {}", e.error()),
        }
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn begin(&mut self, total_groups: usize) -> Result<()> {
        self.writer.flush()?;
        let out = self.writer.get_mut();
        writeln!(out, "{}", summary_line(total_groups))?;
        out.flush()?;
        Ok(())
    }

    fn row(&mut self, row: ReportRow) -> Result<()> {
        self.writer.write_record(row.to_record())?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Format serializable items as CSV with a header row
pub fn format_csv<T: Serialize>(items: &[T]) -> Result<String> {
    let mut writer = writer_for(Vec::new(), true);
    for item in items {
        writer.serialize(item)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Output(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Output(e.to_string()))
}
