//! JSON output formatting

use std::io::Write;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ReportSink;
use crate::error::Result;
use crate::report::ReportRow;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> std::result::Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

/// The `data` payload of a JSON report
#[derive(Debug, Default, Serialize)]
pub struct ReportDocument {
    pub total_groups: usize,
    pub rows: Vec<ReportRow>,
}

/// Collects the report and writes one JSON document when the run completes
pub struct JsonSink<W: Write> {
    out: W,
    document: ReportDocument,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            document: ReportDocument::default(),
        }
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn begin(&mut self, total_groups: usize) -> Result<()> {
        self.document.total_groups = total_groups;
        Ok(())
    }

    fn row(&mut self, row: ReportRow) -> Result<()> {
        self.document.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let json = format_json(&self.document)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()?;
        Ok(())
    }
}
