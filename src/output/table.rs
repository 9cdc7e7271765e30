//! Table output formatting

use std::io::Write;

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::{ReportSink, summary_line};
use crate::error::Result;
use crate::report::ReportRow;

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Collects the report and renders it as one table when the run completes
pub struct TableSink<W: Write> {
    out: W,
    total_groups: usize,
    rows: Vec<ReportRow>,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            total_groups: 0,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> ReportSink for TableSink<W> {
    fn begin(&mut self, total_groups: usize) -> Result<()> {
        self.total_groups = total_groups;
        Ok(())
    }

    fn row(&mut self, row: ReportRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.out, "{}", summary_line(self.total_groups))?;
        writeln!(self.out, "{}", format_table(&self.rows))?;
        self.out.flush()?;
        Ok(())
    }
}
