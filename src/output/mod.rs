//! Output formatting for report rows and lookup results

use std::io::Write;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::ReportRow;

pub mod csv;
pub mod json;
pub mod table;

/// Receives a report as it is produced.
///
/// `begin` is called once with the number of sub-groups, then `row` once per
/// sub-group in sequence order, then `finish`. A failed run stops calling
/// the sink and never calls `finish`.
pub trait ReportSink {
    fn begin(&mut self, total_groups: usize) -> Result<()>;

    fn row(&mut self, row: ReportRow) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

/// Line announcing how many sub-groups the report covers
pub fn summary_line(total_groups: usize) -> String {
    format!("Group Names: {}", total_groups)
}

/// Create the sink for an output format
pub fn sink_for<'w, W: Write + 'w>(format: OutputFormat, out: W) -> Box<dyn ReportSink + 'w> {
    match format {
        OutputFormat::Csv => Box::new(csv::CsvSink::new(out)),
        OutputFormat::Table => Box::new(table::TableSink::new(out)),
        OutputFormat::Json => Box::new(json::JsonSink::new(out)),
    }
}

/// Format a list of lookup results
pub fn format_items<T: Tabled + Serialize>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => csv::format_csv(items),
        OutputFormat::Table => Ok(table::format_table(items)),
        OutputFormat::Json => Ok(json::format_json(items)?),
    }
}

/// Format and print a list of lookup results to stdout
pub fn print_items<T: Tabled + Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    let output = format_items(items, format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    Ok(())
}
