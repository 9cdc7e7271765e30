//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary line plus one comma-separated line per row (default)
    #[default]
    Csv,
    /// Table format - human-readable, rendered once the run completes
    Table,
    /// JSON format - structured for scripts
    Json,
}
