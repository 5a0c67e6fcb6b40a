#![warn(missing_docs)]
//! Bootsim Report - Serializable results
//!
//! Generates the machine-readable output formats:
//! - JSON (full report)
//! - CSV (one row per experiment)
//!
//! Human-readable terminal output is produced by the CLI.

mod csv;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use json::{ReportSchema, generate_json_report};
pub use report::{
    ExperimentReport, HistogramReport, IntervalReport, PopulationReport, Report, ReportConfig,
    ReportMeta, SummaryReport, TheoryReport,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
