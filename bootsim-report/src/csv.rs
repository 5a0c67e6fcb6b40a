//! CSV Output
//!
//! One row per resampling experiment, followed by one row per confidence
//! interval in a second table separated by a blank line.

use crate::report::Report;
use std::fmt::Write;

const EXPERIMENT_HEADER: &str = "statistic,sample_size,resamples,expected_center,simulated_center,expected_standard_error,simulated_standard_error,population_std_dev,implied_population_std_dev";

const INTERVAL_HEADER: &str =
    "statistic,method,level,point_estimate,lower,upper,population_value,covers_population";

/// Generate a CSV report
pub fn generate_csv_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(EXPERIMENT_HEADER);
    out.push('\n');
    for exp in &report.experiments {
        let t = &exp.theory;
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            escape(&exp.statistic),
            exp.sample_size,
            exp.resamples,
            t.expected_center,
            t.simulated_center,
            t.expected_standard_error,
            t.simulated_standard_error,
            t.population_std_dev,
            t.implied_population_std_dev
        );
    }

    if !report.intervals.is_empty() {
        out.push('\n');
        out.push_str(INTERVAL_HEADER);
        out.push('\n');
        for ci in &report.intervals {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{},{}",
                escape(&ci.statistic),
                escape(&ci.method),
                ci.level,
                ci.point_estimate,
                ci.lower,
                ci.upper,
                ci.population_value,
                ci.covers_population
            );
        }
    }

    out
}

/// Quote a field if it contains a delimiter, quote or newline
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
