//! JSON Output

use crate::report::Report;
use serde::{Deserialize, Serialize};

/// Schema information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Schema identifier
    pub schema: String,
    /// Schema version
    pub version: String,
}

impl ReportSchema {
    /// Schema of reports produced by this version
    pub fn current() -> Self {
        Self {
            schema: "bootsim-report".to_string(),
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Version of the report layout
const SCHEMA_VERSION: u32 = 1;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
