//! Demonstration Pipeline
//!
//! Runs the bootstrap demonstration and turns it into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! RunConfig (bootsim.toml + CLI flags)
//!       │
//!       ▼
//! ┌─────────────┐
//! │ simulation  │  Population → resampling loop per statistic → theory
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  intervals  │  Bootstrap CIs of one observed sample
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Serializable Report
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output with histograms
//! └─────────────┘
//! ```
//!
//! Every stage draws from the same seeded RNG, in this order, so a run is
//! reproducible from `RunConfig::seed`.

mod formatting;
mod intervals;
mod report;
mod simulation;

pub use formatting::{format_human_output, render_histogram};
pub use intervals::compute_intervals;
pub use report::build_report;
pub use simulation::{Experiment, RunConfig, SimulationOutcome, run_simulation};
