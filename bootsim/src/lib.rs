#![warn(missing_docs)]
//! # Bootsim
//!
//! A demonstration of the non-parametric bootstrap.
//!
//! - **Population**: a synthetic normal population, drawn once and read-only afterwards
//! - **Resampling**: B samples of a fixed size drawn with replacement, one statistic each
//! - **Theory**: simulated centre and standard error next to μ, σ and σ / √n
//! - **Histograms**: equal-width binning of the sampling distribution
//! - **Confidence Intervals**: percentile, pivotal and BCa bootstrap intervals
//!
//! ## Quick Start
//!
//! ```
//! use bootsim::{PopulationSpec, ResampleConfig, Statistic, compare_to_theory, generate_population, resample};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let population = generate_population(&PopulationSpec::default(), &mut rng).unwrap();
//! let config = ResampleConfig { sample_size: 50, resamples: 1_000 };
//! let means = resample(&population, Statistic::Mean, &config, &mut rng).unwrap();
//!
//! let theory = compare_to_theory(&population, &means);
//! assert!((theory.simulated_center - theory.expected_center).abs() < 1.0);
//! ```

// Re-export stats
pub use bootsim_stats::{
    BootstrapConfig, BootstrapError, BootstrapResult, ConfidenceInterval, Histogram,
    IntervalMethod, Population, PopulationSpec, ResampleConfig, SamplingDistribution, Statistic,
    SummaryStatistics, TheoryComparison, compare_to_theory, compute_bootstrap, compute_summary,
    draw_with_replacement, generate_population, resample,
};

// Re-export report types
pub use bootsim_report::{OutputFormat, Report, generate_csv_report, generate_json_report};

// Re-export the pipeline
pub use bootsim_cli::{BootsimConfig, RunConfig, build_report, format_human_output, run_simulation};

/// Run the Bootsim CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     bootsim::run()
/// }
/// ```
pub use bootsim_cli::run;
