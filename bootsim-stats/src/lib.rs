#![warn(missing_docs)]
//! Bootsim Statistical Engine
//!
//! Everything the bootstrap demonstration computes lives here:
//! - Synthetic normal populations
//! - Sequential resampling with replacement into a sampling distribution
//! - Descriptive statistics and comparison against theoretical expectations
//! - Histogram binning of the collected statistics
//! - Bootstrap confidence intervals (percentile, pivotal and BCa)

mod confidence;
mod distribution;
mod histogram;
mod percentiles;
mod population;
mod resample;
mod statistic;
mod summary;
mod theory;

pub use confidence::{
    BootstrapConfig, BootstrapError, BootstrapResult, ConfidenceInterval, IntervalMethod,
    compute_bootstrap,
};
pub use distribution::SamplingDistribution;
pub use histogram::{Histogram, HistogramError};
pub use percentiles::{Percentiles, compute_percentile, compute_percentiles};
pub use population::{Population, PopulationError, PopulationSpec, generate_population};
pub use resample::{
    ResampleConfig, ResampleError, draw_with_replacement, draw_without_replacement, resample,
    resample_with_progress,
};
pub use statistic::{ParseStatisticError, Statistic, mean, std_dev, variance};
pub use summary::{SummaryStatistics, compute_summary};
pub use theory::{TheoryComparison, compare_to_theory};

/// Threshold below which `IntervalMethod::Auto` selects BCa instead of percentile
pub const BCA_THRESHOLD: usize = 100;

/// Default number of values in the synthetic population
pub const DEFAULT_POPULATION_SIZE: usize = 10_000;

/// Default size of every bootstrap sample
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Default number of bootstrap repetitions (B)
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Default number of resamples used by the confidence-interval helper
pub const DEFAULT_INTERVAL_ITERATIONS: usize = 10_000;

/// Default confidence level (95%)
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(BCA_THRESHOLD, 100);
        assert_eq!(DEFAULT_RESAMPLES, 10_000);
        assert!(DEFAULT_SAMPLE_SIZE < DEFAULT_POPULATION_SIZE);
        assert!((DEFAULT_CONFIDENCE_LEVEL - 0.95).abs() < f64::EPSILON);
    }
}
