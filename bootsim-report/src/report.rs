//! Report Data Structures

use crate::json::ReportSchema;
use bootsim_stats::{
    BootstrapResult, Histogram, Population, SamplingDistribution, SummaryStatistics,
    TheoryComparison,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete demonstration report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub population: PopulationReport,
    pub experiments: Vec<ExperimentReport>,
    pub intervals: Vec<IntervalReport>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema: ReportSchema,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: f64,
    pub config: ReportConfig,
}

/// Run configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Seed of the RNG driving the whole run
    pub seed: u64,
    pub population_size: usize,
    pub population_mean: f64,
    pub population_std_dev: f64,
    pub sample_size: usize,
    pub resamples: usize,
    pub histogram_bins: usize,
    pub interval_iterations: usize,
    pub confidence_level: f64,
    pub interval_method: String,
}

/// The generated population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationReport {
    /// Parameters the values were drawn from
    pub target_mean: Option<f64>,
    pub target_std_dev: Option<f64>,
    pub summary: SummaryReport,
    /// Population standard deviation (divisor `n`)
    pub std_dev: f64,
    pub histogram: Option<HistogramReport>,
}

impl PopulationReport {
    /// Describe `population`, with its histogram when one was computed
    pub fn new(
        population: &Population,
        summary: &SummaryStatistics,
        histogram: Option<&Histogram>,
    ) -> Self {
        Self {
            target_mean: population.spec().map(|s| s.mean),
            target_std_dev: population.spec().map(|s| s.std_dev),
            summary: summary.into(),
            std_dev: population.std_dev(),
            histogram: histogram.map(Into::into),
        }
    }
}

/// Descriptive statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p25: f64,
    pub p75: f64,
    pub p95: f64,
}

impl From<&SummaryStatistics> for SummaryReport {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            count: stats.count,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
            p5: stats.p5,
            p25: stats.p25,
            p75: stats.p75,
            p95: stats.p95,
        }
    }
}

/// Histogram bins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramReport {
    pub bin_edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl From<&Histogram> for HistogramReport {
    fn from(histogram: &Histogram) -> Self {
        Self {
            bin_edges: histogram.bin_edges.clone(),
            counts: histogram.counts.clone(),
        }
    }
}

/// One resampling experiment: the sampling distribution of one statistic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Statistic name (`mean` or `std_dev`)
    pub statistic: String,
    pub sample_size: usize,
    pub resamples: usize,
    pub summary: SummaryReport,
    pub theory: TheoryReport,
    pub histogram: Option<HistogramReport>,
}

impl ExperimentReport {
    /// Describe a sampling distribution and its theory comparison
    pub fn new(
        distribution: &SamplingDistribution,
        theory: &TheoryComparison,
        histogram: Option<&Histogram>,
    ) -> Self {
        Self {
            statistic: distribution.statistic().name().to_string(),
            sample_size: distribution.sample_size(),
            resamples: distribution.len(),
            summary: (&distribution.summary()).into(),
            theory: theory.into(),
            histogram: histogram.map(Into::into),
        }
    }
}

/// Simulated vs theoretical values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryReport {
    pub expected_center: f64,
    pub simulated_center: f64,
    pub expected_standard_error: f64,
    pub simulated_standard_error: f64,
    pub population_std_dev: f64,
    pub implied_population_std_dev: f64,
}

impl From<&TheoryComparison> for TheoryReport {
    fn from(cmp: &TheoryComparison) -> Self {
        Self {
            expected_center: cmp.expected_center,
            simulated_center: cmp.simulated_center,
            expected_standard_error: cmp.expected_standard_error,
            simulated_standard_error: cmp.simulated_standard_error,
            population_std_dev: cmp.population_std_dev,
            implied_population_std_dev: cmp.implied_population_std_dev,
        }
    }
}

/// Bootstrap confidence interval for one statistic of the observed sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalReport {
    pub statistic: String,
    pub method: String,
    pub observed_sample_size: usize,
    pub point_estimate: f64,
    pub lower: f64,
    pub upper: f64,
    pub level: f64,
    pub standard_error: f64,
    /// Population value of the statistic
    pub population_value: f64,
    /// Whether the interval covers the population value
    pub covers_population: bool,
    pub warning: Option<String>,
}

impl IntervalReport {
    /// Describe `result`, judged against the population value of its statistic
    pub fn new(result: &BootstrapResult, observed_sample_size: usize, population_value: f64) -> Self {
        let ci = &result.confidence_interval;
        Self {
            statistic: result.statistic.name().to_string(),
            method: result.method.name().to_string(),
            observed_sample_size,
            point_estimate: result.point_estimate,
            lower: ci.lower,
            upper: ci.upper,
            level: ci.level,
            standard_error: result.standard_error,
            population_value,
            covers_population: ci.contains(population_value),
            warning: result.warning.clone(),
        }
    }
}
