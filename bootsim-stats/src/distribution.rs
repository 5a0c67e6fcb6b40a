//! Sampling Distribution
//!
//! The B statistics collected by the resampling loop.

use crate::histogram::{Histogram, HistogramError};
use crate::percentiles::compute_percentile;
use crate::statistic::{Statistic, mean, std_dev};
use crate::summary::{SummaryStatistics, compute_summary};

/// Collected statistics, one per bootstrap sample
#[derive(Debug, Clone)]
pub struct SamplingDistribution {
    statistic: Statistic,
    sample_size: usize,
    values: Vec<f64>,
}

impl SamplingDistribution {
    /// Wrap already collected statistics
    pub fn new(statistic: Statistic, sample_size: usize, values: Vec<f64>) -> Self {
        Self {
            statistic,
            sample_size,
            values,
        }
    }

    /// Statistic that was collected
    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    /// Size of every bootstrap sample
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Collected values, in repetition order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of repetitions (B)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing was collected
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the collected statistics
    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    /// Standard error: standard deviation of the collected statistics
    pub fn standard_error(&self) -> f64 {
        std_dev(&self.values, 1)
    }

    /// Percentile of the collected statistics (0-100)
    pub fn percentile(&self, percentile: f64) -> f64 {
        compute_percentile(&self.values, percentile)
    }

    /// Descriptive statistics of the collected values
    pub fn summary(&self) -> SummaryStatistics {
        compute_summary(&self.values)
    }

    /// Bin the collected values for plotting
    pub fn histogram(&self, bins: usize) -> Result<Histogram, HistogramError> {
        Histogram::from_values(&self.values, bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let dist = SamplingDistribution::new(Statistic::Mean, 4, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(dist.len(), 4);
        assert!(!dist.is_empty());
        assert_eq!(dist.sample_size(), 4);
        assert!((dist.mean() - 2.5).abs() < 1e-12);
        assert!((dist.standard_error() - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((dist.percentile(50.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_total_matches_len() {
        let values: Vec<f64> = (0..1000).map(|x| (x as f64).sin()).collect();
        let dist = SamplingDistribution::new(Statistic::StdDev, 10, values);
        let histogram = dist.histogram(25).unwrap();
        assert_eq!(histogram.total(), dist.len());
    }

    #[test]
    fn test_empty_distribution() {
        let dist = SamplingDistribution::new(Statistic::Mean, 10, Vec::new());
        assert!(dist.is_empty());
        assert_eq!(dist.standard_error(), 0.0);
        assert!(dist.histogram(10).is_err());
        assert_eq!(dist.summary().count, 0);
    }
}
