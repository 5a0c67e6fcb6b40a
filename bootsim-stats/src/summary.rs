//! Summary Statistics
//!
//! Descriptive statistics of a set of values: the population itself, or the
//! statistics collected by the resampling loop.

use crate::percentiles::compute_percentiles;
use crate::statistic::{mean, std_dev};

/// Descriptive statistics of a set of values
#[derive(Debug, Clone, Default)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (divisor `n - 1`)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p25: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Compute summary statistics; all fields are zero for empty input
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let percentiles = compute_percentiles(samples);
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SummaryStatistics {
        count: samples.len(),
        mean: mean(samples),
        median: percentiles.p50,
        std_dev: std_dev(samples, 1),
        min,
        max,
        p5: percentiles.p5,
        p25: percentiles.p25,
        p75: percentiles.p75,
        p95: percentiles.p95,
    }
}

impl SummaryStatistics {
    /// Coefficient of variation in percent
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean.abs()) * 100.0
        }
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&samples);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert!((summary.median - 3.0).abs() < 1e-12);
        assert!((summary.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.count, 5);
        assert!((summary.iqr() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let summary = compute_summary(&[100.0, 100.0, 100.0]);
        assert_eq!(summary.coefficient_of_variation(), 0.0);

        let summary = compute_summary(&[-1.0, -3.0]);
        assert!(summary.coefficient_of_variation() > 0.0);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.max, 0.0);
    }
}
