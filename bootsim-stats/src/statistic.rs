//! Statistics computed on a single sample
//!
//! The set is closed: the demonstration studies the sampling distribution of
//! the mean and of the standard deviation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Statistic recorded once per bootstrap sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Arithmetic mean
    Mean,
    /// Sample standard deviation (divisor `n - 1`)
    StdDev,
}

impl Statistic {
    /// Every supported statistic, in reporting order
    pub const ALL: [Statistic; 2] = [Statistic::Mean, Statistic::StdDev];

    /// Evaluate the statistic on `samples`
    pub fn compute(self, samples: &[f64]) -> f64 {
        match self {
            Statistic::Mean => mean(samples),
            Statistic::StdDev => std_dev(samples, 1),
        }
    }

    /// Short machine-friendly name
    pub fn name(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::StdDev => "std_dev",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown statistic name
#[derive(Debug, Error)]
#[error("Unknown statistic: {0} (expected mean or std)")]
pub struct ParseStatisticError(String);

impl FromStr for Statistic {
    type Err = ParseStatisticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Statistic::Mean),
            "std" | "std-dev" | "std_dev" | "stddev" => Ok(Statistic::StdDev),
            other => Err(ParseStatisticError(other.to_string())),
        }
    }
}

/// Arithmetic mean (0 for an empty slice)
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Variance with `ddof` delta degrees of freedom.
///
/// Returns 0 when there are not more samples than `ddof`.
pub fn variance(samples: &[f64], ddof: usize) -> f64 {
    if samples.len() <= ddof {
        return 0.0;
    }
    let m = mean(samples);
    samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (samples.len() - ddof) as f64
}

/// Standard deviation with `ddof` delta degrees of freedom
pub fn std_dev(samples: &[f64], ddof: usize) -> f64 {
    variance(samples, ddof).sqrt()
}
