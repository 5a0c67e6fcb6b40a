//! Bootstrap Confidence Intervals
//!
//! Resamples an observed sample at its own size and turns the resulting
//! distribution of a statistic into a confidence interval. Three methods:
//! - Percentile: quantiles of the bootstrap distribution
//! - Pivotal (basic): quantiles reflected around the point estimate
//! - BCa: bias-corrected and accelerated percentiles, acceleration from the jackknife

use crate::BCA_THRESHOLD;
use crate::percentiles::percentile_of_sorted;
use crate::statistic::{Statistic, std_dev};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the interval is derived from the bootstrap distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalMethod {
    /// BCa for fewer than `BCA_THRESHOLD` observations, percentile otherwise
    #[default]
    Auto,
    /// Standard percentile method
    Percentile,
    /// Basic bootstrap: `2θ̂ − q_hi, 2θ̂ − q_lo`
    Pivotal,
    /// Bias-corrected and accelerated
    Bca,
}

impl IntervalMethod {
    /// Resolve `Auto` for a sample of `n` observations
    pub fn resolve(self, n: usize) -> IntervalMethod {
        match self {
            IntervalMethod::Auto if n < BCA_THRESHOLD => IntervalMethod::Bca,
            IntervalMethod::Auto => IntervalMethod::Percentile,
            other => other,
        }
    }

    /// Short name used in reports and configuration
    pub fn name(self) -> &'static str {
        match self {
            IntervalMethod::Auto => "auto",
            IntervalMethod::Percentile => "percentile",
            IntervalMethod::Pivotal => "pivotal",
            IntervalMethod::Bca => "bca",
        }
    }
}

impl fmt::Display for IntervalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntervalMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(IntervalMethod::Auto),
            "percentile" => Ok(IntervalMethod::Percentile),
            "pivotal" | "basic" => Ok(IntervalMethod::Pivotal),
            "bca" => Ok(IntervalMethod::Bca),
            other => Err(format!("Unknown interval method: {}", other)),
        }
    }
}

/// Bootstrap interval configuration
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Number of bootstrap resamples (default: 10,000)
    pub iterations: usize,
    /// Confidence level (default: 0.95 for 95% CI)
    pub confidence_level: f64,
    /// Interval construction method
    pub method: IntervalMethod,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: crate::DEFAULT_INTERVAL_ITERATIONS,
            confidence_level: crate::DEFAULT_CONFIDENCE_LEVEL,
            method: IntervalMethod::Auto,
        }
    }
}

/// Confidence interval bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub level: f64,
}

impl ConfidenceInterval {
    /// Whether `value` lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Upper minus lower bound
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// `(lower, upper)`
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

/// Result of bootstrap analysis
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// Statistic the interval is for
    pub statistic: Statistic,
    /// Statistic evaluated on the observed sample
    pub point_estimate: f64,
    /// Confidence interval
    pub confidence_interval: ConfidenceInterval,
    /// Standard deviation of the bootstrap distribution
    pub standard_error: f64,
    /// Method actually used (never `Auto`)
    pub method: IntervalMethod,
    /// Number of resamples drawn
    pub iterations: usize,
    /// Warning message if any
    pub warning: Option<String>,
}

/// Errors that can occur during bootstrap
#[derive(Debug, Error, PartialEq)]
pub enum BootstrapError {
    #[error("Not enough samples: got {got}, need at least {min}")]
    NotEnoughSamples { got: usize, min: usize },

    #[error("Invalid confidence level: {0} (must be between 0 and 1)")]
    InvalidConfidenceLevel(f64),

    #[error("Number of bootstrap iterations must be at least 1")]
    ZeroIterations,

    #[error("Sample at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Compute a bootstrap confidence interval for `statistic` on `samples`
pub fn compute_bootstrap<R: Rng>(
    samples: &[f64],
    statistic: Statistic,
    config: &BootstrapConfig,
    rng: &mut R,
) -> Result<BootstrapResult, BootstrapError> {
    if samples.len() < 3 {
        return Err(BootstrapError::NotEnoughSamples {
            got: samples.len(),
            min: 3,
        });
    }
    if !(config.confidence_level > 0.0 && config.confidence_level < 1.0) {
        return Err(BootstrapError::InvalidConfidenceLevel(
            config.confidence_level,
        ));
    }
    if config.iterations == 0 {
        return Err(BootstrapError::ZeroIterations);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(BootstrapError::NonFinite { index, value });
    }

    let n = samples.len();
    let method = config.method.resolve(n);
    let point_estimate = statistic.compute(samples);

    if std_dev(samples, 0) == 0.0 {
        return Ok(BootstrapResult {
            statistic,
            point_estimate,
            confidence_interval: ConfidenceInterval {
                lower: point_estimate,
                upper: point_estimate,
                level: config.confidence_level,
            },
            standard_error: 0.0,
            method,
            iterations: 0,
            warning: Some("All samples have identical values".to_string()),
        });
    }

    let replicates = bootstrap_replicates(samples, statistic, config.iterations, rng);
    let mut sorted = replicates.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let (lower, upper) = match method {
        IntervalMethod::Pivotal => {
            pivotal_interval(&sorted, point_estimate, config.confidence_level)
        }
        IntervalMethod::Bca => bca_interval(
            samples,
            statistic,
            &sorted,
            point_estimate,
            config.confidence_level,
        ),
        _ => percentile_interval(&sorted, config.confidence_level),
    };

    let warning = if n < 10 {
        Some("Very small sample size may lead to unreliable estimates".to_string())
    } else {
        None
    };

    tracing::debug!(
        statistic = statistic.name(),
        method = method.name(),
        lower,
        upper,
        "bootstrap interval computed"
    );

    Ok(BootstrapResult {
        statistic,
        point_estimate,
        confidence_interval: ConfidenceInterval {
            lower,
            upper,
            level: config.confidence_level,
        },
        standard_error: std_dev(&replicates, 1),
        method,
        iterations: config.iterations,
        warning,
    })
}

/// Statistic of `iterations` full-size resamples of `samples`
fn bootstrap_replicates<R: Rng>(
    samples: &[f64],
    statistic: Statistic,
    iterations: usize,
    rng: &mut R,
) -> Vec<f64> {
    let n = samples.len();
    let mut buf = Vec::with_capacity(n);
    (0..iterations)
        .map(|_| {
            buf.clear();
            buf.extend((0..n).map(|_| samples[rng.gen_range(0..n)]));
            statistic.compute(&buf)
        })
        .collect()
}

/// Standard percentile interval
fn percentile_interval(sorted: &[f64], confidence: f64) -> (f64, f64) {
    let alpha = (1.0 - confidence) / 2.0;
    (
        percentile_of_sorted(sorted, alpha * 100.0),
        percentile_of_sorted(sorted, (1.0 - alpha) * 100.0),
    )
}

/// Basic (pivotal) interval
fn pivotal_interval(sorted: &[f64], theta_hat: f64, confidence: f64) -> (f64, f64) {
    let (q_lo, q_hi) = percentile_interval(sorted, confidence);
    (2.0 * theta_hat - q_hi, 2.0 * theta_hat - q_lo)
}

/// BCa (Bias-Corrected and Accelerated) interval
///
/// More accurate for small samples and skewed distributions.
fn bca_interval(
    samples: &[f64],
    statistic: Statistic,
    sorted: &[f64],
    theta_hat: f64,
    confidence: f64,
) -> (f64, f64) {
    let n = samples.len();
    let b = sorted.len();

    // Bias correction factor (z0)
    let count_below = sorted.iter().filter(|&&x| x < theta_hat).count();
    let prop = count_below as f64 / b as f64;
    let z0 = normal_quantile(prop.clamp(0.0001, 0.9999));

    // Acceleration factor (a) via jackknife
    let mut leave_one_out = Vec::with_capacity(n - 1);
    let jackknife: Vec<f64> = (0..n)
        .map(|i| {
            leave_one_out.clear();
            leave_one_out.extend(
                samples
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, &v)| v),
            );
            statistic.compute(&leave_one_out)
        })
        .collect();

    let jack_mean = jackknife.iter().sum::<f64>() / n as f64;
    let numerator: f64 = jackknife.iter().map(|x| (jack_mean - x).powi(3)).sum();
    let denominator: f64 = jackknife.iter().map(|x| (jack_mean - x).powi(2)).sum();

    let a = if denominator.abs() < 1e-10 {
        0.0
    } else {
        numerator / (6.0 * denominator.powf(1.5))
    };

    // Adjusted percentiles
    let alpha = (1.0 - confidence) / 2.0;
    let z_alpha = normal_quantile(alpha);
    let z_1_alpha = normal_quantile(1.0 - alpha);

    let alpha1 = normal_cdf(z0 + (z0 + z_alpha) / (1.0 - a * (z0 + z_alpha)));
    let alpha2 = normal_cdf(z0 + (z0 + z_1_alpha) / (1.0 - a * (z0 + z_1_alpha)));

    (
        percentile_of_sorted(sorted, alpha1 * 100.0),
        percentile_of_sorted(sorted, alpha2 * 100.0),
    )
}

/// Standard normal quantile (inverse CDF)
fn normal_quantile(p: f64) -> f64 {
    // Abramowitz and Stegun approximation (26.2.23)
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let p = p.clamp(1e-10, 1.0 - 1e-10);

    let sign = if p < 0.5 { -1.0 } else { 1.0 };
    let p = if p < 0.5 { p } else { 1.0 - p };

    let t = (-2.0 * p.ln()).sqrt();

    let c0 = 2.515517;
    let c1 = 0.802853;
    let c2 = 0.010328;
    let d1 = 1.432788;
    let d2 = 0.189269;
    let d3 = 0.001308;

    let x = t - (c0 + c1 * t + c2 * t * t) / (1.0 + d1 * t + d2 * t * t + d3 * t * t * t);

    sign * x
}

/// Standard normal CDF
fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function approximation
fn erf(x: f64) -> f64 {
    // Abramowitz and Stegun approximation (7.1.26)
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}
