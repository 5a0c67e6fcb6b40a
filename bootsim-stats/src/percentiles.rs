//! Percentile Computation
//!
//! Percentiles of a sampling distribution, used for summaries and for the
//! percentile and pivotal confidence intervals.

use std::cmp::Ordering;

/// Percentiles reported for every sampling distribution
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// 2.5th percentile
    pub p2_5: f64,
    /// 5th percentile
    pub p5: f64,
    /// 25th percentile
    pub p25: f64,
    /// 50th percentile (median)
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// 95th percentile
    pub p95: f64,
    /// 97.5th percentile
    pub p97_5: f64,
}

/// Compute a single percentile from samples
///
/// Uses linear interpolation between nearest ranks.
///
/// # Examples
///
/// ```
/// # use bootsim_stats::compute_percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&samples, 50.0), 3.0);
/// assert_eq!(compute_percentile(&samples, 25.0), 2.0);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    percentile_of_sorted(&sorted, percentile)
}

/// Percentile of an already sorted slice (linear interpolation)
pub(crate) fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted.len() {
        0 => return 0.0,
        1 => return sorted[0],
        _ => {}
    }

    let n = sorted.len();
    let p = (percentile / 100.0).clamp(0.0, 1.0);

    let rank = p * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(n - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

/// Compute all reported percentiles with a single sort
pub fn compute_percentiles(samples: &[f64]) -> Percentiles {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    Percentiles {
        p2_5: percentile_of_sorted(&sorted, 2.5),
        p5: percentile_of_sorted(&sorted, 5.0),
        p25: percentile_of_sorted(&sorted, 25.0),
        p50: percentile_of_sorted(&sorted, 50.0),
        p75: percentile_of_sorted(&sorted, 75.0),
        p95: percentile_of_sorted(&sorted, 95.0),
        p97_5: percentile_of_sorted(&sorted, 97.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        let samples = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interpolation() {
        let samples = vec![10.0, 20.0];
        assert!((compute_percentile(&samples, 25.0) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_percentile_clamps() {
        let samples = vec![1.0, 2.0, 3.0];
        assert_eq!(compute_percentile(&samples, -5.0), 1.0);
        assert_eq!(compute_percentile(&samples, 150.0), 3.0);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(compute_percentile(&[42.0], 90.0), 42.0);
        assert_eq!(compute_percentile(&[], 50.0), 0.0);
    }

    #[test]
    fn test_compute_all_percentiles() {
        let samples: Vec<f64> = (0..=1000).map(|x| x as f64).collect();
        let percentiles = compute_percentiles(&samples);

        assert!((percentiles.p2_5 - 25.0).abs() < 1e-9);
        assert!((percentiles.p50 - 500.0).abs() < 1e-9);
        assert!((percentiles.p97_5 - 975.0).abs() < 1e-9);
        assert!(percentiles.p5 < percentiles.p25 && percentiles.p75 < percentiles.p95);
    }
}
