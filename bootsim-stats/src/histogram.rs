//! Histogram Binning
//!
//! Equal-width bins over the observed range. Rendering is left to callers.

use thiserror::Error;

/// Errors that can occur while binning values
#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    #[error("Histogram needs at least one bin")]
    NoBins,

    #[error("Cannot build a histogram from no values")]
    NoValues,

    #[error("Value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("Range {min} to {max} is too wide to bin")]
    RangeOverflow { min: f64, max: f64 },
}

/// A 1D histogram with equal-width bins
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges (length = number of bins + 1), strictly increasing
    pub bin_edges: Vec<f64>,
    /// Count of values per bin
    pub counts: Vec<usize>,
    /// Smallest binned value
    pub min: f64,
    /// Largest binned value
    pub max: f64,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// The right edge is inclusive so the maximum lands in the last bin.
    /// When every value is identical the bins span a unit-wide range centred
    /// on that value.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::NoBins);
        }
        if values.is_empty() {
            return Err(HistogramError::NoValues);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(HistogramError::NonFinite { index, value });
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let (lo, hi) = if max > min {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        };
        if !(hi - lo).is_finite() {
            return Err(HistogramError::RangeOverflow { min, max });
        }
        let width = (hi - lo) / bins as f64;

        let bin_edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self {
            bin_edges,
            counts,
            min,
            max,
        })
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Width shared by every bin
    pub fn bin_width(&self) -> f64 {
        match (self.bin_edges.first(), self.bin_edges.last()) {
            (Some(first), Some(last)) if !self.counts.is_empty() => {
                (last - first) / self.counts.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Midpoint of each bin
    pub fn bin_centers(&self) -> Vec<f64> {
        self.bin_edges
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .collect()
    }

    /// Largest bin count
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_edges() {
        let values: Vec<f64> = (0..100).map(|x| x as f64).collect();
        let histogram = Histogram::from_values(&values, 10).unwrap();

        assert_eq!(histogram.bins(), 10);
        assert_eq!(histogram.bin_edges.len(), 11);
        assert_eq!(histogram.total(), 100);
        assert_eq!(histogram.counts, vec![10; 10]);
        assert!(histogram.bin_edges.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(histogram.bin_edges[10], 99.0);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let histogram = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(histogram.counts, vec![2, 3]);
    }

    #[test]
    fn test_constant_values() {
        let histogram = Histogram::from_values(&[5.0; 8], 4).unwrap();
        assert_eq!(histogram.total(), 8);
        assert_eq!(histogram.bin_edges[0], 4.5);
        assert_eq!(histogram.bin_edges[4], 5.5);
        assert!((histogram.bin_width() - 0.25).abs() < 1e-12);
        assert_eq!(histogram.max_count(), 8);
    }

    #[test]
    fn test_bin_centers() {
        let histogram = Histogram::from_values(&[0.0, 4.0], 2).unwrap();
        assert_eq!(histogram.bin_centers(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Histogram::from_values(&[1.0], 0),
            Err(HistogramError::NoBins)
        );
        assert_eq!(Histogram::from_values(&[], 3), Err(HistogramError::NoValues));
        assert!(matches!(
            Histogram::from_values(&[1.0, f64::NAN], 3),
            Err(HistogramError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_range_too_wide() {
        assert_eq!(
            Histogram::from_values(&[-1e308, 1e308], 4),
            Err(HistogramError::RangeOverflow {
                min: -1e308,
                max: 1e308
            })
        );

        let histogram = Histogram::from_values(&[-1e307, 1e307], 4).unwrap();
        assert!(histogram.bin_edges.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(histogram.total(), 2);
    }
}
