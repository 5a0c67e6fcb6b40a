//! Synthetic Population
//!
//! The population is drawn once from a normal distribution and is read-only
//! afterwards. Every bootstrap sample is derived from it.

use crate::statistic::{mean, std_dev};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Parameters of the normal distribution the population is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationSpec {
    /// Mean of the generating distribution
    pub mean: f64,
    /// Standard deviation of the generating distribution
    pub std_dev: f64,
    /// Number of values to draw
    pub size: usize,
}

impl Default for PopulationSpec {
    fn default() -> Self {
        Self {
            mean: 50.0,
            std_dev: 10.0,
            size: crate::DEFAULT_POPULATION_SIZE,
        }
    }
}

/// Errors that can occur while building a population
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("Population must contain at least one value")]
    Empty,

    #[error("Invalid mean: {0} (must be finite)")]
    InvalidMean(f64),

    #[error("Invalid standard deviation: {0} (must be finite and non-negative)")]
    InvalidStdDev(f64),

    #[error("Population value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// An immutable set of observed values
#[derive(Debug, Clone)]
pub struct Population {
    values: Vec<f64>,
    spec: Option<PopulationSpec>,
}

impl Population {
    /// Wrap externally observed data.
    ///
    /// Rejects empty input and non-finite values.
    pub fn from_values(values: Vec<f64>) -> Result<Self, PopulationError> {
        if values.is_empty() {
            return Err(PopulationError::Empty);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PopulationError::NonFinite { index, value });
        }
        Ok(Self { values, spec: None })
    }

    /// The values, in draw order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed population
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Generating parameters, when the population is synthetic
    pub fn spec(&self) -> Option<&PopulationSpec> {
        self.spec.as_ref()
    }

    /// Population mean
    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    /// Population standard deviation (divisor `n`)
    pub fn std_dev(&self) -> f64 {
        std_dev(&self.values, 0)
    }
}

/// Draw a population of `spec.size` values from `Normal(spec.mean, spec.std_dev)`
pub fn generate_population<R: Rng>(
    spec: &PopulationSpec,
    rng: &mut R,
) -> Result<Population, PopulationError> {
    if spec.size == 0 {
        return Err(PopulationError::Empty);
    }
    if !spec.mean.is_finite() {
        return Err(PopulationError::InvalidMean(spec.mean));
    }
    // rand_distr accepts a negative sigma and reflects the distribution
    if !(spec.std_dev.is_finite() && spec.std_dev >= 0.0) {
        return Err(PopulationError::InvalidStdDev(spec.std_dev));
    }
    let normal = Normal::new(spec.mean, spec.std_dev)
        .map_err(|_| PopulationError::InvalidStdDev(spec.std_dev))?;

    let values: Vec<f64> = normal.sample_iter(&mut *rng).take(spec.size).collect();
    tracing::debug!(
        size = spec.size,
        mean = spec.mean,
        std_dev = spec.std_dev,
        "generated population"
    );

    Ok(Population {
        values,
        spec: Some(*spec),
    })
}
