//! Bootstrap Resampling
//!
//! The Monte Carlo loop: B independent samples of a fixed size, each drawn
//! with replacement from the population, each reduced to one statistic.
//! The loop is sequential; a single RNG makes a run reproducible from its seed.

use crate::distribution::SamplingDistribution;
use crate::population::Population;
use crate::statistic::Statistic;
use rand::Rng;
use rand::seq::index;
use thiserror::Error;

/// Resampling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleConfig {
    /// Number of values in every bootstrap sample
    pub sample_size: usize,
    /// Number of bootstrap samples (B)
    pub resamples: usize,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            sample_size: crate::DEFAULT_SAMPLE_SIZE,
            resamples: crate::DEFAULT_RESAMPLES,
        }
    }
}

/// Errors that can occur during resampling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResampleError {
    #[error("Cannot resample from an empty dataset")]
    EmptyData,

    #[error("Sample size must be at least 1")]
    ZeroSampleSize,

    #[error("Number of resamples must be at least 1")]
    ZeroResamples,

    #[error("Sample size {requested} exceeds dataset size {available} when drawing without replacement")]
    SampleTooLarge { requested: usize, available: usize },
}

/// Draw `size` values uniformly with replacement from `data`.
///
/// Returns an empty vector when `data` is empty.
pub fn draw_with_replacement<R: Rng>(data: &[f64], size: usize, rng: &mut R) -> Vec<f64> {
    let mut out = Vec::with_capacity(size);
    fill_with_replacement(data, size, rng, &mut out);
    out
}

/// Replace the contents of `out` with `size` values drawn with replacement
fn fill_with_replacement<R: Rng>(data: &[f64], size: usize, rng: &mut R, out: &mut Vec<f64>) {
    out.clear();
    if data.is_empty() {
        return;
    }
    out.extend((0..size).map(|_| data[rng.gen_range(0..data.len())]));
}

/// Draw `size` distinct positions of `data` without replacement
pub fn draw_without_replacement<R: Rng>(
    data: &[f64],
    size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, ResampleError> {
    if data.is_empty() {
        return Err(ResampleError::EmptyData);
    }
    if size > data.len() {
        return Err(ResampleError::SampleTooLarge {
            requested: size,
            available: data.len(),
        });
    }
    Ok(index::sample(rng, data.len(), size)
        .into_iter()
        .map(|i| data[i])
        .collect())
}

/// Build the sampling distribution of `statistic` by resampling `population`
pub fn resample<R: Rng>(
    population: &Population,
    statistic: Statistic,
    config: &ResampleConfig,
    rng: &mut R,
) -> Result<SamplingDistribution, ResampleError> {
    resample_with_progress(population, statistic, config, rng, |_| {})
}

/// Same as [`resample`], calling `on_progress` with the number of completed
/// repetitions after each one.
pub fn resample_with_progress<R, F>(
    population: &Population,
    statistic: Statistic,
    config: &ResampleConfig,
    rng: &mut R,
    mut on_progress: F,
) -> Result<SamplingDistribution, ResampleError>
where
    R: Rng,
    F: FnMut(usize),
{
    validate(population.values(), config)?;

    let data = population.values();
    let mut sample = Vec::with_capacity(config.sample_size);
    let mut collected = Vec::with_capacity(config.resamples);

    for done in 1..=config.resamples {
        fill_with_replacement(data, config.sample_size, rng, &mut sample);
        debug_assert_eq!(sample.len(), config.sample_size);
        collected.push(statistic.compute(&sample));
        on_progress(done);
    }

    tracing::debug!(
        statistic = statistic.name(),
        sample_size = config.sample_size,
        resamples = config.resamples,
        "resampling complete"
    );

    Ok(SamplingDistribution::new(
        statistic,
        config.sample_size,
        collected,
    ))
}

fn validate(data: &[f64], config: &ResampleConfig) -> Result<(), ResampleError> {
    if data.is_empty() {
        return Err(ResampleError::EmptyData);
    }
    if config.sample_size == 0 {
        return Err(ResampleError::ZeroSampleSize);
    }
    if config.resamples == 0 {
        return Err(ResampleError::ZeroResamples);
    }
    Ok(())
}
