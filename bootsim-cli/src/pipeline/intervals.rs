//! Confidence Intervals
//!
//! Hands the observed sample to the bootstrap interval helper, once per statistic.

use anyhow::Context;
use bootsim_stats::{BootstrapConfig, BootstrapResult, Statistic, compute_bootstrap};
use rand::Rng;

/// Smallest observed sample the interval helper accepts
const MIN_OBSERVED_SAMPLE: usize = 3;

/// Compute a bootstrap confidence interval for every statistic.
///
/// Returns no intervals when the observed sample is too small to bootstrap.
pub fn compute_intervals<R: Rng>(
    observed_sample: &[f64],
    statistics: &[Statistic],
    config: &BootstrapConfig,
    rng: &mut R,
) -> anyhow::Result<Vec<BootstrapResult>> {
    if observed_sample.len() < MIN_OBSERVED_SAMPLE {
        tracing::warn!(
            "observed sample has {} values; at least {} are needed for confidence intervals",
            observed_sample.len(),
            MIN_OBSERVED_SAMPLE
        );
        return Ok(Vec::new());
    }

    statistics
        .iter()
        .map(|&statistic| {
            let result = compute_bootstrap(observed_sample, statistic, config, rng)
                .with_context(|| format!("confidence interval for the {} failed", statistic))?;
            if let Some(warning) = &result.warning {
                tracing::warn!(statistic = statistic.name(), "{}", warning);
            }
            Ok(result)
        })
        .collect()
}
