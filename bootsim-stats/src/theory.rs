//! Theoretical Expectations
//!
//! Compares a simulated sampling distribution with what sampling theory
//! predicts from the population parameters:
//!
//! | statistic | expected centre | expected standard error |
//! |-----------|-----------------|-------------------------|
//! | mean      | μ               | σ / √n                  |
//! | std dev   | σ               | σ / √(2(n − 1))         |
//!
//! The standard-deviation row is the large-sample normal approximation.

use crate::distribution::SamplingDistribution;
use crate::population::Population;
use crate::statistic::Statistic;

/// Simulated values next to their theoretical counterparts
#[derive(Debug, Clone, PartialEq)]
pub struct TheoryComparison {
    pub statistic: Statistic,
    pub sample_size: usize,
    pub resamples: usize,
    /// Population mean
    pub population_mean: f64,
    /// Population standard deviation (divisor `n`)
    pub population_std_dev: f64,
    /// Value the sampling distribution should centre on
    pub expected_center: f64,
    /// Mean of the collected statistics
    pub simulated_center: f64,
    /// Theoretical standard error
    pub expected_standard_error: f64,
    /// Standard deviation of the collected statistics
    pub simulated_standard_error: f64,
    /// Population standard deviation recovered from the simulated standard error
    pub implied_population_std_dev: f64,
}

impl TheoryComparison {
    /// Signed difference between simulated and expected centre
    pub fn center_error(&self) -> f64 {
        self.simulated_center - self.expected_center
    }

    /// Relative difference between simulated and expected standard error
    pub fn relative_standard_error_error(&self) -> f64 {
        if self.expected_standard_error == 0.0 {
            0.0
        } else {
            (self.simulated_standard_error - self.expected_standard_error)
                / self.expected_standard_error
        }
    }
}

/// Scale factor k such that SE = σ / k
fn standard_error_divisor(statistic: Statistic, sample_size: usize) -> f64 {
    match statistic {
        Statistic::Mean => (sample_size as f64).sqrt(),
        Statistic::StdDev => (2.0 * sample_size.saturating_sub(1).max(1) as f64).sqrt(),
    }
}

/// Compare a sampling distribution with sampling theory
pub fn compare_to_theory(
    population: &Population,
    distribution: &SamplingDistribution,
) -> TheoryComparison {
    let population_mean = population.mean();
    let population_std_dev = population.std_dev();
    let statistic = distribution.statistic();
    let divisor = standard_error_divisor(statistic, distribution.sample_size());

    let expected_center = match statistic {
        Statistic::Mean => population_mean,
        Statistic::StdDev => population_std_dev,
    };
    let simulated_standard_error = distribution.standard_error();

    TheoryComparison {
        statistic,
        sample_size: distribution.sample_size(),
        resamples: distribution.len(),
        population_mean,
        population_std_dev,
        expected_center,
        simulated_center: distribution.mean(),
        expected_standard_error: population_std_dev / divisor,
        simulated_standard_error,
        implied_population_std_dev: simulated_standard_error * divisor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::{PopulationSpec, generate_population};
    use crate::resample::{ResampleConfig, resample};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(statistic: Statistic) -> (Population, SamplingDistribution) {
        let mut rng = StdRng::seed_from_u64(2024);
        let population = generate_population(
            &PopulationSpec {
                mean: 50.0,
                std_dev: 10.0,
                size: 10_000,
            },
            &mut rng,
        )
        .unwrap();
        let config = ResampleConfig {
            sample_size: 50,
            resamples: 4_000,
        };
        let dist = resample(&population, statistic, &config, &mut rng).unwrap();
        (population, dist)
    }

    #[test]
    fn test_mean_matches_theory() {
        let (population, dist) = setup(Statistic::Mean);
        let cmp = compare_to_theory(&population, &dist);

        assert_eq!(cmp.resamples, 4_000);
        assert!((cmp.expected_standard_error - population.std_dev() / 50f64.sqrt()).abs() < 1e-12);
        assert!(cmp.center_error().abs() < 0.3);
        assert!(cmp.relative_standard_error_error().abs() < 0.1);
        assert!((cmp.implied_population_std_dev - cmp.population_std_dev).abs() < 1.0);
    }

    #[test]
    fn test_std_dev_matches_theory() {
        let (population, dist) = setup(Statistic::StdDev);
        let cmp = compare_to_theory(&population, &dist);

        assert_eq!(cmp.expected_center, population.std_dev());
        assert!(cmp.center_error().abs() < 0.5);
        assert!(cmp.relative_standard_error_error().abs() < 0.15);
    }

    #[test]
    fn test_degenerate_population() {
        let population = Population::from_values(vec![4.0; 10]).unwrap();
        let dist = SamplingDistribution::new(Statistic::Mean, 5, vec![4.0; 20]);
        let cmp = compare_to_theory(&population, &dist);

        assert_eq!(cmp.expected_standard_error, 0.0);
        assert_eq!(cmp.relative_standard_error_error(), 0.0);
        assert_eq!(cmp.center_error(), 0.0);
    }
}
