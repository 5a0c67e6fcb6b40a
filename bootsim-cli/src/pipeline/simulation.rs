//! Simulation
//!
//! Generates the population and runs one resampling experiment per
//! statistic, sequentially, with an optional progress bar.

use super::intervals::compute_intervals;
use anyhow::Context;
use bootsim_stats::{
    BootstrapConfig, BootstrapResult, Histogram, Population, PopulationSpec, ResampleConfig,
    SamplingDistribution, Statistic, SummaryStatistics, TheoryComparison, compare_to_theory,
    compute_summary, draw_without_replacement, generate_population, resample_with_progress,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fully resolved configuration of one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seed of the RNG driving every stage
    pub seed: u64,
    /// Population parameters
    pub population: PopulationSpec,
    /// Resampling loop parameters
    pub resampling: ResampleConfig,
    /// Statistics to study, in order
    pub statistics: Vec<Statistic>,
    /// Histogram bins (0 disables histograms)
    pub bins: usize,
    /// Confidence-interval helper parameters
    pub interval: BootstrapConfig,
    /// Show a progress bar during resampling
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            population: PopulationSpec::default(),
            resampling: ResampleConfig::default(),
            statistics: Statistic::ALL.to_vec(),
            bins: 30,
            interval: BootstrapConfig::default(),
            show_progress: false,
        }
    }
}

/// One resampling experiment
#[derive(Debug, Clone)]
pub struct Experiment {
    pub distribution: SamplingDistribution,
    pub theory: TheoryComparison,
    pub histogram: Option<Histogram>,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub population: Population,
    pub population_summary: SummaryStatistics,
    pub population_histogram: Option<Histogram>,
    pub experiments: Vec<Experiment>,
    /// Sample drawn without replacement and handed to the interval helper
    pub observed_sample: Vec<f64>,
    pub intervals: Vec<BootstrapResult>,
}

/// Run the whole demonstration
pub fn run_simulation(config: &RunConfig) -> anyhow::Result<SimulationOutcome> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let population = generate_population(&config.population, &mut rng)
        .context("failed to generate population")?;
    let population_summary = compute_summary(population.values());
    let population_histogram = histogram_for(population.values(), config.bins)?;
    tracing::info!(
        size = population.len(),
        mean = population.mean(),
        std_dev = population.std_dev(),
        "population ready"
    );

    let mut experiments = Vec::with_capacity(config.statistics.len());
    for &statistic in &config.statistics {
        let pb = progress_bar(config.resampling.resamples, config.show_progress);
        pb.set_message(statistic.name());

        let distribution = resample_with_progress(
            &population,
            statistic,
            &config.resampling,
            &mut rng,
            |_| pb.inc(1),
        )
        .with_context(|| format!("resampling the {} failed", statistic))?;
        pb.finish_and_clear();

        let theory = compare_to_theory(&population, &distribution);
        let histogram = histogram_for(distribution.values(), config.bins)?;
        tracing::info!(
            statistic = statistic.name(),
            simulated_center = theory.simulated_center,
            simulated_standard_error = theory.simulated_standard_error,
            "sampling distribution ready"
        );

        experiments.push(Experiment {
            distribution,
            theory,
            histogram,
        });
    }

    let observed_sample = draw_without_replacement(
        population.values(),
        config.resampling.sample_size.min(population.len()),
        &mut rng,
    )
    .context("failed to draw the observed sample")?;
    let intervals = compute_intervals(
        &observed_sample,
        &config.statistics,
        &config.interval,
        &mut rng,
    )?;

    Ok(SimulationOutcome {
        population,
        population_summary,
        population_histogram,
        experiments,
        observed_sample,
        intervals,
    })
}

fn histogram_for(values: &[f64], bins: usize) -> anyhow::Result<Option<Histogram>> {
    if bins == 0 {
        return Ok(None);
    }
    Histogram::from_values(values, bins)
        .map(Some)
        .context("failed to bin values")
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> RunConfig {
        RunConfig {
            seed,
            population: PopulationSpec {
                mean: 20.0,
                std_dev: 4.0,
                size: 2_000,
            },
            resampling: ResampleConfig {
                sample_size: 25,
                resamples: 500,
            },
            bins: 12,
            interval: BootstrapConfig {
                iterations: 500,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_run_produces_one_experiment_per_statistic() {
        let outcome = run_simulation(&small_config(1)).unwrap();

        assert_eq!(outcome.population.len(), 2_000);
        assert_eq!(outcome.experiments.len(), 2);
        for exp in &outcome.experiments {
            assert_eq!(exp.distribution.len(), 500);
            assert_eq!(exp.distribution.sample_size(), 25);
            assert_eq!(exp.histogram.as_ref().unwrap().total(), 500);
        }
        assert_eq!(outcome.observed_sample.len(), 25);
        assert_eq!(outcome.intervals.len(), 2);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let a = run_simulation(&small_config(99)).unwrap();
        let b = run_simulation(&small_config(99)).unwrap();

        assert_eq!(a.population.values(), b.population.values());
        assert_eq!(
            a.experiments[1].distribution.values(),
            b.experiments[1].distribution.values()
        );
        assert_eq!(
            a.intervals[0].confidence_interval,
            b.intervals[0].confidence_interval
        );
    }

    #[test]
    fn test_zero_bins_disables_histograms() {
        let config = RunConfig {
            bins: 0,
            ..small_config(3)
        };
        let outcome = run_simulation(&config).unwrap();
        assert!(outcome.population_histogram.is_none());
        assert!(outcome.experiments.iter().all(|e| e.histogram.is_none()));
    }

    #[test]
    fn test_invalid_population_is_reported() {
        let mut config = small_config(0);
        config.population.std_dev = -2.0;
        let err = run_simulation(&config).unwrap_err();
        assert!(err.to_string().contains("population"));
    }
}
