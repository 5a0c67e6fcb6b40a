//! Report Building
//!
//! Converts a [`SimulationOutcome`] into the serializable [`Report`].

use super::simulation::{RunConfig, SimulationOutcome};
use bootsim_report::{
    ExperimentReport, IntervalReport, PopulationReport, Report, ReportConfig, ReportMeta,
    ReportSchema,
};
use bootsim_stats::Statistic;
use chrono::Utc;

/// Build a complete Report from a simulation outcome
pub fn build_report(outcome: &SimulationOutcome, config: &RunConfig, duration_ms: f64) -> Report {
    let population = &outcome.population;

    let experiments = outcome
        .experiments
        .iter()
        .map(|exp| ExperimentReport::new(&exp.distribution, &exp.theory, exp.histogram.as_ref()))
        .collect();

    let intervals = outcome
        .intervals
        .iter()
        .map(|result| {
            let population_value = match result.statistic {
                Statistic::Mean => population.mean(),
                Statistic::StdDev => population.std_dev(),
            };
            IntervalReport::new(result, outcome.observed_sample.len(), population_value)
        })
        .collect();

    Report {
        meta: ReportMeta {
            schema: ReportSchema::current(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            duration_ms,
            config: ReportConfig {
                seed: config.seed,
                population_size: config.population.size,
                population_mean: config.population.mean,
                population_std_dev: config.population.std_dev,
                sample_size: config.resampling.sample_size,
                resamples: config.resampling.resamples,
                histogram_bins: config.bins,
                interval_iterations: config.interval.iterations,
                confidence_level: config.interval.confidence_level,
                interval_method: config.interval.method.name().to_string(),
            },
        },
        population: PopulationReport::new(
            population,
            &outcome.population_summary,
            outcome.population_histogram.as_ref(),
        ),
        experiments,
        intervals,
    }
}
