#![warn(missing_docs)]
//! Bootsim CLI Library
//!
//! Command-line driver for the bootstrap demonstration: generate a normal
//! population, resample it B times per statistic, compare the sampling
//! distributions with theory, and print histograms and confidence intervals.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     bootsim_cli::run()
//! }
//! ```

mod config;
mod pipeline;

pub use config::*;
pub use pipeline::{
    Experiment, RunConfig, SimulationOutcome, build_report, compute_intervals,
    format_human_output, render_histogram, run_simulation,
};

use anyhow::Context;
use bootsim_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use bootsim_stats::{
    BootstrapConfig, IntervalMethod, PopulationSpec, ResampleConfig, Statistic,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Bootsim CLI arguments
#[derive(Parser, Debug)]
#[command(name = "bootsim")]
#[command(author, version, about = "Bootsim - bootstrap resampling demonstration")]
pub struct Cli {
    /// Optional subcommand (Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: discover bootsim.toml upwards from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of values in the population
    #[arg(long)]
    pub population_size: Option<usize>,

    /// Mean of the population's normal distribution
    #[arg(long, allow_negative_numbers = true)]
    pub mean: Option<f64>,

    /// Standard deviation of the population's normal distribution
    #[arg(long)]
    pub std_dev: Option<f64>,

    /// Values drawn with replacement into each bootstrap sample
    #[arg(long, short = 'n')]
    pub sample_size: Option<usize>,

    /// Number of bootstrap samples (B)
    #[arg(long, short = 'B')]
    pub resamples: Option<usize>,

    /// Only study this statistic (mean or std); repeatable
    #[arg(long = "statistic", short = 's')]
    pub statistics: Vec<Statistic>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Histogram bins (0 disables histograms)
    #[arg(long)]
    pub bins: Option<usize>,

    /// Confidence level for intervals
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Interval method: auto, percentile, pivotal, bca
    #[arg(long)]
    pub method: Option<IntervalMethod>,

    /// Resamples drawn by the interval helper
    #[arg(long)]
    pub interval_iterations: Option<usize>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demonstration (default)
    Run,
    /// Print a default bootsim.toml
    Init,
}

/// Run the Bootsim CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Bootsim CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", BootsimConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            let config = match &cli.config {
                Some(path) => BootsimConfig::load(path)?,
                None => BootsimConfig::discover().unwrap_or_default(),
            };
            run_demonstration(&cli, &config)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "bootsim=debug" } else { "bootsim=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded in a larger binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build a RunConfig by layering: bootsim.toml defaults → CLI overrides.
pub fn build_run_config(cli: &Cli, config: &BootsimConfig) -> anyhow::Result<RunConfig> {
    let method = match cli.method {
        Some(method) => method,
        None => config
            .interval
            .method
            .parse::<IntervalMethod>()
            .map_err(|e| anyhow::anyhow!(e))
            .context("invalid [interval] method in configuration")?,
    };

    let statistics = if cli.statistics.is_empty() {
        Statistic::ALL.to_vec()
    } else {
        let mut chosen = Vec::new();
        for &statistic in &cli.statistics {
            if !chosen.contains(&statistic) {
                chosen.push(statistic);
            }
        }
        chosen
    };

    let run_config = RunConfig {
        seed: cli
            .seed
            .or(config.resampling.seed)
            .unwrap_or_else(rand::random),
        population: PopulationSpec {
            mean: cli.mean.unwrap_or(config.population.mean),
            std_dev: cli.std_dev.unwrap_or(config.population.std_dev),
            size: cli.population_size.unwrap_or(config.population.size),
        },
        resampling: ResampleConfig {
            sample_size: cli.sample_size.unwrap_or(config.resampling.sample_size),
            resamples: cli.resamples.unwrap_or(config.resampling.resamples),
        },
        statistics,
        bins: cli.bins.unwrap_or(config.output.bins),
        interval: BootstrapConfig {
            iterations: cli
                .interval_iterations
                .unwrap_or(config.interval.iterations),
            confidence_level: cli.confidence.unwrap_or(config.interval.confidence_level),
            method,
        },
        show_progress: config.output.progress && !cli.no_progress,
    };

    if run_config.resampling.sample_size > run_config.population.size {
        tracing::warn!(
            "sample size {} exceeds population size {}; the observed sample will be the whole population",
            run_config.resampling.sample_size,
            run_config.population.size
        );
    }
    if run_config.resampling.resamples > 0 && run_config.resampling.resamples < 100 {
        tracing::warn!(
            "resamples={} is very low; the sampling distribution will be coarse. Use >= 1000.",
            run_config.resampling.resamples
        );
    }

    Ok(run_config)
}

/// Pick the output format: `--format` first, then `[output] format`.
///
/// An unknown name falls back to human output.
fn resolve_format(cli: &Cli, config: &BootsimConfig) -> OutputFormat {
    let format_str = cli.format.as_deref().unwrap_or(&config.output.format);
    format_str.parse().unwrap_or_else(|e| {
        tracing::warn!("{}; falling back to human output", e);
        OutputFormat::Human
    })
}

fn render_report(
    report: &Report,
    format: OutputFormat,
    bar_width: usize,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Human => format_human_output(report, bar_width),
    })
}

fn run_demonstration(cli: &Cli, config: &BootsimConfig) -> anyhow::Result<()> {
    let format = resolve_format(cli, config);

    let run_config = build_run_config(cli, config)?;
    tracing::info!(
        seed = run_config.seed,
        sample_size = run_config.resampling.sample_size,
        resamples = run_config.resampling.resamples,
        "starting bootstrap demonstration"
    );

    let start_time = Instant::now();
    let outcome = run_simulation(&run_config)?;
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let report = build_report(&outcome, &run_config, duration_ms);

    let rendered = render_report(&report, format, config.output.bar_width)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "bootsim",
            "--seed",
            "5",
            "-n",
            "30",
            "--mean",
            "-3.5",
            "--method",
            "pivotal",
            "-s",
            "std",
            "-s",
            "std",
            "--no-progress",
        ]);
        let config = BootsimConfig::default();
        let run = build_run_config(&cli, &config).unwrap();

        assert_eq!(run.seed, 5);
        assert_eq!(run.resampling.sample_size, 30);
        assert_eq!(run.resampling.resamples, config.resampling.resamples);
        assert_eq!(run.population.mean, -3.5);
        assert_eq!(run.interval.method, IntervalMethod::Pivotal);
        assert_eq!(run.statistics, vec![Statistic::StdDev]);
        assert!(!run.show_progress);
    }

    #[test]
    fn test_config_seed_used_when_flag_absent() {
        let cli = Cli::parse_from(["bootsim"]);
        let mut config = BootsimConfig::default();
        config.resampling.seed = Some(77);
        let run = build_run_config(&cli, &config).unwrap();
        assert_eq!(run.seed, 77);
        assert_eq!(run.statistics, Statistic::ALL.to_vec());
    }

    #[test]
    fn test_invalid_config_method() {
        let cli = Cli::parse_from(["bootsim"]);
        let mut config = BootsimConfig::default();
        config.interval.method = "jackknife".to_string();
        assert!(build_run_config(&cli, &config).is_err());
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bootsim-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_run_writes_csv_to_output_file() {
        let path = scratch_path("run.csv");
        let path_str = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "bootsim",
            "--format",
            "csv",
            "-o",
            path_str.as_str(),
            "--seed",
            "1",
            "--population-size",
            "2000",
            "-n",
            "20",
            "-B",
            "200",
            "--interval-iterations",
            "200",
            "--no-progress",
            "run",
        ]);
        run_with_cli(cli).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<&str> = written.lines().collect();
        assert!(lines[0].starts_with("statistic,sample_size,resamples"));
        assert!(lines[1].starts_with("mean,20,200,"));
        assert!(lines[2].starts_with("std_dev,20,200,"));
        assert!(lines.iter().any(|l| l.starts_with("statistic,method,level")));
    }

    #[test]
    fn test_run_writes_json_to_output_file() {
        let path = scratch_path("run.json");
        let path_str = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "bootsim",
            "--format",
            "json",
            "--output",
            path_str.as_str(),
            "--seed",
            "9",
            "--population-size",
            "1000",
            "-B",
            "150",
            "--interval-iterations",
            "150",
            "-s",
            "mean",
            "--no-progress",
        ]);
        run_with_cli(cli).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let report: Report = serde_json::from_str(&written).unwrap();
        assert_eq!(report.meta.config.seed, 9);
        assert_eq!(report.experiments.len(), 1);
        assert_eq!(report.experiments[0].statistic, "mean");
    }

    #[test]
    fn test_unknown_format_falls_back_to_human() {
        let config = BootsimConfig::default();

        let cli = Cli::parse_from(["bootsim", "--format", "xml"]);
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Human);

        let cli = Cli::parse_from(["bootsim", "--format", "csv"]);
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Csv);

        let mut from_file = BootsimConfig::default();
        from_file.output.format = "json".to_string();
        let cli = Cli::parse_from(["bootsim"]);
        assert_eq!(resolve_format(&cli, &from_file), OutputFormat::Json);
    }

    #[test]
    fn test_render_report_dispatches_on_format() {
        let cli = Cli::parse_from([
            "bootsim",
            "--seed",
            "3",
            "--population-size",
            "500",
            "-B",
            "100",
            "--interval-iterations",
            "100",
            "--no-progress",
        ]);
        let run_config = build_run_config(&cli, &BootsimConfig::default()).unwrap();
        let outcome = run_simulation(&run_config).unwrap();
        let report = build_report(&outcome, &run_config, 1.0);

        let json = render_report(&report, OutputFormat::Json, 20).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let csv = render_report(&report, OutputFormat::Csv, 20).unwrap();
        assert!(csv.starts_with("statistic,"));
        let human = render_report(&report, OutputFormat::Human, 20).unwrap();
        assert!(human.contains("Bootstrap Resampling"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["bootsim", "--config", "/nonexistent/bootsim.toml"]);
        assert!(run_with_cli(cli).is_err());
    }

    #[test]
    fn test_init_prints_default_config() {
        let cli = Cli::parse_from(["bootsim", "init"]);
        run_with_cli(cli).unwrap();

        let parsed: BootsimConfig = toml::from_str(&BootsimConfig::default_toml()).unwrap();
        assert_eq!(parsed.resampling.resamples, BootsimConfig::default().resampling.resamples);
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::parse_from(["bootsim", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init)));
        let cli = Cli::parse_from(["bootsim", "--format", "json", "run"]);
        assert!(matches!(cli.command, Some(Commands::Run)));
        assert_eq!(cli.format.as_deref(), Some("json"));
    }
}
