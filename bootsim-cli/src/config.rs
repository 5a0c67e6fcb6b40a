//! Configuration loading from bootsim.toml
//!
//! Configuration can be specified in a `bootsim.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use anyhow::Context;
use bootsim_stats::{
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_INTERVAL_ITERATIONS, DEFAULT_POPULATION_SIZE,
    DEFAULT_RESAMPLES, DEFAULT_SAMPLE_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up by [`BootsimConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "bootsim.toml";

/// Bootsim configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BootsimConfig {
    /// Synthetic population parameters
    #[serde(default)]
    pub population: PopulationConfig,
    /// Resampling loop parameters
    #[serde(default)]
    pub resampling: ResamplingConfig,
    /// Confidence-interval parameters
    #[serde(default)]
    pub interval: IntervalConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Population configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Mean of the normal distribution
    #[serde(default = "default_mean")]
    pub mean: f64,
    /// Standard deviation of the normal distribution
    #[serde(default = "default_std_dev")]
    pub std_dev: f64,
    /// Number of values to draw
    #[serde(default = "default_population_size")]
    pub size: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            mean: default_mean(),
            std_dev: default_std_dev(),
            size: default_population_size(),
        }
    }
}

fn default_mean() -> f64 {
    50.0
}
fn default_std_dev() -> f64 {
    10.0
}
fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}

/// Resampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResamplingConfig {
    /// Size of every bootstrap sample
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Number of bootstrap samples (B)
    #[serde(default = "default_resamples")]
    pub resamples: usize,
    /// RNG seed; a random seed is chosen and reported when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ResamplingConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            resamples: default_resamples(),
            seed: None,
        }
    }
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}
fn default_resamples() -> usize {
    DEFAULT_RESAMPLES
}

/// Confidence-interval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalConfig {
    /// Resamples drawn by the interval helper
    #[serde(default = "default_interval_iterations")]
    pub iterations: usize,
    /// Confidence level (e.g., 0.95 for 95%)
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    /// Method: "auto", "percentile", "pivotal" or "bca"
    #[serde(default = "default_method")]
    pub method: String,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            iterations: default_interval_iterations(),
            confidence_level: default_confidence_level(),
            method: default_method(),
        }
    }
}

fn default_interval_iterations() -> usize {
    DEFAULT_INTERVAL_ITERATIONS
}
fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}
fn default_method() -> String {
    "auto".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Number of histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Width of the longest histogram bar, in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    /// Show a progress bar during resampling
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            bins: default_bins(),
            bar_width: default_bar_width(),
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_bins() -> usize {
    30
}
fn default_bar_width() -> usize {
    50
}
fn default_progress() -> bool {
    true
}

impl BootsimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("invalid {}", path.display()))?;
        Ok(config)
    }

    /// Find `bootsim.toml` by walking up from the current directory
    pub fn discover_path() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let path = Self::discover_path()?;
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("ignoring {}: {:#}", path.display(), e);
                None
            }
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Bootsim Configuration

[population]
# Normal distribution the population is drawn from
mean = 50.0
std_dev = 10.0
# Number of values in the population
size = 10000

[resampling]
# Values drawn (with replacement) into every bootstrap sample
sample_size = 50
# Number of bootstrap samples (B)
resamples = 10000
# Fixed RNG seed for reproducible runs (uncomment to enable)
# seed = 42

[interval]
# Resamples drawn when building confidence intervals
iterations = 10000
# Confidence level (0.0 to 1.0)
confidence_level = 0.95
# Method: auto, percentile, pivotal, bca
method = "auto"

[output]
# Default output format: human, json, csv
format = "human"
# Histogram bins
bins = 30
# Width of the longest histogram bar in characters
bar_width = 50
# Show a progress bar while resampling
progress = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BootsimConfig::default();
        assert_eq!(config.population.size, 10_000);
        assert_eq!(config.resampling.sample_size, 50);
        assert!(config.resampling.seed.is_none());
        assert_eq!(config.interval.method, "auto");
        assert!(config.output.progress);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [population]
            mean = 5.0

            [resampling]
            resamples = 500
            seed = 7
        "#;

        let config: BootsimConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.population.mean, 5.0);
        assert_eq!(config.resampling.resamples, 500);
        assert_eq!(config.resampling.seed, Some(7));
        // Defaults should still apply
        assert_eq!(config.population.std_dev, 10.0);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: BootsimConfig = toml::from_str(&BootsimConfig::default_toml()).unwrap();
        let defaults = BootsimConfig::default();
        assert_eq!(config.population.size, defaults.population.size);
        assert_eq!(config.resampling.resamples, defaults.resampling.resamples);
        assert_eq!(config.interval.iterations, defaults.interval.iterations);
        assert_eq!(config.output.bins, defaults.output.bins);
    }

    #[test]
    fn test_load_missing_file() {
        let err = BootsimConfig::load("/nonexistent/bootsim.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
