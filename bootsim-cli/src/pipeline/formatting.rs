//! Output Formatting
//!
//! Human-readable output for a demonstration report:
//! - Population description and histogram
//! - Per statistic: population value vs simulated centre, theoretical vs
//!   simulated standard error, and the sampling-distribution histogram
//! - Confidence-interval tuples from the interval helper

use bootsim_report::{HistogramReport, Report};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report, bar_width: usize) -> String {
    let mut output = String::new();
    let cfg = &report.meta.config;
    let pop = &report.population;

    output.push('\n');
    output.push_str("Bootstrap Resampling\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    match (pop.target_mean, pop.target_std_dev) {
        (Some(mean), Some(std_dev)) => output.push_str(&format!(
            "Population: {} values drawn from Normal({:.2}, {:.2})  seed: {}\n",
            pop.summary.count, mean, std_dev, cfg.seed
        )),
        _ => output.push_str(&format!(
            "Population: {} observed values  seed: {}\n",
            pop.summary.count, cfg.seed
        )),
    }
    output.push_str(&format!(
        "      mean: {:.4}  std dev: {:.4}  min: {:.4}  max: {:.4}\n",
        pop.summary.mean, pop.std_dev, pop.summary.min, pop.summary.max
    ));
    if let Some(histogram) = &pop.histogram {
        output.push('\n');
        output.push_str(&render_histogram(histogram, bar_width));
    }

    for exp in &report.experiments {
        let t = &exp.theory;
        let label = statistic_label(&exp.statistic);

        output.push_str(&format!(
            "\nSampling distribution of the {} (n = {}, B = {})\n",
            label, exp.sample_size, exp.resamples
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "  population {:<8}  {:>12.4}\n",
            short_label(&exp.statistic),
            t.expected_center
        ));
        output.push_str(&format!(
            "  simulated {:<9}  {:>12.4}  (diff {:+.4})\n",
            short_label(&exp.statistic),
            t.simulated_center,
            t.simulated_center - t.expected_center
        ));
        output.push_str(&format!(
            "  expected SE          {:>12.4}\n",
            t.expected_standard_error
        ));
        output.push_str(&format!(
            "  simulated SE         {:>12.4}\n",
            t.simulated_standard_error
        ));
        output.push_str(&format!(
            "  population std dev   {:>12.4}\n",
            t.population_std_dev
        ));
        output.push_str(&format!(
            "  std dev from SE      {:>12.4}\n",
            t.implied_population_std_dev
        ));

        if let Some(histogram) = &exp.histogram {
            output.push('\n');
            output.push_str(&render_histogram(histogram, bar_width));
        }
    }

    if !report.intervals.is_empty() {
        let first = &report.intervals[0];
        output.push_str(&format!(
            "\nConfidence intervals ({:.0}%, observed sample n = {}, {} resamples)\n",
            first.level * 100.0,
            first.observed_sample_size,
            cfg.interval_iterations
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for ci in &report.intervals {
            let covers = if ci.covers_population { "✓" } else { "✗" };
            output.push_str(&format!(
                "  {:<8} {:>10.4}  ({:.4}, {:.4})  [{}]  population {:.4} {}\n",
                short_label(&ci.statistic),
                ci.point_estimate,
                ci.lower,
                ci.upper,
                ci.method,
                ci.population_value,
                covers
            ));
            if let Some(warning) = &ci.warning {
                output.push_str(&format!("           warning: {}\n", warning));
            }
        }
    }

    output.push_str(&format!(
        "\nCompleted in {:.1} ms\n",
        report.meta.duration_ms
    ));
    output
}

/// Draw a horizontal bar chart, one row per bin.
///
/// The longest bar is `bar_width` characters wide; any non-empty bin gets at
/// least one character.
pub fn render_histogram(histogram: &HistogramReport, bar_width: usize) -> String {
    let mut output = String::new();
    let max_count = histogram.counts.iter().copied().max().unwrap_or(0);
    if max_count == 0 {
        return output;
    }

    for (edges, &count) in histogram.bin_edges.windows(2).zip(&histogram.counts) {
        let len = if count == 0 {
            0
        } else {
            ((count as f64 / max_count as f64) * bar_width as f64)
                .round()
                .max(1.0) as usize
        };
        output.push_str(&format!(
            "  {:>12.4} .. {:<12.4} |{:<width$}| {}\n",
            edges[0],
            edges[1],
            "#".repeat(len),
            count,
            width = bar_width
        ));
    }
    output
}

fn statistic_label(name: &str) -> &str {
    match name {
        "std_dev" => "standard deviation",
        other => other,
    }
}

fn short_label(name: &str) -> &str {
    match name {
        "std_dev" => "std dev",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_histogram_scales_bars() {
        let histogram = HistogramReport {
            bin_edges: vec![0.0, 1.0, 2.0, 3.0],
            counts: vec![10, 5, 0],
        };
        let rendered = render_histogram(&histogram, 20);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('#').count(), 20);
        assert_eq!(lines[1].matches('#').count(), 10);
        assert_eq!(lines[2].matches('#').count(), 0);
        assert!(lines[0].ends_with("| 10"));
    }

    #[test]
    fn test_small_bins_stay_visible() {
        let histogram = HistogramReport {
            bin_edges: vec![0.0, 1.0, 2.0],
            counts: vec![1000, 1],
        };
        let rendered = render_histogram(&histogram, 10);
        assert_eq!(rendered.lines().nth(1).unwrap().matches('#').count(), 1);
    }

    #[test]
    fn test_empty_histogram_renders_nothing() {
        let histogram = HistogramReport {
            bin_edges: vec![0.0, 1.0],
            counts: vec![0],
        };
        assert!(render_histogram(&histogram, 10).is_empty());
    }
}
