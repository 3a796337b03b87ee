use std::path::{Path, PathBuf};

use common::{
    config::{Config, Settings},
    discovery::{discover, label_pattern},
    pairing::pair_results,
    plot::{Plot, plot},
    result::load_results,
    summary::{SummaryResult, sort_by_n, summarize},
};
use duration_summary::DurationSummary;
use eyre::{Context, Result};
use layer_comparison::LayerComparison;
use tokio::fs::read_to_string;
use tracing::{debug, info, warn};

pub const DEFAULT_CONFIG: &str = "compare.yaml";

/// Reads the config file. A missing default file means all defaults.
pub async fn load_config(config_file: Option<&Path>) -> Result<Config> {
    let (path, explicit) = match config_file {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG), false),
    };
    if !explicit && !path.exists() {
        debug!("No {DEFAULT_CONFIG}, using defaults");
        return Ok(Config::default());
    }
    let data = read_to_string(path)
        .await
        .wrap_err_with(|| format!("Read {}", path.display()))?;
    serde_yml::from_str(&data).wrap_err_with(|| format!("Parse {}", path.display()))
}

/// Links every plot crate so their `type` tags deserialize
pub fn init_plots() {
    std::hint::black_box((LayerComparison::default(), DurationSummary::default()));
}

/// Configured plots, or a single [`LayerComparison`]
pub fn available_plots(config: &Config) -> Vec<Box<dyn Plot>> {
    config
        .plots
        .clone()
        .unwrap_or_else(|| vec![Box::new(LayerComparison::default())])
}

/// Discovers, loads, summarizes and sorts the results of one implementation
pub async fn load_label(settings: &Settings, label: &str) -> Result<Vec<SummaryResult>> {
    let pattern = label_pattern(&settings.pattern, label);
    let files = discover(&settings.results_dir, &pattern).await?;
    if files.is_empty() {
        warn!(
            "No {label} results matching {pattern} in {}",
            settings.results_dir.display()
        );
    }
    let raw = load_results(&files)
        .await
        .wrap_err_with(|| format!("Load {label} results"))?;
    let mut summaries = summarize(&raw);
    sort_by_n(&mut summaries);
    Ok(summaries)
}

/// Plots every baseline/comparison pair and returns the files written
pub async fn run(settings: &Settings, plots: &[Box<dyn Plot>]) -> Result<Vec<PathBuf>> {
    let labels = settings.labels();
    let baseline = load_label(settings, &labels.baseline).await?;
    let comparison = load_label(settings, &labels.comparison).await?;
    info!(
        "Loaded {} {} and {} {} results",
        baseline.len(),
        labels.baseline,
        comparison.len(),
        labels.comparison
    );

    let pairs = pair_results(baseline, comparison, settings.pairing, &labels)?;
    plot(plots, &pairs, &settings.output_dir, settings).await
}

/// One line per result, grouped by implementation
pub async fn list(settings: &Settings) -> Result<Vec<String>> {
    let labels = settings.labels();
    let mut lines = Vec::new();
    for label in [&labels.baseline, &labels.comparison] {
        let results = load_label(settings, label).await?;
        lines.push(format!("{label}: {} results", results.len()));
        for result in results {
            lines.push(format!(
                "  N{} K{} {} threads {} layers {:.4}s",
                result.n,
                result.k,
                result.threads,
                result.layers.len(),
                result.total_seconds()
            ));
        }
    }
    Ok(lines)
}
