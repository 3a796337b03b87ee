use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;
use tracing::debug;

/// One `metrics-<label>-*.json` file as written by the benchmark binary
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    pub n: u64,
    pub k: u64,
    /// Worker threads, excluding the coordinating one
    pub cores: u64,
    pub duration: f64,
    pub layers: Vec<RawLayer>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLayer {
    pub layer: Option<u8>,
    pub duration: LayerTimings,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerTimings {
    pub generating: Generating,
    pub pruning: Pruning,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generating {
    pub total: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pruning {
    pub total: f64,
    pub within_file: Option<f64>,
    pub within_cluster: Option<f64>,
    pub across_clusters: Option<f64>,
}

pub async fn load_result(path: &Path) -> Result<RawResult> {
    let data = read_to_string(path)
        .await
        .wrap_err_with(|| format!("Read {}", path.display()))?;
    serde_json::from_str(&data).wrap_err_with(|| format!("Parse {}", path.display()))
}

/// Loads every file in order, stopping at the first failure
pub async fn load_results(paths: &[PathBuf]) -> Result<Vec<RawResult>> {
    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        debug!("Loading {}", path.display());
        results.push(load_result(path).await?);
    }
    Ok(results)
}
