use serde::{Deserialize, Serialize};

use crate::result::{RawLayer, RawResult};

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerDuration {
    pub generating: f64,
    pub pruning: f64,
}

impl LayerDuration {
    pub fn combined(&self) -> f64 {
        self.generating + self.pruning
    }
}

impl From<&RawLayer> for LayerDuration {
    fn from(layer: &RawLayer) -> Self {
        LayerDuration {
            generating: layer.duration.generating.total,
            pruning: layer.duration.pruning.total,
        }
    }
}

/// Per-layer timings of one benchmark run, layers in computation order
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub n: u64,
    pub k: u64,
    pub threads: u64,
    pub duration: f64,
    pub layers: Vec<LayerDuration>,
}

impl SummaryResult {
    pub fn key(&self) -> (u64, u64) {
        (self.n, self.k)
    }

    pub fn combined_durations(&self) -> Vec<f64> {
        self.layers.iter().map(LayerDuration::combined).collect()
    }

    /// Sum of generating and pruning over all layers
    pub fn total_seconds(&self) -> f64 {
        self.layers
            .iter()
            .map(LayerDuration::combined)
            .fold(0.0, |acc, d| acc + d)
    }
}

impl From<&RawResult> for SummaryResult {
    fn from(raw: &RawResult) -> Self {
        SummaryResult {
            n: raw.n,
            k: raw.k,
            threads: raw.cores.saturating_add(1),
            duration: raw.duration,
            layers: raw.layers.iter().map(LayerDuration::from).collect(),
        }
    }
}

pub fn summarize(raw: &[RawResult]) -> Vec<SummaryResult> {
    raw.iter().map(SummaryResult::from).collect()
}

/// Stable, so runs sharing an `n` keep their load order
pub fn sort_by_n(results: &mut [SummaryResult]) {
    results.sort_by_key(|result| result.n);
}
