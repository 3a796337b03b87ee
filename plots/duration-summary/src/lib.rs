use std::path::{Path, PathBuf};

use common::{config::Settings, pairing::ComparisonPair, plot::Plot, util::speedup};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Total runtime of every pair as a CSV table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationSummary {
    pub filename: String,
}

impl Default for DurationSummary {
    fn default() -> Self {
        DurationSummary {
            filename: "comparison-summary.csv".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub n: u64,
    pub k: u64,
    pub threads: u64,
    pub layers: usize,
    pub baseline_seconds: f64,
    pub comparison_seconds: f64,
    pub speedup: Option<f64>,
}

impl From<&ComparisonPair> for SummaryRow {
    fn from(pair: &ComparisonPair) -> Self {
        let baseline_seconds = pair.baseline.total_seconds();
        let comparison_seconds = pair.comparison.total_seconds();
        SummaryRow {
            n: pair.comparison.n,
            k: pair.comparison.k,
            threads: pair.comparison.threads,
            layers: pair.comparison.layers.len(),
            baseline_seconds,
            comparison_seconds,
            speedup: speedup(baseline_seconds, comparison_seconds),
        }
    }
}

#[async_trait::async_trait]
#[typetag::serde]
impl Plot for DurationSummary {
    fn name(&self) -> &'static str {
        "DurationSummary"
    }

    async fn plot(
        &self,
        pairs: &[ComparisonPair],
        plot_path: &Path,
        _settings: &Settings,
    ) -> Result<Vec<PathBuf>> {
        let filepath = plot_path.join(&self.filename);
        let mut writer = csv::Writer::from_path(&filepath)
            .wrap_err_with(|| format!("Create {}", filepath.display()))?;
        for row in pairs.iter().map(SummaryRow::from) {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("Wrote {} rows to {}", pairs.len(), filepath.display());
        Ok(vec![filepath])
    }
}
