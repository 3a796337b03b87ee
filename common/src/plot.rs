use core::fmt::Debug;
use std::path::{Path, PathBuf};

use downcast_rs::{Downcast, impl_downcast};
use dyn_clone::{DynClone, clone_trait_object};
use eyre::Result;
use tokio::fs::create_dir_all;
use tracing::debug;

use crate::{config::Settings, pairing::ComparisonPair};

#[typetag::serde(tag = "type")]
#[async_trait::async_trait]
pub trait Plot: Debug + DynClone + Downcast + Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;
    /// Renders the pairs and returns the files written
    ///
    /// Arguments:
    /// * `pairs` - Baseline/comparison pairs, in plotting order
    /// * `plot_path` - Output directory, already created
    /// * `settings` - Resolved settings
    async fn plot(
        &self,
        pairs: &[ComparisonPair],
        plot_path: &Path,
        settings: &Settings,
    ) -> Result<Vec<PathBuf>>;
}
clone_trait_object!(Plot);
impl_downcast!(Plot);

/// Runs every plot in order, stopping at the first failure
pub async fn plot(
    plots: &[Box<dyn Plot>],
    pairs: &[ComparisonPair],
    plot_path: &Path,
    settings: &Settings,
) -> Result<Vec<PathBuf>> {
    if plots.is_empty() {
        debug!("No plots");
        return Ok(Vec::new());
    }

    create_dir_all(plot_path).await?;
    let mut written = Vec::new();
    for plot in plots {
        debug!("Running {} over {} pairs", plot.name(), pairs.len());
        written.extend(plot.plot(pairs, plot_path, settings).await?);
    }
    Ok(written)
}
