use std::path::{Path, PathBuf};

use common::{
    config::Settings,
    error::CompareError,
    pairing::{ComparisonPair, Labels, LayerMismatch},
    plot::Plot,
    util::show_image,
};
use eyre::{Result, eyre};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Per-layer combined duration of both implementations, one PNG per pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerComparison {
    pub width: u32,
    pub height: u32,
}

impl Default for LayerComparison {
    fn default() -> Self {
        LayerComparison {
            width: 640,
            height: 480,
        }
    }
}

#[async_trait::async_trait]
#[typetag::serde]
impl Plot for LayerComparison {
    fn name(&self) -> &'static str {
        "LayerComparison"
    }

    async fn plot(
        &self,
        pairs: &[ComparisonPair],
        plot_path: &Path,
        settings: &Settings,
    ) -> Result<Vec<PathBuf>> {
        let labels = settings.labels();
        let mut written = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let chart = ComparisonChart::new(pair, &labels, settings.layer_mismatch)?;
            let filepath = plot_path.join(&chart.filename);
            chart.render(&filepath, (self.width, self.height))?;
            info!("Wrote {}", filepath.display());

            if settings.show {
                show_image(&settings.viewer, &filepath).await?;
            }
            written.push(filepath);
        }
        Ok(written)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    /// `(layer index, seconds)`
    pub points: Vec<(usize, f64)>,
}

/// Everything drawn for one pair, independent of the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub title: String,
    pub filename: String,
    pub series: Vec<Series>,
}

impl ComparisonChart {
    /// Title and file name come from the comparison run
    pub fn new(
        pair: &ComparisonPair,
        labels: &Labels,
        mismatch: LayerMismatch,
    ) -> Result<Self, CompareError> {
        let (baseline, comparison) = pair.aligned_durations(mismatch)?;
        let result = &pair.comparison;
        let to_series = |label: &str, durations: Vec<f64>| Series {
            label: label.to_owned(),
            points: durations.into_iter().enumerate().collect(),
        };

        Ok(ComparisonChart {
            title: format!(
                "N{}, |K{}|, with {} threads",
                result.n, result.k, result.threads
            ),
            filename: format!("comparison-N{}.png", result.n),
            series: vec![
                to_series(&labels.baseline, baseline),
                to_series(&labels.comparison, comparison),
            ],
        })
    }

    /// x extent of the chart, at least one layer wide so empty runs still draw
    fn x_max(&self) -> f64 {
        self.series
            .iter()
            .map(|s| s.points.len().saturating_sub(1))
            .max()
            .unwrap_or(0)
            .max(1) as f64
    }

    fn y_max(&self) -> f64 {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .fold(0.0, f64::max);
        if max > 0.0 { max * 1.05 } else { 1.0 }
    }

    pub fn render(&self, filepath: &Path, size: (u32, u32)) -> Result<()> {
        debug!("Rendering {} to {}", self.title, filepath.display());
        self.draw(filepath, size)
            .map_err(|err| eyre!("Render {}: {err}", filepath.display()))
    }

    fn draw(&self, filepath: &Path, size: (u32, u32)) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(filepath, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..self.x_max(), 0f64..self.y_max())?;
        chart
            .configure_mesh()
            .x_desc("layers")
            .y_desc("durations (s)")
            .draw()?;

        for (i, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(i).mix(1.0);
            chart
                .draw_series(LineSeries::new(
                    series.points.iter().map(|&(x, y)| (x as f64, y)),
                    color.stroke_width(2),
                ))?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
        Ok(())
    }
}
