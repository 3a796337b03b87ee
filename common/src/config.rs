use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    pairing::{Labels, LayerMismatch, Pairing},
    plot::Plot,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub settings: Settings,
    pub plots: Option<Vec<Box<dyn Plot>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub results_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File name glob, `{label}` is replaced by each implementation label
    pub pattern: String,
    pub baseline: String,
    pub comparison: String,
    pub pairing: Pairing,
    pub layer_mismatch: LayerMismatch,
    /// Open each written chart with `viewer`
    pub show: bool,
    pub viewer: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            results_dir: PathBuf::from("results"),
            output_dir: PathBuf::from("."),
            pattern: "metrics-{label}-*.json".to_owned(),
            baseline: "prolog".to_owned(),
            comparison: "cpp".to_owned(),
            pairing: Pairing::default(),
            layer_mismatch: LayerMismatch::default(),
            show: false,
            viewer: "xdg-open".to_owned(),
        }
    }
}

impl Settings {
    pub fn labels(&self) -> Labels {
        Labels {
            baseline: self.baseline.clone(),
            comparison: self.comparison.clone(),
        }
    }
}
