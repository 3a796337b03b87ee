use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::CompareError, summary::SummaryResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pairing {
    /// Join on `(n, k)`
    #[default]
    Keyed,
    /// i-th baseline with i-th comparison, both sorted by `n`
    Index,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerMismatch {
    #[default]
    Error,
    /// Only the layers both runs have
    Truncate,
}

/// Labels of the two implementations being compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub baseline: String,
    pub comparison: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPair {
    pub baseline: SummaryResult,
    pub comparison: SummaryResult,
}

impl ComparisonPair {
    /// Combined per-layer durations of both sides, same length
    pub fn aligned_durations(
        &self,
        mismatch: LayerMismatch,
    ) -> Result<(Vec<f64>, Vec<f64>), CompareError> {
        let mut baseline = self.baseline.combined_durations();
        let mut comparison = self.comparison.combined_durations();
        if baseline.len() != comparison.len() {
            match mismatch {
                LayerMismatch::Error => {
                    return Err(CompareError::LayerCountMismatch {
                        n: self.comparison.n,
                        k: self.comparison.k,
                        baseline: baseline.len(),
                        comparison: comparison.len(),
                    });
                }
                LayerMismatch::Truncate => {
                    let len = baseline.len().min(comparison.len());
                    debug!(
                        "N{} K{}: truncating to {len} layers",
                        self.comparison.n, self.comparison.k
                    );
                    baseline.truncate(len);
                    comparison.truncate(len);
                }
            }
        }
        Ok((baseline, comparison))
    }
}

/// Both inputs must already be sorted by `n`. Pairs come out in baseline order.
pub fn pair_results(
    baseline: Vec<SummaryResult>,
    comparison: Vec<SummaryResult>,
    pairing: Pairing,
    labels: &Labels,
) -> Result<Vec<ComparisonPair>, CompareError> {
    match pairing {
        Pairing::Index => pair_by_index(baseline, comparison),
        Pairing::Keyed => pair_by_key(baseline, comparison, labels),
    }
}

fn pair_by_index(
    baseline: Vec<SummaryResult>,
    comparison: Vec<SummaryResult>,
) -> Result<Vec<ComparisonPair>, CompareError> {
    if baseline.len() != comparison.len() {
        return Err(CompareError::PairCountMismatch {
            baseline: baseline.len(),
            comparison: comparison.len(),
        });
    }
    Ok(baseline
        .into_iter()
        .zip(comparison)
        .map(|(baseline, comparison)| ComparisonPair {
            baseline,
            comparison,
        })
        .collect())
}

fn index_by_key(
    results: Vec<SummaryResult>,
    label: &str,
) -> Result<HashMap<(u64, u64), SummaryResult>, CompareError> {
    let mut map = HashMap::with_capacity(results.len());
    for result in results {
        let (n, k) = result.key();
        if map.insert((n, k), result).is_some() {
            return Err(CompareError::DuplicateKey {
                label: label.to_owned(),
                n,
                k,
            });
        }
    }
    Ok(map)
}

fn pair_by_key(
    baseline: Vec<SummaryResult>,
    comparison: Vec<SummaryResult>,
    labels: &Labels,
) -> Result<Vec<ComparisonPair>, CompareError> {
    let order = baseline.iter().map(SummaryResult::key).collect::<Vec<_>>();
    let mut baseline = index_by_key(baseline, &labels.baseline)?;
    let mut comparison = index_by_key(comparison, &labels.comparison)?;

    let mut pairs = Vec::with_capacity(order.len());
    for (n, k) in order {
        let Some(result) = baseline.remove(&(n, k)) else {
            continue;
        };
        let other = comparison
            .remove(&(n, k))
            .ok_or_else(|| CompareError::UnmatchedKey {
                label: labels.comparison.clone(),
                n,
                k,
            })?;
        pairs.push(ComparisonPair {
            baseline: result,
            comparison: other,
        });
    }

    if let Some(&(n, k)) = comparison.keys().min() {
        return Err(CompareError::UnmatchedKey {
            label: labels.baseline.clone(),
            n,
            k,
        });
    }
    Ok(pairs)
}
