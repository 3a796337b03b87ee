use thiserror::Error;

/// Ways two result sets can fail to line up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("No {label} result for N{n} K{k}")]
    UnmatchedKey { label: String, n: u64, k: u64 },
    #[error("Multiple {label} results for N{n} K{k}")]
    DuplicateKey { label: String, n: u64, k: u64 },
    #[error("Cannot pair {baseline} baseline results with {comparison} comparison results")]
    PairCountMismatch { baseline: usize, comparison: usize },
    #[error("N{n} K{k}: baseline has {baseline} layers, comparison has {comparison}")]
    LayerCountMismatch {
        n: u64,
        k: u64,
        baseline: usize,
        comparison: usize,
    },
}
