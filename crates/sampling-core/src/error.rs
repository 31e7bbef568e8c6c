use thiserror::Error;

/// Contract violation in a probability distribution input.
///
/// Raised before any score is computed; no partial result accompanies it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidDistributionError {
    #[error("distribution has {0} labels, need at least 2")]
    TooFewLabels(usize),

    #[error("non-finite probability {value} at index {index}")]
    NonFiniteProbability { index: usize, value: f64 },

    #[error("negative probability {value} at index {index}")]
    NegativeProbability { index: usize, value: f64 },

    #[error("probabilities sum to {sum}, expected 1.0 within {tolerance}")]
    NotNormalized { sum: f64, tolerance: f64 },

    #[error("all probabilities are zero")]
    AllZero,
}
