use crate::{InvalidDistributionError, UncertaintyMethod};

/// Trait for uncertainty scoring strategies.
///
/// Implementations are pure and stateless; a scorer can be shared across
/// threads without coordination. Higher scores mean more uncertainty.
pub trait UncertaintyScorer: Send + Sync {
    /// Score one probability distribution, normalized to [0, 1].
    fn score(&self, prob_dist: &[f64]) -> Result<f64, InvalidDistributionError>;

    fn method(&self) -> UncertaintyMethod;
}
