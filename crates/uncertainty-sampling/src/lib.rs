//! Uncertainty Sampling Module
//!
//! Scores how unconfident a classifier is about a single prediction, for
//! active-learning sample selection. Implements the four classic strategies:
//! least confidence, margin of confidence, ratio of confidence, and
//! entropy-based uncertainty. All scorers share one input contract (a
//! normalized probability distribution) and one convention (higher score =
//! more uncertain).

pub mod sampler;
pub mod scorers;
pub mod validate;

pub use sampler::UncertaintySampler;
pub use scorers::{
    entropy_raw, entropy_uncertainty, least_confidence, least_confidence_presorted,
    least_confidence_raw, margin_confidence, margin_confidence_presorted, ratio_confidence,
    ratio_confidence_presorted, scorer, EntropyEngine, LeastConfidenceEngine,
    MarginConfidenceEngine, RatioConfidenceEngine,
};
pub use validate::{validate_distribution, DEFAULT_SUM_TOLERANCE};

pub use sampling_core::{
    InvalidDistributionError, UncertaintyLevel, UncertaintyMethod, UncertaintyProfile,
    UncertaintyScore, UncertaintyScorer,
};
