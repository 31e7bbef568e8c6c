//! The four uncertainty sampling scorers.
//!
//! Each maps one probability distribution to one score where 0.0 means the
//! model is fully confident and higher means more uncertain. Normalized
//! variants rescale so the uniform distribution maps to 1.0, making scores
//! comparable across methods and across label counts.

use sampling_core::{InvalidDistributionError, UncertaintyMethod, UncertaintyScorer};

use crate::validate::{validate_distribution, DEFAULT_SUM_TOLERANCE};

/// Largest value in `prob_dist`. Ties need no tie-break: only the value
/// matters, not which label attains it.
pub(crate) fn max_prob(prob_dist: &[f64]) -> f64 {
    prob_dist.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

/// Top two values of `prob_dist`, largest first, taken from a
/// descending-sorted copy. The input slice is never reordered.
pub(crate) fn top_two(prob_dist: &[f64]) -> (f64, f64) {
    let mut sorted = prob_dist.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    (sorted[0], sorted[1])
}

/// Least confidence on an already-validated distribution.
/// Returns `(raw, normalized)`.
pub(crate) fn least_confidence_unchecked(prob_dist: &[f64], assume_sorted: bool) -> (f64, f64) {
    let p_max = if assume_sorted {
        prob_dist[0]
    } else {
        max_prob(prob_dist)
    };
    let raw = 1.0 - p_max;
    let n = prob_dist.len() as f64;
    (raw, (raw * n / (n - 1.0)).clamp(0.0, 1.0))
}

/// Margin of confidence on an already-validated distribution.
pub(crate) fn margin_confidence_unchecked(prob_dist: &[f64], assume_sorted: bool) -> f64 {
    let (p1, p2) = if assume_sorted {
        (prob_dist[0], prob_dist[1])
    } else {
        top_two(prob_dist)
    };
    (1.0 - (p1 - p2)).clamp(0.0, 1.0)
}

/// Ratio of confidence on an already-validated distribution.
pub(crate) fn ratio_confidence_unchecked(
    prob_dist: &[f64],
    assume_sorted: bool,
) -> Result<f64, InvalidDistributionError> {
    let (p1, p2) = if assume_sorted {
        (prob_dist[0], prob_dist[1])
    } else {
        top_two(prob_dist)
    };
    // a zero maximum means an all-zero input; never divide by it
    if p1 == 0.0 {
        return Err(InvalidDistributionError::AllZero);
    }
    Ok((p2 / p1).clamp(0.0, 1.0))
}

/// Entropy on an already-validated distribution.
/// Returns `(raw_bits, normalized)`.
pub(crate) fn entropy_unchecked(prob_dist: &[f64]) -> (f64, f64) {
    // zero terms contribute 0 by the limiting convention 0*log2(0) = 0 and
    // must be skipped, never fed to log2
    let raw: f64 = -prob_dist
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>();
    let normalized = raw / (prob_dist.len() as f64).log2();
    (raw, normalized.clamp(0.0, 1.0))
}

/// Least confidence uncertainty, normalized to [0, 1].
///
/// `(1 - p_max) * n / (n - 1)`: the gap between the most confident
/// prediction and full confidence, rescaled so the uniform distribution
/// over `n` labels scores 1.0.
pub fn least_confidence(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(least_confidence_unchecked(prob_dist, false).1)
}

/// Least confidence uncertainty without rescaling: `1 - p_max`, bounded by
/// `1 - 1/n`.
pub fn least_confidence_raw(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(least_confidence_unchecked(prob_dist, false).0)
}

/// Least confidence for a distribution already sorted largest-first.
/// Reads the top entry directly instead of scanning.
pub fn least_confidence_presorted(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(least_confidence_unchecked(prob_dist, true).1)
}

/// Margin of confidence uncertainty: `1 - (p1 - p2)` over the top two
/// predictions. Already in [0, 1]; raw and normalized coincide. The maximum
/// of 1.0 occurs when the top two predictions are exactly tied.
pub fn margin_confidence(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(margin_confidence_unchecked(prob_dist, false))
}

/// Margin of confidence for a distribution already sorted largest-first.
/// Skips the sorting pass.
pub fn margin_confidence_presorted(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(margin_confidence_unchecked(prob_dist, true))
}

/// Ratio of confidence uncertainty: `p2 / p1` over the top two predictions.
/// Near 1.0 the top two are almost equally likely; near 0.0 the top
/// prediction dominates. Naturally bounded in [0, 1].
pub fn ratio_confidence(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    ratio_confidence_unchecked(prob_dist, false)
}

/// Ratio of confidence for a distribution already sorted largest-first.
pub fn ratio_confidence_presorted(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    ratio_confidence_unchecked(prob_dist, true)
}

/// Entropy-based uncertainty, normalized to [0, 1] by dividing by
/// `log2(n)`, the entropy of the uniform distribution over `n` labels.
pub fn entropy_uncertainty(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(entropy_unchecked(prob_dist).1)
}

/// Shannon entropy of the distribution, in bits: `-Σ p·log2(p)` over the
/// strictly positive entries.
pub fn entropy_raw(prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
    validate_distribution(prob_dist, DEFAULT_SUM_TOLERANCE)?;
    Ok(entropy_unchecked(prob_dist).0)
}

/// Engine implementing [`UncertaintyScorer`] with least confidence.
pub struct LeastConfidenceEngine;

/// Engine implementing [`UncertaintyScorer`] with margin of confidence.
pub struct MarginConfidenceEngine;

/// Engine implementing [`UncertaintyScorer`] with ratio of confidence.
pub struct RatioConfidenceEngine;

/// Engine implementing [`UncertaintyScorer`] with entropy.
pub struct EntropyEngine;

impl UncertaintyScorer for LeastConfidenceEngine {
    fn score(&self, prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
        least_confidence(prob_dist)
    }

    fn method(&self) -> UncertaintyMethod {
        UncertaintyMethod::LeastConfidence
    }
}

impl UncertaintyScorer for MarginConfidenceEngine {
    fn score(&self, prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
        margin_confidence(prob_dist)
    }

    fn method(&self) -> UncertaintyMethod {
        UncertaintyMethod::MarginOfConfidence
    }
}

impl UncertaintyScorer for RatioConfidenceEngine {
    fn score(&self, prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
        ratio_confidence(prob_dist)
    }

    fn method(&self) -> UncertaintyMethod {
        UncertaintyMethod::RatioOfConfidence
    }
}

impl UncertaintyScorer for EntropyEngine {
    fn score(&self, prob_dist: &[f64]) -> Result<f64, InvalidDistributionError> {
        entropy_uncertainty(prob_dist)
    }

    fn method(&self) -> UncertaintyMethod {
        UncertaintyMethod::Entropy
    }
}

/// Engine for a method picked at runtime.
pub fn scorer(method: UncertaintyMethod) -> Box<dyn UncertaintyScorer> {
    match method {
        UncertaintyMethod::LeastConfidence => Box::new(LeastConfidenceEngine),
        UncertaintyMethod::MarginOfConfidence => Box::new(MarginConfidenceEngine),
        UncertaintyMethod::RatioOfConfidence => Box::new(RatioConfidenceEngine),
        UncertaintyMethod::Entropy => Box::new(EntropyEngine),
    }
}
