//! Configurable front-end over the four scorers.

use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use sampling_core::{
    InvalidDistributionError, UncertaintyLevel, UncertaintyMethod, UncertaintyProfile,
    UncertaintyScore,
};

use crate::scorers;
use crate::validate::{validate_distribution, DEFAULT_SUM_TOLERANCE};

/// Uncertainty sampler with explicit scoring configuration.
///
/// Wraps the four scorers behind one entry point and builds full score
/// reports. The defaults report normalized scores, check the sum-to-one
/// invariant at `1e-6`, and sort internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintySampler {
    /// Report normalized scores (uniform distribution maps to 1.0) as the
    /// headline value; when false the raw score is reported instead
    pub normalized: bool,

    /// Tolerance for the sum-to-one input check
    pub sum_tolerance: f64,

    /// Treat inputs as already sorted largest-first and skip sorting
    pub assume_sorted: bool,
}

impl Default for UncertaintySampler {
    fn default() -> Self {
        Self {
            normalized: true,
            sum_tolerance: DEFAULT_SUM_TOLERANCE,
            assume_sorted: false,
        }
    }
}

impl UncertaintySampler {
    pub fn new(normalized: bool, sum_tolerance: f64, assume_sorted: bool) -> Result<Self> {
        if !sum_tolerance.is_finite() || sum_tolerance <= 0.0 {
            bail!("sum_tolerance must be positive and finite");
        }
        if sum_tolerance >= 0.5 {
            bail!(
                "sum_tolerance {} would accept grossly unnormalized input",
                sum_tolerance
            );
        }

        Ok(Self {
            normalized,
            sum_tolerance,
            assume_sorted,
        })
    }

    /// Score one probability distribution with one method.
    pub fn score(
        &self,
        method: UncertaintyMethod,
        prob_dist: &[f64],
    ) -> Result<UncertaintyScore, InvalidDistributionError> {
        validate_distribution(prob_dist, self.sum_tolerance)?;

        let (raw, normalized, metrics) = match method {
            UncertaintyMethod::LeastConfidence => {
                let (raw, normalized) =
                    scorers::least_confidence_unchecked(prob_dist, self.assume_sorted);
                (raw, normalized, json!({ "p_max": 1.0 - raw }))
            }
            UncertaintyMethod::MarginOfConfidence => {
                let (p1, p2) = self.top_two(prob_dist);
                let score = scorers::margin_confidence_unchecked(prob_dist, self.assume_sorted);
                (score, score, json!({ "p_top": p1, "p_second": p2 }))
            }
            UncertaintyMethod::RatioOfConfidence => {
                let (p1, p2) = self.top_two(prob_dist);
                let score = scorers::ratio_confidence_unchecked(prob_dist, self.assume_sorted)?;
                (score, score, json!({ "p_top": p1, "p_second": p2 }))
            }
            UncertaintyMethod::Entropy => {
                let (raw, normalized) = scorers::entropy_unchecked(prob_dist);
                (raw, normalized, json!({ "bits": raw }))
            }
        };

        let value = if self.normalized { normalized } else { raw };
        let level = UncertaintyLevel::from_score(normalized);

        debug!(
            "{} scored {:.4} over {} labels ({})",
            method.name(),
            value,
            prob_dist.len(),
            level.as_str()
        );

        Ok(UncertaintyScore {
            method,
            value,
            raw,
            normalized,
            level,
            num_labels: prob_dist.len(),
            metrics,
        })
    }

    /// Score one distribution with all four methods.
    pub fn score_all(
        &self,
        prob_dist: &[f64],
    ) -> Result<UncertaintyProfile, InvalidDistributionError> {
        Ok(UncertaintyProfile {
            num_labels: prob_dist.len(),
            least_confidence: self.score(UncertaintyMethod::LeastConfidence, prob_dist)?,
            margin_of_confidence: self.score(UncertaintyMethod::MarginOfConfidence, prob_dist)?,
            ratio_of_confidence: self.score(UncertaintyMethod::RatioOfConfidence, prob_dist)?,
            entropy: self.score(UncertaintyMethod::Entropy, prob_dist)?,
        })
    }

    fn top_two(&self, prob_dist: &[f64]) -> (f64, f64) {
        if self.assume_sorted {
            (prob_dist[0], prob_dist[1])
        } else {
            scorers::top_two(prob_dist)
        }
    }
}
