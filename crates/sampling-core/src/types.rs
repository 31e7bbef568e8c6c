use serde::{Deserialize, Serialize};

/// Uncertainty sampling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UncertaintyMethod {
    /// Gap between the top prediction and full confidence
    LeastConfidence,

    /// Gap between the top two predictions
    MarginOfConfidence,

    /// Ratio between the top two predictions
    RatioOfConfidence,

    /// Information-theoretic spread across all predictions
    Entropy,
}

impl UncertaintyMethod {
    /// All methods, in a fixed order.
    pub const ALL: [UncertaintyMethod; 4] = [
        UncertaintyMethod::LeastConfidence,
        UncertaintyMethod::MarginOfConfidence,
        UncertaintyMethod::RatioOfConfidence,
        UncertaintyMethod::Entropy,
    ];

    /// Machine-readable name
    pub fn name(&self) -> &'static str {
        match self {
            UncertaintyMethod::LeastConfidence => "least_confidence",
            UncertaintyMethod::MarginOfConfidence => "margin_confidence",
            UncertaintyMethod::RatioOfConfidence => "ratio_confidence",
            UncertaintyMethod::Entropy => "entropy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "least_confidence" => Some(UncertaintyMethod::LeastConfidence),
            "margin_confidence" => Some(UncertaintyMethod::MarginOfConfidence),
            "ratio_confidence" => Some(UncertaintyMethod::RatioOfConfidence),
            "entropy" => Some(UncertaintyMethod::Entropy),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn to_label(&self) -> &'static str {
        match self {
            UncertaintyMethod::LeastConfidence => "Least Confidence",
            UncertaintyMethod::MarginOfConfidence => "Margin of Confidence",
            UncertaintyMethod::RatioOfConfidence => "Ratio of Confidence",
            UncertaintyMethod::Entropy => "Entropy",
        }
    }
}

/// Level of uncertainty classification over a normalized [0, 1] score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UncertaintyLevel {
    /// Model is essentially sure of its prediction
    VeryLow,
    /// Confident prediction
    Low,
    /// Worth a second look
    Moderate,
    /// Strong annotation candidate
    High,
    /// Top predictions are nearly indistinguishable
    VeryHigh,
}

impl UncertaintyLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 0.2 => UncertaintyLevel::VeryLow,
            s if s < 0.4 => UncertaintyLevel::Low,
            s if s < 0.6 => UncertaintyLevel::Moderate,
            s if s < 0.8 => UncertaintyLevel::High,
            _ => UncertaintyLevel::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UncertaintyLevel::VeryLow => "Very Low",
            UncertaintyLevel::Low => "Low",
            UncertaintyLevel::Moderate => "Moderate",
            UncertaintyLevel::High => "High",
            UncertaintyLevel::VeryHigh => "Very High",
        }
    }
}

/// Result of scoring one probability distribution with one method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintyScore {
    pub method: UncertaintyMethod,

    /// Headline score: `normalized` or `raw` depending on sampler config
    pub value: f64,

    /// Score before rescaling to the [0, 1] range
    pub raw: f64,

    /// Score rescaled so the uniform distribution maps to 1.0
    pub normalized: f64,

    /// Level classification of the normalized score
    pub level: UncertaintyLevel,

    /// Number of labels in the scored distribution
    pub num_labels: usize,

    /// Method-specific intermediate values (top probabilities, entropy bits)
    pub metrics: serde_json::Value,
}

/// All four uncertainty scores for one distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintyProfile {
    pub num_labels: usize,
    pub least_confidence: UncertaintyScore,
    pub margin_of_confidence: UncertaintyScore,
    pub ratio_of_confidence: UncertaintyScore,
    pub entropy: UncertaintyScore,
}

impl UncertaintyProfile {
    /// Mean of the four normalized scores. The normalized scale is the one
    /// comparable across methods, so the mean ignores the headline config.
    pub fn mean(&self) -> f64 {
        (self.least_confidence.normalized
            + self.margin_of_confidence.normalized
            + self.ratio_of_confidence.normalized
            + self.entropy.normalized)
            / 4.0
    }

    /// Level classification of the mean score
    pub fn level(&self) -> UncertaintyLevel {
        UncertaintyLevel::from_score(self.mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_name_round_trip() {
        for method in UncertaintyMethod::ALL {
            assert_eq!(UncertaintyMethod::from_name(method.name()), Some(method));
        }
        assert_eq!(UncertaintyMethod::from_name("softmax"), None);
    }

    #[test]
    fn test_level_classification() {
        assert_eq!(UncertaintyLevel::from_score(0.0), UncertaintyLevel::VeryLow);
        assert_eq!(UncertaintyLevel::from_score(0.3), UncertaintyLevel::Low);
        assert_eq!(
            UncertaintyLevel::from_score(0.5),
            UncertaintyLevel::Moderate
        );
        assert_eq!(UncertaintyLevel::from_score(0.7), UncertaintyLevel::High);
        assert_eq!(
            UncertaintyLevel::from_score(1.0),
            UncertaintyLevel::VeryHigh
        );
    }
}
