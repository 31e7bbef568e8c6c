//! Input contract checks shared by all four scorers.

use sampling_core::InvalidDistributionError;

/// Default tolerance for the sum-to-one check.
pub const DEFAULT_SUM_TOLERANCE: f64 = 1e-6;

/// Verify that `prob_dist` is a usable probability distribution.
///
/// Checks, in order: at least two labels, every value finite, every value
/// non-negative, and the sum within `tolerance` of 1.0. The slice is never
/// modified; scorers compute only after this passes.
pub fn validate_distribution(
    prob_dist: &[f64],
    tolerance: f64,
) -> Result<(), InvalidDistributionError> {
    if prob_dist.len() < 2 {
        return Err(InvalidDistributionError::TooFewLabels(prob_dist.len()));
    }

    for (index, &value) in prob_dist.iter().enumerate() {
        if !value.is_finite() {
            return Err(InvalidDistributionError::NonFiniteProbability { index, value });
        }
        if value < 0.0 {
            return Err(InvalidDistributionError::NegativeProbability { index, value });
        }
    }

    let sum: f64 = prob_dist.iter().sum();
    // negated <= so a NaN sum fails the check
    if !((sum - 1.0).abs() <= tolerance) {
        return Err(InvalidDistributionError::NotNormalized { sum, tolerance });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_distribution() {
        assert!(validate_distribution(&[0.7, 0.2, 0.1], DEFAULT_SUM_TOLERANCE).is_ok());
        assert!(validate_distribution(&[1.0, 0.0], DEFAULT_SUM_TOLERANCE).is_ok());
    }

    #[test]
    fn test_rejects_single_label() {
        assert_eq!(
            validate_distribution(&[1.0], DEFAULT_SUM_TOLERANCE),
            Err(InvalidDistributionError::TooFewLabels(1))
        );
        assert_eq!(
            validate_distribution(&[], DEFAULT_SUM_TOLERANCE),
            Err(InvalidDistributionError::TooFewLabels(0))
        );
    }

    #[test]
    fn test_rejects_negative_probability() {
        let err = validate_distribution(&[1.1, -0.1], DEFAULT_SUM_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            InvalidDistributionError::NegativeProbability { index: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_unnormalized_sum() {
        let err = validate_distribution(&[0.3, 0.3], DEFAULT_SUM_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            InvalidDistributionError::NotNormalized { .. }
        ));
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        let err = validate_distribution(&[f64::NAN, 1.0], DEFAULT_SUM_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            InvalidDistributionError::NonFiniteProbability { index: 0, .. }
        ));

        let err =
            validate_distribution(&[0.5, f64::INFINITY], DEFAULT_SUM_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            InvalidDistributionError::NonFiniteProbability { index: 1, .. }
        ));
    }

    #[test]
    fn test_sum_tolerance_boundary() {
        // off by less than the tolerance passes
        assert!(validate_distribution(&[0.5, 0.5 + 5e-7], DEFAULT_SUM_TOLERANCE).is_ok());
        // off by more fails
        assert!(validate_distribution(&[0.5, 0.5 + 5e-6], DEFAULT_SUM_TOLERANCE).is_err());
        // a looser tolerance accepts the same input
        assert!(validate_distribution(&[0.5, 0.5 + 5e-6], 1e-4).is_ok());
    }
}
