// src/validation/mod.rs

//! Checks on state vectors and probability distributions.

use crate::core::constants::{DEFAULT_NORM_TOLERANCE, DIM};
use crate::core::{QuantumError, QuantumResult, StateVector};

/// Sum of a probability distribution.
pub fn probability_sum(probabilities: &[f64; DIM]) -> f64 {
    probabilities.iter().sum()
}

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QuantumError::Normalization)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> QuantumResult<()> {
    let tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm = state.norm_sqr();
    if (norm - 1.0).abs() > tolerance {
        Err(QuantumError::Normalization { norm, tolerance })
    } else {
        Ok(())
    }
}

/// Returns `true` iff every outcome of `actual` is strictly within `tolerance` of `target`.
pub fn distributions_match(actual: &[f64; DIM], target: &[f64; DIM], tolerance: f64) -> bool {
    actual
        .iter()
        .zip(target.iter())
        .all(|(a, t)| (a - t).abs() < tolerance)
}

/// Converts a caller-supplied slice into a fixed four-outcome target.
pub fn validate_target(target: &[f64]) -> QuantumResult<[f64; DIM]> {
    <[f64; DIM]>::try_from(target).map_err(|_| QuantumError::InvalidProbabilities { len: target.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::FRAC_1_SQRT_2;

    #[test]
    fn normalized_states_pass() {
        assert!(check_normalization(&StateVector::ground(), None).is_ok());
        let bell = StateVector::from_amplitudes([FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]);
        assert!(check_normalization(&bell, None).is_ok());
    }

    #[test]
    fn unnormalized_state_is_reported() {
        let state = StateVector::from_amplitudes([1.0, 1.0, 0.0, 0.0]);
        match check_normalization(&state, Some(1e-6)) {
            Err(QuantumError::Normalization { norm, tolerance }) => {
                assert!((norm - 2.0).abs() < 1e-12);
                assert_eq!(tolerance, 1e-6);
            }
            other => panic!("expected normalization error, got {:?}", other),
        }
    }

    #[test]
    fn match_is_strict_at_the_tolerance() {
        let actual = [0.5, 0.0, 0.0, 0.5];
        assert!(distributions_match(&actual, &[0.5, 0.0, 0.0, 0.5], 0.05));
        assert!(distributions_match(&actual, &[0.46, 0.0, 0.0, 0.54], 0.05));
        assert!(!distributions_match(&actual, &[0.25, 0.25, 0.25, 0.25], 0.05));
        assert!(!distributions_match(&[0.0; 4], &[0.0; 4], 0.0));
    }

    #[test]
    fn target_length_is_checked() {
        assert_eq!(validate_target(&[0.25; 4]), Ok([0.25; 4]));
        assert_eq!(
            validate_target(&[0.5, 0.5]),
            Err(QuantumError::InvalidProbabilities { len: 2 })
        );
    }
}
