//! Error handling logic

use thiserror::Error;

/// Errors raised by the state engine and its collaborators.
///
/// Invalid input fails fast. Floating-point drift is never reported through this type
/// during normal operation; it only surfaces when a caller explicitly asks
/// [`crate::validation::check_normalization`] for a verdict.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuantumError {
    /// A qubit index outside the register.
    #[error("Invalid qubit index {qubit}: register has {num_qubits} qubits")]
    InvalidQubit {
        /// The offending index.
        qubit: usize,
        /// Number of qubits in the register.
        num_qubits: usize,
    },

    /// A controlled gate whose control and target are the same qubit.
    #[error("Control and target must differ (both are qubit {qubit})")]
    SameControlTarget {
        /// The qubit used for both roles.
        qubit: usize,
    },

    /// The squared amplitudes do not sum to 1 within tolerance.
    #[error("State vector normalization failed: sum(|a_i|^2) = {norm} (deviation > {tolerance})")]
    Normalization {
        /// Observed sum of squared amplitudes.
        norm: f64,
        /// Allowed deviation from 1.
        tolerance: f64,
    },

    /// A probability sequence of the wrong length.
    #[error("Expected 4 probabilities, got {len}")]
    InvalidProbabilities {
        /// Length of the supplied sequence.
        len: usize,
    },
}

/// Result type for engine operations.
pub type QuantumResult<T> = Result<T, QuantumError>;
