//! Fixed dimensions and numeric defaults of the two-qubit register.

/// Number of qubits in the register.
pub const NUM_QUBITS: usize = 2;

/// Number of computational basis states (`2^NUM_QUBITS`).
pub const DIM: usize = 1 << NUM_QUBITS;

/// `1/√2`, the Hadamard scaling factor.
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Allowed deviation of the probability sum from 1.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Per-outcome tolerance used by `check_state` when none is given.
pub const DEFAULT_STATE_TOLERANCE: f64 = 0.05;
