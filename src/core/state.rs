// src/core/state.rs

use super::constants::{DIM, NUM_QUBITS};
use std::fmt;

/// The amplitude vector of the two-qubit register.
///
/// Index `i` encodes the basis state whose bit 0 is qubit 0 and bit 1 is qubit 1,
/// i.e. `i = q1 * 2 + q0`. Amplitudes are real: H, X and CNOT applied to a real
/// normalized start never introduce an imaginary component.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point amplitudes
pub struct StateVector {
    amplitudes: [f64; DIM],
}

impl StateVector {
    /// The |00⟩ basis state.
    pub fn ground() -> Self {
        Self::basis(BasisState::ZERO)
    }

    /// A basis vector with amplitude 1 at `state`.
    pub fn basis(state: BasisState) -> Self {
        let mut amplitudes = [0.0; DIM];
        amplitudes[state.index()] = 1.0;
        Self { amplitudes }
    }

    /// Wraps raw amplitudes. Normalization is not checked here.
    pub(crate) fn from_amplitudes(amplitudes: [f64; DIM]) -> Self {
        Self { amplitudes }
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[f64; DIM] {
        &self.amplitudes
    }

    /// Squared amplitudes, clamped into `[0, 1]`.
    pub fn probabilities(&self) -> [f64; DIM] {
        self.amplitudes.map(|a| (a * a).clamp(0.0, 1.0))
    }

    /// Sum of squared amplitudes (1 for a normalized state).
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a * a).sum()
    }

    /// Number of basis states (always 4).
    pub fn dim(&self) -> usize {
        DIM
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::ground()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, a) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{}: {:+.4}", if i > 0 { ", " } else { "" }, BasisState(i), a)?;
        }
        write!(f, "]")
    }
}

/// One of the four classical outcomes |00⟩, |01⟩, |10⟩, |11⟩.
///
/// Displays in `q1 q0` order: index 1 (qubit 0 set) renders as `"01"`,
/// index 2 (qubit 1 set) as `"10"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasisState(usize);

impl BasisState {
    /// |00⟩
    pub const ZERO: BasisState = BasisState(0);

    /// All basis states in index order.
    pub const ALL: [BasisState; DIM] = [BasisState(0), BasisState(1), BasisState(2), BasisState(3)];

    /// Returns the basis state for `index`, or `None` if it is not in `0..4`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < DIM).then_some(Self(index))
    }

    /// Index into the state vector.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Value (0 or 1) of `qubit` in this outcome. Qubits past the register read as 0.
    pub fn qubit(&self, qubit: usize) -> u8 {
        if qubit >= NUM_QUBITS {
            return 0;
        }
        ((self.0 >> qubit) & 1) as u8
    }

    /// Two-character bit string, most significant (qubit 1) first.
    pub fn bits(&self) -> String {
        format!("{:0width$b}", self.0, width = NUM_QUBITS)
    }

    /// Ket notation, e.g. `|10⟩`.
    pub fn ket(&self) -> String {
        format!("|{}⟩", self.bits())
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = NUM_QUBITS)
    }
}
