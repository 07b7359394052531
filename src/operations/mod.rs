// src/operations/mod.rs

//! Gate records: the operations the engine can apply and logs once applied.
//!
//! A [`Gate`] is immutable. The engine appends one to its log for every successful
//! application, and the log is only ever cleared by a reset. Order matters: the
//! gates do not commute in general.

use crate::core::{NUM_QUBITS, QuantumError, QuantumResult};
use std::fmt;

/// Kind of a gate, without its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard.
    H,
    /// Pauli-X (bit flip).
    X,
    /// Controlled NOT.
    Cnot,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::H => write!(f, "H"),
            GateKind::X => write!(f, "X"),
            GateKind::Cnot => write!(f, "CNOT"),
        }
    }
}

/// One applied (or to-be-applied) operation on the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Hadamard on a single qubit: equal superposition of its 0 and 1 states.
    H {
        /// Target qubit.
        qubit: usize,
    },
    /// Pauli-X on a single qubit.
    X {
        /// Target qubit.
        qubit: usize,
    },
    /// Flips `target` iff `control` is 1.
    Cnot {
        /// Qubit whose value decides whether the flip happens.
        control: usize,
        /// Qubit that is flipped.
        target: usize,
    },
}

impl Gate {
    /// The gate's kind.
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::H { .. } => GateKind::H,
            Gate::X { .. } => GateKind::X,
            Gate::Cnot { .. } => GateKind::Cnot,
        }
    }

    /// Every qubit named by the gate.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Gate::H { qubit } | Gate::X { qubit } => vec![*qubit],
            Gate::Cnot { control, target } => vec![*control, *target],
        }
    }

    /// Returns `true` if this is a single-qubit gate of `kind` acting on `qubit`.
    /// For CNOT, `qubit` is matched against either operand.
    pub fn acts_on(&self, kind: GateKind, qubit: usize) -> bool {
        self.kind() == kind && self.involved_qubits().contains(&qubit)
    }

    /// Checks operand ranges and, for CNOT, that control and target differ.
    pub fn validate(&self) -> QuantumResult<()> {
        for qubit in self.involved_qubits() {
            check_qubit(qubit)?;
        }
        if let Gate::Cnot { control, target } = self {
            if control == target {
                return Err(QuantumError::SameControlTarget { qubit: *control });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::H { qubit } => write!(f, "H(q{})", qubit),
            Gate::X { qubit } => write!(f, "X(q{})", qubit),
            Gate::Cnot { control, target } => write!(f, "CNOT(q{} -> q{})", control, target),
        }
    }
}

/// Rejects qubit indices outside the register.
pub(crate) fn check_qubit(qubit: usize) -> QuantumResult<()> {
    if qubit < NUM_QUBITS {
        Ok(())
    } else {
        Err(QuantumError::InvalidQubit { qubit, num_qubits: NUM_QUBITS })
    }
}
