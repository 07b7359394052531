// src/circuits/mod.rs

//! Ordered, replayable sequences of gates.
//!
//! A `Circuit` is the same data as an engine's gate log, held independently of any
//! engine so it can be built ahead of time, validated, displayed and applied.

use crate::core::{NUM_QUBITS, QuantumResult};
use crate::operations::Gate;
use std::fmt;

/// An ordered sequence of gates on the two-qubit register.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Builds a circuit from an existing gate log.
    pub fn from_gates(gates: &[Gate]) -> Self {
        Self { gates: gates.to_vec() }
    }

    /// Appends a gate. Operands are checked by [`validate`](Self::validate), not here.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Checks every gate; returns the first error found.
    pub fn validate(&self) -> QuantumResult<()> {
        self.gates.iter().try_for_each(Gate::validate)
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining construction of a `Circuit`.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a Hadamard on `qubit`.
    pub fn h(self, qubit: usize) -> Self {
        self.add_gate(Gate::H { qubit })
    }

    /// Appends a Pauli-X on `qubit`.
    pub fn x(self, qubit: usize) -> Self {
        self.add_gate(Gate::X { qubit })
    }

    /// Appends a CNOT.
    pub fn cnot(self, control: usize, target: usize) -> Self {
        self.add_gate(Gate::Cnot { control, target })
    }

    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

const GATE_WIDTH: usize = 7; // e.g. "───H───"
const H_WIRE: char = '─';
const V_WIRE: char = '│';

fn format_gate(symbol: &str) -> String {
    let slen = symbol.chars().count();
    let total_dashes = GATE_WIDTH.saturating_sub(slen);
    let pre = total_dashes / 2;
    let post = total_dashes - pre;
    format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit[{} gates]", self.gates.len())?;

        let wire = H_WIRE.to_string().repeat(GATE_WIDTH);
        let mut rows: Vec<Vec<String>> = vec![vec![wire; self.gates.len()]; NUM_QUBITS];
        // connectors[t] is set when column t joins the two wires
        let mut connectors = vec![' '; self.gates.len()];

        for (t, gate) in self.gates.iter().enumerate() {
            match *gate {
                Gate::H { qubit } if qubit < NUM_QUBITS => rows[qubit][t] = format_gate("H"),
                Gate::X { qubit } if qubit < NUM_QUBITS => rows[qubit][t] = format_gate("X"),
                Gate::Cnot { control, target } if control < NUM_QUBITS && target < NUM_QUBITS => {
                    rows[control][t] = format_gate("@");
                    rows[target][t] = format_gate("X");
                    connectors[t] = V_WIRE;
                }
                _ => {} // out-of-range operands have no wire to draw on
            }
        }

        for (q, row) in rows.iter().enumerate() {
            writeln!(f, "q{}: {}", q, row.join(""))?;
            if q + 1 < NUM_QUBITS {
                write!(f, "    ")?;
                for c in &connectors {
                    let pad = (GATE_WIDTH - 1) / 2;
                    write!(f, "{}{}{}", " ".repeat(pad), c, " ".repeat(GATE_WIDTH - 1 - pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
