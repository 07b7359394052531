//! Property-based tests for the state engine.
//!
//! Gate sequences are drawn from the full valid gate set, so every property holds
//! for any circuit the engine accepts.

use proptest::prelude::*;
use qstate::{Gate, QuantumStateEngine, probability_sum};

/// A random valid gate: H or X on either qubit, or CNOT in either direction.
fn arb_gate() -> impl Strategy<Value = Gate> {
    prop_oneof![
        (0_usize..2).prop_map(|qubit| Gate::H { qubit }),
        (0_usize..2).prop_map(|qubit| Gate::X { qubit }),
        (0_usize..2).prop_map(|control| Gate::Cnot { control, target: 1 - control }),
    ]
}

fn arb_circuit() -> impl Strategy<Value = Vec<Gate>> {
    prop::collection::vec(arb_gate(), 0..=40)
}

fn engine_after(gates: &[Gate]) -> QuantumStateEngine {
    let mut engine = QuantumStateEngine::with_seed(0);
    for gate in gates {
        engine.apply(gate).expect("generated gates are valid");
    }
    engine
}

proptest! {
    #[test]
    fn normalization_is_preserved(gates in arb_circuit()) {
        let engine = engine_after(&gates);
        let sum = probability_sum(&engine.probabilities());
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(engine.probabilities().iter().all(|p| *p >= 0.0));
    }

    #[test]
    fn log_and_counter_track_every_gate(gates in arb_circuit()) {
        let engine = engine_after(&gates);
        prop_assert_eq!(engine.gate_log(), gates.as_slice());
        prop_assert_eq!(engine.gate_count(), gates.len());
        prop_assert_eq!(engine.measurement_count(), 0);
    }

    #[test]
    fn pauli_x_twice_restores_amplitudes_exactly(gates in arb_circuit(), qubit in 0_usize..2) {
        let mut engine = engine_after(&gates);
        let before = *engine.amplitudes();
        engine.apply_pauli_x(qubit).unwrap();
        engine.apply_pauli_x(qubit).unwrap();
        prop_assert_eq!(engine.amplitudes(), &before);
    }

    #[test]
    fn cnot_twice_restores_amplitudes_exactly(gates in arb_circuit(), control in 0_usize..2) {
        let mut engine = engine_after(&gates);
        let before = *engine.amplitudes();
        engine.apply_cnot(control, 1 - control).unwrap();
        engine.apply_cnot(control, 1 - control).unwrap();
        prop_assert_eq!(engine.amplitudes(), &before);
    }

    #[test]
    fn hadamard_twice_restores_amplitudes(gates in arb_circuit(), qubit in 0_usize..2) {
        let mut engine = engine_after(&gates);
        let before = *engine.amplitudes();
        engine.apply_hadamard(qubit).unwrap();
        engine.apply_hadamard(qubit).unwrap();
        for (a, b) in engine.amplitudes().iter().zip(before.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_qubits_never_change_the_engine(gates in arb_circuit(), qubit in 2_usize..64) {
        let mut engine = engine_after(&gates);
        let before = *engine.amplitudes();
        prop_assert!(engine.apply_hadamard(qubit).is_err());
        prop_assert!(engine.apply_pauli_x(qubit).is_err());
        prop_assert!(engine.apply_cnot(0, qubit).is_err());
        prop_assert_eq!(engine.amplitudes(), &before);
        prop_assert_eq!(engine.gate_count(), gates.len());
    }

    #[test]
    fn state_always_matches_itself(gates in arb_circuit()) {
        let engine = engine_after(&gates);
        prop_assert!(engine.check_state(&engine.probabilities()));
    }

    #[test]
    fn measured_outcomes_have_positive_probability(gates in arb_circuit(), seed in any::<u64>()) {
        let mut engine = QuantumStateEngine::with_seed(seed);
        for gate in &gates {
            engine.apply(gate).unwrap();
        }
        let probabilities = engine.probabilities();
        for _ in 0..16 {
            let outcome = engine.measure();
            prop_assert!(probabilities[outcome.index()] > 1e-12);
        }
        prop_assert_eq!(engine.measurement_count(), 16);
    }
}
