// src/simulation/engine.rs
use crate::circuits::Circuit;
use crate::core::constants::{DEFAULT_STATE_TOLERANCE, DIM, FRAC_1_SQRT_2};
use crate::core::{BasisState, QuantumResult, StateVector};
use crate::operations::{Gate, GateKind, check_qubit};
use crate::simulation::config::{EngineConfig, ValidationMode};
use crate::validation::{check_normalization, distributions_match};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace, warn};

/// An engine shared between callers. Every operation reads and writes the whole
/// amplitude vector, so the engine is locked as a unit.
pub type SharedEngine = Arc<Mutex<QuantumStateEngine>>;

/// State-vector engine for a fixed two-qubit register.
///
/// Owns the amplitude vector, the ordered gate log and the gate and measurement
/// counters. Nothing else mutates them. Instances are independent: each carries
/// its own state and its own measurement RNG.
#[derive(Debug, Clone)]
pub struct QuantumStateEngine {
    state: StateVector,
    gate_log: Vec<Gate>,
    gate_count: usize,
    measurement_count: usize,
    config: EngineConfig,
    rng: StdRng,
}

impl Default for QuantumStateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumStateEngine {
    /// Creates an engine in |00⟩ with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine whose measurements are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(EngineConfig::default().with_seed(seed))
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: StateVector::ground(),
            gate_log: Vec::new(),
            gate_count: 0,
            measurement_count: 0,
            config,
            rng,
        }
    }

    /// Rebuilds an engine by applying `gates` in order to a fresh |00⟩ register.
    pub fn replay(gates: &[Gate], config: EngineConfig) -> QuantumResult<Self> {
        let mut engine = Self::with_config(config);
        for gate in gates {
            gate.validate()?;
        }
        for gate in gates {
            engine.apply(gate)?;
        }
        Ok(engine)
    }

    /// Wraps the engine for use from several callers.
    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    /// Returns to |00⟩ and clears the gate log and both counters.
    /// The RNG stream is not rewound.
    pub fn reset(&mut self) {
        self.state = StateVector::ground();
        self.gate_log.clear();
        self.gate_count = 0;
        self.measurement_count = 0;
        debug!("engine reset to |00⟩");
    }

    /// Applies a Hadamard to `qubit`.
    ///
    /// Each index `i` with bit `qubit` clear is paired with `j = i | (1 << qubit)`;
    /// both entries are rewritten from the pre-update pair.
    pub fn apply_hadamard(&mut self, qubit: usize) -> QuantumResult<()> {
        check_qubit(qubit)?;
        let old = *self.state.amplitudes();
        let mask = 1 << qubit;
        let mut new = old;
        for i in 0..DIM {
            if i & mask == 0 {
                let j = i | mask;
                new[i] = (old[i] + old[j]) * FRAC_1_SQRT_2;
                new[j] = (old[i] - old[j]) * FRAC_1_SQRT_2;
            }
        }
        self.commit(Gate::H { qubit }, new);
        Ok(())
    }

    /// Applies a bit flip to `qubit`. A pure permutation, so exact.
    pub fn apply_pauli_x(&mut self, qubit: usize) -> QuantumResult<()> {
        check_qubit(qubit)?;
        let old = *self.state.amplitudes();
        let mask = 1 << qubit;
        let new: [f64; DIM] = std::array::from_fn(|i| old[i ^ mask]);
        self.commit(Gate::X { qubit }, new);
        Ok(())
    }

    /// Flips `target` on every basis state where `control` is 1.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        let gate = Gate::Cnot { control, target };
        gate.validate()?;
        let old = *self.state.amplitudes();
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        let new: [f64; DIM] = std::array::from_fn(|i| {
            if i & control_mask != 0 { old[i ^ target_mask] } else { old[i] }
        });
        self.commit(gate, new);
        Ok(())
    }

    /// Applies one gate record.
    pub fn apply(&mut self, gate: &Gate) -> QuantumResult<()> {
        match *gate {
            Gate::H { qubit } => self.apply_hadamard(qubit),
            Gate::X { qubit } => self.apply_pauli_x(qubit),
            Gate::Cnot { control, target } => self.apply_cnot(control, target),
        }
    }

    /// Applies every gate of `circuit` in order. The circuit is validated up front,
    /// so either all gates are applied or none is.
    pub fn apply_circuit(&mut self, circuit: &Circuit) -> QuantumResult<()> {
        circuit.validate()?;
        debug!(gates = circuit.len(), "applying circuit");
        for gate in circuit.gates() {
            self.apply(gate)?;
        }
        Ok(())
    }

    fn commit(&mut self, gate: Gate, amplitudes: [f64; DIM]) {
        self.state = StateVector::from_amplitudes(amplitudes);
        self.gate_log.push(gate);
        self.gate_count += 1;
        debug!(%gate, gate_count = self.gate_count, "applied gate");

        if self.config.validation == ValidationMode::Warn {
            if let Err(err) = check_normalization(&self.state, Some(self.config.norm_tolerance)) {
                warn!(%gate, %err, "normalization drift after gate");
            }
        }
    }

    /// Probability of each basis state, in index order.
    pub fn probabilities(&self) -> [f64; DIM] {
        self.state.probabilities()
    }

    /// Samples one outcome from the current distribution using the engine's RNG.
    ///
    /// The amplitude vector is left untouched: repeated calls are independent draws
    /// from the same distribution. This is a deliberate simplification, not physical
    /// collapse; see [`measure_and_collapse`](Self::measure_and_collapse).
    pub fn measure(&mut self) -> BasisState {
        let r = self.rng.gen_range(0.0..1.0);
        self.measure_at(r)
    }

    /// Like [`measure`](Self::measure) but draws from a caller-supplied RNG.
    pub fn measure_with<R: Rng>(&mut self, rng: &mut R) -> BasisState {
        let r = rng.gen_range(0.0..1.0);
        self.measure_at(r)
    }

    /// Samples an outcome and then replaces the state with that basis vector.
    /// Counts as a measurement; nothing is added to the gate log.
    pub fn measure_and_collapse(&mut self) -> BasisState {
        let outcome = self.measure();
        self.state = StateVector::basis(outcome);
        debug!(%outcome, "state collapsed");
        outcome
    }

    fn measure_at(&mut self, r: f64) -> BasisState {
        self.measurement_count += 1;
        let outcome = sample_outcome(&self.probabilities(), r);
        trace!(r, %outcome, measurement_count = self.measurement_count, "measured");
        outcome
    }

    /// `true` iff every probability is within 0.05 of `target`.
    pub fn check_state(&self, target: &[f64; DIM]) -> bool {
        self.check_state_with_tolerance(target, DEFAULT_STATE_TOLERANCE)
    }

    /// `true` iff every probability is strictly within `tolerance` of `target`.
    pub fn check_state_with_tolerance(&self, target: &[f64; DIM], tolerance: f64) -> bool {
        distributions_match(&self.probabilities(), target, tolerance)
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn amplitudes(&self) -> &[f64; DIM] {
        self.state.amplitudes()
    }

    /// Applied gates, oldest first.
    pub fn gate_log(&self) -> &[Gate] {
        &self.gate_log
    }

    pub fn gate_count(&self) -> usize {
        self.gate_count
    }

    pub fn measurement_count(&self) -> usize {
        self.measurement_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a gate of `kind` was applied to `qubit` (any qubit when `None`).
    pub fn has_applied(&self, kind: GateKind, qubit: Option<usize>) -> bool {
        self.gate_log.iter().any(|g| match qubit {
            Some(q) => g.acts_on(kind, q),
            None => g.kind() == kind,
        })
    }

    /// Number of logged gates of `kind`.
    pub fn count_applied(&self, kind: GateKind) -> usize {
        self.gate_log.iter().filter(|g| g.kind() == kind).count()
    }

    // Add a crate-visible method to set the state directly for testing
    #[cfg(test)]
    pub(crate) fn set_amplitudes(&mut self, amplitudes: [f64; DIM]) {
        self.state = StateVector::from_amplitudes(amplitudes);
    }
}

/// Returns the first outcome whose cumulative probability exceeds `r`.
/// Falls back to the last outcome when drift keeps the running sum at or below `r`.
pub(crate) fn sample_outcome(probabilities: &[f64; DIM], r: f64) -> BasisState {
    let mut cumulative = 0.0;
    for (state, p) in BasisState::ALL.iter().zip(probabilities.iter()) {
        cumulative += p;
        if cumulative > r {
            return *state;
        }
    }
    warn!(r, cumulative, "cumulative probability never exceeded draw; using last outcome");
    BasisState::ALL[DIM - 1]
}
