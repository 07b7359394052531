// src/simulation/mod.rs

//! The two-qubit state engine and a `Simulator` that runs circuits on fresh engines.

mod config;
mod engine;
mod results;

pub use config::{EngineConfig, ValidationMode};
pub use engine::{QuantumStateEngine, SharedEngine};
pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::QuantumResult;
use tracing::debug;

/// Runs circuits on freshly initialised engines.
///
/// With a fixed seed in the config, every run of the same circuit produces the
/// same shot tally.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: EngineConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns an engine in |00⟩ with `circuit` applied.
    pub fn prepare(&self, circuit: &Circuit) -> QuantumResult<QuantumStateEngine> {
        let mut engine = QuantumStateEngine::with_config(self.config);
        engine.apply_circuit(circuit)?;
        Ok(engine)
    }

    /// Runs `circuit` and samples `shots` measurements from the final state.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the final probabilities and the shot tally.
    /// * `Err(QuantumError)` if any gate of the circuit is invalid; nothing is sampled.
    pub fn run(&self, circuit: &Circuit, shots: usize) -> QuantumResult<SimulationResult> {
        let mut engine = self.prepare(circuit)?;
        let mut result = SimulationResult::new(engine.probabilities());
        for _ in 0..shots {
            result.record(engine.measure());
        }
        debug!(gates = circuit.len(), shots, "simulation completed");
        Ok(result)
    }
}
