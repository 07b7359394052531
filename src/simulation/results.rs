// src/simulation/results.rs
use crate::core::{BasisState, DIM};
use std::fmt;

/// Outcome of a `Simulator` run: the final distribution and a tally of sampled shots.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    probabilities: [f64; DIM],
    counts: [usize; DIM],
    shots: usize,
}

impl SimulationResult {
    pub(crate) fn new(probabilities: [f64; DIM]) -> Self {
        Self { probabilities, counts: [0; DIM], shots: 0 }
    }

    pub(crate) fn record(&mut self, outcome: BasisState) {
        self.counts[outcome.index()] += 1;
        self.shots += 1;
    }

    /// Exact probabilities of the final state.
    pub fn probabilities(&self) -> &[f64; DIM] {
        &self.probabilities
    }

    /// How many shots produced `outcome`.
    pub fn counts(&self, outcome: BasisState) -> usize {
        self.counts[outcome.index()]
    }

    /// Observed frequency of `outcome`; 0.0 when no shots were taken.
    pub fn frequency(&self, outcome: BasisState) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts(outcome) as f64 / self.shots as f64
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    /// The most often observed outcome (lowest index on ties), or `None` without shots.
    pub fn most_frequent(&self) -> Option<BasisState> {
        if self.shots == 0 {
            return None;
        }
        BasisState::ALL
            .iter()
            .copied()
            .rev()
            .max_by_key(|s| self.counts(*s))
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results ({} shots):", self.shots)?;
        for state in BasisState::ALL {
            writeln!(
                f,
                "  {}: p={:.4}  observed={} ({:.1}%)",
                state.ket(),
                self.probabilities[state.index()],
                self.counts(state),
                self.frequency(state) * 100.0
            )?;
        }
        Ok(())
    }
}
