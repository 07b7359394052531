// src/challenges/mod.rs

//! Challenge rules evaluated against an engine's read-only view.
//!
//! The rules only look at the gate log, the counters and the probability
//! distribution. They never mutate the engine.

mod session;

pub use session::{CheckResult, Completion, GameSession};

use crate::operations::GateKind;
use crate::simulation::QuantumStateEngine;
use std::fmt;

/// Target distribution of a Bell state (|00⟩ + |11⟩)/√2.
pub const BELL_STATE: [f64; 4] = [0.5, 0.0, 0.0, 0.5];
/// Target distribution of the |11⟩ basis state.
pub const ONE_ONE_STATE: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
/// Target distribution with all four outcomes equally likely.
pub const EQUAL_SUPERPOSITION: [f64; 4] = [0.25, 0.25, 0.25, 0.25];

/// Measurements needed for `MeasurementMaster`.
pub const REQUIRED_MEASUREMENTS: usize = 5;
/// Gate budget for the efficiency-based rules and the bonus.
pub const EFFICIENT_GATE_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChallengeId {
    FirstSuperposition,
    BellStateCreator,
    QuantumFlipMaster,
    MeasurementMaster,
    EqualProbabilities,
    GateEfficiencyExpert,
}

impl ChallengeId {
    pub const ALL: [ChallengeId; 6] = [
        ChallengeId::FirstSuperposition,
        ChallengeId::BellStateCreator,
        ChallengeId::QuantumFlipMaster,
        ChallengeId::MeasurementMaster,
        ChallengeId::EqualProbabilities,
        ChallengeId::GateEfficiencyExpert,
    ];

    /// Static description of this challenge.
    pub fn challenge(self) -> &'static Challenge {
        &CATALOG[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A challenge as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub objective: &'static str,
    pub hint: &'static str,
    /// Base points, before the efficiency bonus.
    pub points: u32,
}

/// The built-in challenges, in `ChallengeId` order.
pub static CATALOG: [Challenge; 6] = [
    Challenge {
        id: ChallengeId::FirstSuperposition,
        title: "First Superposition",
        description: "Apply a Hadamard gate to create your first quantum superposition",
        difficulty: Difficulty::Easy,
        objective: "Apply H gate to any qubit",
        hint: "Apply H to q0 or q1",
        points: 100,
    },
    Challenge {
        id: ChallengeId::BellStateCreator,
        title: "Bell State Creator",
        description: "Create a Bell state by entangling two qubits",
        difficulty: Difficulty::Medium,
        objective: "Apply H gate to q0, then CNOT",
        hint: "First create superposition on q0, then use CNOT to entangle",
        points: 250,
    },
    Challenge {
        id: ChallengeId::QuantumFlipMaster,
        title: "Quantum Flip Master",
        description: "Transform |00⟩ to |11⟩ using the minimum number of gates",
        difficulty: Difficulty::Easy,
        objective: "Achieve |11⟩ state in 2 gates",
        hint: "Use X gates on both qubits",
        points: 150,
    },
    Challenge {
        id: ChallengeId::MeasurementMaster,
        title: "Measurement Master",
        description: "Create a superposition and measure it 5 times",
        difficulty: Difficulty::Medium,
        objective: "Measure 5 times after creating superposition",
        hint: "Create superposition first, then measure repeatedly",
        points: 200,
    },
    Challenge {
        id: ChallengeId::EqualProbabilities,
        title: "Equal Probabilities",
        description: "Create a state where all four outcomes have equal probability",
        difficulty: Difficulty::Hard,
        objective: "Achieve 25% probability for each state",
        hint: "Apply H gates to both qubits",
        points: 300,
    },
    Challenge {
        id: ChallengeId::GateEfficiencyExpert,
        title: "Gate Efficiency Expert",
        description: "Complete any challenge using the minimum possible gates",
        difficulty: Difficulty::Hard,
        objective: "Complete a challenge optimally",
        hint: "Think about the most direct path to your goal",
        points: 400,
    },
];

/// Verdict for one challenge against the current engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub completed: bool,
    /// Percentage, 0 to 100.
    pub progress: u8,
}

impl Evaluation {
    fn new(completed: bool, progress: u8) -> Self {
        Self { completed, progress: progress.min(100) }
    }
}

/// Judges `id` against `engine`.
///
/// `completed_count` is the number of challenges the player has already finished;
/// only `GateEfficiencyExpert` depends on it.
pub fn evaluate(id: ChallengeId, engine: &QuantumStateEngine, completed_count: usize) -> Evaluation {
    let gate_count = engine.gate_count();
    match id {
        ChallengeId::FirstSuperposition => {
            let has_h = engine.has_applied(GateKind::H, None);
            Evaluation::new(has_h, if has_h { 100 } else { 0 })
        }
        ChallengeId::BellStateCreator => {
            let has_h0 = engine.has_applied(GateKind::H, Some(0));
            let has_cnot = engine.has_applied(GateKind::Cnot, None);
            let completed = has_h0 && has_cnot && engine.check_state(&BELL_STATE);
            let progress = match (has_h0, has_cnot, completed) {
                (_, _, true) => 100,
                (true, true, false) => 80,
                (true, false, _) => 50,
                _ => 0,
            };
            Evaluation::new(completed, progress)
        }
        ChallengeId::QuantumFlipMaster => {
            let at_target = engine.check_state(&ONE_ONE_STATE);
            let completed = at_target && gate_count <= EFFICIENT_GATE_COUNT;
            let progress = if at_target {
                100
            } else {
                (engine.count_applied(GateKind::X) * 50).min(100) as u8
            };
            Evaluation::new(completed, progress)
        }
        ChallengeId::MeasurementMaster => {
            let has_h = engine.has_applied(GateKind::H, None);
            let measurements = engine.measurement_count();
            let completed = has_h && measurements >= REQUIRED_MEASUREMENTS;
            let progress = if has_h { (measurements * 20).min(100) as u8 } else { 0 };
            Evaluation::new(completed, progress)
        }
        ChallengeId::EqualProbabilities => {
            let completed = engine.check_state(&EQUAL_SUPERPOSITION);
            let has_h0 = engine.has_applied(GateKind::H, Some(0));
            let has_h1 = engine.has_applied(GateKind::H, Some(1));
            let progress = match (has_h0, has_h1) {
                (true, true) if completed => 100,
                (true, true) => 80,
                (true, false) => 50,
                _ => 0,
            };
            Evaluation::new(completed, progress)
        }
        ChallengeId::GateEfficiencyExpert => {
            let other_done = completed_count > 0;
            let efficient = gate_count <= EFFICIENT_GATE_COUNT;
            let progress = match (other_done, efficient) {
                (true, true) => 100,
                (true, false) => 50,
                _ => 0,
            };
            Evaluation::new(other_done && efficient, progress)
        }
    }
}

/// Bonus points for finishing with few gates: 50 at two or fewer, 100 at one or none.
pub fn efficiency_bonus(gate_count: usize) -> u32 {
    let mut bonus = 0;
    if gate_count <= 2 {
        bonus += 50;
    }
    if gate_count <= 1 {
        bonus += 50;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuantumResult;

    fn engine() -> QuantumStateEngine {
        QuantumStateEngine::with_seed(11)
    }

    #[test]
    fn catalog_is_indexed_by_id() {
        for id in ChallengeId::ALL {
            assert_eq!(id.challenge().id, id);
        }
        assert_eq!(ChallengeId::GateEfficiencyExpert.challenge().points, 400);
    }

    #[test]
    fn bell_state_progress_steps() -> QuantumResult<()> {
        let mut engine = engine();
        let id = ChallengeId::BellStateCreator;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: false, progress: 0 });

        engine.apply_hadamard(0)?;
        assert_eq!(evaluate(id, &engine, 0).progress, 50);

        engine.apply_cnot(0, 1)?;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: true, progress: 100 });

        // An extra X breaks the distribution but keeps the gates.
        engine.apply_pauli_x(0)?;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: false, progress: 80 });
        Ok(())
    }

    #[test]
    fn flip_master_needs_two_gates_or_fewer() -> QuantumResult<()> {
        let mut engine = engine();
        let id = ChallengeId::QuantumFlipMaster;
        engine.apply_pauli_x(0)?;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: false, progress: 50 });
        engine.apply_pauli_x(1)?;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: true, progress: 100 });

        engine.reset();
        for _ in 0..3 {
            engine.apply_pauli_x(0)?;
        }
        engine.apply_pauli_x(1)?;
        let eval = evaluate(id, &engine, 0);
        assert!(!eval.completed);
        assert_eq!(eval.progress, 100);
        Ok(())
    }

    #[test]
    fn measurement_master_counts_after_superposition() -> QuantumResult<()> {
        let mut engine = engine();
        let id = ChallengeId::MeasurementMaster;
        for _ in 0..5 {
            engine.measure();
        }
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: false, progress: 0 });

        engine.apply_hadamard(1)?;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: true, progress: 100 });

        engine.reset();
        engine.apply_hadamard(0)?;
        engine.measure();
        engine.measure();
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: false, progress: 40 });
        Ok(())
    }

    #[test]
    fn equal_probabilities_progress() -> QuantumResult<()> {
        let mut engine = engine();
        let id = ChallengeId::EqualProbabilities;
        engine.apply_hadamard(0)?;
        assert_eq!(evaluate(id, &engine, 0).progress, 50);
        engine.apply_hadamard(1)?;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: true, progress: 100 });
        engine.apply_cnot(0, 1)?;
        // CNOT permutes a uniform distribution: still complete.
        assert!(evaluate(id, &engine, 0).completed);
        Ok(())
    }

    #[test]
    fn efficiency_expert_requires_prior_completion() -> QuantumResult<()> {
        let mut engine = engine();
        let id = ChallengeId::GateEfficiencyExpert;
        assert_eq!(evaluate(id, &engine, 0), Evaluation { completed: false, progress: 0 });
        assert_eq!(evaluate(id, &engine, 1), Evaluation { completed: true, progress: 100 });
        for _ in 0..3 {
            engine.apply_pauli_x(1)?;
        }
        assert_eq!(evaluate(id, &engine, 1), Evaluation { completed: false, progress: 50 });
        Ok(())
    }

    #[test]
    fn bonus_tiers() {
        assert_eq!(efficiency_bonus(0), 100);
        assert_eq!(efficiency_bonus(1), 100);
        assert_eq!(efficiency_bonus(2), 50);
        assert_eq!(efficiency_bonus(3), 0);
    }
}
