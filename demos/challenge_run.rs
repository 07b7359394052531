//! Plays through the challenge catalog with a scripted solution for each entry.

use qstate::challenges::{ChallengeId, GameSession};
use qstate::{QuantumError, QuantumStateEngine};
use tracing_subscriber::EnvFilter;

fn solve(id: ChallengeId, engine: &mut QuantumStateEngine) -> Result<(), QuantumError> {
    match id {
        ChallengeId::FirstSuperposition => engine.apply_hadamard(0)?,
        ChallengeId::BellStateCreator => {
            engine.apply_hadamard(0)?;
            engine.apply_cnot(0, 1)?;
        }
        ChallengeId::QuantumFlipMaster => {
            engine.apply_pauli_x(0)?;
            engine.apply_pauli_x(1)?;
        }
        ChallengeId::MeasurementMaster => {
            engine.apply_hadamard(1)?;
            for _ in 0..5 {
                engine.measure();
            }
        }
        ChallengeId::EqualProbabilities => {
            engine.apply_hadamard(0)?;
            engine.apply_hadamard(1)?;
        }
        ChallengeId::GateEfficiencyExpert => {}
    }
    Ok(())
}

fn main() -> Result<(), QuantumError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut engine = QuantumStateEngine::with_seed(7);
    let mut session = GameSession::new();

    for id in ChallengeId::ALL {
        let challenge = id.challenge();
        println!("== {} ({}, {} pts)", challenge.title, challenge.difficulty, challenge.points);
        engine.reset();
        session.select(id);
        solve(id, &mut engine)?;

        if let Some(check) = session.check(&engine) {
            println!("   progress {}%", check.evaluation.progress);
            if let Some(completion) = check.completion {
                println!("   +{} points", completion.points);
                for achievement in completion.new_achievements {
                    println!("   achievement: {}", achievement);
                }
            }
        }
    }

    println!("score {}  level {}", session.score(), session.level());
    Ok(())
}
