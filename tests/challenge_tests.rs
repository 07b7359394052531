// tests/challenge_tests.rs

use qstate::QuantumError;
use qstate::QuantumStateEngine;
use qstate::challenges::{ChallengeId, Difficulty, GameSession, evaluate};

#[test]
fn test_bell_challenge_session() -> Result<(), QuantumError> {
    let mut engine = QuantumStateEngine::with_seed(4);
    let mut session = GameSession::new();
    session.select(ChallengeId::BellStateCreator);

    engine.apply_hadamard(0)?;
    let halfway = session.check(&engine).unwrap();
    assert_eq!(halfway.evaluation.progress, 50);
    assert!(halfway.completion.is_none());

    engine.apply_cnot(0, 1)?;
    let done = session.check(&engine).unwrap();
    let completion = done.completion.expect("Bell state should complete the challenge");
    assert_eq!(completion.challenge, ChallengeId::BellStateCreator);
    assert_eq!(completion.points, 250 + 50);
    assert!(session.is_completed(ChallengeId::BellStateCreator));
    Ok(())
}

#[test]
fn test_efficiency_expert_after_first_completion() -> Result<(), QuantumError> {
    let mut engine = QuantumStateEngine::with_seed(4);
    let mut session = GameSession::new();

    session.select(ChallengeId::GateEfficiencyExpert);
    assert!(!session.check(&engine).unwrap().evaluation.completed);

    session.select(ChallengeId::FirstSuperposition);
    engine.apply_hadamard(1)?;
    assert!(session.check(&engine).unwrap().completion.is_some());

    session.select(ChallengeId::GateEfficiencyExpert);
    let expert = session.check(&engine).unwrap();
    let completion = expert.completion.unwrap();
    assert_eq!(completion.points, 400 + 100);
    assert!(completion.new_achievements.contains(&"Hard Challenge Master".to_string()));
    // 200 + 500 = 700
    assert_eq!(session.score(), 700);
    assert_eq!(session.level(), 2);
    assert!(session.achievements().contains(&"Level 2 Reached!".to_string()));
    Ok(())
}

#[test]
fn test_measurement_master_reads_counter() -> Result<(), QuantumError> {
    let mut engine = QuantumStateEngine::with_seed(4);
    engine.apply_hadamard(0)?;
    for expected in [20, 40, 60, 80] {
        engine.measure();
        let eval = evaluate(ChallengeId::MeasurementMaster, &engine, 0);
        assert_eq!(eval.progress, expected);
        assert!(!eval.completed);
    }
    engine.measure();
    assert!(evaluate(ChallengeId::MeasurementMaster, &engine, 0).completed);

    engine.reset();
    let eval = evaluate(ChallengeId::MeasurementMaster, &engine, 0);
    assert_eq!(eval.progress, 0);
    Ok(())
}

#[test]
fn test_catalog_difficulties() {
    let hard: Vec<ChallengeId> = ChallengeId::ALL
        .into_iter()
        .filter(|id| id.challenge().difficulty == Difficulty::Hard)
        .collect();
    assert_eq!(hard, vec![ChallengeId::EqualProbabilities, ChallengeId::GateEfficiencyExpert]);
}
