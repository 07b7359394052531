// src/challenges/session.rs

use super::{ChallengeId, Difficulty, Evaluation, efficiency_bonus, evaluate};
use crate::simulation::QuantumStateEngine;
use tracing::info;

/// Score needed per level.
pub const POINTS_PER_LEVEL: u32 = 500;

pub const HARD_CHALLENGE_ACHIEVEMENT: &str = "Hard Challenge Master";
pub const ALL_CHALLENGES_ACHIEVEMENT: &str = "Quantum Master";

/// Points and achievements granted for finishing a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub challenge: ChallengeId,
    /// Base points plus efficiency bonus.
    pub points: u32,
    pub new_achievements: Vec<String>,
}

/// Evaluation of the selected challenge, plus the award if this check finished it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub evaluation: Evaluation,
    pub completion: Option<Completion>,
}

/// A player's progress across the challenge catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    score: u32,
    level: u32,
    achievements: Vec<String>,
    completed: Vec<ChallengeId>,
    current: Option<ChallengeId>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            achievements: Vec::new(),
            completed: Vec::new(),
            current: None,
        }
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `id` the challenge judged by [`check`](Self::check).
    pub fn select(&mut self, id: ChallengeId) {
        self.current = Some(id);
    }

    pub fn current(&self) -> Option<ChallengeId> {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    /// Finished challenges, in completion order.
    pub fn completed(&self) -> &[ChallengeId] {
        &self.completed
    }

    pub fn is_completed(&self, id: ChallengeId) -> bool {
        self.completed.contains(&id)
    }

    /// Judges the selected challenge against `engine` and awards it the first time
    /// it is completed. Returns `None` when no challenge is selected.
    pub fn check(&mut self, engine: &QuantumStateEngine) -> Option<CheckResult> {
        let id = self.current?;
        let evaluation = evaluate(id, engine, self.completed.len());
        let completion = if evaluation.completed {
            self.complete(id, engine.gate_count())
        } else {
            None
        };
        Some(CheckResult { evaluation, completion })
    }

    /// Records `id` as finished with `gate_count` gates. Returns `None` if it was
    /// already finished.
    pub fn complete(&mut self, id: ChallengeId, gate_count: usize) -> Option<Completion> {
        if self.is_completed(id) {
            return None;
        }
        let challenge = id.challenge();
        let points = challenge.points + efficiency_bonus(gate_count);
        let mut new_achievements = Vec::new();

        self.score += points;
        let new_level = self.score / POINTS_PER_LEVEL + 1;
        if new_level > self.level {
            new_achievements.push(format!("Level {} Reached!", new_level));
        }
        self.level = new_level;

        if challenge.difficulty == Difficulty::Hard
            && !self.achievements.iter().any(|a| a == HARD_CHALLENGE_ACHIEVEMENT)
        {
            new_achievements.push(HARD_CHALLENGE_ACHIEVEMENT.to_string());
        }

        self.completed.push(id);
        if self.completed.len() == ChallengeId::ALL.len() {
            new_achievements.push(ALL_CHALLENGES_ACHIEVEMENT.to_string());
        }

        self.achievements.extend(new_achievements.iter().cloned());
        info!(challenge = challenge.title, points, score = self.score, level = self.level, "challenge completed");

        Some(Completion { challenge: id, points, new_achievements })
    }

    /// Clears score, level, achievements, completions and the selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
