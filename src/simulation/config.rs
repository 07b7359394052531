// src/simulation/config.rs

use crate::core::constants::DEFAULT_NORM_TOLERANCE;

/// What the engine does with normalization after each gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// No post-gate check.
    Off,
    /// Recompute the norm after every gate and log drift at `warn`.
    #[default]
    Warn,
}

/// Engine settings shared by `QuantumStateEngine` and `Simulator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Seed for the measurement RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Allowed deviation of the probability sum from 1.
    pub norm_tolerance: f64,
    /// Post-gate normalization behaviour.
    pub validation: ValidationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            validation: ValidationMode::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the measurement RNG seed for reproducible sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = EngineConfig::new()
            .with_seed(7)
            .with_norm_tolerance(1e-6)
            .with_validation(ValidationMode::Off);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.norm_tolerance, 1e-6);
        assert_eq!(config.validation, ValidationMode::Off);

        let default = EngineConfig::default();
        assert_eq!(default.seed, None);
        assert_eq!(default.validation, ValidationMode::Warn);
    }
}
