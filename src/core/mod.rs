// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qstate::core::TypeName`
pub use error::{QuantumError, QuantumResult};
pub use state::{BasisState, StateVector};

pub mod constants;
pub use constants::{DIM, NUM_QUBITS};
