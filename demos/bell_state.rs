//! Builds a Bell state, prints the circuit and samples it.
//!
//! Run with `RUST_LOG=debug cargo run --example bell_state` to see each gate logged.

use qstate::{CircuitBuilder, EngineConfig, QuantumError, Simulator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QuantumError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let circuit = CircuitBuilder::new().h(0).cnot(0, 1).build();
    println!("{}", circuit);

    let simulator = Simulator::with_config(EngineConfig::default().with_seed(2024));
    let result = simulator.run(&circuit, 1_000)?;
    println!("{}", result);

    let mut engine = simulator.prepare(&circuit)?;
    println!("{}", engine.state());
    for _ in 0..5 {
        println!("measured |{}⟩", engine.measure());
    }
    println!(
        "gates: {}  measurements: {}  bell state: {}",
        engine.gate_count(),
        engine.measurement_count(),
        engine.check_state(&[0.5, 0.0, 0.0, 0.5])
    );
    Ok(())
}
