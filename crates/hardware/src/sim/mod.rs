//! Simulation utilities and stimulus loading.
//!
//! Provides the stimulus file format, a loader for it, and a driver that
//! replays stimulus against a register file one cycle at a time.

pub mod loader;
pub mod simulator;

pub use loader::{CycleInput, Stimulus, load_stimulus, parse_stimulus};
pub use simulator::{CycleRecord, RunError, Simulator, records_to_json};
