//! Multi-ported register file simulator library.
//!
//! This crate implements a cycle-accurate behavioral model of a processor
//! register file with the following:
//! 1. **Core:** Storage array, one-cycle read latches, synchronous write commit.
//! 2. **Verification:** Exhaustive write-write conflict detection with a discard sentinel.
//! 3. **Configuration:** Register count, port counts, word width and discard address.
//! 4. **Simulation:** Stimulus loading, a cycle driver, and access statistics.

/// Common types (storage words, errors).
pub mod common;
/// Register file configuration (defaults, validation, derived widths).
pub mod config;
/// Register file engine and port types.
pub mod core;
/// Stimulus loading and the cycle driver.
pub mod sim;
/// Access statistics collection and reporting.
pub mod stats;

/// Static register file dimensions; use `RegFileConfig::default()` or parse from JSON.
pub use crate::config::RegFileConfig;
/// The register file engine; construct with `RegisterFile::new`.
pub use crate::core::{RegisterFile, WriteRequest};
/// Simulation driver replaying stimulus against one engine.
pub use crate::sim::simulator::Simulator;
