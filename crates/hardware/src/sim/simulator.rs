//! Simulator: drives one register file through a sequence of cycles.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::loader::{CycleInput, Stimulus};
use crate::common::{ConfigError, TickError, Word};
use crate::config::RegFileConfig;
use crate::core::RegisterFile;

/// Read-port outputs produced by one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleRecord {
    /// Zero-based tick index.
    pub cycle: u64,
    /// One word per read port.
    pub reads: Vec<Word>,
}

/// A replay that stopped at a failing tick.
#[derive(Debug, Error)]
#[error("simulation stopped after {} cycles: {error}", .records.len())]
pub struct RunError {
    /// Records of every tick that completed before the failure.
    pub records: Vec<CycleRecord>,
    /// The failure.
    #[source]
    pub error: TickError,
}

/// Top-level simulator owning a single register file.
#[derive(Debug)]
pub struct Simulator {
    /// The engine under simulation.
    pub regfile: RegisterFile,
}

impl Simulator {
    /// Creates a simulator around a fresh register file.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] if `config` is invalid.
    pub fn new(config: RegFileConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            regfile: RegisterFile::new(config)?,
        })
    }

    /// Creates a simulator sized for `stimulus`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] if the stimulus configuration is invalid.
    pub fn from_stimulus(stimulus: &Stimulus) -> Result<Self, ConfigError> {
        Self::new(stimulus.config.clone())
    }

    /// Advances the register file by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates the [`TickError`] of the underlying tick.
    pub fn step(&mut self, input: &CycleInput) -> Result<CycleRecord, TickError> {
        let cycle = self.regfile.cycle();
        let reads = self.regfile.tick(&input.reads, &input.writes)?;
        Ok(CycleRecord { cycle, reads })
    }

    /// Replays every cycle of `stimulus` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing tick and returns a [`RunError`] carrying the
    /// records produced so far.
    pub fn run(&mut self, stimulus: &Stimulus) -> Result<Vec<CycleRecord>, RunError> {
        let mut records = Vec::with_capacity(stimulus.cycles.len());
        for input in &stimulus.cycles {
            match self.step(input) {
                Ok(record) => records.push(record),
                Err(error) => return Err(RunError { records, error }),
            }
        }
        info!(cycles = records.len(), "stimulus replay complete");
        Ok(records)
    }
}

/// Serializes cycle records as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error; cannot fail for well-formed records.
pub fn records_to_json(records: &[CycleRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
