//! Error definitions for the register file model.
//!
//! This module defines every failure the engine can report. It provides:
//! 1. **Configuration Errors:** Invalid dimensions rejected before any storage is allocated.
//! 2. **Write Conflict Faults:** Two non-discard write ports targeting one register in a cycle.
//! 3. **Tick Errors:** Per-cycle contract violations by the driving pipeline.
//! 4. **Load Errors:** Failures reading or parsing stimulus files.

use std::fmt;

use thiserror::Error;

/// Construction-time configuration failure.
///
/// Raised by [`RegFileConfig::validate`](crate::config::RegFileConfig::validate)
/// and therefore by [`RegisterFile::new`](crate::core::RegisterFile::new).
/// The caller must not proceed with an engine that failed to construct.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The register file must hold at least one word.
    #[error("register count must be at least 1")]
    ZeroRegisters,

    /// Word width outside `1..=64` bits.
    #[error("word width must be between 1 and 64 bits, got {width}")]
    InvalidWordWidth {
        /// The rejected width in bits.
        width: u32,
    },

    /// The discard sentinel does not name a register in the file.
    #[error("discard address {addr} is outside 0..{register_count}")]
    DiscardOutOfRange {
        /// The configured sentinel.
        addr: usize,
        /// Number of registers in the file.
        register_count: usize,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which kind of port a per-cycle error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortKind {
    /// A read port.
    Read,
    /// A write port.
    Write,
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// One pair of write ports that targeted the same register in the same cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConflictPair {
    /// The contested register address.
    pub addr: usize,
    /// Lower-numbered write port.
    pub first_port: usize,
    /// Higher-numbered write port.
    pub second_port: usize,
}

impl fmt::Display for ConflictPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write ports {} and {} both target r{}",
            self.first_port, self.second_port, self.addr
        )
    }
}

/// Two or more valid write ports addressed the same non-discard register.
///
/// This is a fatal contract violation by the renaming or scheduling logic
/// driving the register file. It is never resolved by picking a winner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("write conflict in cycle {cycle}: {}", join_pairs(.conflicts))]
pub struct WriteConflictFault {
    /// Zero-based index of the faulting tick.
    pub cycle: u64,
    /// Every conflicting port pair, ordered by `(first_port, second_port)`.
    pub conflicts: Vec<ConflictPair>,
}

fn join_pairs(pairs: &[ConflictPair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure of a single [`RegisterFile::tick`](crate::core::RegisterFile::tick).
///
/// A tick that returns an error has not modified the engine: storage,
/// read latches and the cycle counter are exactly as before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TickError {
    /// The request batch does not have one entry per configured port.
    #[error("expected {expected} {kind} requests, got {actual}")]
    PortCount {
        /// Port kind of the malformed batch.
        kind: PortKind,
        /// Configured number of ports.
        expected: usize,
        /// Number of requests supplied.
        actual: usize,
    },

    /// A read address, or the address of a valid write, is out of range.
    #[error("{kind} port {port} addressed r{addr}, file has {register_count} registers")]
    AddressOutOfRange {
        /// Port kind of the offending request.
        kind: PortKind,
        /// Index of the offending port.
        port: usize,
        /// The requested address.
        addr: usize,
        /// Number of registers in the file.
        register_count: usize,
    },

    /// Write data does not fit in the configured word width.
    #[error("write port {port} data {data:#x} exceeds {word_width}-bit word")]
    DataTooWide {
        /// Index of the offending write port.
        port: usize,
        /// The supplied data.
        data: u64,
        /// Configured word width in bits.
        word_width: u32,
    },

    /// Write-write conflict on a non-discard register.
    #[error(transparent)]
    WriteConflict(#[from] WriteConflictFault),
}

/// Failure loading a stimulus file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read stimulus: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid stimulus JSON.
    #[error("malformed stimulus: {0}")]
    Parse(#[from] serde_json::Error),

    /// The embedded register file configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
