//! Stimulus loader.
//!
//! This module reads cycle-by-cycle stimulus for a register file. It performs:
//! 1. **Parsing:** A JSON document holding a configuration and a list of cycles.
//! 2. **Validation:** The embedded configuration is checked before any cycle is accepted.
//! 3. **Normalization:** Omitted read or write lists expand to one entry per configured port.
//!
//! ```json
//! {
//!   "config": { "register_count": 4, "read_ports": 1, "write_ports": 2, "word_width": 8 },
//!   "cycles": [
//!     { "reads": [2], "writes": [{ "addr": 2, "data": 90 }, { "valid": false }] },
//!     { "reads": [2] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::LoadError;
use crate::config::RegFileConfig;
use crate::core::WriteRequest;

/// One cycle of port requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleInput {
    /// One address per read port.
    pub reads: Vec<usize>,
    /// One request per write port.
    pub writes: Vec<WriteRequest>,
}

/// A configuration plus the cycles to drive through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stimulus {
    /// Register file dimensions (already validated).
    pub config: RegFileConfig,
    /// Per-cycle requests in order.
    pub cycles: Vec<CycleInput>,
}

#[derive(Deserialize)]
struct RawCycle {
    #[serde(default)]
    reads: Option<Vec<usize>>,
    #[serde(default)]
    writes: Option<Vec<WriteRequest>>,
}

#[derive(Deserialize)]
struct RawStimulus {
    #[serde(default)]
    config: RegFileConfig,
    #[serde(default)]
    cycles: Vec<RawCycle>,
}

/// Parses stimulus from a JSON string.
///
/// # Errors
///
/// * [`LoadError::Parse`] if the document is malformed.
/// * [`LoadError::Config`] if the embedded configuration is invalid.
pub fn parse_stimulus(text: &str) -> Result<Stimulus, LoadError> {
    let raw: RawStimulus = serde_json::from_str(text)?;
    raw.config.validate()?;

    let config = raw.config;
    let cycles = raw
        .cycles
        .into_iter()
        .map(|c| CycleInput {
            reads: c.reads.unwrap_or_else(|| vec![0; config.read_ports]),
            writes: c
                .writes
                .unwrap_or_else(|| vec![WriteRequest::idle(); config.write_ports]),
        })
        .collect();

    Ok(Stimulus { config, cycles })
}

/// Reads and parses a stimulus file.
///
/// # Arguments
///
/// * `path` - Path to a JSON stimulus file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_stimulus`].
pub fn load_stimulus(path: impl AsRef<Path>) -> Result<Stimulus, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_stimulus(&text)
}
