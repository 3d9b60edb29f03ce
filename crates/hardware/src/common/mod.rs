//! Common types used throughout the register file model.
//!
//! This module provides the building blocks shared by the engine, the
//! configuration layer and the simulation driver. It includes:
//! 1. **Storage Words:** A word type that distinguishes defined values from indeterminate state.
//! 2. **Error Handling:** Configuration, per-cycle and stimulus-loading errors.

/// Error types and fault definitions.
pub mod error;

/// Storage word with an explicit indeterminate state.
pub mod word;

pub use error::{ConfigError, ConflictPair, LoadError, PortKind, TickError, WriteConflictFault};
pub use word::Word;
