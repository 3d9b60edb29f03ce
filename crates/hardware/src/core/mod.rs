//! Register file core.
//!
//! This module contains the cycle-level register file engine and the port
//! types used to drive it.

/// Multi-ported register file storage engine.
pub mod regfile;

pub use self::regfile::{RegisterFile, WriteRequest};
