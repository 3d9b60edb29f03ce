//! Storage word with an explicit indeterminate state.
//!
//! Real register arrays power up holding arbitrary bit patterns. Rather than
//! model that as zero, every storage cell and every read-port output carries
//! a [`Word`], which is either a known value or `Unknown`. This provides:
//! 1. **Reset Fidelity:** Storage is never silently zero-initialized.
//! 2. **Test Hygiene:** Results that depend on uninitialized state are distinguishable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single register-file word.
///
/// Values are at most 64 bits wide; the engine guarantees a `Known` value
/// always fits in the configured word width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Word {
    /// Indeterminate contents (power-up state, or a read port that has
    /// not yet latched an address).
    #[default]
    Unknown,
    /// A defined value.
    Known(u64),
}

impl Word {
    /// Returns the defined value, or `None` when the word is indeterminate.
    #[inline]
    pub const fn known(self) -> Option<u64> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown => None,
        }
    }

    /// Returns `true` if the word holds a defined value.
    #[inline]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<u64> for Word {
    #[inline]
    fn from(v: u64) -> Self {
        Self::Known(v)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(v) => write!(f, "{v:#x}"),
            Self::Unknown => f.write_str("X"),
        }
    }
}
