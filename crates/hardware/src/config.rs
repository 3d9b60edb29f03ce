//! Configuration for the register file model.
//!
//! This module defines the static shape of a register file. It provides:
//! 1. **Defaults:** A typical integer register file (64 words, 3 read ports, 2 write ports).
//! 2. **Validation:** Rejection of impossible dimensions before any storage is allocated.
//! 3. **Derived Values:** Address width and word mask.
//!
//! Configuration is supplied from JSON (for example embedded in a stimulus file)
//! or built directly with [`RegFileConfig::new`].

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Number of addressable storage words.
    pub const REGISTER_COUNT: usize = 64;

    /// Read ports: two source operands plus one store-data operand.
    pub const READ_PORTS: usize = 3;

    /// Write ports: one ALU and one load write-back lane.
    pub const WRITE_PORTS: usize = 2;

    /// Width of each stored word in bits.
    pub const WORD_WIDTH: u32 = 64;

    /// Physical register 0 is reserved as "no destination" by the renamer.
    pub const DISCARD_ADDR: Option<usize> = Some(0);
}

/// Widest word the model can store.
pub const MAX_WORD_WIDTH: u32 = u64::BITS;

/// Static register file dimensions, fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegFileConfig {
    /// Number of addressable storage words (must be at least 1).
    #[serde(default = "RegFileConfig::default_register_count")]
    pub register_count: usize,

    /// Number of read ports.
    #[serde(default = "RegFileConfig::default_read_ports")]
    pub read_ports: usize,

    /// Number of write ports.
    #[serde(default = "RegFileConfig::default_write_ports")]
    pub write_ports: usize,

    /// Width of each word in bits (1 to 64).
    #[serde(default = "RegFileConfig::default_word_width")]
    pub word_width: u32,

    /// Sentinel address whose writes are dropped and never conflict-checked.
    /// `None` disables the sentinel.
    #[serde(default = "RegFileConfig::default_discard_addr")]
    pub discard_addr: Option<usize>,
}

impl RegFileConfig {
    /// Creates a configuration with the given dimensions and no discard sentinel.
    ///
    /// # Arguments
    ///
    /// * `register_count` - Number of storage words.
    /// * `read_ports` - Number of read ports.
    /// * `write_ports` - Number of write ports.
    /// * `word_width` - Bits per word.
    pub const fn new(
        register_count: usize,
        read_ports: usize,
        write_ports: usize,
        word_width: u32,
    ) -> Self {
        Self {
            register_count,
            read_ports,
            write_ports,
            word_width,
            discard_addr: None,
        }
    }

    /// Returns a copy of this configuration with the given discard sentinel.
    #[must_use]
    pub const fn with_discard_addr(mut self, addr: Option<usize>) -> Self {
        self.discard_addr = addr;
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON (including negative
    /// port counts) and any error reported by [`validate`](Self::validate).
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every dimension is usable.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ZeroRegisters`] if `register_count` is zero.
    /// * [`ConfigError::InvalidWordWidth`] if `word_width` is 0 or above 64.
    /// * [`ConfigError::DiscardOutOfRange`] if the sentinel is not a valid address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.register_count == 0 {
            return Err(ConfigError::ZeroRegisters);
        }
        if self.word_width == 0 || self.word_width > MAX_WORD_WIDTH {
            return Err(ConfigError::InvalidWordWidth {
                width: self.word_width,
            });
        }
        if let Some(addr) = self.discard_addr
            && addr >= self.register_count
        {
            return Err(ConfigError::DiscardOutOfRange {
                addr,
                register_count: self.register_count,
            });
        }
        Ok(())
    }

    /// Number of address bits, `ceil(log2(register_count))`.
    ///
    /// A single-register file needs zero address bits.
    pub const fn address_width(&self) -> u32 {
        if self.register_count <= 1 {
            0
        } else {
            usize::BITS - (self.register_count - 1).leading_zeros()
        }
    }

    /// Mask selecting the low `word_width` bits.
    pub const fn word_mask(&self) -> u64 {
        if self.word_width >= MAX_WORD_WIDTH {
            u64::MAX
        } else {
            (1u64 << self.word_width) - 1
        }
    }

    /// Returns `true` if `addr` is the discard sentinel.
    #[inline]
    pub fn is_discard(&self, addr: usize) -> bool {
        self.discard_addr == Some(addr)
    }

    fn default_register_count() -> usize {
        defaults::REGISTER_COUNT
    }

    fn default_read_ports() -> usize {
        defaults::READ_PORTS
    }

    fn default_write_ports() -> usize {
        defaults::WRITE_PORTS
    }

    fn default_word_width() -> u32 {
        defaults::WORD_WIDTH
    }

    fn default_discard_addr() -> Option<usize> {
        defaults::DISCARD_ADDR
    }
}

impl Default for RegFileConfig {
    fn default() -> Self {
        Self {
            register_count: defaults::REGISTER_COUNT,
            read_ports: defaults::READ_PORTS,
            write_ports: defaults::WRITE_PORTS,
            word_width: defaults::WORD_WIDTH,
            discard_addr: defaults::DISCARD_ADDR,
        }
    }
}
