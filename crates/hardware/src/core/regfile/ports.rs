//! Read and write port state.
//!
//! Read ports own a one-cycle address latch; write ports are transient
//! per-cycle records supplied by the write-back logic.

use serde::{Deserialize, Serialize};

use super::storage::Storage;
use crate::common::Word;

/// One write port's request for a single cycle.
///
/// Idle ports (`valid == false`) are ignored entirely, including their
/// address and data fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Write enable.
    #[serde(default = "WriteRequest::default_valid")]
    pub valid: bool,
    /// Destination register.
    #[serde(default)]
    pub addr: usize,
    /// Value to store; must fit in the configured word width.
    #[serde(default)]
    pub data: u64,
}

impl WriteRequest {
    /// A valid write of `data` to `addr`.
    #[inline]
    pub const fn new(addr: usize, data: u64) -> Self {
        Self {
            valid: true,
            addr,
            data,
        }
    }

    /// An idle write port.
    #[inline]
    pub const fn idle() -> Self {
        Self {
            valid: false,
            addr: 0,
            data: 0,
        }
    }

    // Requests spelled out in stimulus files are writes unless marked otherwise.
    const fn default_valid() -> bool {
        true
    }
}

/// Per-read-port address latch.
///
/// Written every cycle from the port's address input and read the next
/// cycle to select the port's output. Holds no address before the first
/// cycle, in which case the port outputs [`Word::Unknown`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadLatch {
    addr: Option<usize>,
}

impl ReadLatch {
    /// Captures this cycle's address.
    #[inline]
    pub const fn sample(&mut self, addr: usize) {
        self.addr = Some(addr);
    }

    /// The address captured last cycle, if any.
    #[inline]
    pub const fn latched(&self) -> Option<usize> {
        self.addr
    }

    /// Drives the port output from the latched address.
    #[inline]
    pub fn output(&self, storage: &Storage) -> Word {
        self.addr.map_or(Word::Unknown, |addr| storage.read(addr))
    }

    /// Forgets the latched address.
    #[inline]
    pub const fn clear(&mut self) {
        self.addr = None;
    }
}
