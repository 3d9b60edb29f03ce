//! Multi-ported register file storage engine.
//!
//! This module implements the register file that services operand reads and
//! result write-backs every cycle. It performs the following per tick:
//! 1. **Read Outputs:** Each read port returns the word at the address it latched last cycle.
//! 2. **Address Latch:** Each read port samples this cycle's address for the next tick.
//! 3. **Conflict Check:** Every pair of valid, non-discard write ports must target distinct registers.
//! 4. **Write Commit:** Valid writes are stored; writes to the discard address are dropped.
//!
//! Reads therefore have one cycle of latency, and a value written in cycle
//! `t` is returned by a read requested in cycle `t` (delivered at `t + 1`).

/// Write-write conflict detection.
pub mod conflict;

/// Read latch and write request types.
pub mod ports;

/// Backing storage array.
pub mod storage;

use std::fmt;

use tracing::{debug, error, trace, warn};

use self::ports::ReadLatch;
use self::storage::Storage;
use crate::common::{ConfigError, PortKind, TickError, Word, WriteConflictFault};
use crate::config::RegFileConfig;
use crate::stats::RegFileStats;

pub use self::ports::WriteRequest;

/// Register file storage engine.
///
/// Owns the storage array and one address latch per read port. All access
/// goes through [`tick`](Self::tick), which takes `&mut self`, so ticks on
/// one instance are serialized by construction.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    config: RegFileConfig,
    storage: Storage,
    latches: Vec<ReadLatch>,
    cycle: u64,
    stats: RegFileStats,
}

impl RegisterFile {
    /// Creates a register file with indeterminate contents.
    ///
    /// # Arguments
    ///
    /// * `config` - Static dimensions of the file.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`RegFileConfig::validate`]; nothing is
    /// allocated for an invalid configuration.
    pub fn new(config: RegFileConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            registers = config.register_count,
            read_ports = config.read_ports,
            write_ports = config.write_ports,
            word_width = config.word_width,
            discard = ?config.discard_addr,
            "register file created"
        );
        Ok(Self {
            storage: Storage::new(config.register_count),
            latches: vec![ReadLatch::default(); config.read_ports],
            cycle: 0,
            stats: RegFileStats::default(),
            config,
        })
    }

    /// Advances the register file by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `reads` - One address per read port, sampled unconditionally.
    /// * `writes` - One request per write port.
    ///
    /// # Returns
    ///
    /// One word per read port: the contents, after last cycle's commit, of
    /// the address that port requested last cycle. Ports that have never
    /// latched an address return [`Word::Unknown`].
    ///
    /// # Errors
    ///
    /// * [`TickError::PortCount`] if a batch is not sized to its port count.
    /// * [`TickError::AddressOutOfRange`] for a bad read address or valid write address.
    /// * [`TickError::DataTooWide`] if valid write data exceeds the word width.
    /// * [`TickError::WriteConflict`] if two valid write ports share a non-discard address.
    ///
    /// A failed tick leaves the engine unchanged.
    pub fn tick(&mut self, reads: &[usize], writes: &[WriteRequest]) -> Result<Vec<Word>, TickError> {
        if let Err(e) = self.check_batch(reads, writes) {
            warn!(cycle = self.cycle, error = %e, "rejected register file requests");
            return Err(e);
        }

        // Checked before any state moves so a faulted tick is a no-op.
        let conflicts = conflict::find_conflicts(writes, self.config.discard_addr);
        if !conflicts.is_empty() {
            self.stats.write_conflicts += 1;
            let fault = WriteConflictFault {
                cycle: self.cycle,
                conflicts,
            };
            error!(cycle = self.cycle, %fault, "write port conflict");
            return Err(fault.into());
        }

        let outputs: Vec<Word> = self
            .latches
            .iter()
            .map(|latch| latch.output(&self.storage))
            .collect();

        for (latch, &addr) in self.latches.iter_mut().zip(reads) {
            latch.sample(addr);
        }

        let mut committed = 0u64;
        let mut discarded = 0u64;
        for (port, w) in writes.iter().enumerate().filter(|(_, w)| w.valid) {
            if self.config.is_discard(w.addr) {
                discarded += 1;
                continue;
            }
            self.storage.write(w.addr, w.data);
            committed += 1;
            trace!(cycle = self.cycle, port, addr = w.addr, data = w.data, "commit");
        }

        self.stats.cycles += 1;
        self.stats.reads += outputs.len() as u64;
        self.stats.unknown_reads += outputs.iter().filter(|w| !w.is_known()).count() as u64;
        self.stats.writes_committed += committed;
        self.stats.writes_discarded += discarded;
        trace!(cycle = self.cycle, committed, discarded, "tick");

        self.cycle += 1;
        Ok(outputs)
    }

    /// Validates batch sizes, addresses and data widths.
    fn check_batch(&self, reads: &[usize], writes: &[WriteRequest]) -> Result<(), TickError> {
        let register_count = self.config.register_count;
        if reads.len() != self.config.read_ports {
            return Err(TickError::PortCount {
                kind: PortKind::Read,
                expected: self.config.read_ports,
                actual: reads.len(),
            });
        }
        if writes.len() != self.config.write_ports {
            return Err(TickError::PortCount {
                kind: PortKind::Write,
                expected: self.config.write_ports,
                actual: writes.len(),
            });
        }
        if let Some((port, &addr)) = reads
            .iter()
            .enumerate()
            .find(|&(_, &addr)| addr >= register_count)
        {
            return Err(TickError::AddressOutOfRange {
                kind: PortKind::Read,
                port,
                addr,
                register_count,
            });
        }

        let mask = self.config.word_mask();
        for (port, w) in writes.iter().enumerate().filter(|(_, w)| w.valid) {
            if w.addr >= register_count {
                return Err(TickError::AddressOutOfRange {
                    kind: PortKind::Write,
                    port,
                    addr: w.addr,
                    register_count,
                });
            }
            if w.data & !mask != 0 {
                return Err(TickError::DataTooWide {
                    port,
                    data: w.data,
                    word_width: self.config.word_width,
                });
            }
        }
        Ok(())
    }

    /// Returns every storage word and read latch to the indeterminate state.
    ///
    /// The cycle counter and statistics keep counting across a reset.
    pub fn reset(&mut self) {
        self.storage.invalidate();
        self.latches.iter_mut().for_each(ReadLatch::clear);
        debug!(cycle = self.cycle, "register file reset");
    }

    /// The configuration this engine was built with.
    #[inline]
    pub const fn config(&self) -> &RegFileConfig {
        &self.config
    }

    /// Number of completed ticks.
    #[inline]
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Access statistics.
    #[inline]
    pub const fn stats(&self) -> &RegFileStats {
        &self.stats
    }

    /// Inspects a storage word without going through a read port.
    ///
    /// Debug aid only: does not affect latches or statistics.
    /// Returns `None` if `addr` is out of range.
    pub fn peek(&self, addr: usize) -> Option<Word> {
        self.storage.get(addr)
    }

    /// The address latched by read port `port`, if any.
    pub fn latched(&self, port: usize) -> Option<usize> {
        self.latches.get(port).and_then(ReadLatch::latched)
    }

    /// Dumps every storage word to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    /// Lists storage words two per line, `X` marking indeterminate contents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<Word> = self.storage.iter().collect();
        for (row, pair) in words.chunks(2).enumerate() {
            let base = row * 2;
            write!(f, "r{base:<3}={:>18}", pair[0].to_string())?;
            if let Some(second) = pair.get(1) {
                write!(f, " r{:<3}={:>18}", base + 1, second.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
