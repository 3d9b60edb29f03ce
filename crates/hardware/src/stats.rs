//! Register file access statistics.
//!
//! This module tracks how an engine has been exercised. It provides:
//! 1. **Cycles:** Completed ticks.
//! 2. **Port Traffic:** Reads issued, reads that returned indeterminate data, writes committed and discarded.
//! 3. **Faults:** Ticks rejected with a write conflict.

use serde::Serialize;

/// Access counters for one [`RegisterFile`](crate::core::RegisterFile).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegFileStats {
    /// Completed ticks.
    pub cycles: u64,
    /// Read-port outputs produced.
    pub reads: u64,
    /// Read-port outputs that were [`Word::Unknown`](crate::common::Word::Unknown).
    pub unknown_reads: u64,
    /// Valid writes stored into the array.
    pub writes_committed: u64,
    /// Valid writes dropped because they targeted the discard address.
    pub writes_discarded: u64,
    /// Ticks rejected with a write conflict fault.
    pub write_conflicts: u64,
}

impl RegFileStats {
    /// Fraction of write-port slots that carried a valid write.
    ///
    /// # Arguments
    ///
    /// * `write_ports` - Configured number of write ports.
    ///
    /// # Returns
    ///
    /// A value in `[0, 1]`, or `0.0` if no write slots have elapsed.
    pub fn write_utilization(&self, write_ports: usize) -> f64 {
        let slots = self.cycles * write_ports as u64;
        if slots == 0 {
            0.0
        } else {
            (self.writes_committed + self.writes_discarded) as f64 / slots as f64
        }
    }

    /// Prints a summary report to stdout.
    pub fn print(&self, write_ports: usize) {
        println!("\n==========================================================");
        println!("REGISTER FILE STATISTICS");
        println!("==========================================================");
        println!("rf_cycles                {}", self.cycles);
        println!("rf_reads                 {}", self.reads);
        println!("rf_reads_unknown         {}", self.unknown_reads);
        println!("rf_writes_committed      {}", self.writes_committed);
        println!("rf_writes_discarded      {}", self.writes_discarded);
        println!("rf_write_conflicts       {}", self.write_conflicts);
        println!(
            "rf_write_utilization     {:.2}%",
            self.write_utilization(write_ports) * 100.0
        );
        println!("==========================================================");
    }
}
