//! Write-write conflict detection.
//!
//! Real hardware corrupts a register when two write ports drive it in the
//! same cycle. The model instead compares every unordered pair of valid
//! write ports and reports each pair that shares a non-discard address.

use super::ports::WriteRequest;
use crate::common::ConflictPair;

/// Finds every pair of valid write ports that target the same register.
///
/// The scan is exhaustive and O(n²) in the number of write ports. Writes to
/// `discard` never conflict. Pairs are returned ordered by
/// `(first_port, second_port)`.
///
/// # Arguments
///
/// * `writes` - This cycle's write requests, indexed by port.
/// * `discard` - Sentinel address exempt from checking, if any.
pub fn find_conflicts(writes: &[WriteRequest], discard: Option<usize>) -> Vec<ConflictPair> {
    let mut conflicts = Vec::new();
    for (j, a) in writes.iter().enumerate() {
        if !a.valid || discard == Some(a.addr) {
            continue;
        }
        for (k, b) in writes.iter().enumerate().skip(j + 1) {
            if b.valid && b.addr == a.addr {
                conflicts.push(ConflictPair {
                    addr: a.addr,
                    first_port: j,
                    second_port: k,
                });
            }
        }
    }
    conflicts
}
