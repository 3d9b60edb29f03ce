//! # Register File Property Tests
//!
//! Randomized cycle sequences checked against a straightforward reference
//! model, covering read latency, write visibility, discard behavior and
//! conflict-detection completeness.

use std::collections::HashMap;

use proptest::collection::vec;
use proptest::prelude::*;
use rfsim_core::common::{TickError, Word};
use rfsim_core::{RegFileConfig, RegisterFile, WriteRequest};

type Cycle = (Vec<usize>, Vec<WriteRequest>);

/// Reference register file: storage, latches, and a counting conflict check.
struct Model {
    storage: Vec<Option<u64>>,
    latches: Vec<Option<usize>>,
    discard: Option<usize>,
}

impl Model {
    fn new(config: &RegFileConfig) -> Self {
        Self {
            storage: vec![None; config.register_count],
            latches: vec![None; config.read_ports],
            discard: config.discard_addr,
        }
    }

    fn has_conflict(&self, writes: &[WriteRequest]) -> bool {
        let mut writers: HashMap<usize, usize> = HashMap::new();
        for w in writes.iter().filter(|w| w.valid) {
            if Some(w.addr) != self.discard {
                *writers.entry(w.addr).or_default() += 1;
            }
        }
        writers.values().any(|&n| n > 1)
    }

    fn step(&mut self, reads: &[usize], writes: &[WriteRequest]) -> Option<Vec<Word>> {
        if self.has_conflict(writes) {
            return None;
        }
        let out = self
            .latches
            .iter()
            .map(|l| match l.and_then(|a| self.storage[a]) {
                Some(v) => Word::Known(v),
                None => Word::Unknown,
            })
            .collect();
        self.latches = reads.iter().copied().map(Some).collect();
        for w in writes.iter().filter(|w| w.valid) {
            if Some(w.addr) != self.discard {
                self.storage[w.addr] = Some(w.data);
            }
        }
        Some(out)
    }
}

fn config_and_cycles() -> impl Strategy<Value = (RegFileConfig, Vec<Cycle>)> {
    (1usize..=8, 0usize..=3, 0usize..=4, 1u32..=16, any::<bool>()).prop_flat_map(
        |(regs, read_ports, write_ports, width, has_discard)| {
            let config = RegFileConfig::new(regs, read_ports, write_ports, width)
                .with_discard_addr(has_discard.then_some(0));
            let write = (any::<bool>(), 0..regs, 0..=config.word_mask())
                .prop_map(|(valid, addr, data)| WriteRequest { valid, addr, data });
            let cycle = (vec(0..regs, read_ports), vec(write, write_ports));
            (Just(config), vec(cycle, 1..48))
        },
    )
}

proptest! {
    #[test]
    fn prop_engine_matches_reference((config, cycles) in config_and_cycles()) {
        let mut rf = RegisterFile::new(config.clone()).unwrap();
        let mut model = Model::new(&config);

        for (reads, writes) in &cycles {
            let actual = rf.tick(reads, writes);
            match model.step(reads, writes) {
                Some(expected) => prop_assert_eq!(actual, Ok(expected)),
                None => prop_assert!(
                    matches!(actual, Err(TickError::WriteConflict(_))),
                    "missed conflict: {:?}", writes
                ),
            }
        }
    }

    #[test]
    fn prop_discard_writes_never_fault(
        data in vec(0u64..=0xFF, 2..=4),
        probe in 1usize..4,
    ) {
        let config = RegFileConfig::new(4, 1, data.len(), 8).with_discard_addr(Some(0));
        let mut rf = RegisterFile::new(config).unwrap();
        let writes: Vec<WriteRequest> = data.iter().map(|&d| WriteRequest::new(0, d)).collect();
        let idle = vec![WriteRequest::idle(); data.len()];

        for _ in 0..3 {
            prop_assert!(rf.tick(&[probe], &writes).is_ok());
        }
        prop_assert_eq!(rf.tick(&[0], &idle).unwrap(), vec![Word::Unknown]);
        prop_assert_eq!(rf.tick(&[0], &idle).unwrap(), vec![Word::Unknown]);
        prop_assert_eq!(rf.stats().writes_committed, 0);
    }

    #[test]
    fn prop_write_visible_until_overwritten(
        addr in 1usize..8,
        value in any::<u32>(),
        idle_cycles in 0usize..16,
    ) {
        let config = RegFileConfig::new(8, 1, 1, 32).with_discard_addr(Some(0));
        let mut rf = RegisterFile::new(config).unwrap();
        let idle = [WriteRequest::idle()];

        prop_assert!(rf.tick(&[addr], &[WriteRequest::new(addr, u64::from(value))]).is_ok());
        for _ in 0..=idle_cycles {
            prop_assert_eq!(
                rf.tick(&[addr], &idle).unwrap(),
                vec![Word::Known(u64::from(value))]
            );
        }
    }

    #[test]
    fn prop_duplicate_valid_writes_always_fault(
        addr in 1usize..8,
        first in 0usize..4,
        second in 0usize..4,
    ) {
        prop_assume!(first != second);
        let config = RegFileConfig::new(8, 0, 4, 8).with_discard_addr(Some(0));
        let mut rf = RegisterFile::new(config).unwrap();
        let mut writes = vec![WriteRequest::idle(); 4];
        writes[first] = WriteRequest::new(addr, 1);
        writes[second] = WriteRequest::new(addr, 2);

        match rf.tick(&[], &writes) {
            Err(TickError::WriteConflict(fault)) => {
                prop_assert_eq!(fault.conflicts.len(), 1);
                prop_assert_eq!(fault.conflicts[0].addr, addr);
                prop_assert_eq!(fault.conflicts[0].first_port, first.min(second));
                prop_assert_eq!(fault.conflicts[0].second_port, first.max(second));
            }
            other => prop_assert!(false, "expected conflict, got {:?}", other),
        }
    }
}
