//! # Discard Address Tests
//!
//! Writes to the sentinel address are dropped and never conflict.

use crate::common::{TestContext, scenario_config};
use pretty_assertions::assert_eq;
use rfsim_core::common::Word;
use rfsim_core::{RegFileConfig, WriteRequest};

#[test]
fn test_scenario_double_discard_write() {
    let mut ctx = TestContext::scenario();
    let before = ctx.read(0);
    let _ = ctx.tick(&[0], &[WriteRequest::new(0, 0x11), WriteRequest::new(0, 0x22)]);
    assert_eq!(ctx.tick_idle(0), vec![before]);
    assert_eq!(ctx.rf.peek(0), Some(Word::Unknown));
}

#[test]
fn test_discard_write_does_not_disturb_other_registers() {
    let mut ctx = TestContext::scenario();
    ctx.write(1, 0x0A);
    ctx.write(2, 0x0B);
    let _ = ctx.tick(&[1], &[WriteRequest::new(0, 0xEE), WriteRequest::new(0, 0xDD)]);
    assert_eq!(ctx.tick_idle(2), vec![Word::Known(0x0A)]);
    assert_eq!(ctx.tick_idle(2), vec![Word::Known(0x0B)]);
}

#[test]
fn test_discard_alongside_real_write() {
    let mut ctx = TestContext::scenario();
    let _ = ctx.tick(&[3], &[WriteRequest::new(0, 0x01), WriteRequest::new(3, 0x02)]);
    assert_eq!(ctx.tick_idle(0), vec![Word::Known(0x02)]);
    assert_eq!(ctx.rf.stats().writes_committed, 1);
    assert_eq!(ctx.rf.stats().writes_discarded, 1);
}

#[test]
fn test_configurable_sentinel() {
    let mut ctx = TestContext::new(scenario_config().with_discard_addr(Some(3)));
    ctx.write(0, 0x10);
    assert_eq!(ctx.read(0), Word::Known(0x10));

    let _ = ctx.tick(&[3], &[WriteRequest::new(3, 0x01), WriteRequest::new(3, 0x02)]);
    assert_eq!(ctx.tick_idle(3), vec![Word::Unknown]);
}

#[test]
fn test_no_sentinel_means_register_zero_is_ordinary() {
    let mut ctx = TestContext::new(RegFileConfig::new(4, 1, 2, 8));
    ctx.write(0, 0x7F);
    assert_eq!(ctx.read(0), Word::Known(0x7F));
    assert!(
        ctx.rf
            .tick(&[0], &[WriteRequest::new(0, 1), WriteRequest::new(0, 2)])
            .is_err()
    );
}
