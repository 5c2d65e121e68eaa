//! Shared test support utilities
//!
//! Deterministic `RandomSource` implementations for unit and integration tests.

use crate::port::RandomSource;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Always picks the first element and the lower bound, or, once switched with
/// [`FixedPick::pick_last`], the last element and the upper bound.
///
/// Clones share the switch, so a test can keep one handle while the store owns
/// another.
#[derive(Clone, Default)]
pub struct FixedPick {
    last: Arc<AtomicBool>,
}

impl FixedPick {
    pub fn first() -> Self {
        Self::default()
    }

    pub fn pick_first(&self) {
        self.last.store(false, Ordering::SeqCst);
    }

    pub fn pick_last(&self) {
        self.last.store(true, Ordering::SeqCst);
    }

    fn is_last(&self) -> bool {
        self.last.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedPick {
    fn index(&mut self, len: usize) -> usize {
        if self.is_last() { len - 1 } else { 0 }
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if self.is_last() { high } else { low }
    }
}

/// Replays scripted draws, then falls back to the first element / lower bound.
///
/// Values wrap around the requested range.
pub struct SequenceSource {
    values: VecDeque<usize>,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for SequenceSource {
    fn index(&mut self, len: usize) -> usize {
        self.values.pop_front().map_or(0, |v| v % len)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        let span = (high - low) as usize + 1;
        let offset = self.values.pop_front().map_or(0, |v| v % span);
        low + offset as u32
    }
}
