//! Amortized FIFO queue backing the window operators.
//!
//! Layout: `slots[head..]` holds the live window in arrival order. Popping
//! vacates `slots[head]` and advances `head`; nothing moves. Once at least
//! `compact_min` head slots are vacated and they make up half the buffer,
//! the live tail is moved to the front in a single pass. Every element moves
//! at most once per compaction it survives, so push/pop stay amortized O(1)
//! and the buffer never grows beyond about twice the live window.

use seqflow_core::config::engine_config;
use seqflow_core::metrics;

use crate::tracking::PeakTracker;

#[derive(Debug, Clone)]
pub struct WindowQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    compact_min: usize,
    compactions: usize,
    peak: PeakTracker,
}

impl<T> Default for WindowQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WindowQueue<T> {
    /// Queue using the process-wide compaction threshold.
    pub fn new() -> Self {
        Self::with_compact_min(engine_config().queue_compact_min)
    }

    pub fn with_compact_min(compact_min: usize) -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            compact_min: compact_min.max(1),
            compactions: 0,
            peak: PeakTracker::new(),
        }
    }

    /// Number of live elements in the window.
    pub fn len(&self) -> usize {
        self.slots.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push_back(&mut self, value: T) {
        self.slots.push(Some(value));
        self.peak.record(self.len());
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == self.slots.len() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head += 1;
        if self.head == self.slots.len() {
            // Fully drained: reset in place, keep the allocation.
            self.slots.clear();
            self.head = 0;
        } else {
            self.maybe_compact();
        }
        value
    }

    pub fn front(&self) -> Option<&T> {
        self.slots.get(self.head).and_then(Option::as_ref)
    }

    /// Remove and return every live element in arrival order.
    pub fn take_all(&mut self) -> Vec<T> {
        let out: Vec<T> = self.slots.drain(self.head..).flatten().collect();
        self.slots.clear();
        self.head = 0;
        out
    }

    /// Largest live window observed so far.
    pub fn peak_len(&self) -> usize {
        self.peak.peak()
    }

    /// Slots currently held by the backing buffer, live or vacated.
    pub fn footprint(&self) -> usize {
        self.slots.len()
    }

    pub fn compactions(&self) -> usize {
        self.compactions
    }

    fn maybe_compact(&mut self) {
        if self.head >= self.compact_min && self.head * 2 >= self.slots.len() {
            self.slots.drain(..self.head);
            self.head = 0;
            self.compactions += 1;
            metrics::emit("window_compact", &[("live", self.slots.len())]);
        }
    }
}
