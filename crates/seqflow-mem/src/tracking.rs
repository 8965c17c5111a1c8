//! Lightweight peak tracking for window buffers.
//!
//! Keep this optional and cheap. Tests use it to check that windows stay
//! bounded no matter how long the upstream runs.

#[derive(Debug, Default, Clone, Copy)]
pub struct PeakTracker {
    peak: usize,
}

impl PeakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new occupancy value; updates peak if higher.
    pub fn record(&mut self, used: usize) {
        if used > self.peak {
            self.peak = used;
            #[cfg(feature = "tracing")]
            tracing::trace!(used, peak = self.peak, "window peak");
        }
    }

    pub fn peak(&self) -> usize {
        self.peak
    }
}
