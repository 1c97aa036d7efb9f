//! Input-capture sample bookkeeping.
//!
//! Each received pulse is measured by two hardware capture channels: the
//! rising-edge channel yields the period since the previous rising edge,
//! the falling-edge channel the pulse width. [`PulseCapture`] records
//! those measurements into fixed rings, extending the 16-bit capture
//! counter with an overflow count so periods longer than one timer span
//! stay correct.
//!
//! ## Handoff discipline
//!
//! The rings are a single-producer/single-consumer handoff with no locks:
//!
//! - the interrupt context writes samples at `stor_idx` and is the only
//!   writer of `stor_idx` and `tgt_idx`;
//! - the control loop reads and clears samples at `proc_idx`, never past
//!   the snapshot boundary `tgt_idx`;
//! - `tgt_idx` only advances in [`detect_gap`](PulseCapture::detect_gap),
//!   which runs in the control loop while edge interrupts are quiet (a
//!   gap is, by definition, the absence of edges).
//!
//! The producer never rewrites a slot the consumer has not cleared, so
//! correctness rests on this index discipline alone. Keep it intact when
//! touching this module.

use crate::consts::RX_BUFFER_SAMPLES;

/// Period/width rings written from the capture interrupt and drained by
/// the control loop.
#[derive(Debug)]
pub struct PulseCapture {
    periods: [u32; RX_BUFFER_SAMPLES],
    widths: [u32; RX_BUFFER_SAMPLES],
    /// Next slot the interrupt producer writes.
    stor_idx: usize,
    /// Next unconsumed slot.
    proc_idx: usize,
    /// Snapshot boundary for the current consumption window.
    tgt_idx: usize,
    /// How many times the capture counter has wrapped since the last
    /// stored edge.
    overflow_count: u32,
}

impl Default for PulseCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCapture {
    /// Creates empty rings.
    pub const fn new() -> Self {
        Self {
            periods: [0; RX_BUFFER_SAMPLES],
            widths: [0; RX_BUFFER_SAMPLES],
            stor_idx: 0,
            proc_idx: 0,
            tgt_idx: 0,
            overflow_count: 0,
        }
    }

    fn extend(&self, captured: u32) -> u32 {
        // +1 corrects for the counter being 0-based
        captured
            .wrapping_add(1)
            .wrapping_add(self.overflow_count << 16)
    }

    /// Records the period between the last two rising edges.
    ///
    /// Interrupt context. The slot advances only once its width has also
    /// been recorded, keeping period/width pairs aligned even if an edge
    /// is missed.
    pub fn rising_edge(&mut self, captured: u32) {
        self.periods[self.stor_idx] = self.extend(captured);
        self.overflow_count = 0;

        if self.widths[self.stor_idx] != 0 {
            self.stor_idx = (self.stor_idx + 1) % RX_BUFFER_SAMPLES;
        }
    }

    /// Records the width of the pulse currently being measured.
    ///
    /// Interrupt context.
    pub fn falling_edge(&mut self, captured: u32) {
        self.widths[self.stor_idx] = self.extend(captured);
        self.overflow_count = 0;
    }

    /// Counts a capture-counter wraparound, capped so the extended count
    /// cannot run past the range `bit_max_period` implies.
    ///
    /// Interrupt context.
    pub fn overflow(&mut self, bit_max_period: u32) {
        if self.overflow_count < (bit_max_period >> 16) {
            self.overflow_count += 1;
        }
    }

    /// Closes the sample window when the line has been quiet for longer
    /// than `bit_max_period`.
    ///
    /// Called once per control-loop tick with the capture counter's
    /// current value. If the extended count since the last edge exceeds
    /// the maximum bit period and unconsumed samples exist, the pending
    /// sample's period is finalized from the quiet time and `stor_idx` is
    /// snapshotted into `tgt_idx`, releasing the window to the consumer.
    pub fn detect_gap(&mut self, counter: u32, bit_max_period: u32) {
        let extended = (self.overflow_count << 16).wrapping_add(counter);
        if extended >= bit_max_period && self.tgt_idx != self.stor_idx {
            if self.widths[self.stor_idx] != 0 {
                self.periods[self.stor_idx] = extended;
                self.overflow_count = 0;
                self.stor_idx = (self.stor_idx + 1) % RX_BUFFER_SAMPLES;
            }

            self.tgt_idx = self.stor_idx;
        }
    }

    /// Number of samples in the window `[proc_idx, tgt_idx)`.
    pub fn window_len(&self) -> usize {
        if self.tgt_idx < self.proc_idx {
            (RX_BUFFER_SAMPLES - self.proc_idx) + self.tgt_idx
        } else {
            self.tgt_idx - self.proc_idx
        }
    }

    /// Copies the window's periods into `dst` in consumption order and
    /// returns the sample count. `dst` must hold at least
    /// [`RX_BUFFER_SAMPLES`] entries.
    pub fn copy_window_periods(&self, dst: &mut [u32]) -> usize {
        let count = self.window_len();
        if self.tgt_idx < self.proc_idx {
            // window wraps the end of the ring
            let head = RX_BUFFER_SAMPLES - self.proc_idx;
            dst[..head].copy_from_slice(&self.periods[self.proc_idx..]);
            dst[head..count].copy_from_slice(&self.periods[..self.tgt_idx]);
        } else {
            dst[..count].copy_from_slice(&self.periods[self.proc_idx..self.tgt_idx]);
        }
        count
    }

    /// Takes the next unconsumed `(period, width)` pair, clearing its slot,
    /// or `None` once the consumer has reached the window boundary.
    pub fn pop_sample(&mut self) -> Option<(u32, u32)> {
        if self.proc_idx == self.tgt_idx {
            return None;
        }

        let sample = (self.periods[self.proc_idx], self.widths[self.proc_idx]);
        self.periods[self.proc_idx] = 0;
        self.widths[self.proc_idx] = 0;
        self.proc_idx = (self.proc_idx + 1) % RX_BUFFER_SAMPLES;
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a train of pulses with the given widths and a uniform period.
    ///
    /// Mirrors the hardware edge order: an opening rising edge, then per
    /// pulse a falling edge (width) and the next rising edge (period).
    /// The last pulse stays open; only the gap can finalize it.
    fn feed_train(cap: &mut PulseCapture, widths: &[u32], period: u32) {
        cap.rising_edge(period - 1);
        for (k, &width) in widths.iter().enumerate() {
            cap.falling_edge(width - 1);
            if k + 1 < widths.len() {
                cap.rising_edge(period - 1);
            }
        }
    }

    #[test]
    fn test_train_capture_and_gap_finalization() {
        let mut cap = PulseCapture::new();

        // an opening edge alone publishes nothing
        cap.rising_edge(999);
        assert_eq!(cap.window_len(), 0);

        cap.falling_edge(299);
        cap.rising_edge(999);
        cap.falling_edge(699);
        cap.rising_edge(999);
        cap.falling_edge(499);
        cap.detect_gap(6_000, 5_000);

        assert_eq!(cap.window_len(), 3);
        assert_eq!(cap.pop_sample(), Some((1000, 300)));
        assert_eq!(cap.pop_sample(), Some((1000, 700)));
        // the trailing sample's period is the quiet time itself
        assert_eq!(cap.pop_sample(), Some((6_000, 500)));
        assert_eq!(cap.pop_sample(), None);
    }

    #[test]
    fn test_counter_correction_is_one_based() {
        let mut cap = PulseCapture::new();
        cap.rising_edge(0);
        cap.falling_edge(299);
        cap.rising_edge(999);
        cap.detect_gap(5_000, 5_000);

        assert_eq!(cap.pop_sample(), Some((1000, 300)));
    }

    #[test]
    fn test_overflow_extends_measurement() {
        let mut cap = PulseCapture::new();
        cap.rising_edge(10);
        cap.falling_edge(199);
        cap.overflow(200_000); // cap allows up to 200_000 >> 16 = 3
        cap.rising_edge(99);

        cap.detect_gap(200_000, 200_000);
        let (period, width) = cap.pop_sample().unwrap();
        assert_eq!(period, (1 << 16) + 100);
        assert_eq!(width, 200);
    }

    #[test]
    fn test_overflow_count_is_capped() {
        let mut cap = PulseCapture::new();
        for _ in 0..10 {
            cap.overflow(5_000); // 5_000 >> 16 == 0: never increments
        }
        feed_train(&mut cap, &[100, 100], 1_000);
        cap.detect_gap(5_000, 5_000);
        assert_eq!(cap.pop_sample(), Some((1_000, 100)));
    }

    #[test]
    fn test_gap_needs_quiet_time_and_samples() {
        let mut cap = PulseCapture::new();

        // quiet but nothing stored: boundary must not move
        cap.detect_gap(6_000, 5_000);
        assert_eq!(cap.window_len(), 0);

        cap.rising_edge(999);
        cap.falling_edge(299);

        // not quiet enough yet
        cap.detect_gap(1_000, 5_000);
        assert_eq!(cap.window_len(), 0);

        cap.detect_gap(5_000, 5_000);
        assert_eq!(cap.window_len(), 1);
        assert_eq!(cap.pop_sample(), Some((5_000, 300)));
    }

    #[test]
    fn test_window_copy_handles_wraparound() {
        let mut cap = PulseCapture::new();

        // drain most of the ring so the next window wraps its end
        let widths = [300u32; RX_BUFFER_SAMPLES - 2];
        feed_train(&mut cap, &widths, 1_000);
        cap.detect_gap(6_000, 5_000);
        while cap.pop_sample().is_some() {}

        cap.rising_edge(999);
        for period in [1_000u32, 1_001, 1_002, 1_003] {
            cap.falling_edge(299);
            cap.rising_edge(period - 1);
        }
        cap.falling_edge(299);
        cap.detect_gap(6_000, 5_000);

        let mut periods = [0u32; RX_BUFFER_SAMPLES];
        let count = cap.copy_window_periods(&mut periods);
        assert_eq!(count, 5);
        assert_eq!(&periods[..5], &[1_000, 1_001, 1_002, 1_003, 6_000]);

        for expect in [1_000, 1_001, 1_002, 1_003, 6_000] {
            assert_eq!(cap.pop_sample().unwrap().0, expect);
        }
        assert_eq!(cap.pop_sample(), None);
    }
}
