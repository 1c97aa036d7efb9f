//! Duty-cycle word decoding.
//!
//! The decoder turns a window of captured (period, width) samples into
//! binary words. It first recovers the dominant bit period as the
//! statistical mode of the window's periods, then classifies each pulse by
//! duty cycle against that reference: below 50 % is the short class, 50 %
//! and above the long class. A pulse whose period strays more than 1.3x
//! from the mode marks an inter-word gap and finalizes the word in
//! progress.
//!
//! Per-bit timing measurements are accumulated alongside the symbols so a
//! finalized word can report canonical `long`/`short`/`period` values,
//! again as modes over the whole word.

use crate::capture::PulseCapture;
use crate::config::RxConfig;
use crate::consts::{
    DUTY_SPLIT_PCT, PERIOD_LIMIT_DEN, PERIOD_LIMIT_NUM, RX_BUFFER_SAMPLES, WORD_CAPACITY,
};
use crate::correlate::{ConfirmedWord, CorrelationBuffer, RxWord};
use crate::stats;

/// Symbol storage for one word: up to 64 data bits plus an optional
/// leading synchronization symbol, as ASCII `'0'`/`'1'`.
pub type WordBits = heapless::String<WORD_CAPACITY>;

/// Incremental word decoder over the capture window.
///
/// A word that has not yet seen its closing gap is carried across
/// control-loop ticks; nothing is dropped at a window boundary.
pub struct WordDecoder {
    word: WordBits,
    meas_long: [u32; WORD_CAPACITY],
    meas_short: [u32; WORD_CAPACITY],
    meas_period: [u32; WORD_CAPACITY],
    /// True until the first sample of the current word is consumed.
    at_word_start: bool,
    /// Scratch space for the window's period mode.
    sorted: [u32; RX_BUFFER_SAMPLES],
}

impl core::fmt::Debug for WordDecoder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WordDecoder")
            .field("word", &self.word)
            .field("at_word_start", &self.at_word_start)
            .finish()
    }
}

impl Default for WordDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordDecoder {
    /// Creates a decoder with no word in progress.
    pub fn new() -> Self {
        Self {
            word: WordBits::new(),
            meas_long: [0; WORD_CAPACITY],
            meas_short: [0; WORD_CAPACITY],
            meas_period: [0; WORD_CAPACITY],
            at_word_start: true,
            sorted: [0; RX_BUFFER_SAMPLES],
        }
    }

    /// Drains the capture window, assembling words and submitting each
    /// finalized one for correlation.
    ///
    /// Returns the last confirmation produced this tick, if any.
    pub fn process(
        &mut self,
        capture: &mut PulseCapture,
        cfg: &RxConfig,
        correl: &mut CorrelationBuffer,
        now_ms: u32,
    ) -> Option<ConfirmedWord> {
        let sample_ct = capture.copy_window_periods(&mut self.sorted);
        if sample_ct == 0 {
            return None;
        }

        // dominant bit period over the whole window, gaps included
        let period_mode = stats::mode(&mut self.sorted[..sample_ct]);
        let timeout_us = correl.timeout_us();

        let mut confirmed = None;
        while let Some((period, width)) = capture.pop_sample() {
            let skip_sync = cfg.ignore_sync_bit && self.at_word_start;
            self.at_word_start = false;

            if !skip_sync {
                self.accumulate(period, width, period_mode, timeout_us, cfg.invert_logic);
            }

            let gap = u64::from(period) * PERIOD_LIMIT_DEN
                > u64::from(period_mode) * PERIOD_LIMIT_NUM;
            if gap && !self.word.is_empty() {
                let candidate = self.finalize(cfg);
                if let Some(word) = correl.submit(candidate, now_ms, cfg.ignore_sync_bit) {
                    confirmed = Some(word);
                }
            }
        }

        confirmed
    }

    /// Classifies one sample and records its symbol and timings.
    fn accumulate(
        &mut self,
        period: u32,
        width: u32,
        period_mode: u32,
        timeout_us: u32,
        invert_logic: bool,
    ) {
        let idx = self.word.len();
        if idx >= WORD_CAPACITY || period_mode == 0 {
            // word storage exhausted; the length filter rejects it later
            return;
        }

        // one abnormally long gap must not corrupt the timing record
        self.meas_period[idx] = if period > timeout_us {
            period_mode
        } else {
            period
        };

        let duty_pct = u64::from(width) * 100 / u64::from(period_mode);
        let symbol = if duty_pct < DUTY_SPLIT_PCT {
            self.meas_short[idx] = width;
            self.meas_long[idx] = self.meas_period[idx].saturating_sub(width);
            if invert_logic { '0' } else { '1' }
        } else {
            self.meas_long[idx] = width;
            self.meas_short[idx] = self.meas_period[idx].saturating_sub(width);
            if invert_logic { '1' } else { '0' }
        };
        let _ = self.word.push(symbol);
    }

    /// Closes the word in progress and derives its canonical timings.
    fn finalize(&mut self, cfg: &RxConfig) -> RxWord {
        let len = self.word.len();
        let candidate = RxWord {
            bits: self.word.clone(),
            long_us: stats::mode(&mut self.meas_long[..len]),
            short_us: stats::mode(&mut self.meas_short[..len]),
            period_us: stats::mode(&mut self.meas_period[..len]),
            logic: cfg.invert_logic,
        };

        self.word.clear();
        self.meas_long[..len].fill(0);
        self.meas_short[..len].fill(0);
        self.meas_period[..len].fill(0);
        self.at_word_start = true;

        candidate
    }
}
