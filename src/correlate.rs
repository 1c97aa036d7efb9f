//! Repetition-vote word confirmation.
//!
//! Remotes repeat their word many times per key press; a single decode is
//! worthless on its own. [`CorrelationBuffer`] keeps the last few decoded
//! candidates in a fixed ring and announces a word only once enough
//! identical copies have accumulated, de-duplicating so one key press
//! produces one confirmation.
//!
//! Two details are load-bearing:
//!
//! - The history is session-scoped: if nothing arrives for the configured
//!   timeout, the whole ring is cleared before the next insert. Candidates
//!   from different transmissions must never vote together.
//! - The vote scan only starts from slots at least `match_thresh`
//!   positions behind the write cursor, so a candidate is announced from
//!   its oldest copy. Which duplicate is reported first depends on this
//!   margin; keep it when modifying the scan.

use crate::consts::{
    DEFAULT_MATCH_THRESH, DEFAULT_MIN_WORD_LEN, DEFAULT_TIMEOUT_US, RX_CORREL_WORDS, RX_MAX_BITS,
};
use crate::decode::WordBits;
use crate::stats;

/// A decoded word candidate with its recovered timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxWord {
    /// Decoded symbols.
    pub bits: WordBits,
    /// Canonical long pulse width, in microseconds.
    pub long_us: u32,
    /// Canonical short pulse width, in microseconds.
    pub short_us: u32,
    /// Canonical bit period, in microseconds.
    pub period_us: u32,
    /// Logic polarity the word was decoded under.
    pub logic: bool,
}

/// A word that passed repetition voting, as reported to the host.
///
/// Timings are averaged over every stored copy of the word, smoothing the
/// per-repetition capture jitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedWord {
    /// Decoded symbols.
    pub bits: WordBits,
    /// Averaged long pulse width, in microseconds.
    pub long_us: u32,
    /// Averaged short pulse width, in microseconds.
    pub short_us: u32,
    /// Averaged bit period, in microseconds.
    pub period_us: u32,
    /// Logic polarity the word was decoded under.
    pub invert_logic: bool,
    /// Whether the receiver was discarding a leading sync symbol.
    pub ignore_sync: bool,
}

impl ConfirmedWord {
    /// Number of decoded symbols.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the word carries no symbols (never the case for an
    /// emitted confirmation).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Slot {
    word: RxWord,
    /// Insertion sequence number; distinguishes a slot's current content
    /// from whatever a stale reference was recorded against.
    stamp: u32,
}

/// Reference to a confirmed slot, valid only while the slot's stamp
/// matches.
#[derive(Debug, Clone, Copy)]
struct MatchRef {
    slot: usize,
    stamp: u32,
}

/// Fixed ring of recent candidates with majority-vote confirmation.
#[derive(Debug)]
pub struct CorrelationBuffer {
    slots: [Option<Slot>; RX_CORREL_WORDS],
    /// Next slot to write.
    index: usize,
    /// Insertion counter used to stamp slots.
    seq: u32,
    /// When the most recent candidate was inserted, in milliseconds.
    last_word_time_ms: u32,
    last_match: Option<MatchRef>,
    timeout_us: u32,
    match_thresh: u8,
    min_word_len: u8,
    max_word_len: u8,
}

impl Default for CorrelationBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationBuffer {
    /// Creates an empty buffer with default thresholds.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            index: 0,
            seq: 0,
            last_word_time_ms: 0,
            last_match: None,
            timeout_us: DEFAULT_TIMEOUT_US,
            match_thresh: DEFAULT_MATCH_THRESH,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            max_word_len: RX_MAX_BITS as u8,
        }
    }

    /// History timeout, in microseconds.
    pub fn timeout_us(&self) -> u32 {
        self.timeout_us
    }

    /// Number of identical copies required for confirmation.
    pub fn match_thresh(&self) -> u8 {
        self.match_thresh
    }

    /// Minimum accepted word length, in symbols.
    pub fn min_word_len(&self) -> u8 {
        self.min_word_len
    }

    /// Maximum accepted word length, in symbols.
    pub fn max_word_len(&self) -> u8 {
        self.max_word_len
    }

    pub(crate) fn set_timeout_us(&mut self, value: u32) {
        self.timeout_us = value;
    }

    pub(crate) fn set_match_thresh(&mut self, value: u8) {
        self.match_thresh = value;
    }

    pub(crate) fn set_min_word_len(&mut self, value: u8) {
        self.min_word_len = value;
    }

    pub(crate) fn set_max_word_len(&mut self, value: u8) {
        self.max_word_len = value;
    }

    /// The most recently inserted candidate, if any.
    pub fn newest(&self) -> Option<&RxWord> {
        let idx = self
            .index
            .checked_sub(1)
            .unwrap_or(RX_CORREL_WORDS - 1);
        self.slots[idx].as_ref().map(|slot| &slot.word)
    }

    /// Resolves the previously announced word, if its slot still holds it.
    fn last_match_bits(&self) -> Option<&WordBits> {
        let m = self.last_match?;
        let slot = self.slots[m.slot].as_ref()?;
        (slot.stamp == m.stamp).then_some(&slot.word.bits)
    }

    /// Inserts a candidate and runs the repetition vote.
    ///
    /// Returns a confirmation when this insert completes a majority that
    /// has not already been announced. Out-of-bounds lengths are dropped
    /// silently; when a sync symbol is carried in the word
    /// (`ignore_sync == false`), one extra symbol is allowed past the
    /// maximum.
    pub fn submit(
        &mut self,
        candidate: RxWord,
        now_ms: u32,
        ignore_sync: bool,
    ) -> Option<ConfirmedWord> {
        let len = candidate.bits.len();
        let max_len = self.max_word_len as usize + if ignore_sync { 0 } else { 1 };
        if len < self.min_word_len as usize || len > max_len {
            return None;
        }

        // a long quiet spell means a new correlation session: old history
        // must not vote on new words
        let elapsed_ms = now_ms.wrapping_sub(self.last_word_time_ms);
        if u64::from(elapsed_ms) * 1_000 >= u64::from(self.timeout_us) {
            self.clear();
            debug!("correlation history reset after {} ms idle", elapsed_ms);
        }

        self.slots[self.index] = Some(Slot {
            word: candidate,
            stamp: self.seq,
        });
        self.seq = self.seq.wrapping_add(1);
        self.index = (self.index + 1) % RX_CORREL_WORDS;
        self.last_word_time_ms = now_ms;

        let (winner_slot, winner_stamp) = self.scan()?;

        // the same slot, still holding the same insertion, was already
        // announced: stay quiet
        if let Some(m) = self.last_match {
            if m.slot == winner_slot && m.stamp == winner_stamp {
                return None;
            }
        }
        self.last_match = Some(MatchRef {
            slot: winner_slot,
            stamp: winner_stamp,
        });

        self.confirmation(winner_slot, ignore_sync)
    }

    /// Majority-vote scan over the ring.
    ///
    /// Start slots are restricted to at least `match_thresh` positions
    /// behind the write cursor; partners run from the start slot up to the
    /// newest insert. The first start slot reaching the threshold wins.
    fn scan(&self) -> Option<(usize, u32)> {
        let thresh = self.match_thresh as usize;
        let last_bits = self.last_match_bits();

        for i in 0..=self.index.checked_sub(thresh)? {
            let Some(slot_i) = &self.slots[i] else {
                continue;
            };
            // skip whatever was already announced
            if last_bits == Some(&slot_i.word.bits) {
                continue;
            }

            let mut matches = 1usize;
            for j in (i + 1)..self.index {
                if let Some(slot_j) = &self.slots[j] {
                    if slot_j.word.bits == slot_i.word.bits {
                        matches += 1;
                    }
                }
            }

            if matches >= thresh {
                return Some((i, slot_i.stamp));
            }
        }
        None
    }

    /// Builds the confirmation for `winner`, averaging timings over every
    /// stored copy of the word.
    fn confirmation(&self, winner: usize, ignore_sync: bool) -> Option<ConfirmedWord> {
        let word = &self.slots[winner].as_ref()?.word;

        let mut longs: heapless::Vec<u32, RX_CORREL_WORDS> = heapless::Vec::new();
        let mut shorts: heapless::Vec<u32, RX_CORREL_WORDS> = heapless::Vec::new();
        let mut periods: heapless::Vec<u32, RX_CORREL_WORDS> = heapless::Vec::new();
        for slot in self.slots.iter().flatten() {
            if slot.word.bits == word.bits {
                let _ = longs.push(slot.word.long_us);
                let _ = shorts.push(slot.word.short_us);
                let _ = periods.push(slot.word.period_us);
            }
        }

        Some(ConfirmedWord {
            bits: word.bits.clone(),
            long_us: stats::average(&longs),
            short_us: stats::average(&shorts),
            period_us: stats::average(&periods),
            invert_logic: word.logic,
            ignore_sync,
        })
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.last_match = None;
        self.index = 0;
    }
}
