//! Outgoing word queue.
//!
//! A five-slot FIFO between the host command layer and the burst
//! scheduler. Words are validated on the way in (charset and length) and
//! the leading synchronization symbol is prepended here, so the scheduler
//! only ever sees ready-to-encode bit strings.

use crate::config::TxConfig;
use crate::consts::{TX_MAX_BITS, TX_QUEUE_LEN};
use crate::decode::WordBits;
use crate::error::Error;

/// Fixed-capacity FIFO of pending outgoing bit strings.
#[derive(Debug, Default)]
pub struct TxQueue {
    words: heapless::Vec<WordBits, TX_QUEUE_LEN>,
}

impl TxQueue {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            words: heapless::Vec::new(),
        }
    }

    /// Queues `bits` for transmission.
    ///
    /// Rejects strings longer than [`TX_MAX_BITS`] symbols or containing
    /// anything but `'0'`/`'1'` with
    /// [`ConfigurationRejected`](Error::ConfigurationRejected), and a full
    /// queue with [`QueueFull`](Error::QueueFull). When sync transmission
    /// is enabled the long-duty symbol is prepended to align the
    /// receiver's first period measurement.
    pub fn enqueue(&mut self, bits: &str, cfg: &TxConfig) -> Result<(), Error> {
        if bits.len() > TX_MAX_BITS || bits.is_empty() {
            return Err(Error::ConfigurationRejected);
        }
        if self.words.is_full() {
            return Err(Error::QueueFull);
        }
        if !bits.chars().all(|c| c == '0' || c == '1') {
            return Err(Error::ConfigurationRejected);
        }

        let mut word = WordBits::new();
        if cfg.send_sync_bit {
            let _ = word.push(if cfg.invert_logic { '1' } else { '0' });
        }
        let _ = word.push_str(bits);
        self.words.push(word).map_err(|_| Error::QueueFull)
    }

    /// The word the next burst will carry.
    pub fn head(&self) -> Option<&WordBits> {
        self.words.first()
    }

    /// Drops the head after a burst attempt, shifting the rest forward.
    pub fn consume_head(&mut self) {
        if !self.words.is_empty() {
            let _ = self.words.remove(0);
        }
    }

    /// Number of queued words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
