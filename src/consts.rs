//! Constants shared across the receive and transmit pipelines.
//!
//! This module defines buffer capacities and the power-on defaults for every
//! tunable parameter, together with the bounds the configuration setters
//! enforce.
//!
//! ## Key Concepts
//!
//! - **Sample ring sizing**: the capture ring holds several words' worth of
//!   (period, width) pairs so the control loop can fall behind the interrupt
//!   producer without losing samples.
//! - **Correlation depth**: how many recently decoded words are kept for
//!   repetition matching.
//! - **Timing defaults**: pulse widths and pacing delays matching common
//!   sub-GHz remote protocols (short ~300 µs, long ~700 µs, ~7 frame
//!   repeats per burst).

/// Maximum number of data symbols in a received word.
pub const RX_MAX_BITS: usize = 64;

/// Capacity of the period/width capture rings, in samples.
///
/// Sized for several back-to-back words so the consumer can lag the
/// interrupt producer by a few control-loop ticks.
pub const RX_BUFFER_SAMPLES: usize = 5 * RX_MAX_BITS;

/// Number of decoded word candidates held for repetition matching.
pub const RX_CORREL_WORDS: usize = 12;

/// Maximum number of data symbols in a transmitted word.
pub const TX_MAX_BITS: usize = 64;

/// Number of outgoing words that can be queued ahead of transmission.
pub const TX_QUEUE_LEN: usize = 5;

/// Capacity of a word's symbol storage: the data bits plus an optional
/// leading synchronization symbol.
pub const WORD_CAPACITY: usize = RX_MAX_BITS + 1;

/// Capacity of a transmit frame's duty sequence: every symbol (sync
/// included) plus the terminating zero-duty stop marker.
pub const TX_FRAME_SLOTS: usize = WORD_CAPACITY + 1;

/// Default correlation-history timeout, in microseconds.
pub const DEFAULT_TIMEOUT_US: u32 = 100_000;

/// Default number of identical words required for confirmation.
pub const DEFAULT_MATCH_THRESH: u8 = 3;

/// Default minimum accepted word length, in symbols.
pub const DEFAULT_MIN_WORD_LEN: u8 = 8;

/// Default maximum accepted word length, in symbols.
pub const DEFAULT_MAX_WORD_LEN: u8 = RX_MAX_BITS as u8;

/// Default upper bound on a single bit period, in microseconds. A quiet
/// stretch longer than this ends the current sample window.
pub const DEFAULT_BIT_MAX_PERIOD_US: u32 = 5_000;

/// Default short pulse width, in microseconds.
pub const DEFAULT_SHORT_PULSE_US: u16 = 300;

/// Default long pulse width, in microseconds.
pub const DEFAULT_LONG_PULSE_US: u16 = 700;

/// Default delay between repeated frames inside a burst, in microseconds.
pub const DEFAULT_FRAME_DELAY_US: u32 = 6_600;

/// Default delay between bursts, in microseconds.
pub const DEFAULT_BURST_DELAY_US: u32 = 100_000;

/// Default number of times a frame is repeated after its first
/// transmission.
pub const DEFAULT_FRAME_REPEAT: u8 = 7;

/// Numerator of the period-deviation factor marking a word boundary.
///
/// A sample whose period exceeds `mode * 13 / 10` (1.3x the dominant bit
/// period) is read as an inter-word gap.
pub const PERIOD_LIMIT_NUM: u64 = 13;

/// Denominator of the period-deviation factor. See [`PERIOD_LIMIT_NUM`].
pub const PERIOD_LIMIT_DEN: u64 = 10;

/// Duty-cycle percentage at and above which a pulse classifies as the
/// long class.
pub const DUTY_SPLIT_PCT: u64 = 50;

/// Upper bound accepted for the correlation timeout, in microseconds.
pub const MAX_TIMEOUT_US: u32 = 5_000_000;

/// Upper bound accepted for the inter-burst delay, in microseconds.
pub const MAX_BURST_DELAY_US: u32 = 60_000_000;

/// Upper bound accepted for a configured pulse width, in microseconds.
pub const MAX_PULSE_US: u16 = u16::MAX >> 2;

/// Upper bound accepted for the frame repeat count.
pub const MAX_FRAME_REPEAT: u8 = 100;

/// The inter-frame delay may not exceed this many bit periods.
pub const MAX_FRAME_DELAY_PERIODS: u32 = 50;
