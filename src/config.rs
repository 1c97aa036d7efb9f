//! Receiver and transmitter configuration.
//!
//! Plain parameter structs with power-on defaults. Range and ordering
//! validation lives in the [`OokDriver`](crate::driver::OokDriver) setters,
//! which are the crate's command surface; the structs themselves stay
//! dumb so the pipeline components can read them without ceremony.

use crate::consts::{
    DEFAULT_BIT_MAX_PERIOD_US, DEFAULT_BURST_DELAY_US, DEFAULT_FRAME_DELAY_US,
    DEFAULT_FRAME_REPEAT, DEFAULT_LONG_PULSE_US, DEFAULT_SHORT_PULSE_US,
};

/// Receiver radio operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum RxMode {
    /// Receiver radio stays off.
    Off,
    /// Receiver radio stays on, including while transmitting.
    AlwaysOn,
    /// Receiver radio is on except while a burst is in flight.
    #[default]
    OffDuringTransmit,
}

/// Receive-path settings.
#[derive(Debug, Clone, Copy)]
pub struct RxConfig {
    /// When set, a short pulse decodes as `'0'` and a long pulse as `'1'`
    /// (the reverse of the default mapping).
    pub invert_logic: bool,
    /// When set, the first pulse of each word is treated as a
    /// synchronization symbol: it contributes to timing recovery but not
    /// to the decoded bit string.
    pub ignore_sync_bit: bool,
    /// Radio operating mode.
    pub mode: RxMode,
    /// Maximum width of a single bit period, in microseconds. Silence
    /// longer than this closes the current sample window.
    pub bit_max_period: u32,
}

impl Default for RxConfig {
    fn default() -> Self {
        Self {
            invert_logic: false,
            ignore_sync_bit: true,
            mode: RxMode::default(),
            bit_max_period: DEFAULT_BIT_MAX_PERIOD_US,
        }
    }
}

/// Transmit-path settings.
#[derive(Debug, Clone, Copy)]
pub struct TxConfig {
    /// When set, `'1'` encodes as the long pulse and `'0'` as the short
    /// pulse (the reverse of the default mapping).
    pub invert_logic: bool,
    /// When set, a leading long-duty synchronization symbol is prepended
    /// to every queued word.
    pub send_sync_bit: bool,
    /// Short pulse width, in microseconds.
    pub t_short: u16,
    /// Long pulse width, in microseconds.
    pub t_long: u16,
    /// Delay between repeated frames inside a burst, in microseconds.
    pub frame_delay_us: u32,
    /// Delay between bursts, in microseconds.
    pub burst_delay_us: u32,
    /// How many times a frame is repeated after its first transmission.
    pub frame_repeat: u8,
}

impl TxConfig {
    /// The full bit period: one short plus one long pulse width.
    pub fn bit_period(&self) -> u16 {
        self.t_short + self.t_long
    }
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            invert_logic: false,
            send_sync_bit: true,
            t_short: DEFAULT_SHORT_PULSE_US,
            t_long: DEFAULT_LONG_PULSE_US,
            frame_delay_us: DEFAULT_FRAME_DELAY_US,
            burst_delay_us: DEFAULT_BURST_DELAY_US,
            frame_repeat: DEFAULT_FRAME_REPEAT,
        }
    }
}
