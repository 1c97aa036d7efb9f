//! Burst/frame transmit state machine.
//!
//! An outgoing word is sent as a *burst*: the same *frame* (one pass over
//! the word's duty sequence) transmitted `1 + frame_repeat` times with a
//! configured pause between frames, and a longer pause between bursts.
//! [`BurstScheduler`] paces this from the control loop; the hardware
//! reports back through [`frame_finished`](BurstScheduler::frame_finished)
//! when a pulse train has drained.
//!
//! The scheduler never blocks. Every decision is re-evaluated on the next
//! control-loop tick, and all pacing compares wrapping millisecond ticks.

use crate::config::TxConfig;
use crate::consts::TX_FRAME_SLOTS;
use crate::decode::WordBits;
use crate::error::Error;

/// Hardware seam for emitting one frame as a timed pulse train.
///
/// `duties` holds one active-time value per bit period, in microseconds,
/// terminated by a zero-duty stop entry; `period` is the full bit period
/// (short + long pulse width). Implementations typically hand the slice
/// to a timer compare register via DMA and fire a completion callback
/// that the application routes to
/// [`BurstScheduler::frame_finished`] (or
/// [`OokDriver::on_frame_finished`](crate::driver::OokDriver::on_frame_finished)).
pub trait PulseTrain {
    /// Error type of the underlying transport.
    type Error;

    /// Begins clocking out `duties` at one entry per `period` microseconds.
    fn start_pulse_train(&mut self, duties: &[u16], period: u16) -> Result<(), Self::Error>;
}

/// Transmit progress states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum BurstState {
    /// No burst in progress; waiting for the inter-burst delay and a
    /// queued word.
    #[default]
    BurstIdle,
    /// Burst prepared; waiting for the inter-frame delay before the next
    /// frame.
    FrameIdle,
    /// A frame's pulse train is being clocked out by the hardware.
    FrameInFlight,
}

/// One encoded frame: the duty sequence a burst repeats.
#[derive(Debug, Default)]
struct TxFrame {
    duties: heapless::Vec<u16, TX_FRAME_SLOTS>,
    frames_sent: u8,
    last_frame_time_ms: u32,
}

/// Paces frames within a burst and bursts over time.
#[derive(Debug, Default)]
pub struct BurstScheduler {
    state: BurstState,
    frame: TxFrame,
}

impl BurstScheduler {
    /// Creates an idle scheduler.
    pub const fn new() -> Self {
        Self {
            state: BurstState::BurstIdle,
            frame: TxFrame {
                duties: heapless::Vec::new(),
                frames_sent: 0,
                last_frame_time_ms: 0,
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> BurstState {
        self.state
    }

    /// True when no burst is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == BurstState::BurstIdle
    }

    /// True when the inter-burst pause has elapsed since the previous
    /// burst's last frame.
    pub fn burst_delay_elapsed(&self, now_ms: u32, cfg: &TxConfig) -> bool {
        let elapsed_ms = now_ms.wrapping_sub(self.frame.last_frame_time_ms);
        u64::from(elapsed_ms) * 1_000 > u64::from(cfg.burst_delay_us)
    }

    /// Encodes `word` into a fresh duty sequence and arms the burst.
    ///
    /// `'1'` maps to the short pulse width and `'0'` to the long one
    /// (swapped under `invert_logic`); a zero-duty stop entry terminates
    /// the sequence. Any other symbol fails preparation and leaves the
    /// scheduler idle.
    pub fn prepare(&mut self, word: &WordBits, cfg: &TxConfig) -> Result<(), Error> {
        self.frame.duties.clear();
        self.frame.frames_sent = 0;

        for symbol in word.chars() {
            let duty = match symbol {
                '1' => {
                    if cfg.invert_logic {
                        cfg.t_long
                    } else {
                        cfg.t_short
                    }
                }
                '0' => {
                    if cfg.invert_logic {
                        cfg.t_short
                    } else {
                        cfg.t_long
                    }
                }
                _ => {
                    self.frame.duties.clear();
                    return Err(Error::PreparationFailed);
                }
            };
            let _ = self.frame.duties.push(duty);
        }

        // trailing null duty: the hardware latches each value one period
        // ahead, so the stop entry is what terminates the final bit
        let _ = self.frame.duties.push(0);

        self.state = BurstState::FrameIdle;
        Ok(())
    }

    /// True when every frame of the burst has been sent.
    pub fn burst_done(&self, cfg: &TxConfig) -> bool {
        self.state == BurstState::FrameIdle && self.frame.frames_sent > cfg.frame_repeat
    }

    /// True when the next frame may start: the scheduler holds a prepared
    /// frame and the inter-frame pause has elapsed.
    pub fn frame_due(&self, now_ms: u32, cfg: &TxConfig) -> bool {
        if self.state != BurstState::FrameIdle {
            return false;
        }
        let elapsed_ms = now_ms.wrapping_sub(self.frame.last_frame_time_ms);
        elapsed_ms >= cfg.frame_delay_us.div_ceil(1_000)
    }

    /// Marks the next frame in flight and returns its duty sequence.
    pub fn begin_frame(&mut self) -> &[u16] {
        self.frame.frames_sent += 1;
        self.state = BurstState::FrameInFlight;
        &self.frame.duties
    }

    /// Returns the scheduler to idle once a burst has finished.
    pub fn complete_burst(&mut self) {
        self.state = BurstState::BurstIdle;
    }

    /// Hardware completion callback: the current frame has fully drained.
    ///
    /// Interrupt context. Records the completion time the pacing
    /// decisions compare against.
    pub fn frame_finished(&mut self, now_ms: u32) {
        if self.state == BurstState::FrameInFlight {
            self.state = BurstState::FrameIdle;
        }
        self.frame.last_frame_time_ms = now_ms;
    }

    /// Frames sent so far in the current burst.
    pub fn frames_sent(&self) -> u8 {
        self.frame.frames_sent
    }
}
