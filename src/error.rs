//! Error types for configuration, queueing, and frame preparation.
//!
//! Every fallible operation in the crate reports through [`Error`]; nothing
//! panics. Conditions that are part of normal operation (a stale
//! correlation history being cleared, the receiver being parked during a
//! burst) are not errors and never surface here.

use thiserror::Error;

/// Failure conditions reported to the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration value is outside its allowed range or would violate
    /// an ordering invariant (e.g. a short pulse longer than the long
    /// pulse). State is unchanged.
    #[error("configuration value rejected")]
    ConfigurationRejected,

    /// All transmit queue slots are occupied. The producer should retry
    /// after a burst has drained a slot.
    #[error("transmit queue full")]
    QueueFull,

    /// A queued word contained a symbol other than `'0'` or `'1'` and
    /// could not be encoded into a duty sequence. The entry is discarded
    /// and the queue advances.
    #[error("frame preparation failed")]
    PreparationFailed,
}
