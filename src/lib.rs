//! # ook433
//!
//! A portable, no_std driver core for On-Off-Keyed (OOK/ASK) sub-GHz
//! remote links (garage openers, weather sensors, plain fixed-code
//! remotes) bridged to a host over a serial-style command link.
//!
//! The crate implements both directions of the link in software:
//!
//! - **Receive**: hardware input-capture measurements (pulse period and
//!   width) are classified by duty cycle against a statistically recovered
//!   bit period, assembled into words at inter-word gaps, and confirmed by
//!   repetition voting over a short history; remotes repeat their word
//!   many times per key press, and one decode alone proves nothing.
//! - **Transmit**: queued bit strings are encoded into duty-cycle
//!   sequences and sent as bursts of repeated frames with configurable
//!   pacing, parking the receiver radio while the carrier is up.
//!
//! ## Crate features
//! | Feature               | Description |
//! |-----------------------|-------------|
//! | `std`                 | Disables `#![no_std]`; mainly for host-side tests |
//! | `timer-isr` (default) | `critical_section`-based glue for a global driver shared with ISRs |
//! | `defmt-0-3`           | Routes diagnostics through `defmt` |
//! | `log`                 | Routes diagnostics through `log` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ook433::driver::OokDriver;
//! use ook433::radio::PinRadio;
//!
//! let mut driver = OokDriver::new(PinRadio::new(rx_en_pin, true), act_pin, dma);
//! loop {
//!     if let Some(word) = driver.poll(now_ms(), capture_count()) {
//!         // report word.bits, word.long_us, word.short_us, ...
//!     }
//! }
//! ```
//!
//! Wire the four interrupt entry points ([`driver::OokDriver::on_rising_edge`],
//! [`driver::OokDriver::on_falling_edge`], [`driver::OokDriver::on_timer_overflow`],
//! [`driver::OokDriver::on_frame_finished`]) to the capture timer and
//! pulse-train DMA vectors, either directly or through the [`isr`]
//! module's global-driver trampolines.
//!
//! ## Integration Notes
//!
//! - [`poll`](driver::OokDriver::poll) is non-blocking and meant to run
//!   once per control-loop iteration; all pacing is polled against a
//!   wrapping millisecond tick supplied by the platform.
//! - The capture rings are a single-producer/single-consumer handoff; see
//!   [`capture`] for the index discipline that makes it sound.
//! - Timing units are microseconds throughout.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded
//! environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    bad_style,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    while_true,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(missing_docs)]

#[cfg(feature = "timer-isr")]
pub use critical_section;

pub use heapless;

#[macro_use]
mod fmt;

pub mod burst;
pub mod capture;
pub mod config;
pub mod consts;
pub mod correlate;
pub mod decode;
pub mod driver;
pub mod error;
#[cfg(feature = "timer-isr")]
pub mod isr;
pub mod queue;
pub mod radio;
pub mod stats;
pub mod status;
