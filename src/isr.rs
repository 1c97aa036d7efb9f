//! Interrupt-context glue for a global driver instance.
//!
//! Capture edges and DMA completion arrive in interrupt handlers that
//! cannot own the driver, so the usual arrangement is a single `static`
//! driver cell protected by a `critical_section` mutex. This module
//! provides the cell initializer and thin trampolines to call from each
//! vector.
//!
//! ```rust,ignore
//! static DRIVER: Mutex<RefCell<Option<OokDriver<Radio, ActPin, Dma>>>> =
//!     global_driver_init();
//!
//! fn main() {
//!     global_driver_setup(&DRIVER, OokDriver::new(radio, act, dma));
//!     loop {
//!         if let Some(word) = global_poll(&DRIVER, now_ms(), capture_count()) {
//!             report(word);
//!         }
//!     }
//! }
//!
//! #[interrupt]
//! fn TIM2() {
//!     // dispatch on the active capture channel
//!     capture_rising(&DRIVER, read_captured_value(RISING_CHANNEL));
//! }
//! ```

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::OutputPin;

use crate::burst::PulseTrain;
use crate::correlate::ConfirmedWord;
use crate::driver::OokDriver;
use crate::radio::RadioControl;

/// Shorthand for the global driver cell type.
pub type GlobalDriver<R, ACT, PT> = Mutex<RefCell<Option<OokDriver<R, ACT, PT>>>>;

/// Initializes the empty global driver cell.
///
/// ```rust,ignore
/// static DRIVER: GlobalDriver<Radio, ActPin, Dma> = global_driver_init();
/// ```
pub const fn global_driver_init<R, ACT, PT>() -> GlobalDriver<R, ACT, PT>
where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    Mutex::new(RefCell::new(None))
}

/// Installs a constructed driver into the global cell.
pub fn global_driver_setup<R, ACT, PT>(
    global: &'static GlobalDriver<R, ACT, PT>,
    driver: OokDriver<R, ACT, PT>,
) where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    critical_section::with(|cs| {
        let _ = global.borrow(cs).replace(Some(driver));
    });
}

/// Runs one control-loop iteration on the global driver.
pub fn global_poll<R, ACT, PT>(
    global: &'static GlobalDriver<R, ACT, PT>,
    now_ms: u32,
    capture_count: u32,
) -> Option<ConfirmedWord>
where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    critical_section::with(|cs| {
        global
            .borrow(cs)
            .borrow_mut()
            .as_mut()
            .and_then(|driver| driver.poll(now_ms, capture_count))
    })
}

/// Rising-edge capture trampoline.
pub fn capture_rising<R, ACT, PT>(global: &'static GlobalDriver<R, ACT, PT>, captured: u32)
where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    critical_section::with(|cs| {
        if let Some(driver) = global.borrow(cs).borrow_mut().as_mut() {
            driver.on_rising_edge(captured);
        }
    });
}

/// Falling-edge capture trampoline.
pub fn capture_falling<R, ACT, PT>(global: &'static GlobalDriver<R, ACT, PT>, captured: u32)
where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    critical_section::with(|cs| {
        if let Some(driver) = global.borrow(cs).borrow_mut().as_mut() {
            driver.on_falling_edge(captured);
        }
    });
}

/// Capture-timer overflow trampoline.
pub fn timer_overflow<R, ACT, PT>(global: &'static GlobalDriver<R, ACT, PT>)
where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    critical_section::with(|cs| {
        if let Some(driver) = global.borrow(cs).borrow_mut().as_mut() {
            driver.on_timer_overflow();
        }
    });
}

/// Pulse-train completion trampoline.
pub fn pulse_train_finished<R, ACT, PT>(global: &'static GlobalDriver<R, ACT, PT>, now_ms: u32)
where
    R: RadioControl,
    ACT: OutputPin,
    PT: PulseTrain,
{
    critical_section::with(|cs| {
        if let Some(driver) = global.borrow(cs).borrow_mut().as_mut() {
            driver.on_frame_finished(now_ms);
        }
    });
}
