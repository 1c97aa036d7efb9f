//! Receiver radio front-end control.
//!
//! The receive radio is an external collaborator the driver only needs to
//! switch on and off around its own transmissions. [`RadioControl`] is that
//! seam; [`PinRadio`] is the common implementation over a single enable
//! line with configurable polarity.

use embedded_hal::digital::OutputPin;

/// Enable/disable control over the receive radio.
pub trait RadioControl {
    /// Powers the receiver front-end on.
    fn enable(&mut self);

    /// Powers the receiver front-end off.
    fn disable(&mut self);

    /// Returns whether the receiver front-end is currently on.
    fn is_enabled(&self) -> bool;
}

/// A receive radio switched by one GPIO enable line.
///
/// `active_high` selects the line polarity: when false, driving the pin
/// low enables the radio.
#[derive(Debug)]
pub struct PinRadio<EN: OutputPin> {
    pin: EN,
    active_high: bool,
    enabled: bool,
}

impl<EN: OutputPin> PinRadio<EN> {
    /// Wraps `pin` as a radio enable line, leaving the radio disabled.
    pub fn new(mut pin: EN, active_high: bool) -> Self {
        if active_high {
            let _ = pin.set_low();
        } else {
            let _ = pin.set_high();
        }
        Self {
            pin,
            active_high,
            enabled: false,
        }
    }

    /// Releases the underlying pin.
    pub fn release(self) -> EN {
        self.pin
    }

    fn drive(&mut self, on: bool) {
        let level_high = on == self.active_high;
        if level_high {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
        self.enabled = on;
    }
}

impl<EN: OutputPin> RadioControl for PinRadio<EN> {
    fn enable(&mut self) {
        self.drive(true);
    }

    fn disable(&mut self) {
        self.drive(false);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn test_active_high_polarity() {
        let pin = PinMock::new(&[
            PinTransaction::set(PinState::Low),  // construction parks it off
            PinTransaction::set(PinState::High), // enable
            PinTransaction::set(PinState::Low),  // disable
        ]);
        let mut radio = PinRadio::new(pin, true);
        assert!(!radio.is_enabled());

        radio.enable();
        assert!(radio.is_enabled());

        radio.disable();
        assert!(!radio.is_enabled());

        radio.release().done();
    }

    #[test]
    fn test_active_low_polarity() {
        let pin = PinMock::new(&[
            PinTransaction::set(PinState::High), // off
            PinTransaction::set(PinState::Low),  // enable
        ]);
        let mut radio = PinRadio::new(pin, false);

        radio.enable();
        assert!(radio.is_enabled());

        radio.release().done();
    }
}
