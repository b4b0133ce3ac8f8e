//! Receiver enable line.
//!
//! Boards without a dedicated enable pin construct the facade with `None`.

use embedded_hal::digital::OutputPin;

pub trait PowerControl {
    fn power_on(&mut self);

    /// Drop power. Implementations should leave the pin in its lowest-leakage state.
    fn power_off(&mut self);
}

/// Active-high enable pin on any `embedded-hal` output.
pub struct EnablePin<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> EnablePin<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> PowerControl for EnablePin<P> {
    fn power_on(&mut self) {
        if self.pin.set_high().is_err() {
            warn!("gnss: enable pin set_high failed");
        }
    }

    fn power_off(&mut self) {
        if self.pin.set_low().is_err() {
            warn!("gnss: enable pin set_low failed");
        }
    }
}

/// Placeholder type for boards with no enable line.
pub enum NoPower {}

impl PowerControl for NoPower {
    fn power_on(&mut self) {
        match *self {}
    }

    fn power_off(&mut self) {
        match *self {}
    }
}
