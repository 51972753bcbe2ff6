//! Blue status LED driver.
//!
//! A single digital output on the DevKit's on-board LED.  The main loop
//! toggles it at the configured interval while WiFi is associated and
//! forces it off on disconnect, so an operator can read connectivity at a
//! glance.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct StatusLed {
    gpio: i32,
    lit: bool,
}

impl StatusLed {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, lit: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.lit = on;
    }

    pub fn toggle(&mut self) {
        let next = !self.lit;
        self.set(next);
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins;

    #[test]
    fn toggle_alternates_state() {
        let mut led = StatusLed::new(pins::LED_BLUE_GPIO);
        assert!(!led.is_lit());
        led.toggle();
        assert!(led.is_lit());
        led.toggle();
        assert!(!led.is_lit());
    }

    #[test]
    fn off_is_idempotent() {
        let mut led = StatusLed::new(pins::LED_BLUE_GPIO);
        led.set(true);
        led.off();
        led.off();
        assert!(!led.is_lit());
    }
}
