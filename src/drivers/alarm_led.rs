//! Intrusion alarm LED driver.
//!
//! Plain digital output (active HIGH). The blink pattern while intruding
//! is produced by the state machine flipping its commanded level once per
//! tick — the driver itself knows nothing about blinking and never reads
//! the hardware level back.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct AlarmLed {
    on: bool,
}

impl AlarmLed {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::ALARM_LED_GPIO, on);
        self.on = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
