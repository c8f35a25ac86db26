//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`], all actuator drivers, and the LCD, exposing
//! them through [`SensorPort`], [`ActuatorPort`] and [`DisplayPort`].
//! This is the only module in the system that touches actual hardware.
//! On non-espidf targets, the underlying drivers use cfg-gated
//! simulation stubs.

use crate::app::ports::{ActuatorPort, DisplayPort, SensorPort};
use crate::drivers::alarm_led::AlarmLed;
use crate::drivers::button;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::lamp::LampDriver;
use crate::drivers::lcd::Lcd1602;
use crate::fsm::context::SensorSnapshot;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    lamp: LampDriver,
    alarm_led: AlarmLed,
    buzzer: Buzzer,
    lcd: Lcd1602,
}

impl HardwareAdapter {
    pub fn new(
        sensor_hub: SensorHub,
        lamp: LampDriver,
        alarm_led: AlarmLed,
        buzzer: Buzzer,
        lcd: Lcd1602,
    ) -> Self {
        Self {
            sensor_hub,
            lamp,
            alarm_led,
            buzzer,
            lcd,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> SensorSnapshot {
        self.sensor_hub.read_all()
    }

    fn read_button_raw(&mut self) -> bool {
        button::read_raw_level()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_lamp(&mut self, on: bool) {
        self.lamp.set(on);
    }

    fn set_alarm_led(&mut self, on: bool) {
        self.alarm_led.set(on);
    }

    fn sound_buzzer(&mut self, freq_hz: u16) {
        self.buzzer.sound(freq_hz);
    }

    fn silence_buzzer(&mut self) {
        self.buzzer.silence();
    }

    fn all_off(&mut self) {
        self.lamp.off();
        self.alarm_led.off();
        self.buzzer.silence();
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl DisplayPort for HardwareAdapter {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.lcd.set_cursor(col, row);
    }

    fn print(&mut self, text: &str) {
        self.lcd.print(text);
    }
}
