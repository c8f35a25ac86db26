//! Mock hardware adapter for integration tests.
//!
//! Records every actuator and display call so tests can assert on the
//! full command history without touching real GPIO/LEDC registers.
//! Sensor values and the raw button level are injected by assigning the
//! public fields before each tick.

use roomguard::app::events::AppEvent;
use roomguard::app::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use roomguard::fsm::context::SensorSnapshot;

// ── Call records ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    SetLamp(bool),
    SetAlarmLed(bool),
    SoundBuzzer(u16),
    SilenceBuzzer,
    AllOff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    SetCursor(u8, u8),
    Print(String),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Snapshot returned by the next `read_all()`.
    pub snapshot: SensorSnapshot,
    /// Raw button level returned by the next `read_button_raw()`
    /// (true = HIGH = released).
    pub button_high: bool,
    pub actuator_calls: Vec<ActuatorCall>,
    pub display_calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            snapshot: SensorSnapshot {
                motion_detected: false,
                light_raw: 512,
                temperature_c: 22.0,
            },
            button_high: true,
            actuator_calls: Vec::new(),
            display_calls: Vec::new(),
        }
    }

    /// Last commanded lamp level.
    pub fn lamp_on(&self) -> bool {
        self.actuator_calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetLamp(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Last commanded alarm LED level.
    pub fn alarm_led_on(&self) -> bool {
        self.actuator_calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetAlarmLed(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Current buzzer frequency, or `None` if silenced.
    pub fn buzzer_freq(&self) -> Option<u16> {
        self.actuator_calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SoundBuzzer(hz) => Some(Some(*hz)),
                ActuatorCall::SilenceBuzzer | ActuatorCall::AllOff => Some(None),
                _ => None,
            })
            .unwrap_or(None)
    }

    /// Number of `print` calls addressed to the given row.
    pub fn prints_on_row(&self, row: u8) -> usize {
        self.display_calls
            .windows(2)
            .filter(|w| {
                matches!(w[0], DisplayCall::SetCursor(_, r) if r == row)
                    && matches!(w[1], DisplayCall::Print(_))
            })
            .count()
    }

    /// Texts printed on the given row, in order.
    pub fn row_texts(&self, row: u8) -> Vec<String> {
        self.display_calls
            .windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (DisplayCall::SetCursor(_, r), DisplayCall::Print(text)) if *r == row => {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

// ── Port implementations ──────────────────────────────────────

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> SensorSnapshot {
        self.snapshot
    }

    fn read_button_raw(&mut self) -> bool {
        self.button_high
    }
}

impl ActuatorPort for MockHardware {
    fn set_lamp(&mut self, on: bool) {
        self.actuator_calls.push(ActuatorCall::SetLamp(on));
    }

    fn set_alarm_led(&mut self, on: bool) {
        self.actuator_calls.push(ActuatorCall::SetAlarmLed(on));
    }

    fn sound_buzzer(&mut self, freq_hz: u16) {
        self.actuator_calls.push(ActuatorCall::SoundBuzzer(freq_hz));
    }

    fn silence_buzzer(&mut self) {
        self.actuator_calls.push(ActuatorCall::SilenceBuzzer);
    }

    fn all_off(&mut self) {
        self.actuator_calls.push(ActuatorCall::AllOff);
    }
}

impl DisplayPort for MockHardware {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.display_calls.push(DisplayCall::SetCursor(col, row));
    }

    fn print(&mut self, text: &str) {
        self.display_calls.push(DisplayCall::Print(text.to_string()));
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
