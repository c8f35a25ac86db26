//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::fsm::StateId;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | state={:?} | T={:.1}\u{00b0}C | light={} | motion={} | \
                     lamp={} led={} buzzer={}",
                    t.state,
                    t.temperature_c,
                    t.light_raw,
                    t.motion_detected,
                    if t.lamp_on { "ON" } else { "off" },
                    if t.alarm_led_on { "ON" } else { "off" },
                    if t.buzzer_active { "ON" } else { "off" },
                );
            }
            AppEvent::StateChanged { from, to } => {
                if *to == StateId::ArmedIntruding {
                    warn!("STATE | {:?} -> {:?}", from, to);
                } else {
                    info!("STATE | {:?} -> {:?}", from, to);
                }
            }
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
        }
    }
}
