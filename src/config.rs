//! System configuration parameters
//!
//! All tunable parameters for the RoomGuard system. Values are loaded from
//! NVS once at boot (or fall back to defaults) and are fixed for the rest
//! of the process lifetime — there is no runtime reconfiguration surface.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Lamp ---
    /// ADC code (0-1023) below which the room counts as dark and the
    /// lamp is switched on.
    pub light_threshold: u16,

    // --- Button ---
    /// Minimum stable time (milliseconds) before a raw button level
    /// change is accepted.
    pub debounce_window_ms: u32,

    // --- Alarm ---
    /// Buzzer tone frequency while an intrusion is active (Hz).
    pub alarm_tone_hz: u16,

    // --- Timing ---
    /// Control loop interval (milliseconds).
    pub control_loop_interval_ms: u32,
    /// Telemetry report interval (seconds).
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Lamp
            light_threshold: 900,

            // Button
            debounce_window_ms: 50,

            // Alarm
            alarm_tone_hz: 1200,

            // Timing
            control_loop_interval_ms: 120, // ~8 Hz
            telemetry_interval_secs: 60,   // 1/min
        }
    }
}
