//! Shared mutable context threaded through every FSM handler.
//!
//! `RoomContext` is the single struct that state handlers read from and
//! write to. It contains the latest sensor snapshot, actuator command
//! outputs, timing information, configuration, and the pending arm-toggle
//! request from the button. Think of it as the "blackboard" in a
//! blackboard architecture.

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Sensor snapshot (read-only to state handlers; written by sensor hub)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every sensor in the system.
///
/// Produced fresh each tick; immutable for the duration of the tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// PIR motion sensor level (already clean, no debounce needed).
    pub motion_detected: bool,
    /// Raw ADC code from the LDR light sensor (0 – 1023).
    /// Out-of-range codes pass through unvalidated.
    pub light_raw: u16,
    /// TMP36 temperature (°C), converted from the raw ADC code.
    pub temperature_c: f32,
}

// ---------------------------------------------------------------------------
// Actuator commands (written by state handlers; consumed by main loop)
// ---------------------------------------------------------------------------

/// Commands that state handlers write to request actuator actions.
/// The service applies these to the ports each tick, unconditionally.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorCommands {
    /// Lamp relay on/off. Driven by the light threshold rule alone —
    /// state handlers never touch this field.
    pub lamp_on: bool,
    /// Alarm LED level. Steady while armed-idle; flipped once per tick
    /// while intruding, so the blink rate is tied to the loop period.
    pub alarm_led_on: bool,
    /// Buzzer tone frequency, or `None` for silence.
    pub buzzer_hz: Option<u16>,
}

impl Default for ActuatorCommands {
    fn default() -> Self {
        Self {
            lamp_on: false,
            alarm_led_on: false,
            buzzer_hz: None,
        }
    }
}

impl ActuatorCommands {
    /// All actuators off — safe default.
    pub fn all_off() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// RoomContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct RoomContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,
    /// Duration of one tick in seconds (inverse of control loop frequency).
    pub tick_period_secs: f32,

    // -- Sensor data --
    /// Latest sensor readings. Updated before each FSM tick.
    pub sensors: SensorSnapshot,

    // -- Actuator outputs --
    /// Commands to be applied to actuators after the FSM tick.
    pub commands: ActuatorCommands,

    // -- Configuration --
    /// System configuration (fixed after boot).
    pub config: SystemConfig,

    // -- Button --
    /// Set by the service when a confirmed press edge arrived this tick;
    /// consumed by exactly one state handler via [`take_toggle`].
    ///
    /// [`take_toggle`]: RoomContext::take_toggle
    toggle_pending: bool,
}

impl RoomContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            tick_period_secs: config.control_loop_interval_ms as f32 / 1000.0,
            sensors: SensorSnapshot::default(),
            commands: ActuatorCommands::all_off(),
            config,
            toggle_pending: false,
        }
    }

    /// Record a confirmed button press edge for this tick.
    pub fn request_toggle(&mut self) {
        self.toggle_pending = true;
    }

    /// Consume the pending toggle request, if any.
    pub fn take_toggle(&mut self) -> bool {
        core::mem::take(&mut self.toggle_pending)
    }

    /// Seconds elapsed since the current state was entered.
    pub fn secs_in_state(&self) -> f32 {
        self.ticks_in_state as f32 * self.tick_period_secs
    }
}
