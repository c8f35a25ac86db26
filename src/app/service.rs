//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the button debouncer, the FSM, the display
//! renderer, and the shared context. It exposes a clean,
//! hardware-agnostic API. All I/O flows through port traits injected at
//! call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │        AppService          │
//! ActuatorPort ◀──│  Debounce · FSM · Display  │──▶ DisplayPort
//!                 └────────────────────────────┘
//! ```
//!
//! One call to [`tick`](AppService::tick) is one full control cycle:
//! button → sensors → state logic → actuators → display. The caller
//! owns the pacing (fixed ~120 ms period) and the clock; the service is
//! a pure state-transition step over the injected inputs.

use log::{debug, info};

use crate::config::SystemConfig;
use crate::drivers::button::{ButtonDebouncer, EdgeEvent};
use crate::fsm::context::RoomContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::display::DisplayRenderer;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: Fsm,
    ctx: RoomContext,
    button: ButtonDebouncer,
    display: DisplayRenderer,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`start`](AppService::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let button = ButtonDebouncer::new(config.debounce_window_ms);
        let ctx = RoomContext::new(config);
        let state_table = build_state_table();
        let fsm = Fsm::new(state_table, StateId::Disarmed);

        Self {
            fsm,
            ctx,
            button,
            display: DisplayRenderer::new(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in its initial state (Disarmed).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle.
    ///
    /// `now_ms` is the monotonic millisecond clock, used only for button
    /// debouncing. The `hw` parameter satisfies [`SensorPort`],
    /// [`ActuatorPort`] **and** [`DisplayPort`] — one adapter, one
    /// mutable borrow, explicit port boundary.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + ActuatorPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();

        // 1. Button: raw level → debouncer → toggle request.
        //    Only the press edge toggles; the release edge is observed
        //    and discarded.
        let raw_level = hw.read_button_raw();
        if let Some(EdgeEvent::Falling) = self.button.update(raw_level, now_ms) {
            info!("Button: confirmed press");
            self.ctx.request_toggle();
        }

        // 2. Sensor snapshot for this tick.
        self.ctx.sensors = hw.read_all();

        // 3. Lamp rule — pure threshold, independent of alarm state.
        self.ctx.commands.lamp_on =
            self.ctx.sensors.light_raw < self.ctx.config.light_threshold;

        // 4. FSM tick (alarm state logic).
        self.fsm.tick(&mut self.ctx);

        // 5. Apply actuator commands — unconditionally, every tick.
        Self::apply_actuators(&self.ctx, hw);

        // 6. Display: line 0 unconditional, line 1 diffed.
        self.display
            .render(hw, &self.ctx.sensors, self.fsm.current_state());

        // 7. Per-tick sensor trace (the optional debug sink).
        debug!(
            "tick {} | T={:.1}C L={} motion={}",
            self.tick_count,
            self.ctx.sensors.temperature_c,
            self.ctx.sensors.light_raw,
            self.ctx.sensors.motion_detected
        );

        // 8. Emit state change if the FSM moved.
        let new_state = self.fsm.current_state();
        if new_state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.fsm.current_state(),
            temperature_c: self.ctx.sensors.temperature_c,
            light_raw: self.ctx.sensors.light_raw,
            motion_detected: self.ctx.sensors.motion_detected,
            lamp_on: self.ctx.commands.lamp_on,
            alarm_led_on: self.ctx.commands.alarm_led_on,
            buzzer_active: self.ctx.commands.buzzer_hz.is_some(),
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// True in either armed sub-state.
    pub fn is_armed(&self) -> bool {
        self.fsm.current_state().is_armed()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate FSM actuator commands into port calls.
    fn apply_actuators(ctx: &RoomContext, hw: &mut impl ActuatorPort) {
        let cmds = &ctx.commands;

        hw.set_lamp(cmds.lamp_on);
        hw.set_alarm_led(cmds.alarm_led_on);

        match cmds.buzzer_hz {
            Some(hz) => hw.sound_buzzer(hz),
            None => hw.silence_buzzer(),
        }
    }
}
