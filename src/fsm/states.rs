//! Concrete state handler functions and table builder.
//!
//! Each state is defined by three plain `fn` pointers — no closures, no
//! dynamic dispatch, no heap. This is the classic embedded C FSM pattern
//! expressed in safe Rust.
//!
//! ```text
//!  DISARMED ──[press]──▶ ARMED-IDLE ──[motion]──▶ ARMED-INTRUDING
//!      ▲                     │  ▲                       │
//!      │                     │  └───[motion clear]──────┘
//!      └──────[press]────────┴──────────[press]─────────┘
//! ```
//!
//! The armed sub-states are re-evaluated from the motion reading on every
//! tick; a press edge always wins over the motion reading in the same tick.

use super::context::RoomContext;
use super::{StateDescriptor, StateId};
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Disarmed
        StateDescriptor {
            id: StateId::Disarmed,
            name: "Disarmed",
            on_enter: Some(disarmed_enter),
            on_exit: None,
            on_update: disarmed_update,
        },
        // Index 1 — ArmedIdle
        StateDescriptor {
            id: StateId::ArmedIdle,
            name: "ArmedIdle",
            on_enter: Some(armed_idle_enter),
            on_exit: None,
            on_update: armed_idle_update,
        },
        // Index 2 — ArmedIntruding
        StateDescriptor {
            id: StateId::ArmedIntruding,
            name: "ArmedIntruding",
            on_enter: Some(intruding_enter),
            on_exit: Some(intruding_exit),
            on_update: intruding_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  DISARMED state
// ═══════════════════════════════════════════════════════════════════════════

fn disarmed_enter(ctx: &mut RoomContext) {
    // Alarm surface quiescent. The lamp is deliberately untouched — it
    // follows the light threshold regardless of alarm state.
    ctx.commands.alarm_led_on = false;
    ctx.commands.buzzer_hz = None;
    info!("DISARMED: alarm off, monitoring button only");
}

fn disarmed_update(ctx: &mut RoomContext) -> Option<StateId> {
    if ctx.take_toggle() {
        return Some(StateId::ArmedIdle);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  ARMED-IDLE state — armed, no motion seen this tick
// ═══════════════════════════════════════════════════════════════════════════

fn armed_idle_enter(ctx: &mut RoomContext) {
    // Steady LED signals "armed"; no tone.
    ctx.commands.alarm_led_on = true;
    ctx.commands.buzzer_hz = None;
    info!("ARMED: watching for motion");
}

fn armed_idle_update(ctx: &mut RoomContext) -> Option<StateId> {
    if ctx.take_toggle() {
        return Some(StateId::Disarmed);
    }

    // The PIR is treated as clean; a single HIGH reading is an intrusion.
    if ctx.sensors.motion_detected {
        return Some(StateId::ArmedIntruding);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  ARMED-INTRUDING state — motion while armed
// ═══════════════════════════════════════════════════════════════════════════

fn intruding_enter(ctx: &mut RoomContext) {
    ctx.commands.buzzer_hz = Some(ctx.config.alarm_tone_hz);
    warn!(
        "INTRUSION: motion detected, sounding {} Hz",
        ctx.config.alarm_tone_hz
    );
}

fn intruding_exit(ctx: &mut RoomContext) {
    ctx.commands.buzzer_hz = None;
}

fn intruding_update(ctx: &mut RoomContext) -> Option<StateId> {
    if ctx.take_toggle() {
        return Some(StateId::Disarmed);
    }

    // Motion gone — drop back to armed-idle (LED returns to steady).
    if !ctx.sensors.motion_detected {
        return Some(StateId::ArmedIdle);
    }

    // Blink by flipping the stored level once per tick. The blink rate is
    // intentionally coupled to the loop period, not an independent timer.
    ctx.commands.alarm_led_on = !ctx.commands.alarm_led_on;

    None
}
