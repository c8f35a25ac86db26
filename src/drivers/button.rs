//! Debounced push-button driver.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up: HIGH = released,
//! LOW = pressed. The raw level is polled once per control tick; the
//! debouncer turns the noisy level stream into at most one confirmed
//! edge per real press or release.
//!
//! ## Debounce algorithm
//!
//! The raw level must disagree with the current stable level for longer
//! than the debounce window before the new level is accepted. The
//! reference timestamp is reset **only while the raw level matches the
//! stable level** — not on every mismatch — so a sustained excursion is
//! measured from the last agreeing sample, and rapid bounce (which keeps
//! re-agreeing) can never accumulate enough time to be accepted. This
//! reset policy is load-bearing; keep it exactly as written.

use core::sync::atomic::AtomicBool;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

/// Simulated raw button level for host-target tests (HIGH = released).
static SIM_BUTTON_LEVEL: AtomicBool = AtomicBool::new(true);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_button_level(high: bool) {
    SIM_BUTTON_LEVEL.store(high, Ordering::Relaxed);
}

/// Read the raw button GPIO level (true = HIGH = released).
#[cfg(target_os = "espidf")]
pub fn read_raw_level() -> bool {
    crate::drivers::hw_init::gpio_read(crate::pins::BUTTON_GPIO)
}

/// Read the raw button level from the simulation atomic.
#[cfg(not(target_os = "espidf"))]
pub fn read_raw_level() -> bool {
    SIM_BUTTON_LEVEL.load(Ordering::Relaxed)
}

/// A confirmed, debounced level transition.
///
/// Only [`EdgeEvent::Falling`] (release → press) drives the arm toggle;
/// rising edges are reported so callers can observe releases, but the
/// service ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEvent {
    /// Stable level went LOW → HIGH (button released).
    Rising,
    /// Stable level went HIGH → LOW (button pressed).
    Falling,
}

/// Debounce state for a single button.
pub struct ButtonDebouncer {
    /// Accepted level (true = HIGH = released). Changes at most once per
    /// confirmed debounce window.
    stable_high: bool,
    /// Timestamp (ms) of the last sample that agreed with `stable_high`.
    last_match_ms: u32,
    /// Minimum disagreement time before a new level is accepted.
    window_ms: u32,
}

impl ButtonDebouncer {
    /// New debouncer, assuming the button starts released.
    pub fn new(window_ms: u32) -> Self {
        Self {
            stable_high: true,
            last_match_ms: 0,
            window_ms,
        }
    }

    /// Feed one raw sample. `now_ms` is monotonic milliseconds; wrapping
    /// arithmetic keeps the comparison valid across u32 rollover.
    pub fn update(&mut self, raw_high: bool, now_ms: u32) -> Option<EdgeEvent> {
        if raw_high != self.stable_high {
            if now_ms.wrapping_sub(self.last_match_ms) > self.window_ms {
                self.stable_high = raw_high;
                return Some(if raw_high {
                    EdgeEvent::Rising
                } else {
                    EdgeEvent::Falling
                });
            }
            // Disagreement not yet old enough — keep waiting. The
            // reference timestamp is deliberately NOT touched here.
            None
        } else {
            self.last_match_ms = now_ms;
            None
        }
    }

    /// The current accepted level (true = released).
    pub fn stable_high(&self) -> bool {
        self.stable_high
    }

    /// True while the accepted level is "pressed".
    pub fn is_pressed(&self) -> bool {
        !self.stable_high
    }
}
