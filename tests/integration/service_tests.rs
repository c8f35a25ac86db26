//! Integration tests for the AppService → FSM → actuator/display pipeline.
//!
//! These run on the host (x86_64) and drive the full per-tick chain —
//! raw button level through debounce, sensor snapshot through the state
//! machine, and outputs through the mock ports — without any real
//! hardware. Timestamps advance in 120 ms steps, matching the production
//! tick period.

use crate::mock_hw::{LogSink, MockHardware};

use roomguard::app::service::AppService;
use roomguard::config::SystemConfig;
use roomguard::fsm::StateId;

const TICK_MS: u32 = 120;

struct Harness {
    app: AppService,
    hw: MockHardware,
    sink: LogSink,
    now_ms: u32,
}

impl Harness {
    fn new() -> Self {
        let mut app = AppService::new(SystemConfig::default());
        let hw = MockHardware::new();
        let mut sink = LogSink::new();
        app.start(&mut sink);
        Self {
            app,
            hw,
            sink,
            now_ms: 0,
        }
    }

    fn tick(&mut self) {
        self.now_ms += TICK_MS;
        self.app.tick(self.now_ms, &mut self.hw, &mut self.sink);
    }

    /// One tick with the button held LOW, one with it released. At the
    /// 120 ms tick period the debounce window (50 ms) is always already
    /// satisfied, so the press lands on the first LOW tick.
    fn press(&mut self) {
        self.hw.button_high = false;
        self.tick();
        self.hw.button_high = true;
        self.tick();
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn starts_disarmed_with_quiet_outputs() {
    let mut h = Harness::new();
    h.tick();

    assert_eq!(h.app.state(), StateId::Disarmed);
    assert!(!h.hw.alarm_led_on());
    assert_eq!(h.hw.buzzer_freq(), None);
    assert_eq!(
        h.hw.row_texts(1),
        vec!["                ".to_string(), "Alarma OFF".to_string()],
        "line 1 is blanked then written on first draw"
    );
}

#[test]
fn startup_emits_started_event() {
    let h = Harness::new();
    assert!(h.sink.events[0].contains("Started"));
}

// ── Arming / disarming ────────────────────────────────────────

#[test]
fn press_arms_and_updates_display() {
    let mut h = Harness::new();
    h.tick();
    h.press();

    assert_eq!(h.app.state(), StateId::ArmedIdle);
    assert!(h.hw.alarm_led_on(), "armed LED is steady on");
    assert_eq!(h.hw.buzzer_freq(), None);
    assert_eq!(
        h.hw.row_texts(1).last().map(String::as_str),
        Some("Alarma ON")
    );
}

#[test]
fn two_presses_return_to_disarmed() {
    let mut h = Harness::new();
    h.tick();
    h.press();
    h.press();

    assert_eq!(h.app.state(), StateId::Disarmed);
    assert!(!h.hw.alarm_led_on());
    assert_eq!(
        h.hw.row_texts(1).last().map(String::as_str),
        Some("Alarma OFF")
    );
}

#[test]
fn held_button_toggles_only_once() {
    let mut h = Harness::new();
    h.tick();

    // Hold the button LOW for ten ticks — only the confirmed edge toggles.
    h.hw.button_high = false;
    for _ in 0..10 {
        h.tick();
    }
    assert_eq!(h.app.state(), StateId::ArmedIdle);

    h.hw.button_high = true;
    h.tick();
    assert_eq!(h.app.state(), StateId::ArmedIdle, "release must not toggle");
}

// ── Intrusion ─────────────────────────────────────────────────

#[test]
fn motion_while_armed_sounds_alarm() {
    let mut h = Harness::new();
    h.tick();
    h.press();

    h.hw.snapshot.motion_detected = true;
    h.tick();

    assert_eq!(h.app.state(), StateId::ArmedIntruding);
    assert_eq!(h.hw.buzzer_freq(), Some(1200));
    assert_eq!(h.hw.row_texts(1).last().map(String::as_str), Some("INTRUSO"));

    let t = h.app.build_telemetry();
    assert!(t.buzzer_active);
    assert!(t.motion_detected);
}

#[test]
fn motion_while_disarmed_is_ignored() {
    let mut h = Harness::new();
    h.hw.snapshot.motion_detected = true;
    for _ in 0..5 {
        h.tick();
    }

    assert_eq!(h.app.state(), StateId::Disarmed);
    assert_eq!(h.hw.buzzer_freq(), None);
    assert!(!h.hw.alarm_led_on());
}

#[test]
fn intrusion_led_blinks_at_tick_rate() {
    let mut h = Harness::new();
    h.tick();
    h.press();

    h.hw.snapshot.motion_detected = true;
    h.tick(); // entry tick — LED still at its pre-intrusion level

    let mut last = h.hw.alarm_led_on();
    for _ in 0..6 {
        h.tick();
        let now = h.hw.alarm_led_on();
        assert_ne!(now, last, "LED must flip once per tick while intruding");
        last = now;
    }
}

#[test]
fn intrusion_clears_when_motion_stops() {
    let mut h = Harness::new();
    h.tick();
    h.press();
    h.hw.snapshot.motion_detected = true;
    h.tick();

    h.hw.snapshot.motion_detected = false;
    h.tick();

    assert_eq!(h.app.state(), StateId::ArmedIdle);
    assert_eq!(h.hw.buzzer_freq(), None);
    assert!(h.hw.alarm_led_on(), "LED back to steady on");
    assert_eq!(
        h.hw.row_texts(1).last().map(String::as_str),
        Some("Alarma ON")
    );
}

#[test]
fn press_during_intrusion_disarms_and_silences() {
    let mut h = Harness::new();
    h.tick();
    h.press();
    h.hw.snapshot.motion_detected = true;
    h.tick();
    assert_eq!(h.app.state(), StateId::ArmedIntruding);

    // Motion still present — the press wins.
    h.press();

    assert_eq!(h.app.state(), StateId::Disarmed);
    assert_eq!(h.hw.buzzer_freq(), None);
    assert!(!h.hw.alarm_led_on());
    assert_eq!(
        h.hw.row_texts(1).last().map(String::as_str),
        Some("Alarma OFF")
    );
}

// ── Lamp rule ─────────────────────────────────────────────────

#[test]
fn lamp_follows_light_threshold() {
    let mut h = Harness::new();

    h.hw.snapshot.light_raw = 850;
    h.tick();
    assert!(h.hw.lamp_on(), "850 < 900 -> lamp on");

    h.hw.snapshot.light_raw = 950;
    h.tick();
    assert!(!h.hw.lamp_on(), "950 >= 900 -> lamp off");

    // Boundary is strict.
    h.hw.snapshot.light_raw = 900;
    h.tick();
    assert!(!h.hw.lamp_on(), "900 is not < 900");
}

#[test]
fn lamp_is_independent_of_alarm_state() {
    let mut h = Harness::new();
    h.hw.snapshot.light_raw = 100;
    h.tick();
    assert!(h.hw.lamp_on());

    h.press();
    h.hw.snapshot.motion_detected = true;
    h.tick();
    assert_eq!(h.app.state(), StateId::ArmedIntruding);
    assert!(h.hw.lamp_on(), "intrusion must not touch the lamp");

    h.hw.snapshot.light_raw = 1000;
    h.tick();
    assert!(!h.hw.lamp_on(), "bright room switches lamp off even mid-alarm");
}

// ── Display diffing ───────────────────────────────────────────

#[test]
fn top_line_redrawn_every_tick_bottom_only_on_change() {
    let mut h = Harness::new();
    for _ in 0..5 {
        h.tick();
    }

    assert_eq!(h.hw.prints_on_row(0), 5, "line 0 redrawn unconditionally");
    // Line 1: one blank + one message on the first tick, nothing after.
    assert_eq!(h.hw.prints_on_row(1), 2);
}

#[test]
fn top_line_carries_telemetry_format() {
    let mut h = Harness::new();
    h.hw.snapshot.temperature_c = 24.3;
    h.hw.snapshot.light_raw = 912;
    h.tick();

    assert_eq!(
        h.hw.row_texts(0).last().map(String::as_str),
        Some("T:24.3C L:91")
    );
}

// ── Actuator application ──────────────────────────────────────

#[test]
fn actuators_are_reapplied_every_tick() {
    let mut h = Harness::new();
    for _ in 0..3 {
        h.tick();
    }

    let lamp_writes = h
        .hw
        .actuator_calls
        .iter()
        .filter(|c| matches!(c, crate::mock_hw::ActuatorCall::SetLamp(_)))
        .count();
    assert_eq!(lamp_writes, 3, "lamp commanded unconditionally each tick");
}

#[test]
fn state_changes_are_emitted_once() {
    let mut h = Harness::new();
    h.tick();
    h.press();

    let changes = h
        .sink
        .events
        .iter()
        .filter(|e| e.contains("StateChanged"))
        .count();
    assert_eq!(changes, 1, "one transition, one event");
}
