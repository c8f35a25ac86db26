//! Display rendering and redraw suppression.
//!
//! Line 0 carries telemetry (`T:<temp>C L:<light/10>`) and is rewritten
//! every tick — its text changes almost every tick anyway. Line 1 carries
//! the alarm status message and is rewritten only when the message
//! actually changes; a 16x2 LCD visibly flickers if a line is rewritten
//! at tick rate. On change the field is blanked first so a shorter
//! message never leaves stale characters behind.

use core::fmt::Write as _;

use heapless::String;

use super::ports::DisplayPort;
use crate::fsm::context::SensorSnapshot;
use crate::fsm::StateId;

/// One LCD line worth of text.
pub type Line = String<16>;

/// Status messages for line 1, keyed by state.
pub const MSG_DISARMED: &str = "Alarma OFF";
pub const MSG_ARMED: &str = "Alarma ON";
pub const MSG_INTRUSION: &str = "INTRUSO";

const BLANK_LINE: &str = "                "; // 16 spaces

/// Renders both display lines and caches the last status message to
/// suppress redundant line-1 redraws.
pub struct DisplayRenderer {
    last_message: Line,
}

impl DisplayRenderer {
    /// Empty cache — the first render always draws line 1.
    pub fn new() -> Self {
        Self {
            last_message: Line::new(),
        }
    }

    /// Draw both lines for this tick.
    pub fn render(
        &mut self,
        display: &mut impl DisplayPort,
        snapshot: &SensorSnapshot,
        state: StateId,
    ) {
        // Line 0: telemetry, unconditional.
        let top = format_top_line(snapshot);
        display.set_cursor(0, 0);
        display.print(&top);

        // Line 1: status, only on change.
        let message = status_message(state);
        if message != self.last_message.as_str() {
            display.set_cursor(0, 1);
            display.print(BLANK_LINE);
            display.set_cursor(0, 1);
            display.print(message);
            self.last_message.clear();
            let _ = self.last_message.push_str(message);
        }
    }

    /// The cached line-1 text (empty before the first render).
    pub fn last_message(&self) -> &str {
        self.last_message.as_str()
    }
}

impl Default for DisplayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// `"T:<temp 1 decimal>C L:<light/10>"`, e.g. `"T:24.3C L:91"`.
pub fn format_top_line(snapshot: &SensorSnapshot) -> Line {
    let mut line = Line::new();
    // Worst case ("T:-127.5C L:102") is 15 chars; anything wilder is
    // clipped by the 16-char capacity, same as the panel would.
    let _ = write!(
        line,
        "T:{:.1}C L:{}",
        snapshot.temperature_c,
        snapshot.light_raw / 10
    );
    line
}

/// Line-1 status text for a state.
pub fn status_message(state: StateId) -> &'static str {
    match state {
        StateId::Disarmed => MSG_DISARMED,
        StateId::ArmedIdle => MSG_ARMED,
        StateId::ArmedIntruding => MSG_INTRUSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recording display for call-sequence assertions.
    #[derive(Default)]
    struct RecordingDisplay {
        calls: Vec<DisplayCall>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum DisplayCall {
        SetCursor(u8, u8),
        Print(std::string::String),
    }

    impl DisplayPort for RecordingDisplay {
        fn set_cursor(&mut self, col: u8, row: u8) {
            self.calls.push(DisplayCall::SetCursor(col, row));
        }

        fn print(&mut self, text: &str) {
            self.calls.push(DisplayCall::Print(text.to_string()));
        }
    }

    impl RecordingDisplay {
        fn line1_prints(&self) -> usize {
            // Count prints addressed to row 1.
            self.calls
                .windows(2)
                .filter(|w| {
                    matches!(w[0], DisplayCall::SetCursor(_, 1))
                        && matches!(w[1], DisplayCall::Print(_))
                })
                .count()
        }
    }

    fn snapshot(temp: f32, light: u16) -> SensorSnapshot {
        SensorSnapshot {
            motion_detected: false,
            light_raw: light,
            temperature_c: temp,
        }
    }

    #[test]
    fn top_line_format() {
        let line = format_top_line(&snapshot(24.34, 912));
        assert_eq!(line.as_str(), "T:24.3C L:91");

        let line = format_top_line(&snapshot(-0.15, 5));
        assert_eq!(line.as_str(), "T:-0.1C L:0");
    }

    #[test]
    fn top_line_redrawn_every_tick() {
        let mut renderer = DisplayRenderer::new();
        let mut display = RecordingDisplay::default();
        let snap = snapshot(21.0, 500);

        for _ in 0..4 {
            renderer.render(&mut display, &snap, StateId::Disarmed);
        }

        let row0_prints = display
            .calls
            .windows(2)
            .filter(|w| {
                matches!(w[0], DisplayCall::SetCursor(0, 0)) && matches!(w[1], DisplayCall::Print(_))
            })
            .count();
        assert_eq!(row0_prints, 4);
    }

    #[test]
    fn bottom_line_drawn_once_while_state_stable() {
        let mut renderer = DisplayRenderer::new();
        let mut display = RecordingDisplay::default();
        let snap = snapshot(21.0, 500);

        for _ in 0..5 {
            renderer.render(&mut display, &snap, StateId::Disarmed);
        }

        // One blank + one message write, then silence.
        assert_eq!(display.line1_prints(), 2);
        assert_eq!(renderer.last_message(), MSG_DISARMED);
    }

    #[test]
    fn bottom_line_cleared_then_written_on_change() {
        let mut renderer = DisplayRenderer::new();
        let mut display = RecordingDisplay::default();
        let snap = snapshot(21.0, 500);

        renderer.render(&mut display, &snap, StateId::Disarmed);
        display.calls.clear();
        renderer.render(&mut display, &snap, StateId::ArmedIdle);

        assert_eq!(
            display.calls,
            vec![
                DisplayCall::SetCursor(0, 0),
                DisplayCall::Print("T:21.0C L:50".to_string()),
                DisplayCall::SetCursor(0, 1),
                DisplayCall::Print("                ".to_string()),
                DisplayCall::SetCursor(0, 1),
                DisplayCall::Print(MSG_ARMED.to_string()),
            ]
        );
    }

    #[test]
    fn status_messages_match_states() {
        assert_eq!(status_message(StateId::Disarmed), "Alarma OFF");
        assert_eq!(status_message(StateId::ArmedIdle), "Alarma ON");
        assert_eq!(status_message(StateId::ArmedIntruding), "INTRUSO");
    }
}
