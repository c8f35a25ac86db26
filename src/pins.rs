//! GPIO / peripheral pin assignments for the RoomGuard main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Actuators — Digital outputs
// ---------------------------------------------------------------------------

/// Lamp relay (active HIGH).
pub const LAMP_GPIO: i32 = 1;
/// Intrusion alarm LED (active HIGH).
pub const ALARM_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Buzzer (passive piezo, tone via LEDC)
// ---------------------------------------------------------------------------

/// LEDC PWM output for the alarm buzzer.
pub const BUZZER_GPIO: i32 = 3;
/// LEDC duty resolution for the buzzer timer (bits).
pub const BUZZER_PWM_RESOLUTION_BITS: u32 = 10;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR light sensor — voltage divider to ADC.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 5;

/// TMP36 analog temperature sensor — direct to ADC.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// HC-SR501 PIR motion sensor. HIGH = motion detected.
/// The PIR module debounces internally; the firmware treats it as clean.
pub const PIR_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button toggling the armed state. LOW = pressed.
pub const BUTTON_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// 16x2 character LCD (HD44780, 4-bit parallel)
// ---------------------------------------------------------------------------

pub const LCD_RS_GPIO: i32 = 10;
pub const LCD_EN_GPIO: i32 = 11;
pub const LCD_D4_GPIO: i32 = 12;
pub const LCD_D5_GPIO: i32 = 13;
pub const LCD_D6_GPIO: i32 = 14;
pub const LCD_D7_GPIO: i32 = 15;

/// Display geometry.
pub const LCD_COLS: usize = 16;
pub const LCD_ROWS: usize = 2;
