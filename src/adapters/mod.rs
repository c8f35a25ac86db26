//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements        | Connects to                  |
//! |------------|-------------------|------------------------------|
//! | `hardware` | SensorPort        | ESP32 ADC, GPIO              |
//! |            | ActuatorPort      | ESP32 GPIO, LEDC             |
//! |            | DisplayPort       | HD44780 16x2 LCD             |
//! | `log_sink` | EventSink         | Serial log output            |
//! | `nvs`      | ConfigPort        | NVS / in-memory store        |
//! | `time`     | —                 | ESP32 system timer           |

pub mod hardware;
pub mod log_sink;
pub mod nvs;
pub mod time;
