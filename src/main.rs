//! RoomGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-period polling loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter            LogEventSink    NvsAdapter       │
//! │  (Sensor+Actuator+Display)  (EventSink)     (ConfigPort)     │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)                 │      │
//! │  │  Debounce · FSM · Display diffing                  │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  ~120 ms tick · telemetry cadence · watchdog                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use roomguard::adapters::hardware::HardwareAdapter;
use roomguard::adapters::log_sink::LogEventSink;
use roomguard::adapters::nvs::NvsAdapter;
use roomguard::adapters::time::Esp32TimeAdapter;
use roomguard::app::events::AppEvent;
use roomguard::app::ports::{ConfigPort, EventSink};
use roomguard::app::service::AppService;
use roomguard::config::SystemConfig;
use roomguard::drivers::alarm_led::AlarmLed;
use roomguard::drivers::buzzer::Buzzer;
use roomguard::drivers::lamp::LampDriver;
use roomguard::drivers::lcd::Lcd1602;
use roomguard::drivers::watchdog::Watchdog;
use roomguard::drivers;
use roomguard::pins;
use roomguard::sensors::{self, SensorHub};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RoomGuard v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    // ── 3. Load config from NVS (or defaults) ─────────────────
    let config = match NvsAdapter::new().and_then(|nvs| nvs.load()) {
        Ok(cfg) => {
            info!("Config loaded from NVS");
            cfg
        }
        Err(e) => {
            warn!("NVS config load failed ({}), using defaults", e);
            SystemConfig::default()
        }
    };

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        sensors::light::LightSensor::new(pins::LIGHT_ADC_GPIO),
        sensors::temperature::TemperatureSensor::new(pins::TEMP_ADC_GPIO),
        sensors::motion::MotionSensor::new(pins::PIR_GPIO),
    );

    let mut lcd = Lcd1602::new();
    lcd.init();

    let mut hw = HardwareAdapter::new(
        sensor_hub,
        LampDriver::new(),
        AlarmLed::new(),
        Buzzer::new(),
        lcd,
    );

    let time_adapter = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut sink);

    // ── 6. Control loop ───────────────────────────────────────
    let tick_delay = Duration::from_millis(config.control_loop_interval_ms as u64);
    let telemetry_every_ticks = ((config.telemetry_interval_secs as u64 * 1000)
        / config.control_loop_interval_ms as u64)
        .max(1);

    info!(
        "System ready. Entering control loop ({} ms tick).",
        config.control_loop_interval_ms
    );

    loop {
        // Fixed inter-tick delay — the tick itself is fast compared to
        // the period, so no drift compensation is attempted.
        thread::sleep(tick_delay);

        let now_ms = time_adapter.uptime_ms();
        app.tick(now_ms, &mut hw, &mut sink);

        if app.tick_count() % telemetry_every_ticks == 0 {
            sink.emit(&AppEvent::Telemetry(app.build_telemetry()));
        }

        // Feed watchdog on every iteration.
        watchdog.feed();
    }
}
