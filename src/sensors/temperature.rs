//! TMP36 analog temperature sensor.
//!
//! Linear voltage-to-temperature device: 0.5 V at 0 °C, 10 mV per °C.
//! The raw ADC code is converted straight through — there is no clamping
//! or plausibility check, so a floating pin shows up as a wild (but
//! honest) temperature on the display.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH8 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(307); // ~25 C

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

const ADC_MAX: f32 = 1023.0;
const V_REF: f32 = 5.0;
const TMP36_OFFSET_V: f32 = 0.5;
const TMP36_SCALE_C_PER_V: f32 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct TemperatureReading {
    pub raw: u16,
    pub celsius: f32,
}

pub struct TemperatureSensor {
    _adc_gpio: i32,
}

impl TemperatureSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
        }
    }

    pub fn read(&self) -> TemperatureReading {
        let raw = self.read_adc();
        TemperatureReading {
            raw,
            celsius: adc_to_celsius(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_TEMP)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }
}

/// `volts = raw * 5.0 / 1023`, `celsius = (volts - 0.5) * 100`.
pub fn adc_to_celsius(raw: u16) -> f32 {
    let volts = raw as f32 * V_REF / ADC_MAX;
    (volts - TMP36_OFFSET_V) * TMP36_SCALE_C_PER_V
}
