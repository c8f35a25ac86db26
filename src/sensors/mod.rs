//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a [`SensorSnapshot`] each
//! tick that gets written into `RoomContext.sensors`.

pub mod light;
pub mod motion;
pub mod temperature;

use crate::fsm::context::SensorSnapshot;
use light::LightSensor;
use motion::MotionSensor;
use temperature::TemperatureSensor;

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    pub light: LightSensor,
    pub temperature: TemperatureSensor,
    pub motion: MotionSensor,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(light: LightSensor, temperature: TemperatureSensor, motion: MotionSensor) -> Self {
        Self {
            light,
            temperature,
            motion,
        }
    }

    /// Read every sensor and return a unified snapshot.
    pub fn read_all(&mut self) -> SensorSnapshot {
        let light = self.light.read();
        let temp = self.temperature.read();
        let motion = self.motion.read();

        SensorSnapshot {
            motion_detected: motion,
            light_raw: light.raw,
            temperature_c: temp.celsius,
        }
    }
}
