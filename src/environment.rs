//! Derived sensor readings.
//!
//! Everything here is a pure function of the current [`Parameters`] and the
//! simulation time, recomputed every tick.

use crate::parameters::Parameters;

/// Depth of the seafloor below the surface, in meters.
pub const SEAFLOOR_DEPTH: f32 = 200.0;

/// Amplitude of the sinusoidal sonar noise, in meters.
pub const SONAR_NOISE: f32 = 5.0;

/// Lower bound of the light attenuation exponent. `exp(-80)` is already far
/// below anything a display can show.
pub const LIGHT_EXPONENT_FLOOR: f32 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// bar
    pub pressure: f32,
    /// Percent of surface light.
    pub light_level: f32,
    /// Meters to the seafloor.
    pub sonar_distance: f32,
    /// L/s
    pub flow_rate: f32,
    /// °C, may go negative.
    pub actual_temperature: f32,
}

impl Metrics {
    pub fn compute(parameters: &Parameters, time: f64) -> Self {
        Metrics {
            pressure: pressure(parameters.depth),
            light_level: light_level(parameters.depth, parameters.turbidity),
            sonar_distance: sonar_distance(parameters.depth, time),
            flow_rate: flow_rate(parameters.current_speed, parameters.depth),
            actual_temperature: actual_temperature(
                parameters.surface_temperature,
                parameters.depth,
            ),
        }
    }

    /// Values as shown on the readout panel, one decimal each.
    pub fn rounded(&self) -> Self {
        Metrics {
            pressure: round1(self.pressure),
            light_level: round1(self.light_level),
            sonar_distance: round1(self.sonar_distance),
            flow_rate: round1(self.flow_rate),
            actual_temperature: round1(self.actual_temperature),
        }
    }
}

pub fn pressure(depth: f32) -> f32 {
    depth * 0.1 + 1.0
}

pub fn light_level(depth: f32, turbidity: f32) -> f32 {
    let exponent = (-0.05 * depth - 2.0 * turbidity).clamp(-LIGHT_EXPONENT_FLOOR, 0.0);
    // f32::max discards a NaN operand
    (100.0 * exponent.exp()).max(0.0)
}

pub fn sonar_distance(depth: f32, time: f64) -> f32 {
    let noise = (0.1 * time).sin() as f32 * SONAR_NOISE;
    (SEAFLOOR_DEPTH - depth + noise).max(0.0)
}

pub fn flow_rate(current_speed: f32, depth: f32) -> f32 {
    current_speed * (1.0 + depth / 100.0) * 100.0
}

pub fn actual_temperature(surface_temperature: f32, depth: f32) -> f32 {
    surface_temperature - 0.05 * depth
}

pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
