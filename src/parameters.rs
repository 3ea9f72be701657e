use serde::Deserialize;
use std::ops::RangeInclusive;

/// Operator-controlled environment parameters.
///
/// Salinity is stored so the control surface can display it, but no
/// derived metric reads it yet.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameters {
    /// Meters below the surface.
    pub depth: f32,
    /// m/s
    pub current_speed: f32,
    /// °C at the surface.
    pub surface_temperature: f32,
    /// PSU
    pub salinity: f32,
    /// Normalized cloudiness, 0 is clear water.
    pub turbidity: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            depth: 50.0,
            current_speed: 0.5,
            surface_temperature: 15.0,
            salinity: 35.0,
            turbidity: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Depth,
    CurrentSpeed,
    SurfaceTemperature,
    Salinity,
    Turbidity,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Depth,
        Parameter::CurrentSpeed,
        Parameter::SurfaceTemperature,
        Parameter::Salinity,
        Parameter::Turbidity,
    ];

    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            Parameter::Depth => 5.0..=200.0,
            Parameter::CurrentSpeed => 0.0..=2.0,
            Parameter::SurfaceTemperature => 0.0..=30.0,
            Parameter::Salinity => 0.0..=40.0,
            Parameter::Turbidity => 0.0..=1.0,
        }
    }

    /// Slider increment used by the control surface.
    pub fn step(self) -> f32 {
        match self {
            Parameter::CurrentSpeed | Parameter::Turbidity => 0.1,
            _ => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Depth => "Depth",
            Parameter::CurrentSpeed => "Current Speed",
            Parameter::SurfaceTemperature => "Surface Temp",
            Parameter::Salinity => "Salinity",
            Parameter::Turbidity => "Turbidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Depth => "m",
            Parameter::CurrentSpeed => "m/s",
            Parameter::SurfaceTemperature => "°C",
            Parameter::Salinity => "PSU",
            Parameter::Turbidity => "NTU",
        }
    }

    /// Clamps `value` into this parameter's range. NaN maps to the lower bound.
    pub fn clamp(self, value: f32) -> f32 {
        let range = self.range();
        if value.is_nan() {
            return *range.start();
        }
        value.max(*range.start()).min(*range.end())
    }
}

impl Parameters {
    pub fn get(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Depth => self.depth,
            Parameter::CurrentSpeed => self.current_speed,
            Parameter::SurfaceTemperature => self.surface_temperature,
            Parameter::Salinity => self.salinity,
            Parameter::Turbidity => self.turbidity,
        }
    }

    /// Stores `value`, clamped into the parameter's range.
    pub fn set(&mut self, parameter: Parameter, value: f32) {
        let value = parameter.clamp(value);
        match parameter {
            Parameter::Depth => self.depth = value,
            Parameter::CurrentSpeed => self.current_speed = value,
            Parameter::SurfaceTemperature => self.surface_temperature = value,
            Parameter::Salinity => self.salinity = value,
            Parameter::Turbidity => self.turbidity = value,
        }
    }

    /// Returns a copy with every field clamped into range.
    pub fn clamped(mut self) -> Self {
        for parameter in Parameter::ALL.iter() {
            let value = self.get(*parameter);
            self.set(*parameter, value);
        }
        self
    }
}
