use bevy::prelude::*;
use bevy_inspector_egui::{prelude::ReflectInspectorOptions, InspectorOptions};

/// Bob radius in meters, rendering only.
pub const BALL_RADIUS: f32 = 0.05;
/// Rod width in meters, rendering only.
pub const ROD_WIDTH: f32 = 0.016;
/// Fixed integration step, not synced to the frame clock.
pub const TIME_STEP: f32 = 0.033;
/// Below this, angle and angular velocity snap to exactly zero.
pub const REST_EPSILON: f32 = 1e-3;
/// Grab radius as a multiple of the drawn bob radius.
pub const HITBOX_FACTOR: f32 = 2.5;

/// User tunable settings, edited live from the inspector.
#[derive(Reflect, Resource, InspectorOptions)]
#[reflect(Resource, InspectorOptions)]
pub struct Config {
    #[inspector(min = 0.0, max = 30.0)]
    pub gravity: f32,
    #[inspector(min = 0.0, max = 2.0)]
    pub friction: f32,
    #[inspector(min = 0.1, max = 3.0)]
    pub length1: f32,
    #[inspector(min = 0.1, max = 3.0)]
    pub length2: f32,
    pub double: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            friction: 0.1,
            length1: 1.0,
            length2: 1.0,
            double: false,
        }
    }
}

impl Config {
    pub fn parameters(&self) -> Parameters {
        Parameters {
            gravity: self.gravity,
            friction: self.friction,
            length1: self.length1,
            length2: self.length2,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.double {
            Mode::Double
        } else {
            Mode::Single
        }
    }
}

/// Physical parameters read by the integrator each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub gravity: f32,
    pub friction: f32,
    pub length1: f32,
    pub length2: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Config::default().parameters()
    }
}

impl Parameters {
    pub fn max_length(&self) -> f32 {
        self.length1.max(self.length2)
    }

    pub fn set(&mut self, parameter: Parameter, value: f32) {
        match parameter {
            Parameter::Gravity => self.gravity = value,
            Parameter::Friction => self.friction = value,
            Parameter::Length1 => self.length1 = value,
            Parameter::Length2 => self.length2 = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Gravity,
    Friction,
    Length1,
    Length2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Single,
    Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_parameter_touches_only_named_field() {
        let mut params = Parameters::default();
        params.set(Parameter::Length2, 2.5);
        assert_eq!(params.length2, 2.5);
        assert_eq!(params.length1, 1.0);
        assert_eq!(params.max_length(), 2.5);
    }

    #[test]
    fn config_maps_checkbox_to_mode() {
        let mut config = Config::default();
        assert_eq!(config.mode(), Mode::Single);
        config.double = true;
        assert_eq!(config.mode(), Mode::Double);
    }
}
