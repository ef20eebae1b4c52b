use std::fmt;

use bevy::prelude::*;

use crate::{
    resources::Parameters,
    state::{Bob, PendulumState},
};

/// Human readable state of one bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub bob: Bob,
    pub position: Vec2,
    pub velocity: Vec2,
    pub theta: f32,
    pub omega: f32,
}

impl Readout {
    fn subscript(&self) -> &'static str {
        match self.bob {
            Bob::Single => "",
            Bob::First => "₁",
            Bob::Second => "₂",
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.subscript();
        let (theta, omega) = match self.bob {
            Bob::Single => ("theta", "omega"),
            Bob::First | Bob::Second => ("θ", "ω"),
        };
        writeln!(f, "x{s}: {:.3} m", self.position.x)?;
        writeln!(f, "y{s}: {:.3} m", self.position.y)?;
        writeln!(f, "vx{s}: {:.3} m/s", self.velocity.x)?;
        writeln!(f, "vy{s}: {:.3} m/s", self.velocity.y)?;
        writeln!(f, "{theta}{s}: {:.2} deg", self.theta.to_degrees())?;
        write!(f, "{omega}{s}: {:.3} rad/s", self.omega)
    }
}

/// One readout per bob in the current mode.
pub fn readouts(state: &PendulumState, params: &Parameters) -> Vec<Readout> {
    state
        .bobs()
        .iter()
        .filter_map(|&bob| {
            let (theta, omega) = state.link(bob)?;
            let k = state.kinematics(bob, params)?;
            Some(Readout {
                bob,
                position: k.position,
                velocity: k.velocity,
                theta,
                omega,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Mode;

    #[test]
    fn single_readout_format() {
        let state = PendulumState::Single {
            theta: 0.0,
            omega: -1.23456,
        };
        let params = Parameters {
            length1: 2.0,
            ..Parameters::default()
        };
        let lines = readouts(&state, &params);
        assert_eq!(lines.len(), 1);
        let text = lines[0].to_string();
        assert_eq!(
            text,
            "x: 0.000 m\ny: 2.000 m\nvx: -2.469 m/s\nvy: 0.000 m/s\ntheta: 0.00 deg\nomega: -1.235 rad/s"
        );
    }

    #[test]
    fn double_readouts_use_subscripts() {
        let lines = readouts(&PendulumState::at_rest(Mode::Double), &Parameters::default());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].to_string().starts_with("x₁: 0.000 m\ny₁: 1.000 m"));
        assert!(lines[1].to_string().ends_with("θ₂: 0.00 deg\nω₂: 0.000 rad/s"));
        assert_eq!(lines[1].position.y, 2.0);
    }
}
