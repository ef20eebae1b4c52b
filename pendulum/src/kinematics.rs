use bevy::prelude::*;

use crate::resources::Parameters;

/// Cartesian state of one bob, meters with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BobKinematics {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl BobKinematics {
    /// Chain a link hanging from `self`: positions and velocities add up.
    pub fn then(self, relative: BobKinematics) -> BobKinematics {
        BobKinematics {
            position: self.position + relative.position,
            velocity: self.velocity + relative.velocity,
        }
    }
}

/// Position and velocity of a bob relative to its own pivot.
pub fn forward(theta: f32, omega: f32, length: f32) -> BobKinematics {
    let (sin, cos) = theta.sin_cos();
    BobKinematics {
        position: Vec2::new(length * sin, length * cos),
        velocity: Vec2::new(length * omega * cos, -length * omega * sin),
    }
}

/// Angle of the rod from `pivot` to `pointer`, both in screen pixels.
///
/// Zero is straight down and grows toward positive x, hence `atan2(dx, dy)`.
pub fn to_angle(pivot: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - pivot;
    d.x.atan2(d.y)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub position: Vec2,
    /// Pixels per meter.
    pub scale: f32,
}

/// Pixel layout of the drawing area, origin top-left with y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::new(800., 600.),
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Screen position of the fixed pivot.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.size.x / 2., self.size.y / 3.)
    }

    pub fn reference_length(&self) -> f32 {
        self.size.y / 3.
    }

    /// Recomputed on every call, lengths change live.
    pub fn scale(&self, params: &Parameters) -> f32 {
        self.reference_length() / params.max_length()
    }

    pub fn to_screen(&self, position: Vec2, params: &Parameters) -> ScreenPoint {
        let scale = self.scale(params);
        ScreenPoint {
            position: self.origin() + position * scale,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn forward_at_rest_hangs_down() {
        let k = forward(0.0, 0.0, 2.0);
        assert_eq!(k.position, Vec2::new(0.0, 2.0));
        assert_eq!(k.velocity, Vec2::ZERO);
    }

    #[test]
    fn forward_horizontal_moves_vertically() {
        let k = forward(FRAC_PI_2, 1.5, 1.0);
        assert_abs_diff_eq!(k.position.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(k.position.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(k.velocity.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(k.velocity.y, -1.5, epsilon = 1e-6);
    }

    #[test]
    fn chained_bob_is_cumulative() {
        let first = forward(0.3, 0.2, 1.0);
        let second = first.then(forward(-0.4, 0.7, 0.5));
        let relative = forward(-0.4, 0.7, 0.5);
        assert_eq!(second.position, first.position + relative.position);
        assert_eq!(second.velocity, first.velocity + relative.velocity);
    }

    #[test]
    fn scale_tracks_longest_rod() {
        let viewport = Viewport::new(900., 600.);
        let mut params = Parameters {
            length1: 1.0,
            length2: 0.5,
            ..default()
        };
        assert_eq!(viewport.scale(&params), 200.);
        params.length2 = 2.0;
        assert_eq!(viewport.scale(&params), 100.);
        assert_eq!(viewport.to_screen(Vec2::ZERO, &params).position, Vec2::new(450., 200.));
    }

    #[test]
    fn screen_round_trip_recovers_angle() {
        let viewport = Viewport::new(800., 600.);
        for length in [0.3f32, 1.0, 2.5] {
            let params = Parameters {
                length1: length,
                length2: length,
                ..default()
            };
            let mut theta = -PI + 0.05;
            while theta < PI {
                let k = forward(theta, 0.0, length);
                let screen = viewport.to_screen(k.position, &params);
                let back = to_angle(viewport.origin(), screen.position);
                assert_abs_diff_eq!(back, theta, epsilon = 1e-4);
                theta += 0.1;
            }
        }
    }
}
