use crate::{
    kinematics::{forward, BobKinematics},
    resources::{Mode, Parameters},
};

/// Angular state, one variant per mode so no state survives a mode switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendulumState {
    Single {
        theta: f32,
        omega: f32,
    },
    Double {
        theta1: f32,
        omega1: f32,
        theta2: f32,
        omega2: f32,
    },
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::at_rest(Mode::Single)
    }
}

impl PendulumState {
    pub fn at_rest(mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::Single {
                theta: 0.,
                omega: 0.,
            },
            Mode::Double => Self::Double {
                theta1: 0.,
                omega1: 0.,
                theta2: 0.,
                omega2: 0.,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Single { .. } => Mode::Single,
            Self::Double { .. } => Mode::Double,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        *self == Self::at_rest(self.mode())
    }

    /// Bobs in draw order, the last one is on top.
    pub fn bobs(&self) -> &'static [Bob] {
        match self {
            Self::Single { .. } => &[Bob::Single],
            Self::Double { .. } => &[Bob::First, Bob::Second],
        }
    }

    /// `(theta, omega)` of the link ending at `bob`, `None` if the bob does not
    /// exist in the current mode.
    pub fn link(&self, bob: Bob) -> Option<(f32, f32)> {
        match (*self, bob) {
            (Self::Single { theta, omega }, Bob::Single) => Some((theta, omega)),
            (Self::Double { theta1, omega1, .. }, Bob::First) => Some((theta1, omega1)),
            (Self::Double { theta2, omega2, .. }, Bob::Second) => Some((theta2, omega2)),
            _ => None,
        }
    }

    /// Overwrite one link, leaving every other link untouched.
    pub fn set_link(&mut self, bob: Bob, theta: f32, omega: f32) {
        match (self, bob) {
            (Self::Single { theta: t, omega: w }, Bob::Single)
            | (
                Self::Double {
                    theta1: t,
                    omega1: w,
                    ..
                },
                Bob::First,
            )
            | (
                Self::Double {
                    theta2: t,
                    omega2: w,
                    ..
                },
                Bob::Second,
            ) => {
                *t = theta;
                *w = omega;
            }
            _ => {}
        }
    }

    /// Absolute Cartesian state of `bob` relative to the fixed pivot.
    pub fn kinematics(&self, bob: Bob, params: &Parameters) -> Option<BobKinematics> {
        match (*self, bob) {
            (Self::Single { theta, omega }, Bob::Single) => {
                Some(forward(theta, omega, params.length1))
            }
            (Self::Double { theta1, omega1, .. }, Bob::First) => {
                Some(forward(theta1, omega1, params.length1))
            }
            (
                Self::Double {
                    theta1,
                    omega1,
                    theta2,
                    omega2,
                },
                Bob::Second,
            ) => Some(
                forward(theta1, omega1, params.length1)
                    .then(forward(theta2, omega2, params.length2)),
            ),
            _ => None,
        }
    }

    /// The bob whose position is the pivot of `bob`, `None` for the fixed pivot.
    pub fn pivot_of(bob: Bob) -> Option<Bob> {
        match bob {
            Bob::Second => Some(Bob::First),
            Bob::Single | Bob::First => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bob {
    Single,
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Bob),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn target(&self) -> Option<Bob> {
        match self {
            Self::Idle => None,
            Self::Dragging(bob) => Some(*bob),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_link_leaves_other_bob_alone() {
        let mut state = PendulumState::Double {
            theta1: 0.1,
            omega1: 0.2,
            theta2: 0.3,
            omega2: 0.4,
        };
        state.set_link(Bob::Second, 1.0, 0.0);
        assert_eq!(state.link(Bob::First), Some((0.1, 0.2)));
        assert_eq!(state.link(Bob::Second), Some((1.0, 0.0)));
    }

    #[test]
    fn bobs_missing_from_mode_are_ignored() {
        let mut state = PendulumState::at_rest(Mode::Single);
        state.set_link(Bob::Second, 1.0, 1.0);
        assert!(state.is_at_rest());
        assert_eq!(state.link(Bob::First), None);
        assert_eq!(state.kinematics(Bob::Second, &Parameters::default()), None);
    }

    #[test]
    fn second_bob_hangs_below_first() {
        let params = Parameters {
            length1: 1.0,
            length2: 0.5,
            ..Parameters::default()
        };
        let state = PendulumState::at_rest(Mode::Double);
        let k = state.kinematics(Bob::Second, &params).unwrap();
        assert_eq!(k.position.y, 1.5);
        assert_eq!(state.bobs(), &[Bob::First, Bob::Second]);
    }
}
