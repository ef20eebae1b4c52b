//! Semi-implicit Euler stepping for the single and double pendulum.
//!
//! The double pendulum uses the two-link equations of motion with unit masses.
//! When `length1 ≈ length2` and the links are aligned or folded
//! (`theta2 - theta1 ≈ 0` or `π`) the denominators can approach zero and the
//! state turns into NaN or infinity. That is left to propagate.

use crate::{
    resources::{Parameters, REST_EPSILON},
    state::PendulumState,
};

const M1: f32 = 1.0;
const M2: f32 = 1.0;

pub fn single_acceleration(theta: f32, omega: f32, params: &Parameters) -> f32 {
    -(params.gravity / params.length1) * theta.sin() - params.friction * omega
}

/// Angular accelerations `(alpha1, alpha2)` of the two links, friction included.
pub fn double_accelerations(
    theta1: f32,
    omega1: f32,
    theta2: f32,
    omega2: f32,
    params: &Parameters,
) -> (f32, f32) {
    let Parameters {
        gravity: g,
        friction,
        length1: l1,
        length2: l2,
    } = *params;

    let delta = theta2 - theta1;
    let (sin_d, cos_d) = delta.sin_cos();
    let denom1 = (M1 + M2) * l1 - M2 * l1 * cos_d * cos_d;
    let denom2 = (l2 / l1) * denom1;

    let num1 = M2 * l1 * omega1 * omega1 * sin_d * cos_d
        + M2 * g * theta2.sin() * cos_d
        + M2 * l2 * omega2 * omega2 * sin_d
        - (M1 + M2) * g * theta1.sin();
    let num2 = -M2 * l2 * omega2 * omega2 * sin_d * cos_d
        + (M1 + M2) * g * theta1.sin() * cos_d
        - (M1 + M2) * l1 * omega1 * omega1 * sin_d
        - (M1 + M2) * g * theta2.sin();

    (
        num1 / denom1 - friction * omega1,
        num2 / denom2 - friction * omega2,
    )
}

fn near_rest(value: f32) -> bool {
    value.abs() < REST_EPSILON
}

impl PendulumState {
    /// Advance by `dt`: velocity first, then angle from the new velocity.
    pub fn step(&mut self, params: &Parameters, dt: f32) {
        match self {
            PendulumState::Single { theta, omega } => {
                let alpha = single_acceleration(*theta, *omega, params);
                *omega += alpha * dt;
                *theta += *omega * dt;

                if near_rest(*theta) && near_rest(*omega) {
                    *theta = 0.;
                    *omega = 0.;
                }
            }
            PendulumState::Double {
                theta1,
                omega1,
                theta2,
                omega2,
            } => {
                let (alpha1, alpha2) =
                    double_accelerations(*theta1, *omega1, *theta2, *omega2, params);
                *omega1 += alpha1 * dt;
                *theta1 += *omega1 * dt;
                *omega2 += alpha2 * dt;
                *theta2 += *omega2 * dt;

                if [*theta1, *omega1, *theta2, *omega2].into_iter().all(near_rest) {
                    *theta1 = 0.;
                    *omega1 = 0.;
                    *theta2 = 0.;
                    *omega2 = 0.;
                }
            }
        }
    }
}
