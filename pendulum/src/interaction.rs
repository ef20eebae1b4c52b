use bevy::prelude::*;

use crate::{
    kinematics::{to_angle, Viewport},
    resources::{Parameters, BALL_RADIUS, HITBOX_FACTOR},
    state::{Bob, DragState, PendulumState},
};

/// Pointer events collected over one frame, viewport pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerInput {
    pub moves: Vec<Vec2>,
    pub pressed: Option<Vec2>,
    pub released: bool,
    pub left: bool,
}

/// Screen position of `bob` for the current state and parameters.
pub fn bob_screen_position(
    state: &PendulumState,
    bob: Bob,
    params: &Parameters,
    viewport: &Viewport,
) -> Option<Vec2> {
    state
        .kinematics(bob, params)
        .map(|k| viewport.to_screen(k.position, params).position)
}

/// Topmost bob under `pointer`, if any. Hit radius is enlarged for usability.
pub fn hit_test(
    state: &PendulumState,
    params: &Parameters,
    viewport: &Viewport,
    pointer: Vec2,
) -> Option<Bob> {
    let radius = BALL_RADIUS * viewport.scale(params) * HITBOX_FACTOR;
    state.bobs().iter().rev().copied().find(|bob| {
        bob_screen_position(state, *bob, params, viewport)
            .map_or(false, |center| center.distance(pointer) < radius)
    })
}

/// Point the link of `bob` at `pointer` and stop it. Other links keep their state.
pub fn drag_to(
    state: &mut PendulumState,
    bob: Bob,
    params: &Parameters,
    viewport: &Viewport,
    pointer: Vec2,
) {
    let pivot = match PendulumState::pivot_of(bob) {
        Some(parent) => match bob_screen_position(state, parent, params, viewport) {
            Some(pivot) => pivot,
            None => return,
        },
        None => viewport.origin(),
    };
    state.set_link(bob, to_angle(pivot, pointer), 0.);
}

impl DragState {
    pub fn pointer_down(
        &mut self,
        state: &PendulumState,
        params: &Parameters,
        viewport: &Viewport,
        pointer: Vec2,
    ) {
        if self.is_dragging() {
            return;
        }
        if let Some(bob) = hit_test(state, params, viewport, pointer) {
            debug!("Grabbed {:?}", bob);
            *self = DragState::Dragging(bob);
        }
    }

    pub fn pointer_move(
        &self,
        state: &mut PendulumState,
        params: &Parameters,
        viewport: &Viewport,
        pointer: Vec2,
    ) {
        if let DragState::Dragging(bob) = *self {
            drag_to(state, bob, params, viewport, pointer);
        }
    }

    /// Pointer up and pointer leaving the canvas both end the drag.
    pub fn release(&mut self) {
        if let DragState::Dragging(bob) = *self {
            debug!("Released {:?}", bob);
        }
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Mode;
    use approx::assert_abs_diff_eq;

    fn setup() -> (Parameters, Viewport) {
        // origin (400, 200), scale 200 px/m
        (Parameters::default(), Viewport::new(800., 600.))
    }

    #[test]
    fn pointer_on_single_bob_grabs_it() {
        let (params, viewport) = setup();
        let state = PendulumState::at_rest(Mode::Single);
        let mut drag = DragState::Idle;
        drag.pointer_down(&state, &params, &viewport, Vec2::new(410., 395.));
        assert_eq!(drag, DragState::Dragging(Bob::Single));
    }

    #[test]
    fn hitbox_is_two_and_a_half_radii() {
        let (params, viewport) = setup();
        let state = PendulumState::at_rest(Mode::Single);
        // radius 10 px, hitbox 25 px around (400, 400)
        assert_eq!(hit_test(&state, &params, &viewport, Vec2::new(424., 400.)), Some(Bob::Single));
        assert_eq!(hit_test(&state, &params, &viewport, Vec2::new(426., 400.)), None);
    }

    #[test]
    fn miss_stays_idle() {
        let (params, viewport) = setup();
        let state = PendulumState::at_rest(Mode::Double);
        let mut drag = DragState::Idle;
        drag.pointer_down(&state, &params, &viewport, Vec2::new(10., 10.));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn second_bob_wins_when_overlapping() {
        let (mut params, viewport) = setup();
        params.length2 = 0.1;
        params.length1 = 1.0;
        // bob 1 at (400, 400), bob 2 at (400, 420): both within 25 px of (400, 410)
        let state = PendulumState::at_rest(Mode::Double);
        assert_eq!(hit_test(&state, &params, &viewport, Vec2::new(400., 410.)), Some(Bob::Second));
        assert_eq!(hit_test(&state, &params, &viewport, Vec2::new(400., 390.)), Some(Bob::First));
    }

    #[test]
    fn dragging_second_bob_pivots_on_first() {
        let (params, viewport) = setup();
        let mut state = PendulumState::Double {
            theta1: 0.,
            omega1: 0.7,
            theta2: 0.,
            omega2: 3.0,
        };
        // bob 1 sits at (400, 400); point straight right of it
        let drag = DragState::Dragging(Bob::Second);
        drag.pointer_move(&mut state, &params, &viewport, Vec2::new(500., 400.));
        let (theta2, omega2) = state.link(Bob::Second).unwrap();
        assert_abs_diff_eq!(theta2, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(omega2, 0.);
        assert_eq!(state.link(Bob::First), Some((0., 0.7)));
    }

    #[test]
    fn dragging_first_bob_leaves_second_angle() {
        let (params, viewport) = setup();
        let mut state = PendulumState::Double {
            theta1: 0.,
            omega1: 1.0,
            theta2: 0.4,
            omega2: 2.0,
        };
        let drag = DragState::Dragging(Bob::First);
        drag.pointer_move(&mut state, &params, &viewport, Vec2::new(300., 200.));
        let (theta1, omega1) = state.link(Bob::First).unwrap();
        assert_abs_diff_eq!(theta1, -std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(omega1, 0.);
        assert_eq!(state.link(Bob::Second), Some((0.4, 2.0)));
    }

    #[test]
    fn idle_pointer_move_changes_nothing() {
        let (params, viewport) = setup();
        let mut state = PendulumState::Single {
            theta: 0.3,
            omega: 0.1,
        };
        DragState::Idle.pointer_move(&mut state, &params, &viewport, Vec2::new(0., 0.));
        assert_eq!(state.link(Bob::Single), Some((0.3, 0.1)));
    }

    #[test]
    fn release_returns_to_idle() {
        let mut drag = DragState::Dragging(Bob::First);
        drag.release();
        assert_eq!(drag, DragState::Idle);
        drag.release();
        assert_eq!(drag, DragState::Idle);
    }
}
