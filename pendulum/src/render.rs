use bevy::prelude::*;

use crate::{
    interaction::bob_screen_position,
    kinematics::Viewport,
    resources::{Parameters, BALL_RADIUS, ROD_WIDTH},
    state::{Bob, DragState, PendulumState},
};

/// Everything the drawing side needs for one frame, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderState {
    Single {
        origin: Vec2,
        bob: Vec2,
        scale: f32,
        ball_radius: f32,
        rod_width: f32,
        is_dragging: bool,
    },
    Double {
        origin: Vec2,
        bob1: Vec2,
        bob2: Vec2,
        scale: f32,
        ball_radius: f32,
        rod_width: f32,
        is_dragging: bool,
        drag_target: Option<Bob>,
    },
}

impl RenderState {
    pub fn derive(
        state: &PendulumState,
        params: &Parameters,
        viewport: &Viewport,
        drag: DragState,
    ) -> Self {
        let origin = viewport.origin();
        let scale = viewport.scale(params);
        let screen = |bob| bob_screen_position(state, bob, params, viewport).unwrap_or(origin);
        match state {
            PendulumState::Single { .. } => RenderState::Single {
                origin,
                bob: screen(Bob::Single),
                scale,
                ball_radius: BALL_RADIUS,
                rod_width: ROD_WIDTH,
                is_dragging: drag.is_dragging(),
            },
            PendulumState::Double { .. } => RenderState::Double {
                origin,
                bob1: screen(Bob::First),
                bob2: screen(Bob::Second),
                scale,
                ball_radius: BALL_RADIUS,
                rod_width: ROD_WIDTH,
                is_dragging: drag.is_dragging(),
                drag_target: drag.target(),
            },
        }
    }

    /// Rod segments as `(start, end)` pairs, pivot first.
    pub fn rods(&self) -> Vec<(Vec2, Vec2)> {
        match *self {
            RenderState::Single { origin, bob, .. } => vec![(origin, bob)],
            RenderState::Double {
                origin, bob1, bob2, ..
            } => vec![(origin, bob1), (bob1, bob2)],
        }
    }

    /// Bob centers in draw order, the last one is on top.
    pub fn bobs(&self) -> Vec<(Bob, Vec2)> {
        match *self {
            RenderState::Single { bob, .. } => vec![(Bob::Single, bob)],
            RenderState::Double { bob1, bob2, .. } => vec![(Bob::First, bob1), (Bob::Second, bob2)],
        }
    }

    /// Drawn in the drag color. In double mode only bob 2 lights up, bob 1
    /// keeps its color even while held.
    pub fn is_highlighted(&self, bob: Bob) -> bool {
        match *self {
            RenderState::Single { is_dragging, .. } => is_dragging && bob == Bob::Single,
            RenderState::Double { drag_target, .. } => {
                bob == Bob::Second && drag_target == Some(Bob::Second)
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        match *self {
            RenderState::Single { is_dragging, .. } | RenderState::Double { is_dragging, .. } => {
                is_dragging
            }
        }
    }

    /// Drawn bob radius in pixels.
    pub fn ball_pixels(&self) -> f32 {
        match *self {
            RenderState::Single {
                ball_radius, scale, ..
            }
            | RenderState::Double {
                ball_radius, scale, ..
            } => ball_radius * scale,
        }
    }

    /// Drawn rod width in pixels.
    pub fn rod_pixels(&self) -> f32 {
        match *self {
            RenderState::Single {
                rod_width, scale, ..
            }
            | RenderState::Double {
                rod_width, scale, ..
            } => rod_width * scale,
        }
    }
}

/// Line segments traced behind the last bob, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Trail {
    last: Option<Vec2>,
    resets: u32,
}

impl Trail {
    /// Segment from the previous tip to `tip`. Starts over when `resets`
    /// differs from the last call so a reset does not streak across the screen.
    pub fn advance(&mut self, tip: Vec2, resets: u32) -> Option<(Vec2, Vec2)> {
        if resets != self.resets {
            self.resets = resets;
            self.last = None;
        }
        let segment = self.last.map(|last| (last, tip));
        self.last = Some(tip);
        segment
    }
}
