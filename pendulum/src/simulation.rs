use bevy::prelude::*;

use crate::{
    interaction::PointerInput,
    kinematics::Viewport,
    render::RenderState,
    resources::{Mode, Parameter, Parameters, TIME_STEP},
    state::{DragState, PendulumState},
    telemetry::{readouts, Readout},
};

/// Owns all mutable simulation state. The host only reads snapshots or goes
/// through these methods.
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    state: PendulumState,
    drag: DragState,
    params: Parameters,
    viewport: Viewport,
    dt: f32,
    resets: u32,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Parameters::default(), Mode::Single)
    }
}

impl Simulation {
    pub fn new(params: Parameters, mode: Mode) -> Self {
        Self {
            state: PendulumState::at_rest(mode),
            drag: DragState::Idle,
            params,
            viewport: Viewport::default(),
            dt: TIME_STEP,
            resets: 0,
        }
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Takes effect on the next step.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f32) {
        self.params.set(parameter, value);
    }

    /// Resets every angle and velocity to rest and drops any drag, even when
    /// `mode` is the current one.
    pub fn set_mode(&mut self, mode: Mode) {
        info!("Mode {:?}, reset to rest", mode);
        self.state = PendulumState::at_rest(mode);
        self.drag.release();
        self.resets = self.resets.wrapping_add(1);
    }

    /// Bumped by every `set_mode` and `reset`.
    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn reset(&mut self) {
        self.set_mode(self.mode());
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[cfg(test)]
    pub fn set_state(&mut self, state: PendulumState) {
        self.state = state;
    }

    pub fn pointer_down(&mut self, pointer: Vec2) {
        self.drag
            .pointer_down(&self.state, &self.params, &self.viewport, pointer);
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        self.drag
            .pointer_move(&mut self.state, &self.params, &self.viewport, pointer);
    }

    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.release();
    }

    /// Replay one frame of pointer events. Moves are applied before the press
    /// so only movement after grabbing drags the bob.
    pub fn apply_pointer(&mut self, input: &PointerInput) {
        for &pointer in &input.moves {
            self.pointer_move(pointer);
        }
        if let Some(pointer) = input.pressed {
            self.pointer_down(pointer);
        }
        if input.released {
            self.pointer_up();
        }
        if input.left {
            self.pointer_leave();
        }
    }

    /// One frame: step unless a bob is held, then derive what to draw.
    pub fn tick(&mut self) -> RenderState {
        if !self.drag.is_dragging() {
            self.state.step(&self.params, self.dt);
        }
        self.render_state()
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::derive(&self.state, &self.params, &self.viewport, self.drag)
    }

    pub fn telemetry(&self) -> Vec<Readout> {
        readouts(&self.state, &self.params)
    }
}
