use bevy::prelude::*;
use pendulum::prelude::{RenderState, Simulation};

/// Drawn ball, slot 0 is the single bob or bob 1, slot 1 is bob 2.
#[derive(Reflect, Component, Default)]
#[reflect(Component)]
pub struct BobBall(pub usize);

/// Drawn rod, slot 0 hangs from the pivot.
#[derive(Reflect, Component, Default)]
#[reflect(Component)]
pub struct Rod(pub usize);

/// Last derived frame, written by `simulate` and read by the drawing systems.
#[derive(Resource, Deref)]
pub struct Frame(pub RenderState);

impl Default for Frame {
    fn default() -> Self {
        Self(Simulation::default().render_state())
    }
}
