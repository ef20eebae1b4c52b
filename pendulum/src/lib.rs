pub mod integrator;
pub mod interaction;
pub mod kinematics;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod state;
pub mod telemetry;

pub mod prelude {
    pub use crate::{
        interaction::PointerInput,
        kinematics::Viewport,
        render::{RenderState, Trail},
        resources::*,
        simulation::Simulation,
        state::{Bob, DragState, PendulumState},
        telemetry::Readout,
    };
}
