use bevy::prelude::*;
use pendulum::prelude::{Config, Simulation};

pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.add_system(reset_listen).add_system(mode_listen);
    }
}

pub fn reset_listen(keys: Res<Input<KeyCode>>, mut sim: ResMut<Simulation>) {
    if keys.just_pressed(KeyCode::R) {
        sim.reset();
    }
}

/// Same as ticking the double checkbox in the inspector.
pub fn mode_listen(keys: Res<Input<KeyCode>>, mut config: ResMut<Config>) {
    if keys.just_pressed(KeyCode::D) {
        config.double = !config.double;
    }
}
