mod components;
mod reset;
mod text_overlay;

use components::*;
use reset::*;
use text_overlay::*;

use bevy::{
    prelude::*,
    sprite::MaterialMesh2dBundle,
    window::{CursorLeft, CursorMoved, PrimaryWindow},
};
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
use bevy_prototype_debug_lines::{DebugLines, DebugLinesPlugin};
use pendulum::prelude::{Bob, Config, Parameter, PointerInput, Simulation, Trail, Viewport};

const ROD_COLOR: Color = Color::rgb(0.27, 0.27, 0.27);
const BOB_COLOR: Color = Color::rgb(0.1, 0.46, 0.82);
const SECOND_BOB_COLOR: Color = Color::rgb(0.83, 0.18, 0.18);
const HELD_COLOR: Color = Color::rgb(1.0, 0.6, 0.0);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(ClearColor(Color::WHITE))
        .init_resource::<Config>()
        .init_resource::<Simulation>()
        .init_resource::<Frame>()
        .add_plugin(ResourceInspectorPlugin::<Config>::default())
        .add_plugin(DebugLinesPlugin::default())
        .add_plugin(ResetPlugin)
        .add_plugin(TextOverlayPlugin)
        .add_startup_system(setup)
        .add_systems(
            (
                resize_viewport,
                apply_config,
                handle_pointer,
                simulate,
                draw_pendulum,
                update_telemetry,
            )
                .chain(),
        )
        .register_type::<Config>()
        .register_type::<BobBall>()
        .register_type::<Rod>()
        .run()
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    for index in 0..2 {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: ROD_COLOR,
                    custom_size: Some(Vec2::ONE),
                    ..default()
                },
                ..default()
            },
            Rod(index),
            Name::new(format!("Rod {}", index)),
        ));

        // Unit circle, scaled to the bob radius every frame
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: meshes.add(shape::Circle::new(1.0).into()).into(),
                material: materials.add(ColorMaterial::from(BOB_COLOR)),
                ..default()
            },
            BobBall(index),
            Name::new(format!("Bob {}", index)),
        ));
    }

    info!("Press 'R' to reset, 'D' to toggle the double pendulum");
}

fn resize_viewport(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut sim: ResMut<Simulation>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let viewport = Viewport::new(window.width(), window.height());
    if *sim.viewport() != viewport {
        sim.resize(viewport);
    }
}

/// Push `Config` edits (inspector or keyboard) into the simulation.
fn apply_config(config: Res<Config>, mut sim: ResMut<Simulation>) {
    if !config.is_changed() {
        return;
    }
    let params = config.parameters();
    for (parameter, value, current) in [
        (Parameter::Gravity, params.gravity, sim.params().gravity),
        (Parameter::Friction, params.friction, sim.params().friction),
        (Parameter::Length1, params.length1, sim.params().length1),
        (Parameter::Length2, params.length2, sim.params().length2),
    ] {
        if value != current {
            sim.set_parameter(parameter, value);
        }
    }
    if sim.mode() != config.mode() {
        sim.set_mode(config.mode());
    }
}

fn handle_pointer(
    mouse_input: Res<Input<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor_left: EventReader<CursorLeft>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut sim: ResMut<Simulation>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    // Window reports the cursor from the bottom left, the simulation wants top left
    let height = window.height();
    let to_viewport = |p: Vec2| Vec2::new(p.x, height - p.y);

    let input = PointerInput {
        moves: cursor_moved
            .iter()
            .map(|event| to_viewport(event.position))
            .collect(),
        pressed: mouse_input
            .just_pressed(MouseButton::Left)
            .then(|| window.cursor_position().map(to_viewport))
            .flatten(),
        released: mouse_input.just_released(MouseButton::Left),
        left: cursor_left.iter().count() > 0,
    };
    if input != PointerInput::default() {
        sim.apply_pointer(&input);
    }
}

fn simulate(mut sim: ResMut<Simulation>, mut frame: ResMut<Frame>) {
    frame.0 = sim.tick();
}

fn draw_pendulum(
    frame: Res<Frame>,
    sim: Res<Simulation>,
    mut lines: ResMut<DebugLines>,
    mut rods: Query<(&Rod, &mut Transform, &mut Visibility), Without<BobBall>>,
    mut balls: Query<
        (&BobBall, &mut Transform, &mut Visibility, &Handle<ColorMaterial>),
        Without<Rod>,
    >,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut trail: Local<Trail>,
) {
    let size = sim.viewport().size;
    let to_world = |p: Vec2, z: f32| Vec3::new(p.x - size.x * 0.5, size.y * 0.5 - p.y, z);

    let segments = frame.rods();
    for (rod, mut transform, mut visibility) in rods.iter_mut() {
        let Some(&(start, end)) = segments.get(rod.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        *visibility = Visibility::Visible;
        let (a, b) = (to_world(start, 0.), to_world(end, 0.));
        let d = (b - a).truncate();
        transform.translation = (a + b) * 0.5;
        transform.rotation = Quat::from_rotation_z(d.y.atan2(d.x));
        transform.scale = Vec3::new(d.length(), frame.rod_pixels(), 1.);
    }

    let bobs = frame.bobs();
    for (ball, mut transform, mut visibility, material) in balls.iter_mut() {
        let Some(&(bob, center)) = bobs.get(ball.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        *visibility = Visibility::Visible;
        // later bobs on top
        transform.translation = to_world(center, 1. + ball.0 as f32);
        transform.scale = Vec3::splat(frame.ball_pixels());

        if let Some(material) = materials.get_mut(material) {
            material.color = match bob {
                _ if frame.is_highlighted(bob) => HELD_COLOR,
                Bob::Second => SECOND_BOB_COLOR,
                Bob::Single | Bob::First => BOB_COLOR,
            };
        }
    }

    // Trail of the last bob
    if let Some(&(_, tip)) = bobs.last() {
        if let Some((from, to)) = trail.advance(tip, sim.resets()) {
            lines.line_colored(to_world(from, 0.), to_world(to, 0.), 1.5, Color::RED);
        }
    }
}
