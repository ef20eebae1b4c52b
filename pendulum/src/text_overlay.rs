use bevy::prelude::*;
use pendulum::prelude::Simulation;

pub struct TextOverlayPlugin;

impl Plugin for TextOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(setup_overlay);
    }
}

#[derive(Component)]
pub struct TelemetryText;

const UI_SIZE: f32 = 20.0;

fn setup_overlay(mut commands: Commands, asset_server: Res<AssetServer>) {
    let ui_font = asset_server.load("fonts/FiraSans-Bold.ttf");

    commands.spawn((
        TextBundle {
            style: Style {
                position_type: PositionType::Absolute,
                position: UiRect {
                    left: Val::Px(10.),
                    top: Val::Px(10.),
                    ..Default::default()
                },
                ..Default::default()
            },
            text: Text {
                sections: vec![TextSection {
                    value: "".to_string(),
                    style: TextStyle {
                        font: ui_font,
                        font_size: UI_SIZE,
                        color: Color::BLACK,
                    },
                }],
                ..Default::default()
            },
            ..Default::default()
        },
        Name::new("ui Telemetry"),
        TelemetryText,
    ));
}

/// One block per bob, the second only shows up in double mode.
pub fn update_telemetry(sim: Res<Simulation>, mut query: Query<&mut Text, With<TelemetryText>>) {
    if !sim.is_changed() {
        return;
    }
    let blocks = sim
        .telemetry()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    for mut text in query.iter_mut() {
        text.sections[0].value = blocks.clone();
    }
}
