//! Scene setup: camera, roads, signal heads, vehicles, HUD and menu
//!
//! All layout constants are in simulation units (the visible range is
//! [-1, 1] on both axes) and converted to pixels with [`px`].

use bevy::prelude::*;

use super::components::{
    CongestionBar, CountdownText, FeedbackText, MenuRoot, SignalLamp, SimulationRoot,
    VehicleSprite,
};
use super::px;
use crate::simulation::{Axis, SignalPhase, VehicleKind, BIKE_START_Y, BUS_START_X, CAR_START_X};

/// Lane centerline offsets, in simulation units
const EASTBOUND_LANE_Y: f32 = -0.025;
const SOUTHBOUND_LANE_X: f32 = -0.55;

/// Signal head base positions
const H_SIGNAL: (f32, f32) = (-0.3, 0.1);
const V_SIGNAL: (f32, f32) = (-0.5, -0.3);

/// Congestion bar geometry
pub const BAR_LEFT: f32 = -0.95;
pub const BAR_Y: f32 = 0.85;
pub const BAR_MAX_WIDTH: f32 = 0.3;

const ROAD_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
const POLE_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the start-menu overlay, visible until the simulation starts.
pub fn setup_menu(mut commands: Commands) {
    commands
        .spawn((MenuRoot, Transform::default(), Visibility::Visible))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new("SMART TRAFFIC SIMULATION"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, px(0.2), 3.0),
            ));
            parent.spawn((
                Text2d::new("Press 'S' to Start Simulation"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, px(0.05), 3.0),
            ));
            parent.spawn((
                Text2d::new("Press 'E' to Exit"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, px(-0.05), 3.0),
            ));
        });
}

/// Spawn the intersection scene: roads, stop lines, signal heads, vehicles
/// and the congestion HUD. Hidden until the simulation starts.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let lamp_mesh = meshes.add(Circle::new(px(0.015)));

    commands
        .spawn((SimulationRoot, Transform::default(), Visibility::Hidden))
        .with_children(|parent| {
            // Roads
            spawn_rect(parent, (0.0, 0.0), (2.0, 0.2), ROAD_COLOR, 0.0);
            spawn_rect(parent, (-0.5, 0.0), (0.2, 2.0), ROAD_COLOR, 0.0);

            // Stop lines
            spawn_rect(parent, (-0.61, 0.0), (0.008, 0.2), Color::WHITE, 1.0);
            spawn_rect(parent, (-0.4, 0.0), (0.008, 0.2), Color::WHITE, 1.0);
            spawn_rect(parent, (-0.5, 0.13), (0.2, 0.008), Color::WHITE, 1.0);

            // Signal poles and heads
            spawn_rect(
                parent,
                (H_SIGNAL.0, H_SIGNAL.1 + 0.075),
                (0.02, 0.15),
                POLE_COLOR,
                1.0,
            );
            spawn_rect(
                parent,
                (H_SIGNAL.0, H_SIGNAL.1 + 0.175),
                (0.06, 0.15),
                POLE_COLOR,
                1.0,
            );
            spawn_rect(
                parent,
                (V_SIGNAL.0, V_SIGNAL.1 + 0.075),
                (0.02, 0.15),
                POLE_COLOR,
                1.0,
            );
            spawn_rect(
                parent,
                (V_SIGNAL.0, V_SIGNAL.1 + 0.175),
                (0.06, 0.15),
                POLE_COLOR,
                1.0,
            );

            for (axis, base) in [(Axis::Horizontal, H_SIGNAL), (Axis::Vertical, V_SIGNAL)] {
                for (phase, dy) in [
                    (SignalPhase::Red, 0.24),
                    (SignalPhase::Yellow, 0.18),
                    (SignalPhase::Green, 0.12),
                ] {
                    parent.spawn((
                        SignalLamp { axis, phase },
                        Mesh2d(lamp_mesh.clone()),
                        MeshMaterial2d(materials.add(Color::srgb(0.2, 0.2, 0.2))),
                        Transform::from_xyz(px(base.0), px(base.1 + dy), 2.0),
                    ));
                }

                parent.spawn((
                    CountdownText(axis),
                    Text2d::new("10"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::BLACK),
                    Transform::from_xyz(px(base.0), px(base.1 + 0.3), 3.0),
                ));
            }

            // Vehicles
            parent.spawn((
                VehicleSprite {
                    kind: VehicleKind::Car,
                    center_offset: 0.05,
                },
                Sprite {
                    color: Color::srgb(1.0, 0.0, 0.0),
                    custom_size: Some(Vec2::new(px(0.1), px(0.06))),
                    ..default()
                },
                Transform::from_xyz(px(CAR_START_X + 0.05), px(EASTBOUND_LANE_Y), 2.0),
            ));
            parent.spawn((
                VehicleSprite {
                    kind: VehicleKind::Bus,
                    center_offset: 0.075,
                },
                Sprite {
                    color: Color::srgb(0.0, 0.0, 0.0),
                    custom_size: Some(Vec2::new(px(0.15), px(0.07))),
                    ..default()
                },
                Transform::from_xyz(px(BUS_START_X + 0.075), px(EASTBOUND_LANE_Y), 2.0),
            ));
            parent.spawn((
                VehicleSprite {
                    kind: VehicleKind::Bike,
                    center_offset: 0.05,
                },
                Sprite {
                    color: Color::srgb(0.0, 1.0, 0.0),
                    custom_size: Some(Vec2::new(px(0.05), px(0.1))),
                    ..default()
                },
                Transform::from_xyz(px(SOUTHBOUND_LANE_X), px(BIKE_START_Y + 0.05), 2.0),
            ));

            // Congestion HUD
            parent.spawn((
                Text2d::new("Congestion"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(px(-0.85), px(0.92), 3.0),
            ));
            parent.spawn((
                CongestionBar,
                Sprite {
                    color: Color::srgb(1.0, 0.0, 0.0),
                    custom_size: Some(Vec2::new(px(BAR_MAX_WIDTH), px(0.02))),
                    ..default()
                },
                Transform::from_xyz(px(BAR_LEFT), px(BAR_Y), 3.0).with_scale(Vec3::new(
                    0.0, 1.0, 1.0,
                )),
            ));
            parent.spawn((
                FeedbackText,
                Text2d::new("Feedback: Excellent"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(px(-0.2), px(0.92), 3.0),
            ));
        });
}

fn spawn_rect(
    parent: &mut ChildSpawnerCommands,
    center: (f32, f32),
    size: (f32, f32),
    color: Color,
    z: f32,
) {
    parent.spawn((
        Sprite {
            color,
            custom_size: Some(Vec2::new(px(size.0), px(size.1))),
            ..default()
        },
        Transform::from_xyz(px(center.0), px(center.1), z),
    ));
}
