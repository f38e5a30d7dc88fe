//! Systems for ticking the simulation and syncing visuals from its state
//!
//! All sync systems read the published snapshot and never mutate core state.

use bevy::prelude::*;

use super::components::{
    CongestionBar, CountdownText, FeedbackText, MenuRoot, SignalLamp, SimulationRoot,
    SimWorldResource, VehicleSprite,
};
use super::px;
use super::world::{BAR_LEFT, BAR_MAX_WIDTH, BAR_Y};
use crate::simulation::{
    Axis, LaneId, SignalAxisState, SignalPhase, SimulationMode, Snapshot, CONGESTION_MAX,
};

const DAY_CLEAR: Color = Color::srgb(0.8, 0.9, 0.6);
const NIGHT_CLEAR: Color = Color::srgb(0.05, 0.05, 0.6);

fn axis_state(snapshot: &Snapshot, axis: Axis) -> SignalAxisState {
    match axis {
        Axis::Horizontal => snapshot.horizontal,
        Axis::Vertical => snapshot.vertical,
    }
}

/// System to run the simulation tick on the fixed schedule.
pub fn tick_simulation(time: Res<Time>, mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick(time.delta_secs());
}

/// System to move vehicle sprites along their travel axis.
pub fn sync_vehicles(
    sim_world: Res<SimWorldResource>,
    mut vehicle_query: Query<(&VehicleSprite, &mut Transform)>,
) {
    let snapshot = sim_world.0.snapshot();

    for (sprite, mut transform) in vehicle_query.iter_mut() {
        let Some(vehicle) = snapshot.vehicles.iter().find(|v| v.kind == sprite.kind) else {
            continue;
        };
        let center = px(vehicle.position + sprite.center_offset);
        match vehicle.lane {
            LaneId::Eastbound => transform.translation.x = center,
            LaneId::Southbound => transform.translation.y = center,
        }
    }
}

/// System to light the active lamp in each signal head.
pub fn sync_signal_lamps(
    sim_world: Res<SimWorldResource>,
    lamp_query: Query<(&SignalLamp, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let snapshot = sim_world.0.snapshot();

    for (lamp, material_handle) in lamp_query.iter() {
        let lit = axis_state(&snapshot, lamp.axis).phase == lamp.phase;
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = lamp_color(lamp.phase, lit);
        }
    }
}

fn lamp_color(phase: SignalPhase, lit: bool) -> Color {
    match (phase, lit) {
        (SignalPhase::Red, true) => Color::srgb(1.0, 0.0, 0.0),
        (SignalPhase::Red, false) => Color::srgb(0.2, 0.0, 0.0),
        (SignalPhase::Yellow, true) => Color::srgb(1.0, 1.0, 0.0),
        (SignalPhase::Yellow, false) => Color::srgb(0.3, 0.3, 0.0),
        (SignalPhase::Green, true) => Color::srgb(0.0, 1.0, 0.0),
        (SignalPhase::Green, false) => Color::srgb(0.0, 0.2, 0.0),
    }
}

/// System to update the countdown text above each signal head.
pub fn sync_countdown_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&CountdownText, &mut Text2d)>,
) {
    let snapshot = sim_world.0.snapshot();

    for (countdown, mut text) in text_query.iter_mut() {
        text.0 = axis_state(&snapshot, countdown.0).countdown.to_string();
    }
}

/// System to update the congestion bar and feedback label.
pub fn sync_hud(
    sim_world: Res<SimWorldResource>,
    mut bar_query: Query<&mut Transform, With<CongestionBar>>,
    mut feedback_query: Query<&mut Text2d, With<FeedbackText>>,
) {
    let snapshot = sim_world.0.snapshot();
    let fraction = snapshot.congestion_level as f32 / CONGESTION_MAX as f32;

    if let Ok(mut transform) = bar_query.single_mut() {
        // Scale from the left edge: grow the bar and re-center it
        transform.scale.x = fraction;
        transform.translation.x = px(BAR_LEFT) + fraction * px(BAR_MAX_WIDTH) / 2.0;
        transform.translation.y = px(BAR_Y);
    }

    if let Ok(mut text) = feedback_query.single_mut() {
        text.0 = format!("Feedback: {}", snapshot.feedback.label());
    }
}

/// System to switch the clear color between day and night.
pub fn sync_environment(sim_world: Res<SimWorldResource>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = if sim_world.0.snapshot().is_day {
        DAY_CLEAR
    } else {
        NIGHT_CLEAR
    };
}

/// System to swap between the menu overlay and the intersection scene.
pub fn sync_mode_visibility(
    sim_world: Res<SimWorldResource>,
    mut menu_query: Query<&mut Visibility, (With<MenuRoot>, Without<SimulationRoot>)>,
    mut scene_query: Query<&mut Visibility, (With<SimulationRoot>, Without<MenuRoot>)>,
) {
    let running = sim_world.0.snapshot().mode == SimulationMode::Running;

    for mut visibility in menu_query.iter_mut() {
        *visibility = if running {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
    for mut visibility in scene_query.iter_mut() {
        *visibility = if running {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
