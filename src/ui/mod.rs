//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization and input - all simulation logic
//! is in the `simulation` module. The UI ticks the core on Bevy's fixed
//! schedule, reads snapshots, and renders them as a 2D scene.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use input::handle_keyboard;
use sync::{
    sync_countdown_text, sync_environment, sync_hud, sync_mode_visibility, sync_signal_lamps,
    sync_vehicles, tick_simulation,
};
use world::{setup_camera, setup_menu, setup_scene};

/// Frame cadence of the driving loop
const TICK_RATE_HZ: f64 = 60.0;

/// Pixels per simulation unit; the visible range [-1, 1] maps to 700 px.
const WORLD_SCALE: f32 = 350.0;

/// Convert a simulation-space coordinate or length to pixels.
fn px(value: f32) -> f32 {
    value * WORLD_SCALE
}

/// Plugin to register all UI systems
pub struct SmartTrafficUiPlugin;

impl Plugin for SmartTrafficUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .insert_resource(ClearColor(Color::srgb(0.8, 0.9, 0.6)))
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_systems(Startup, (setup_camera, setup_menu, setup_scene))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_keyboard,
                    sync_mode_visibility,
                    sync_vehicles,
                    sync_signal_lamps,
                    sync_countdown_text,
                    sync_hud,
                    sync_environment,
                ),
            );
    }
}
