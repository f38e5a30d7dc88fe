//! UI components and resources linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{Axis, SignalPhase, SimWorld, VehicleKind};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl Default for SimWorldResource {
    fn default() -> Self {
        Self(SimWorld::new())
    }
}

/// Links a sprite to a simulation vehicle
#[derive(Component)]
pub struct VehicleSprite {
    pub kind: VehicleKind,
    /// Offset from the simulation position to the sprite center, in
    /// simulation units along the travel axis.
    pub center_offset: f32,
}

/// One lamp in a signal head
#[derive(Component)]
pub struct SignalLamp {
    pub axis: Axis,
    /// The phase this lamp lights up for
    pub phase: SignalPhase,
}

/// Countdown text above a signal head
#[derive(Component)]
pub struct CountdownText(pub Axis);

/// Congestion bar in the HUD, scaled with the current level
#[derive(Component)]
pub struct CongestionBar;

/// Feedback label in the HUD
#[derive(Component)]
pub struct FeedbackText;

/// Root of the start-menu overlay
#[derive(Component)]
pub struct MenuRoot;

/// Root of the intersection scene and HUD, hidden while at the menu
#[derive(Component)]
pub struct SimulationRoot;
