//! Input handling systems
//!
//! Maps keyboard input to operator commands and applies them to the
//! simulation between ticks. Unrecognized keys are ignored.

use bevy::prelude::*;

use super::components::SimWorldResource;
use crate::simulation::{Axis, Command, CommandResult, SignalPhase};

/// Key bindings: S start, E/Esc exit, 1/2/3 horizontal phase overrides,
/// G/H/J vertical phase overrides, D/N day/night.
const KEY_BINDINGS: [(KeyCode, Command); 11] = [
    (KeyCode::KeyS, Command::StartSimulation),
    (KeyCode::KeyE, Command::Exit),
    (KeyCode::Escape, Command::Exit),
    (
        KeyCode::Digit1,
        Command::ForcePhase(Axis::Horizontal, SignalPhase::Green),
    ),
    (
        KeyCode::Digit2,
        Command::ForcePhase(Axis::Horizontal, SignalPhase::Yellow),
    ),
    (
        KeyCode::Digit3,
        Command::ForcePhase(Axis::Horizontal, SignalPhase::Red),
    ),
    (
        KeyCode::KeyG,
        Command::ForcePhase(Axis::Vertical, SignalPhase::Green),
    ),
    (
        KeyCode::KeyH,
        Command::ForcePhase(Axis::Vertical, SignalPhase::Yellow),
    ),
    (
        KeyCode::KeyJ,
        Command::ForcePhase(Axis::Vertical, SignalPhase::Red),
    ),
    (KeyCode::KeyD, Command::SetDayNight(true)),
    (KeyCode::KeyN, Command::SetDayNight(false)),
];

/// Handle keyboard input and apply the resulting commands.
pub fn handle_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    for (key, command) in KEY_BINDINGS {
        if keyboard.just_pressed(key) && sim_world.0.apply(command) == CommandResult::Exit {
            exit.write(AppExit::Success);
        }
    }
}
