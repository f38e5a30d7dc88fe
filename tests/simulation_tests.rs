//! Core simulation behavior tests
//!
//! Exercises the signal phase machine, vehicle motion rules, congestion
//! scoring and the world tick/command plumbing through the library API.

use smart_traffic_sim::simulation::{
    Axis, Command, CommandResult, CongestionEstimator, Feedback, SignalController, SignalPhase,
    SimWorld, SimulationMode, VehicleKind, VehicleModel, CAR_START_X, CAR_STOP_X, CONGESTION_MAX,
    RANGE_MIN, SAFE_FOLLOWING_DISTANCE,
};

/// One frame of the 60 Hz driving loop, in seconds
const FRAME: f32 = 1.0 / 60.0;

fn run_frames(world: &mut SimWorld, frames: u32) {
    for _ in 0..frames {
        world.tick(FRAME);
    }
}

// --- Signal phase machine ---

#[test]
fn test_signal_initial_state() {
    let signals = SignalController::new();

    let horizontal = signals.axis(Axis::Horizontal);
    assert_eq!(horizontal.phase, SignalPhase::Green);
    assert_eq!(horizontal.countdown, 10);

    let vertical = signals.axis(Axis::Vertical);
    assert_eq!(vertical.phase, SignalPhase::Red);
    assert_eq!(vertical.countdown, 10);
}

#[test]
fn test_horizontal_cycle_never_skips_a_phase() {
    let mut signals = SignalController::new();
    let mut visited = vec![signals.phase(Axis::Horizontal)];

    for _ in 0..45 {
        signals.update(1.0);
        let state = signals.axis(Axis::Horizontal);
        if state.phase != *visited.last().unwrap() {
            // A fresh phase starts with its full canonical duration
            assert_eq!(state.countdown, state.phase.duration_secs());
            visited.push(state.phase);
        }
    }

    assert_eq!(
        visited,
        vec![
            SignalPhase::Green,
            SignalPhase::Yellow,
            SignalPhase::Red,
            SignalPhase::Green,
            SignalPhase::Yellow,
            SignalPhase::Red,
        ]
    );
}

#[test]
fn test_vertical_cycle_never_skips_a_phase() {
    let mut signals = SignalController::new();
    let mut visited = vec![signals.phase(Axis::Vertical)];

    for _ in 0..45 {
        signals.update(1.0);
        let state = signals.axis(Axis::Vertical);
        if state.phase != *visited.last().unwrap() {
            assert_eq!(state.countdown, state.phase.duration_secs());
            visited.push(state.phase);
        }
    }

    assert_eq!(
        visited,
        vec![
            SignalPhase::Red,
            SignalPhase::Green,
            SignalPhase::Yellow,
            SignalPhase::Red,
            SignalPhase::Green,
            SignalPhase::Yellow,
        ]
    );
}

#[test]
fn test_countdown_always_positive() {
    let mut signals = SignalController::new();
    for _ in 0..100 {
        signals.update(1.0);
        assert!(signals.axis(Axis::Horizontal).countdown > 0);
        assert!(signals.axis(Axis::Vertical).countdown > 0);
    }
}

#[test]
fn test_both_phases_expire_at_same_boundary() {
    // Horizontal Green and vertical Red both run 10s from the start, so
    // they roll over on the same one-second step.
    let mut signals = SignalController::new();
    for _ in 0..10 {
        signals.update(1.0);
    }

    let horizontal = signals.axis(Axis::Horizontal);
    assert_eq!(horizontal.phase, SignalPhase::Yellow);
    assert_eq!(horizontal.countdown, 3);

    let vertical = signals.axis(Axis::Vertical);
    assert_eq!(vertical.phase, SignalPhase::Green);
    assert_eq!(vertical.countdown, 10);
}

#[test]
fn test_force_phase_overrides_one_axis_only() {
    let mut signals = SignalController::new();
    for _ in 0..4 {
        signals.update(1.0);
    }

    signals.force_phase(Axis::Horizontal, SignalPhase::Red);

    let horizontal = signals.axis(Axis::Horizontal);
    assert_eq!(horizontal.phase, SignalPhase::Red);
    assert_eq!(horizontal.countdown, 10);

    // Vertical keeps counting down its own phase undisturbed
    let vertical = signals.axis(Axis::Vertical);
    assert_eq!(vertical.phase, SignalPhase::Red);
    assert_eq!(vertical.countdown, 6);
}

#[test]
fn test_axes_are_not_mutually_exclusive() {
    // The two axes cycle independently; nothing stops both showing Green.
    let mut signals = SignalController::new();
    signals.force_phase(Axis::Vertical, SignalPhase::Green);

    assert_eq!(signals.phase(Axis::Horizontal), SignalPhase::Green);
    assert_eq!(signals.phase(Axis::Vertical), SignalPhase::Green);
}

#[test]
fn test_sub_second_updates_accumulate() {
    let mut signals = SignalController::new();

    signals.update(0.5);
    assert_eq!(signals.axis(Axis::Horizontal).countdown, 10);

    signals.update(0.5);
    assert_eq!(signals.axis(Axis::Horizontal).countdown, 9);

    signals.update(2.0);
    assert_eq!(signals.axis(Axis::Horizontal).countdown, 7);
}

// --- Vehicle motion ---

#[test]
fn test_car_holds_at_stop_line_on_red() {
    let mut signals = SignalController::new();
    signals.force_phase(Axis::Horizontal, SignalPhase::Red);

    let mut model = VehicleModel::new();
    for _ in 0..300 {
        model.update(FRAME, &signals);
        let car = model.get(VehicleKind::Car).unwrap();
        // Never more than one frame step past the line while held
        assert!(car.front_edge() <= CAR_STOP_X + 0.006);
    }

    let car = model.get(VehicleKind::Car).unwrap();
    assert!(car.front_edge() >= CAR_STOP_X);
    assert!(car.is_stopped_at_signal(&signals));
}

#[test]
fn test_car_crosses_stop_line_on_green() {
    let signals = SignalController::new();

    let mut model = VehicleModel::new();
    for _ in 0..60 {
        model.update(FRAME, &signals);
    }

    // One second at 0.30/s from -0.8; the line at -0.65 never gates it
    let car = model.get(VehicleKind::Car).unwrap();
    assert!(car.position() > -0.52 && car.position() < -0.48);
}

#[test]
fn test_vehicle_never_advances_within_safe_distance() {
    let signals = SignalController::new();
    let mut model = VehicleModel::new();

    // Put the car right behind the bus, both well past their stop lines
    model.get_mut(VehicleKind::Car).unwrap().progress = 0.0;
    model.get_mut(VehicleKind::Bus).unwrap().progress = 0.1;

    for _ in 0..120 {
        let car_before = model.get(VehicleKind::Car).unwrap().progress;
        let gap = model.get(VehicleKind::Bus).unwrap().progress - car_before;

        model.update(FRAME, &signals);

        let car_after = model.get(VehicleKind::Car).unwrap().progress;
        if gap > 0.0 && gap < SAFE_FOLLOWING_DISTANCE {
            assert_eq!(car_after, car_before, "car advanced into the bus");
        }
    }

    // The bus pulls away until the gap opens up to the safe distance
    let gap = model.get(VehicleKind::Bus).unwrap().progress
        - model.get(VehicleKind::Car).unwrap().progress;
    assert!(gap >= SAFE_FOLLOWING_DISTANCE - 0.01);
}

#[test]
fn test_car_wraps_to_opposite_edge() {
    let signals = SignalController::new();
    let mut model = VehicleModel::new();
    model.get_mut(VehicleKind::Car).unwrap().progress = 0.999;

    model.update(FRAME, &signals);
    assert_eq!(model.get(VehicleKind::Car).unwrap().position(), RANGE_MIN);

    // Normal motion resumes from the near edge
    model.update(FRAME, &signals);
    assert!(model.get(VehicleKind::Car).unwrap().position() > RANGE_MIN);
}

#[test]
fn test_bike_wraps_bottom_to_top() {
    let mut signals = SignalController::new();
    signals.force_phase(Axis::Vertical, SignalPhase::Green);

    let mut model = VehicleModel::new();
    model.get_mut(VehicleKind::Bike).unwrap().progress = 0.999;

    model.update(FRAME, &signals);
    assert_eq!(model.get(VehicleKind::Bike).unwrap().position(), 1.0);
}

#[test]
fn test_bike_holds_before_stop_line_on_red() {
    // Vertical starts Red; without signal updates it stays Red
    let signals = SignalController::new();

    let mut model = VehicleModel::new();
    for _ in 0..120 {
        model.update(FRAME, &signals);
    }

    let held_at = model.get(VehicleKind::Bike).unwrap().position();
    assert!(held_at > 0.14 && held_at <= 0.151);

    // Still held on later frames
    for _ in 0..60 {
        model.update(FRAME, &signals);
    }
    assert_eq!(model.get(VehicleKind::Bike).unwrap().position(), held_at);
}

#[test]
fn test_bike_proceeds_on_green() {
    let mut signals = SignalController::new();
    signals.force_phase(Axis::Vertical, SignalPhase::Green);

    let mut model = VehicleModel::new();
    for _ in 0..120 {
        model.update(FRAME, &signals);
    }

    assert!(model.get(VehicleKind::Bike).unwrap().position() < -0.3);
}

#[test]
fn test_stopped_vehicle_count() {
    let mut signals = SignalController::new();
    signals.force_phase(Axis::Horizontal, SignalPhase::Red);

    let mut model = VehicleModel::new();
    // Park the car with its front edge exactly on the stop line
    model.get_mut(VehicleKind::Car).unwrap().progress = CAR_STOP_X - 0.1;

    assert_eq!(model.stopped_at_signal_count(&signals), 1);

    signals.force_phase(Axis::Horizontal, SignalPhase::Green);
    assert_eq!(model.stopped_at_signal_count(&signals), 0);
}

// --- Congestion scoring ---

#[test]
fn test_feedback_thresholds() {
    assert_eq!(Feedback::from_level(0), Feedback::Excellent);
    assert_eq!(Feedback::from_level(49), Feedback::Excellent);
    assert_eq!(Feedback::from_level(50), Feedback::Moderate);
    assert_eq!(Feedback::from_level(119), Feedback::Moderate);
    assert_eq!(Feedback::from_level(120), Feedback::NeedsImprovement);
    assert_eq!(Feedback::from_level(200), Feedback::NeedsImprovement);
}

#[test]
fn test_congestion_grows_per_stopped_vehicle() {
    let mut congestion = CongestionEstimator::new();
    congestion.update(2);
    assert_eq!(congestion.level(), 4);
    congestion.update(3);
    assert_eq!(congestion.level(), 10);
}

#[test]
fn test_congestion_clamps_at_maximum() {
    let mut congestion = CongestionEstimator::new();
    for _ in 0..200 {
        congestion.update(3);
        assert!(congestion.level() <= CONGESTION_MAX);
    }
    assert_eq!(congestion.level(), CONGESTION_MAX);
}

#[test]
fn test_congestion_decays_to_zero_and_stays() {
    let mut congestion = CongestionEstimator::new();
    for _ in 0..5 {
        congestion.update(1);
    }
    assert_eq!(congestion.level(), 10);

    // Decays by exactly one per tick until it bottoms out at zero
    for expected in (0..10).rev() {
        congestion.update(0);
        assert_eq!(congestion.level(), expected);
    }
    for _ in 0..40 {
        congestion.update(0);
        assert_eq!(congestion.level(), 0);
    }
}

// --- World tick and commands ---

#[test]
fn test_tick_is_noop_at_menu() {
    let mut world = SimWorld::new();
    run_frames(&mut world, 30);

    assert_eq!(world.mode, SimulationMode::Menu);
    assert_eq!(world.time, 0.0);
    assert_eq!(
        world.vehicles.get(VehicleKind::Car).unwrap().position(),
        CAR_START_X
    );
    assert_eq!(world.congestion.level(), 0);
}

#[test]
fn test_start_command_begins_simulation() {
    let mut world = SimWorld::new();
    assert_eq!(world.apply(Command::StartSimulation), CommandResult::Continue);
    assert_eq!(world.mode, SimulationMode::Running);

    run_frames(&mut world, 30);
    assert!(world.time > 0.0);
    assert!(world.vehicles.get(VehicleKind::Car).unwrap().position() > CAR_START_X);
}

#[test]
fn test_menu_ignores_simulation_commands() {
    let mut world = SimWorld::new();

    assert_eq!(
        world.apply(Command::ForcePhase(Axis::Horizontal, SignalPhase::Red)),
        CommandResult::Continue
    );
    assert_eq!(world.signals.phase(Axis::Horizontal), SignalPhase::Green);

    world.apply(Command::SetDayNight(false));
    assert!(world.is_day);
}

#[test]
fn test_exit_command() {
    let mut world = SimWorld::new();
    assert_eq!(world.apply(Command::Exit), CommandResult::Exit);

    world.apply(Command::StartSimulation);
    assert_eq!(world.apply(Command::Exit), CommandResult::Exit);
}

#[test]
fn test_force_phase_and_day_night_while_running() {
    let mut world = SimWorld::new();
    world.apply(Command::StartSimulation);

    world.apply(Command::ForcePhase(Axis::Vertical, SignalPhase::Yellow));
    let vertical = world.signals.axis(Axis::Vertical);
    assert_eq!(vertical.phase, SignalPhase::Yellow);
    assert_eq!(vertical.countdown, 3);

    world.apply(Command::SetDayNight(false));
    assert!(!world.is_day);
}

#[test]
fn test_signal_scenario_after_ten_seconds_of_frames() {
    let mut world = SimWorld::new();
    world.apply(Command::StartSimulation);

    // A touch over ten simulated seconds of 60 Hz frames; countdowns stay
    // positive on every frame along the way
    for _ in 0..610 {
        world.tick(FRAME);
        assert!(world.signals.axis(Axis::Horizontal).countdown > 0);
        assert!(world.signals.axis(Axis::Vertical).countdown > 0);
    }

    let horizontal = world.signals.axis(Axis::Horizontal);
    assert_eq!(horizontal.phase, SignalPhase::Yellow);
    assert_eq!(horizontal.countdown, 3);
    assert_eq!(world.signals.phase(Axis::Vertical), SignalPhase::Green);
}

#[test]
fn test_congestion_builds_while_car_held_at_red() {
    let mut world = SimWorld::new();
    world.apply(Command::StartSimulation);
    world.apply(Command::ForcePhase(Axis::Horizontal, SignalPhase::Red));

    // The car reaches its stop line within a second and then accrues
    // congestion on every frame of the 10s red phase
    run_frames(&mut world, 300);

    assert_eq!(world.congestion.level(), CONGESTION_MAX);
    assert_eq!(world.congestion.feedback(), Feedback::NeedsImprovement);
}

#[test]
fn test_snapshot_reflects_published_state() {
    let mut world = SimWorld::new();
    world.apply(Command::StartSimulation);
    world.apply(Command::SetDayNight(false));
    world.apply(Command::ForcePhase(Axis::Vertical, SignalPhase::Green));
    run_frames(&mut world, 10);

    let snapshot = world.snapshot();
    assert_eq!(snapshot.mode, SimulationMode::Running);
    assert!(!snapshot.is_day);
    assert_eq!(snapshot.vertical.phase, SignalPhase::Green);
    assert_eq!(snapshot.congestion_level, world.congestion.level());
    assert_eq!(snapshot.vehicles.len(), 3);

    let car = snapshot
        .vehicles
        .iter()
        .find(|v| v.kind == VehicleKind::Car)
        .unwrap();
    assert_eq!(
        car.position,
        world.vehicles.get(VehicleKind::Car).unwrap().position()
    );
}
