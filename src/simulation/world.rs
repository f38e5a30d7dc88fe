//! Main simulation world that ties everything together
//!
//! This is the explicit context object owning all signal, vehicle and
//! congestion state, driven by a fixed-rate tick. It runs without any Bevy
//! dependencies so the whole core can be exercised headless.

use log::info;

use super::congestion::{CongestionEstimator, Feedback};
use super::signal::{SignalAxisState, SignalController};
use super::types::{Axis, Command, CommandResult, LaneId, SimulationMode, VehicleKind};
use super::vehicle::VehicleModel;

/// Position of one vehicle as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct VehicleSnapshot {
    pub kind: VehicleKind,
    pub lane: LaneId,
    /// Raw coordinate along the travel axis (x eastbound, y southbound).
    pub position: f32,
}

/// Immutable copy of the published simulation state, consumed by the
/// renderer between ticks. Produces no feedback into the core.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub horizontal: SignalAxisState,
    pub vertical: SignalAxisState,
    pub vehicles: Vec<VehicleSnapshot>,
    pub congestion_level: i32,
    pub feedback: Feedback,
    pub is_day: bool,
    pub mode: SimulationMode,
}

/// The main simulation world
pub struct SimWorld {
    /// Signal phases and countdowns for both axes
    pub signals: SignalController,

    /// The three vehicles and their motion rules
    pub vehicles: VehicleModel,

    /// Accumulated congestion score
    pub congestion: CongestionEstimator,

    /// Menu gate; ticks are a no-op until the simulation is started
    pub mode: SimulationMode,

    /// Day/night flag, consumed only by the renderer
    pub is_day: bool,

    /// Simulated time in seconds
    pub time: f32,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    pub fn new() -> Self {
        Self {
            signals: SignalController::new(),
            vehicles: VehicleModel::new(),
            congestion: CongestionEstimator::new(),
            mode: SimulationMode::Menu,
            is_day: true,
            time: 0.0,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Order is fixed and significant: vehicles move against the committed
    /// signal state, the signals take their 1 Hz step, then congestion
    /// samples this frame's positions and phases.
    pub fn tick(&mut self, delta_secs: f32) {
        if self.mode != SimulationMode::Running {
            return;
        }

        self.time += delta_secs;

        self.vehicles.update(delta_secs, &self.signals);
        self.signals.update(delta_secs);

        let stopped = self.vehicles.stopped_at_signal_count(&self.signals);
        self.congestion.update(stopped);
    }

    /// Apply an operator command between ticks.
    ///
    /// At the menu only start and exit are honored; any other command is
    /// silently ignored, as is a redundant start while running. No error is
    /// ever surfaced for an inapplicable command.
    pub fn apply(&mut self, command: Command) -> CommandResult {
        match (self.mode, command) {
            (_, Command::Exit) => return CommandResult::Exit,
            (SimulationMode::Menu, Command::StartSimulation) => {
                self.mode = SimulationMode::Running;
                info!("simulation started");
            }
            (SimulationMode::Menu, _) => {}
            (SimulationMode::Running, Command::ForcePhase(axis, phase)) => {
                self.signals.force_phase(axis, phase);
            }
            (SimulationMode::Running, Command::SetDayNight(is_day)) => {
                self.is_day = is_day;
            }
            (SimulationMode::Running, Command::StartSimulation) => {}
        }
        CommandResult::Continue
    }

    /// Publish the current state for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            horizontal: self.signals.axis(Axis::Horizontal),
            vertical: self.signals.axis(Axis::Vertical),
            vehicles: self
                .vehicles
                .vehicles
                .iter()
                .map(|v| VehicleSnapshot {
                    kind: v.kind,
                    lane: v.lane,
                    position: v.position(),
                })
                .collect(),
            congestion_level: self.congestion.level(),
            feedback: self.congestion.feedback(),
            is_day: self.is_day,
            mode: self.mode,
        }
    }

    /// Log a one-line state summary, used by the headless driver.
    pub fn log_summary(&self) {
        let horizontal = self.signals.axis(Axis::Horizontal);
        let vertical = self.signals.axis(Axis::Vertical);
        let stopped = self.vehicles.stopped_at_signal_count(&self.signals);

        let mut positions = String::new();
        for vehicle in &self.vehicles.vehicles {
            positions.push_str(&format!(" {:?}={:.3}", vehicle.kind, vehicle.position()));
        }

        info!(
            "t={:.1}s | H {:?} {}s | V {:?} {}s |{} | stopped: {} | congestion: {} ({})",
            self.time,
            horizontal.phase,
            horizontal.countdown,
            vertical.phase,
            vertical.countdown,
            positions,
            stopped,
            self.congestion.level(),
            self.congestion.feedback().label()
        );
    }
}
