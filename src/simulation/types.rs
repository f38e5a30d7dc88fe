//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

/// One of the two signal-controlled traffic directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The left-to-right road (car and bus).
    Horizontal,
    /// The top-to-bottom road (bike).
    Vertical,
}

/// Lamp state for one signal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPhase {
    Green,
    Yellow,
    Red,
}

impl SignalPhase {
    /// Canonical duration of this phase in whole seconds.
    pub fn duration_secs(self) -> u32 {
        match self {
            SignalPhase::Green => GREEN_DURATION_SECS,
            SignalPhase::Yellow => YELLOW_DURATION_SECS,
            SignalPhase::Red => RED_DURATION_SECS,
        }
    }

    /// The phase that follows this one in the signal cycle.
    ///
    /// Both axes run the same Green -> Yellow -> Red -> Green cycle; they
    /// differ only in their starting phase (horizontal starts Green,
    /// vertical starts Red), which keeps them offset from each other.
    pub fn successor(self) -> SignalPhase {
        match self {
            SignalPhase::Green => SignalPhase::Yellow,
            SignalPhase::Yellow => SignalPhase::Red,
            SignalPhase::Red => SignalPhase::Green,
        }
    }
}

/// Signal phase durations in seconds
pub const GREEN_DURATION_SECS: u32 = 10;
pub const YELLOW_DURATION_SECS: u32 = 3;
pub const RED_DURATION_SECS: u32 = 10;

/// Type of vehicle in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Bus,
    Bike,
}

/// A lane shared by vehicles travelling the same direction.
///
/// The following-distance rule only applies between vehicles in the same
/// lane; the eastbound lane holds the car and the bus, the southbound lane
/// holds only the bike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneId {
    Eastbound,
    Southbound,
}

impl LaneId {
    /// The signal axis that governs vehicles in this lane.
    pub fn axis(self) -> Axis {
        match self {
            LaneId::Eastbound => Axis::Horizontal,
            LaneId::Southbound => Axis::Vertical,
        }
    }
}

/// Whether the simulation is gated at the start menu or running.
///
/// Starts at `Menu`, transitions to `Running` on `Command::StartSimulation`
/// and never reverts (there is no pause).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    Menu,
    Running,
}

/// A discrete operator command, delivered to the world between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Leave the menu and start the simulation.
    StartSimulation,
    /// Terminate the driving loop.
    Exit,
    /// Override one axis to the given phase with its canonical duration.
    ForcePhase(Axis, SignalPhase),
    /// Switch between day and night rendering.
    SetDayNight(bool),
}

/// Result of applying a command to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Keep driving the simulation.
    Continue,
    /// The operator requested termination.
    Exit,
}

/// Visible coordinate range along either travel axis; vehicles wrap from one
/// extreme to the other.
pub const RANGE_MIN: f32 = -1.0;
pub const RANGE_MAX: f32 = 1.0;

/// Minimum gap a vehicle keeps behind the nearest leader in its lane.
pub const SAFE_FOLLOWING_DISTANCE: f32 = 0.18;

/// Half-width of the stop-line window used when sampling stopped vehicles
/// for congestion.
pub const STOP_LINE_TOLERANCE: f32 = 0.01;
