//! Vehicle motion rules for the intersection simulation
//!
//! Standalone implementation that doesn't depend on Bevy.
//!
//! Positions are tracked in "progress space": a scalar that increases in the
//! vehicle's direction of travel. For the eastbound lane progress equals the
//! x coordinate; for the southbound lane it is the negated y coordinate.
//! This lets the stop-line, following-distance and wrap rules share one code
//! path for all lanes.

use ordered_float::OrderedFloat;

use super::signal::SignalController;
use super::types::{
    LaneId, SignalPhase, VehicleKind, RANGE_MAX, RANGE_MIN, SAFE_FOLLOWING_DISTANCE,
    STOP_LINE_TOLERANCE,
};

/// Per-second speeds, equivalent to the per-frame increments of a 60 Hz loop
pub const CAR_SPEED: f32 = 0.30;
pub const BUS_SPEED: f32 = 0.24;
pub const BIKE_SPEED: f32 = 0.36;

/// Starting coordinates along each vehicle's travel axis
pub const CAR_START_X: f32 = -0.8;
pub const BUS_START_X: f32 = 0.2;
pub const BIKE_START_Y: f32 = 0.3;

/// Stop-line coordinates along each vehicle's travel axis
pub const CAR_STOP_X: f32 = -0.65;
pub const BUS_STOP_X: f32 = -0.5;
pub const BIKE_STOP_Y: f32 = 0.0;

/// A vehicle on one of the two roads.
///
/// Vehicles are process-lifetime entities: created once at a fixed starting
/// offset and never destroyed. Leaving the visible range wraps the position
/// back to the opposite extreme.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub lane: LaneId,
    /// Coordinate in progress space (see module docs).
    pub progress: f32,
    /// Distance covered per second of simulated time.
    pub speed: f32,
    /// Offset from `progress` to the vehicle's front edge.
    pub front_offset: f32,
    /// Stop line in progress space.
    pub stop_line: f32,
    /// Front-edge offsets relative to the stop line, `[start, end)`, within
    /// which a non-green signal holds this vehicle. Strictly before or past
    /// the window the vehicle always advances.
    pub approach_window: (f32, f32),
}

impl Vehicle {
    fn car() -> Self {
        Self {
            kind: VehicleKind::Car,
            lane: LaneId::Eastbound,
            progress: CAR_START_X,
            speed: CAR_SPEED,
            front_offset: 0.1,
            stop_line: CAR_STOP_X,
            approach_window: (0.0, 0.1),
        }
    }

    fn bus() -> Self {
        Self {
            kind: VehicleKind::Bus,
            lane: LaneId::Eastbound,
            progress: BUS_START_X,
            speed: BUS_SPEED,
            front_offset: 0.25,
            stop_line: BUS_STOP_X,
            approach_window: (0.0, 0.02),
        }
    }

    fn bike() -> Self {
        // The bike travels top-to-bottom, so its progress is the negated y
        // coordinate and its hold point sits before the stop line itself.
        Self {
            kind: VehicleKind::Bike,
            lane: LaneId::Southbound,
            progress: -BIKE_START_Y,
            speed: BIKE_SPEED,
            front_offset: 0.0,
            stop_line: -BIKE_STOP_Y,
            approach_window: (-0.15, 0.0),
        }
    }

    /// Front edge in progress space.
    pub fn front_edge(&self) -> f32 {
        self.progress + self.front_offset
    }

    /// Raw coordinate along the travel axis: x for eastbound vehicles, y for
    /// the southbound bike.
    pub fn position(&self) -> f32 {
        match self.lane {
            LaneId::Eastbound => self.progress,
            LaneId::Southbound => -self.progress,
        }
    }

    /// Whether a non-green signal on this vehicle's axis currently holds it.
    fn held_by_signal(&self, signals: &SignalController) -> bool {
        let offset = self.front_edge() - self.stop_line;
        offset >= self.approach_window.0
            && offset < self.approach_window.1
            && signals.phase(self.lane.axis()) != SignalPhase::Green
    }

    /// Whether this vehicle counts as stopped at a red/yellow signal for
    /// congestion sampling: axis not Green and front edge within the
    /// stop-line tolerance window.
    pub fn is_stopped_at_signal(&self, signals: &SignalController) -> bool {
        signals.phase(self.lane.axis()) != SignalPhase::Green
            && (self.front_edge() - self.stop_line).abs() <= STOP_LINE_TOLERANCE
    }
}

/// Owns the three vehicles and advances them once per frame.
pub struct VehicleModel {
    pub vehicles: Vec<Vehicle>,
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleModel {
    pub fn new() -> Self {
        Self {
            vehicles: vec![Vehicle::car(), Vehicle::bus(), Vehicle::bike()],
        }
    }

    /// Look up a vehicle by kind.
    pub fn get(&self, kind: VehicleKind) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.kind == kind)
    }

    /// Mutable lookup by kind.
    pub fn get_mut(&mut self, kind: VehicleKind) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.kind == kind)
    }

    /// Gap to the nearest vehicle strictly ahead in the same lane, if any.
    ///
    /// The leader relation is directional and recomputed from current
    /// positions every frame; it can flip as vehicles wrap around.
    fn leader_gap(&self, index: usize) -> Option<f32> {
        let vehicle = &self.vehicles[index];
        self.vehicles
            .iter()
            .enumerate()
            .filter(|(i, other)| {
                *i != index && other.lane == vehicle.lane && other.progress > vehicle.progress
            })
            .map(|(_, other)| OrderedFloat(other.progress - vehicle.progress))
            .min()
            .map(OrderedFloat::into_inner)
    }

    /// Advance all vehicles by one frame.
    ///
    /// A vehicle holds still when the nearest leader in its lane is closer
    /// than the safe following distance, or when a non-green signal gates it
    /// at its stop line; otherwise it advances by `speed * delta_secs` and
    /// wraps past the far edge of the visible range.
    pub fn update(&mut self, delta_secs: f32, signals: &SignalController) {
        for index in 0..self.vehicles.len() {
            let following_blocked =
                matches!(self.leader_gap(index), Some(gap) if gap < SAFE_FOLLOWING_DISTANCE);

            let vehicle = &mut self.vehicles[index];
            if following_blocked || vehicle.held_by_signal(signals) {
                continue;
            }

            vehicle.progress += vehicle.speed * delta_secs;
            if vehicle.progress > RANGE_MAX {
                vehicle.progress = RANGE_MIN;
            }
        }
    }

    /// Number of vehicles currently stopped at a red/yellow signal.
    pub fn stopped_at_signal_count(&self, signals: &SignalController) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.is_stopped_at_signal(signals))
            .count()
    }
}
