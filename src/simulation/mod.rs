//! Standalone intersection simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full UI.

mod congestion;
mod signal;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use congestion::{
    CongestionEstimator, Feedback, CONGESTION_GROWTH_PER_VEHICLE, CONGESTION_MAX,
    MODERATE_THRESHOLD, NEEDS_IMPROVEMENT_THRESHOLD,
};
#[allow(unused_imports)]
pub use signal::{SignalAxisState, SignalController};
#[allow(unused_imports)]
pub use types::{
    Axis, Command, CommandResult, LaneId, SignalPhase, SimulationMode, VehicleKind,
    GREEN_DURATION_SECS, RANGE_MAX, RANGE_MIN, RED_DURATION_SECS, SAFE_FOLLOWING_DISTANCE,
    STOP_LINE_TOLERANCE, YELLOW_DURATION_SECS,
};
#[allow(unused_imports)]
pub use vehicle::{
    Vehicle, VehicleModel, BIKE_SPEED, BIKE_START_Y, BIKE_STOP_Y, BUS_SPEED, BUS_START_X,
    BUS_STOP_X, CAR_SPEED, CAR_START_X, CAR_STOP_X,
};
pub use world::{SimWorld, Snapshot, VehicleSnapshot};
