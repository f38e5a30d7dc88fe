//! Traffic signal phase machine
//!
//! Two independent signal axes, each cycling Green -> Yellow -> Red on its
//! own countdown. The axes are deliberately not phase-locked to each other,
//! so both can show Green at the same time.

use log::debug;

use super::types::{Axis, SignalPhase};

/// How much simulated time passes between countdown steps.
const SIGNAL_STEP_SECS: f32 = 1.0;

/// Phase and remaining seconds for one signal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalAxisState {
    pub phase: SignalPhase,
    /// Seconds remaining in the current phase; always > 0 while the phase
    /// is active.
    pub countdown: u32,
}

impl SignalAxisState {
    /// A freshly entered phase with its full canonical duration.
    fn entering(phase: SignalPhase) -> Self {
        Self {
            phase,
            countdown: phase.duration_secs(),
        }
    }
}

/// Owns the phase and countdown for both signal axes and advances them at
/// 1 Hz against the per-frame update.
#[derive(Debug, Clone)]
pub struct SignalController {
    horizontal: SignalAxisState,
    vertical: SignalAxisState,
    /// Simulated time accumulated toward the next one-second step.
    elapsed: f32,
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalController {
    /// Starting state: horizontal Green, vertical Red, both at full duration.
    pub fn new() -> Self {
        Self {
            horizontal: SignalAxisState::entering(SignalPhase::Green),
            vertical: SignalAxisState::entering(SignalPhase::Red),
            elapsed: 0.0,
        }
    }

    /// Current phase and countdown for the given axis.
    pub fn axis(&self, axis: Axis) -> SignalAxisState {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Current phase for the given axis.
    pub fn phase(&self, axis: Axis) -> SignalPhase {
        self.axis(axis).phase
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut SignalAxisState {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Accumulate elapsed simulated time and perform one countdown step per
    /// whole second. Runs as a no-op on frames that don't cross a one-second
    /// boundary.
    pub fn update(&mut self, delta_secs: f32) {
        self.elapsed += delta_secs;
        while self.elapsed >= SIGNAL_STEP_SECS {
            self.elapsed -= SIGNAL_STEP_SECS;
            Self::step_axis(Axis::Horizontal, &mut self.horizontal);
            Self::step_axis(Axis::Vertical, &mut self.vertical);
        }
    }

    /// Decrement one axis countdown; at zero, move to the successor phase
    /// and reset the countdown to that phase's duration.
    fn step_axis(axis: Axis, state: &mut SignalAxisState) {
        state.countdown -= 1;
        if state.countdown == 0 {
            *state = SignalAxisState::entering(state.phase.successor());
            debug!(
                "{:?} signal -> {:?} for {}s",
                axis, state.phase, state.countdown
            );
        }
    }

    /// Operator override: immediately set the axis to the given phase with
    /// its canonical duration. Does not validate against the other axis.
    pub fn force_phase(&mut self, axis: Axis, phase: SignalPhase) {
        *self.axis_mut(axis) = SignalAxisState::entering(phase);
        debug!("{:?} signal forced to {:?}", axis, phase);
    }
}
