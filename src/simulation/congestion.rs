//! Congestion scoring for the intersection
//!
//! Accumulates a bounded score from how many vehicles are currently halted
//! at a stop line and maps it to a discrete feedback category.

/// Upper bound on the accumulated congestion level
pub const CONGESTION_MAX: i32 = 200;

/// Level added per stopped vehicle per tick
pub const CONGESTION_GROWTH_PER_VEHICLE: i32 = 2;

/// Levels at or above which the feedback degrades
pub const MODERATE_THRESHOLD: i32 = 50;
pub const NEEDS_IMPROVEMENT_THRESHOLD: i32 = 120;

/// Discrete quality label derived from the congestion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    Moderate,
    NeedsImprovement,
}

impl Feedback {
    /// Pure mapping from a congestion level to its feedback category.
    pub fn from_level(level: i32) -> Self {
        if level < MODERATE_THRESHOLD {
            Feedback::Excellent
        } else if level < NEEDS_IMPROVEMENT_THRESHOLD {
            Feedback::Moderate
        } else {
            Feedback::NeedsImprovement
        }
    }

    /// Display label for the HUD and summary logs.
    pub fn label(self) -> &'static str {
        match self {
            Feedback::Excellent => "Excellent",
            Feedback::Moderate => "Moderate",
            Feedback::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Accumulating congestion score in `[0, CONGESTION_MAX]`.
#[derive(Debug, Clone, Default)]
pub struct CongestionEstimator {
    level: i32,
}

impl CongestionEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current congestion level.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Feedback category for the current level.
    pub fn feedback(&self) -> Feedback {
        Feedback::from_level(self.level)
    }

    /// Recompute the score after signal and vehicle updates: grow by
    /// 2 per stopped vehicle, or decay by 1 toward zero when nothing is
    /// stopped, clamped to the valid range.
    pub fn update(&mut self, stopped_count: usize) {
        if stopped_count > 0 {
            self.level += CONGESTION_GROWTH_PER_VEHICLE * stopped_count as i32;
        } else if self.level > 0 {
            self.level -= 1;
        }
        self.level = self.level.clamp(0, CONGESTION_MAX);
    }
}
