/// Lowest value any single score component may contribute.
pub const SCORE_COMPONENT_MIN: f32 = -5.0;

/// Highest total a workout can reach against a request.
pub const SCORE_MAX: f32 = 100.0;

/// Allowed drift (minutes) between the declared duration and the segment sum.
pub const DURATION_EPSILON_MIN: f32 = 0.01;

/// Declared vs segment-derived stress divergence that triggers a load warning.
pub const STRESS_DIVERGENCE_WARN: f32 = 0.25;

/// TSS accrued by one hour at exactly threshold power.
pub const TSS_PER_THRESHOLD_HOUR: f32 = 100.0;

/// Default sampling temperature (mid-range operating point).
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Default minimum score before threshold relaxation.
pub const DEFAULT_MIN_SCORE: f32 = 50.0;

/// Default relative stress mismatch tolerated without adjustment.
pub const DEFAULT_ADJUST_TOLERANCE: f32 = 0.15;
