use crate::consts::DURATION_EPSILON_MIN;
use crate::workout::{AdjustableField, Workout};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What happened when reconciling a workout with the requested stress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjustmentOutcome {
    WithinTolerance,
    Adjusted {
        field: AdjustableField,
        scale: f32,
        from: f32,
        to: f32,
    },
    /// Target missed: the workout declares nothing it may scale.
    NoAdjustableDimension { target_stress: f32, actual_stress: f32 },
    /// Target missed: scaling would leave the declared bounds.
    OutOfBounds {
        field: AdjustableField,
        required: f32,
        min: f32,
        max: f32,
    },
    /// Target missed: baseline stress is zero, no factor exists.
    Unscalable,
}

impl AdjustmentOutcome {
    pub fn target_met(&self) -> bool {
        matches!(self, Self::WithinTolerance | Self::Adjusted { .. })
    }

    pub fn was_adjusted(&self) -> bool {
        matches!(self, Self::Adjusted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjuster {
    tolerance: f32,
}

impl Adjuster {
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Returns the workout to hand out plus the outcome. An out-of-bounds
    /// factor returns the original untouched; only float drift within
    /// `DURATION_EPSILON_MIN` of a bound is settled onto that bound.
    pub fn adjust(&self, workout: &Workout, target_stress: f32) -> (Workout, AdjustmentOutcome) {
        let baseline = workout.stress;
        if target_stress > 0.0 && (baseline - target_stress).abs() / target_stress <= self.tolerance
        {
            return (workout.clone(), AdjustmentOutcome::WithinTolerance);
        }

        let Some(dim) = workout.adjustable else {
            warn!(
                "Workout '{}' (stress {:.1}) misses target {:.1} and is not adjustable",
                workout.id, baseline, target_stress
            );
            return (
                workout.clone(),
                AdjustmentOutcome::NoAdjustableDimension {
                    target_stress,
                    actual_stress: baseline,
                },
            );
        };

        if baseline <= 0.0 || target_stress <= 0.0 {
            warn!(
                "Workout '{}' cannot be scaled from stress {:.1} to {:.1}",
                workout.id, baseline, target_stress
            );
            return (workout.clone(), AdjustmentOutcome::Unscalable);
        }

        let scale = target_stress / baseline;
        let from = workout.value_of(dim.field);
        let required = from * scale;

        if !dim.contains_within(required, DURATION_EPSILON_MIN) {
            warn!(
                "Workout '{}': {} {:.1} -> {:.1} leaves bounds [{}, {}], keeping original",
                workout.id, dim.field, from, required, dim.min, dim.max
            );
            return (
                workout.clone(),
                AdjustmentOutcome::OutOfBounds {
                    field: dim.field,
                    required,
                    min: dim.min,
                    max: dim.max,
                },
            );
        }

        // Rounding drift past an inclusive bound lands on the bound
        let to = required.clamp(dim.min, dim.max);
        let mut adjusted = workout.clone();

        match dim.field {
            AdjustableField::Duration => {
                rescale_segments(&mut adjusted, to);
                adjusted.stress = target_stress;
            }
            AdjustableField::Stress => {
                adjusted.stress = to;
            }
        }

        debug!(
            "Workout '{}': scaled {} {:.1} -> {:.1} (x{:.3})",
            workout.id, dim.field, from, to, scale
        );
        (
            adjusted,
            AdjustmentOutcome::Adjusted {
                field: dim.field,
                scale,
                from,
                to,
            },
        )
    }
}

/// Scales every segment by `total / duration_min`; the last segment takes
/// the remainder so the segments sum to `total`.
fn rescale_segments(workout: &mut Workout, total: f32) {
    let factor = total / workout.duration_min;
    let Some((last, rest)) = workout.segments.split_last_mut() else {
        return;
    };
    let mut head = 0.0;
    for seg in rest.iter_mut() {
        seg.duration_min *= factor;
        head += seg.duration_min;
    }
    last.duration_min = total - head;
    workout.duration_min = total;
}
