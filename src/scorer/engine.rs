use super::{ScoreDetails, Scorer};
use crate::config::ScoringWeights;
use crate::consts::{SCORE_COMPONENT_MIN, SCORE_MAX};
use crate::selector::SelectionRequest;
use crate::workout::{Category, Workout};

#[inline(always)]
fn bounded(points: f32) -> f32 {
    points.clamp(SCORE_COMPONENT_MIN, SCORE_MAX)
}

pub fn category_points(weights: &ScoringWeights, have: Category, want: Category) -> f32 {
    if have == want {
        weights.weight_category_exact
    } else if have.is_compatible(want) {
        weights.weight_category_compatible
    } else {
        0.0
    }
}

/// Linear falloff: full weight at the target, zero once the relative
/// difference reaches 100%.
pub fn stress_points(weights: &ScoringWeights, baseline: f32, target: f32) -> f32 {
    if target <= 0.0 {
        return 0.0;
    }
    let rel = (baseline - target).abs() / target;
    (weights.weight_stress * (1.0 - rel)).max(0.0)
}

pub fn duration_points(weights: &ScoringWeights, duration_min: f32) -> f32 {
    if duration_min >= weights.duration_sane_min && duration_min <= weights.duration_sane_max {
        weights.weight_duration
    } else {
        0.0
    }
}

/// `history` is oldest first. The penalty grows linearly with recency of the
/// last occurrence: the newest entry costs the full penalty, the oldest
/// costs `penalty / len`.
pub fn variety_points(weights: &ScoringWeights, id: &str, history: &[String]) -> f32 {
    match history.iter().rposition(|h| h == id) {
        None => weights.bonus_variety_fresh,
        Some(idx) => {
            let len = history.len() as f32;
            let recency = (idx + 1) as f32 / len;
            -(weights.penalty_variety_recent * recency).min(-SCORE_COMPONENT_MIN)
        }
    }
}

pub fn score_details(
    scorer: &Scorer,
    workout: &Workout,
    request: &SelectionRequest,
    history: &[String],
) -> ScoreDetails {
    let w = &scorer.weights;

    let phase = if workout.phases.contains(&request.phase) {
        w.weight_phase
    } else {
        0.0
    };
    let weekday = if workout.weekdays.contains(&request.weekday) {
        w.weight_weekday
    } else {
        0.0
    };

    let mut details = ScoreDetails {
        category: bounded(category_points(w, workout.category, request.category)),
        phase: bounded(phase),
        weekday: bounded(weekday),
        stress: bounded(stress_points(w, workout.stress, request.target_stress)),
        duration: bounded(duration_points(w, workout.duration_min)),
        variety: bounded(variety_points(w, &workout.id, history)),
        ..Default::default()
    };
    details.sum();
    details
}
