pub mod engine;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::selector::SelectionRequest;
use crate::workout::Workout;

/// Pure scoring of a workout against a request and the caller's history.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, workout: &Workout, request: &SelectionRequest, history: &[String]) -> f32 {
        engine::score_details(self, workout, request, history).total
    }

    pub fn score_details(
        &self,
        workout: &Workout,
        request: &SelectionRequest,
        history: &[String],
    ) -> ScoreDetails {
        engine::score_details(self, workout, request, history)
    }
}
