pub mod adjuster;
pub mod sampler;
pub mod variety;

pub use self::adjuster::{AdjustmentOutcome, Adjuster};
pub use self::sampler::Sampler;
pub use self::variety::VarietyTracker;

use crate::config::{Config, SelectionParams};
use crate::consts::{DEFAULT_MIN_SCORE, DEFAULT_TEMPERATURE};
use crate::error::{WsError, WsResult};
use crate::library::{Library, LibraryHandle};
use crate::scorer::{ScoreDetails, Scorer};
use crate::workout::{Category, Phase, Weekday, Workout};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Strategic requirements for one planned day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SelectionRequest {
    pub category: Category,
    pub phase: Phase,
    pub weekday: Weekday,
    pub target_stress: f32,
    #[builder(default = DEFAULT_TEMPERATURE)]
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[builder(default = DEFAULT_MIN_SCORE)]
    #[serde(default = "default_min_score")]
    pub min_score: f32,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_min_score() -> f32 {
    DEFAULT_MIN_SCORE
}

impl SelectionRequest {
    pub fn validate(&self) -> WsResult<()> {
        if !self.target_stress.is_finite() || self.target_stress <= 0.0 {
            return Err(WsError::InvalidInput(format!(
                "target stress must be positive, got {}",
                self.target_stress
            )));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(WsError::InvalidInput(format!(
                "temperature must be a finite value >= 0, got {}",
                self.temperature
            )));
        }
        if !self.min_score.is_finite() {
            return Err(WsError::InvalidInput("min score must be finite".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Adjusted copy when scaling happened, the library entry otherwise.
    pub workout: Workout,
    pub score: f32,
    pub details: ScoreDetails,
    pub threshold_used: f32,
    pub relaxations: usize,
    pub adjustment: AdjustmentOutcome,
}

impl SelectionResult {
    pub fn target_met(&self) -> bool {
        self.adjustment.target_met()
    }
}

#[derive(Debug, Clone)]
pub struct RankedWorkout<'a> {
    pub workout: &'a Workout,
    pub details: ScoreDetails,
}

/// Facade over scoring, threshold relaxation, sampling and adjustment.
pub struct Selector {
    library: Arc<Library>,
    scorer: Scorer,
    params: SelectionParams,
    adjuster: Adjuster,
}

impl Selector {
    pub fn new(library: Arc<Library>, config: &Config) -> Self {
        Self {
            library,
            scorer: Scorer::new(config.weights.clone()),
            params: config.selection.clone(),
            adjuster: Adjuster::new(config.selection.adjust_tolerance),
        }
    }

    pub fn from_handle(handle: &LibraryHandle, config: &Config) -> WsResult<Self> {
        Ok(Self::new(handle.get()?, config))
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    /// Builds a request carrying this selector's default temperature and threshold.
    pub fn request(
        &self,
        category: Category,
        phase: Phase,
        weekday: Weekday,
        target_stress: f32,
    ) -> SelectionRequest {
        SelectionRequest {
            category,
            phase,
            weekday,
            target_stress,
            temperature: self.params.temperature,
            min_score: self.params.min_score,
        }
    }

    pub fn new_tracker(&self) -> VarietyTracker {
        VarietyTracker::new(self.params.variety_window())
    }

    fn score_all(&self, request: &SelectionRequest, history: &[String]) -> Vec<ScoreDetails> {
        self.library
            .entries()
            .iter()
            .map(|w| self.scorer.score_details(w, request, history))
            .collect()
    }

    /// Every entry with its breakdown, best first; ties keep library order.
    pub fn rank(&self, request: &SelectionRequest, history: &[String]) -> Vec<RankedWorkout<'_>> {
        let mut ranked: Vec<RankedWorkout> = self
            .library
            .entries()
            .iter()
            .zip(self.score_all(request, history))
            .map(|(workout, details)| RankedWorkout { workout, details })
            .collect();
        ranked.sort_by(|a, b| b.details.total.total_cmp(&a.details.total));
        ranked
    }

    pub fn select(
        &self,
        request: &SelectionRequest,
        tracker: &mut VarietyTracker,
        rng: &mut Rng,
    ) -> WsResult<SelectionResult> {
        request.validate()?;
        let sampler = Sampler::new(request.temperature)?;

        let entries = self.library.entries();
        let scores = self.score_all(request, tracker.snapshot());

        let mut candidates: Vec<usize> = Vec::new();
        let mut threshold_used = request.min_score;
        let mut relaxations = 0;

        for (step, threshold) in self
            .params
            .threshold_ladder(request.min_score)
            .into_iter()
            .enumerate()
        {
            threshold_used = threshold;
            relaxations = step;
            candidates = (0..entries.len())
                .filter(|&i| scores[i].total >= threshold)
                .collect();
            if !candidates.is_empty() {
                break;
            }
            debug!(
                "No candidate at threshold {:.1} for {} / {} / {}",
                threshold, request.category, request.phase, request.weekday
            );
        }

        if candidates.is_empty() {
            let best_score = scores.iter().map(|d| d.total).reduce(f32::max);
            return Err(WsError::NoCandidate {
                category: request.category,
                phase: request.phase,
                weekday: request.weekday,
                threshold: threshold_used,
                best_score,
            });
        }

        let candidate_scores: Vec<f32> = candidates.iter().map(|&i| scores[i].total).collect();
        let picked = sampler
            .pick(&candidate_scores, rng)
            .map(|k| candidates[k])
            .ok_or_else(|| WsError::InvalidInput("empty candidate set".to_string()))?;

        let chosen = &entries[picked];
        debug!(
            "Selected '{}' (score {:.1}) from {} candidates at threshold {:.1}, T={}",
            chosen.id,
            scores[picked].total,
            candidates.len(),
            threshold_used,
            sampler.temperature()
        );

        let (workout, adjustment) = self.adjuster.adjust(chosen, request.target_stress);
        tracker.record(&chosen.id);

        Ok(SelectionResult {
            workout,
            score: scores[picked].total,
            details: scores[picked],
            threshold_used,
            relaxations,
            adjustment,
        })
    }
}
