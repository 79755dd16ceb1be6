use crate::error::{WsError, WsResult};
use crate::selector::{SelectionRequest, SelectionResult, Selector, VarietyTracker};
use crate::workout::{Category, Phase, Weekday};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// One day of the weekly skeleton produced upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlot {
    pub week: u32,
    pub weekday: Weekday,
    pub category: Category,
    pub phase: Phase,
    pub target_stress: f32,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSkeleton {
    pub athlete: String,
    pub slots: Vec<DaySlot>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkeletonFile {
    Many(Vec<PlanSkeleton>),
    One(PlanSkeleton),
}

impl PlanSkeleton {
    /// Accepts a single skeleton object or an array of them.
    pub fn load_all<P: AsRef<Path>>(path: P) -> WsResult<Vec<PlanSkeleton>> {
        let content = fs::read_to_string(&path)?;
        Ok(match serde_json::from_str::<SkeletonFile>(&content)? {
            SkeletonFile::Many(v) => v,
            SkeletonFile::One(s) => vec![s],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotOutcome {
    Assigned(Box<SelectionResult>),
    Unassigned { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedDay {
    pub slot: DaySlot,
    pub outcome: SlotOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub athlete: String,
    pub days: Vec<PlannedDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlanSummary {
    pub assigned: usize,
    pub unassigned: usize,
    pub adjusted: usize,
    pub targets_missed: usize,
    pub planned_stress: f32,
    pub target_stress: f32,
}

impl PlanReport {
    pub fn summary(&self) -> PlanSummary {
        let mut s = PlanSummary::default();
        for day in &self.days {
            s.target_stress += day.slot.target_stress;
            match &day.outcome {
                SlotOutcome::Assigned(result) => {
                    s.assigned += 1;
                    s.planned_stress += result.workout.stress;
                    if result.adjustment.was_adjusted() {
                        s.adjusted += 1;
                    }
                    if !result.target_met() {
                        s.targets_missed += 1;
                    }
                }
                SlotOutcome::Unassigned { .. } => s.unassigned += 1,
            }
        }
        s
    }
}

/// State of one plan-generation run: its own variety history and rng.
pub struct PlanRun<'s> {
    selector: &'s Selector,
    tracker: VarietyTracker,
    rng: fastrand::Rng,
}

impl<'s> PlanRun<'s> {
    pub fn new(selector: &'s Selector, seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        Self {
            selector,
            tracker: selector.new_tracker(),
            rng,
        }
    }

    pub fn select(&mut self, request: &SelectionRequest) -> WsResult<SelectionResult> {
        self.selector.select(request, &mut self.tracker, &mut self.rng)
    }

    pub fn history(&self) -> &[String] {
        self.tracker.snapshot()
    }

    fn request_for(&self, slot: &DaySlot) -> SelectionRequest {
        let mut request =
            self.selector
                .request(slot.category, slot.phase, slot.weekday, slot.target_stress);
        if let Some(t) = slot.temperature {
            request.temperature = t;
        }
        request
    }

    /// Walks the skeleton in order. A slot without candidates is left
    /// unassigned; fatal errors abort the run.
    pub fn run(&mut self, skeleton: &PlanSkeleton) -> WsResult<PlanReport> {
        self.tracker.reset();
        let mut days = Vec::with_capacity(skeleton.slots.len());

        for slot in &skeleton.slots {
            let request = self.request_for(slot);
            let outcome = match self.select(&request) {
                Ok(result) => SlotOutcome::Assigned(Box::new(result)),
                Err(e) if !e.is_fatal() => {
                    warn!(
                        "{}: week {} {} left unassigned: {}",
                        skeleton.athlete, slot.week, slot.weekday, e
                    );
                    SlotOutcome::Unassigned {
                        reason: e.to_string(),
                    }
                }
                Err(e) => return Err(e),
            };
            days.push(PlannedDay {
                slot: slot.clone(),
                outcome,
            });
        }

        let report = PlanReport {
            athlete: skeleton.athlete.clone(),
            days,
        };
        let summary = report.summary();
        info!(
            "📅 Plan for {}: {} assigned, {} unassigned, stress {:.0}/{:.0}",
            report.athlete,
            summary.assigned,
            summary.unassigned,
            summary.planned_stress,
            summary.target_stress
        );
        Ok(report)
    }
}

/// Runs independent skeletons in parallel. Run `i` is seeded `seed + i`
/// (wrapping), so output does not depend on thread scheduling.
pub fn generate_plans(
    selector: &Selector,
    skeletons: &[PlanSkeleton],
    seed: Option<u64>,
) -> WsResult<Vec<PlanReport>> {
    if skeletons.is_empty() {
        return Err(WsError::InvalidInput("no plan skeletons given".to_string()));
    }
    skeletons
        .par_iter()
        .enumerate()
        .map(|(i, skeleton)| {
            PlanRun::new(selector, seed.map(|s| s.wrapping_add(i as u64))).run(skeleton)
        })
        .collect()
}
