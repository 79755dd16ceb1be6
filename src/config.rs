use crate::consts::{DEFAULT_ADJUST_TOLERANCE, DEFAULT_MIN_SCORE, DEFAULT_TEMPERATURE};
use crate::error::{WsError, WsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub selection: SelectionParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionParams {
    /// 0 = always the best candidate; larger values flatten the draw.
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: f32,
    #[arg(long, default_value_t = 20.0)]
    pub relax_step: f32,
    #[arg(long, default_value_t = 2)]
    pub max_relaxations: usize,

    // Variety window = weeks * slots
    #[arg(long, default_value_t = 3)]
    pub variety_weeks: usize,
    #[arg(long, default_value_t = 5)]
    pub slots_per_week: usize,

    #[arg(long, default_value_t = DEFAULT_ADJUST_TOLERANCE)]
    pub adjust_tolerance: f32,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            min_score: DEFAULT_MIN_SCORE,
            relax_step: 20.0,
            max_relaxations: 2,
            variety_weeks: 3,
            slots_per_week: 5,
            adjust_tolerance: DEFAULT_ADJUST_TOLERANCE,
        }
    }
}

impl SelectionParams {
    pub fn variety_window(&self) -> usize {
        self.variety_weeks * self.slots_per_week
    }

    /// Thresholds tried in order, starting at `initial`.
    pub fn threshold_ladder(&self, initial: f32) -> Vec<f32> {
        (0..=self.max_relaxations)
            .map(|i| initial - self.relax_step * i as f32)
            .collect()
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === CATEGORY ===
    #[arg(long, default_value_t = 40.0)]
    pub weight_category_exact: f32,
    #[arg(long, default_value_t = 20.0)]
    pub weight_category_compatible: f32,

    // === CALENDAR ===
    #[arg(long, default_value_t = 25.0)]
    pub weight_phase: f32,
    #[arg(long, default_value_t = 15.0)]
    pub weight_weekday: f32,

    // === LOAD ===
    #[arg(long, default_value_t = 10.0)]
    pub weight_stress: f32,
    #[arg(long, default_value_t = 5.0)]
    pub weight_duration: f32,
    #[arg(long, default_value_t = 30.0)]
    pub duration_sane_min: f32,
    #[arg(long, default_value_t = 180.0)]
    pub duration_sane_max: f32,

    // === VARIETY ===
    #[arg(long, default_value_t = 5.0)]
    pub bonus_variety_fresh: f32,
    #[arg(long, default_value_t = 5.0)]
    pub penalty_variety_recent: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_category_exact: 40.0,
            weight_category_compatible: 20.0,
            weight_phase: 25.0,
            weight_weekday: 15.0,
            weight_stress: 10.0,
            weight_duration: 5.0,
            duration_sane_min: 30.0,
            duration_sane_max: 180.0,
            bonus_variety_fresh: 5.0,
            penalty_variety_recent: 5.0,
        }
    }
}

impl ScoringWeights {
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_category_exact);
        update_if_present!(weight_category_compatible);
        update_if_present!(weight_phase);
        update_if_present!(weight_weekday);
        update_if_present!(weight_stress);
        update_if_present!(weight_duration);
        update_if_present!(duration_sane_min);
        update_if_present!(duration_sane_max);
        update_if_present!(bonus_variety_fresh);
        update_if_present!(penalty_variety_recent);
    }
}

impl SelectionParams {
    pub fn merge_from_cli(&mut self, cli_params: &SelectionParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(temperature);
        update_if_present!(min_score);
        update_if_present!(relax_step);
        update_if_present!(max_relaxations);
        update_if_present!(variety_weeks);
        update_if_present!(slots_per_week);
        update_if_present!(adjust_tolerance);
    }
}

impl Config {
    /// Parses a profile. Not validated here: CLI overrides may still fix it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WsResult<Self> {
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the flags the user actually typed onto a file profile.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.selection.merge_from_cli(&cli.selection, matches);
        self.weights.merge_from_cli(&cli.weights, matches);
    }

    pub fn validate(&self) -> WsResult<()> {
        let s = &self.selection;
        if !s.temperature.is_finite() || s.temperature < 0.0 {
            return Err(WsError::Config(format!(
                "temperature must be >= 0, got {}",
                s.temperature
            )));
        }
        if !s.relax_step.is_finite() || s.relax_step < 0.0 {
            return Err(WsError::Config(format!(
                "relax_step must be >= 0, got {}",
                s.relax_step
            )));
        }
        if s.variety_window() == 0 {
            return Err(WsError::Config(
                "variety window (weeks * slots) must be positive".to_string(),
            ));
        }
        if !(s.adjust_tolerance > 0.0 && s.adjust_tolerance <= 1.0) {
            return Err(WsError::Config(format!(
                "adjust_tolerance must be in (0, 1], got {}",
                s.adjust_tolerance
            )));
        }

        let w = &self.weights;
        if w.duration_sane_min > w.duration_sane_max {
            return Err(WsError::Config(format!(
                "duration band inverted: {} > {}",
                w.duration_sane_min, w.duration_sane_max
            )));
        }
        if w.penalty_variety_recent < 0.0 {
            return Err(WsError::Config(
                "penalty_variety_recent must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
