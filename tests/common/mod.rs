#![allow(dead_code)] // Not every test binary uses every helper

use std::path::{Path, PathBuf};
use std::sync::Arc;
use wattsmith::config::Config;
use wattsmith::library::Library;
use wattsmith::selector::{SelectionRequest, Selector};
use wattsmith::workout::{
    AdjustableDimension, AdjustableField, Category, Phase, SegmentKind, Weekday, Workout,
    WorkoutSegment,
};

/// Builder for Workout fixtures. Defaults to a valid 60 minute steady ride
/// applicable to Base / Tuesday.
pub struct WorkoutBuilder {
    workout: Workout,
}

impl WorkoutBuilder {
    pub fn new(id: &str, category: Category) -> Self {
        Self {
            workout: Workout {
                id: id.to_string(),
                name: format!("Workout {}", id),
                description: String::new(),
                category,
                intensity: Default::default(),
                phases: [Phase::Base].into_iter().collect(),
                weekdays: [Weekday::Tuesday].into_iter().collect(),
                segments: vec![WorkoutSegment::new(SegmentKind::Steady, 60.0, 65.0, 75.0)],
                duration_min: 60.0,
                stress: 60.0,
                adjustable: None,
            },
        }
    }

    pub fn phases(mut self, phases: &[Phase]) -> Self {
        self.workout.phases = phases.iter().cloned().collect();
        self
    }

    pub fn weekdays(mut self, days: &[Weekday]) -> Self {
        self.workout.weekdays = days.iter().cloned().collect();
        self
    }

    /// Single steady segment of the given length; keeps the declared total in sync.
    pub fn duration(mut self, minutes: f32) -> Self {
        self.workout.segments = vec![WorkoutSegment::new(SegmentKind::Steady, minutes, 65.0, 75.0)];
        self.workout.duration_min = minutes;
        self
    }

    pub fn segments(mut self, segments: Vec<WorkoutSegment>) -> Self {
        self.workout.duration_min = segments.iter().map(|s| s.duration_min).sum();
        self.workout.segments = segments;
        self
    }

    /// Overrides the declared total without touching segments.
    pub fn declared_duration(mut self, minutes: f32) -> Self {
        self.workout.duration_min = minutes;
        self
    }

    pub fn stress(mut self, stress: f32) -> Self {
        self.workout.stress = stress;
        self
    }

    pub fn adjustable(mut self, field: AdjustableField, min: f32, max: f32) -> Self {
        self.workout.adjustable = Some(AdjustableDimension { field, min, max });
        self
    }

    pub fn build(self) -> Workout {
        self.workout
    }
}

pub fn catalog_json(workouts: &[Workout]) -> String {
    serde_json::json!({
        "version": "test",
        "description": "fixture catalog",
        "workouts": workouts,
    })
    .to_string()
}

pub fn write_catalog(dir: &Path, name: &str, workouts: &[Workout]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, catalog_json(workouts)).unwrap();
    path
}

pub fn library(workouts: &[Workout]) -> Arc<Library> {
    Arc::new(Library::from_json_str(&catalog_json(workouts)).expect("fixture catalog is valid"))
}

pub fn selector(workouts: &[Workout]) -> Selector {
    Selector::new(library(workouts), &Config::default())
}

pub fn selector_with(workouts: &[Workout], config: &Config) -> Selector {
    Selector::new(library(workouts), config)
}

/// Endurance / Base / Tuesday at the given stress and temperature.
pub fn request(target_stress: f32, temperature: f32) -> SelectionRequest {
    SelectionRequest::builder()
        .category(Category::Endurance)
        .phase(Phase::Base)
        .weekday(Weekday::Tuesday)
        .target_stress(target_stress)
        .temperature(temperature)
        .build()
}

pub fn manifest_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}
