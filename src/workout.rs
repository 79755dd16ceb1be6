use crate::consts::{DURATION_EPSILON_MIN, TSS_PER_THRESHOLD_HOUR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Endurance,
    Tempo,
    #[serde(alias = "sweet-spot", alias = "sweetspot")]
    #[strum(to_string = "sweet_spot", serialize = "sweet-spot", serialize = "sweetspot")]
    SweetSpot,
    Threshold,
    Vo2max,
    Recovery,
    Mixed,
}

impl Category {
    /// Symmetric partial-credit relation. `Mixed` pairs with everything.
    /// Exact matches are handled by the scorer, so `a.is_compatible(a)` is false
    /// unless one side is `Mixed`.
    pub fn is_compatible(self, other: Category) -> bool {
        use Category::*;
        if self == Mixed || other == Mixed {
            return true;
        }
        matches!(
            (self, other),
            (Endurance, Recovery)
                | (Recovery, Endurance)
                | (Tempo, SweetSpot)
                | (SweetSpot, Tempo)
                | (Threshold, Vo2max)
                | (Vo2max, Threshold)
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Phase {
    Base,
    Build,
    Peak,
    Taper,
    Recovery,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weekday {
    #[serde(alias = "mon")]
    #[strum(to_string = "monday", serialize = "mon")]
    Monday,
    #[serde(alias = "tue")]
    #[strum(to_string = "tuesday", serialize = "tue")]
    Tuesday,
    #[serde(alias = "wed")]
    #[strum(to_string = "wednesday", serialize = "wed")]
    Wednesday,
    #[serde(alias = "thu")]
    #[strum(to_string = "thursday", serialize = "thu")]
    Thursday,
    #[serde(alias = "fri")]
    #[strum(to_string = "friday", serialize = "fri")]
    Friday,
    #[serde(alias = "sat")]
    #[strum(to_string = "saturday", serialize = "sat")]
    Saturday,
    #[serde(alias = "sun")]
    #[strum(to_string = "sunday", serialize = "sun")]
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntensityTier {
    Low,
    #[default]
    Moderate,
    High,
    Maximal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SegmentKind {
    #[serde(alias = "warm-up", alias = "warmup")]
    WarmUp,
    Steady,
    Interval,
    Recovery,
    #[serde(alias = "cool-down", alias = "cooldown")]
    CoolDown,
}

/// One ordered step of a workout. Power is a % band of threshold power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSegment {
    pub kind: SegmentKind,
    pub duration_min: f32,
    pub power_low: f32,
    pub power_high: f32,
    #[serde(default)]
    pub description: String,
}

impl WorkoutSegment {
    pub fn new(kind: SegmentKind, duration_min: f32, power_low: f32, power_high: f32) -> Self {
        Self {
            kind,
            duration_min,
            power_low,
            power_high,
            description: String::new(),
        }
    }

    /// Intensity factor of the band midpoint.
    pub fn intensity_factor(&self) -> f32 {
        (self.power_low + self.power_high) / 200.0
    }

    pub fn estimated_stress(&self) -> f32 {
        let intensity = self.intensity_factor();
        (self.duration_min / 60.0) * intensity * intensity * TSS_PER_THRESHOLD_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AdjustableField {
    Duration,
    Stress,
}

/// The single attribute a workout may be scaled along, with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustableDimension {
    pub field: AdjustableField,
    pub min: f32,
    pub max: f32,
}

impl AdjustableDimension {
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Like `contains`, widened by `slack` on both ends.
    pub fn contains_within(&self, value: f32, slack: f32) -> bool {
        value >= self.min - slack && value <= self.max + slack
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub intensity: IntensityTier,
    pub phases: BTreeSet<Phase>,
    pub weekdays: BTreeSet<Weekday>,
    pub segments: Vec<WorkoutSegment>,
    pub duration_min: f32,
    pub stress: f32,
    #[serde(default)]
    pub adjustable: Option<AdjustableDimension>,
}

impl Workout {
    pub fn segment_duration_total(&self) -> f32 {
        self.segments.iter().map(|s| s.duration_min).sum()
    }

    pub fn estimated_stress(&self) -> f32 {
        self.segments.iter().map(|s| s.estimated_stress()).sum()
    }

    pub fn value_of(&self, field: AdjustableField) -> f32 {
        match field {
            AdjustableField::Duration => self.duration_min,
            AdjustableField::Stress => self.stress,
        }
    }

    /// Every invariant violation of this entry, empty when valid.
    pub fn violations(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push("empty identifier".to_string());
        }
        if self.phases.is_empty() {
            issues.push("no applicable phases".to_string());
        }
        if self.weekdays.is_empty() {
            issues.push("no applicable weekdays".to_string());
        }

        if self.segments.is_empty() {
            issues.push("empty segment sequence".to_string());
        }
        for (i, seg) in self.segments.iter().enumerate() {
            if !seg.duration_min.is_finite() || seg.duration_min <= 0.0 {
                issues.push(format!(
                    "segment {} has non-positive duration {}",
                    i, seg.duration_min
                ));
            }
            if !seg.power_low.is_finite()
                || !seg.power_high.is_finite()
                || seg.power_low < 0.0
                || seg.power_low > seg.power_high
            {
                issues.push(format!(
                    "segment {} has invalid power band {}-{}",
                    i, seg.power_low, seg.power_high
                ));
            }
        }

        let total = self.segment_duration_total();
        if !self.segments.is_empty() && (total - self.duration_min).abs() > DURATION_EPSILON_MIN {
            issues.push(format!(
                "segment durations sum to {} but declared duration is {}",
                total, self.duration_min
            ));
        }

        if !self.stress.is_finite() || self.stress < 0.0 {
            issues.push(format!("invalid stress {}", self.stress));
        }

        if let Some(dim) = &self.adjustable {
            if !dim.min.is_finite() || !dim.max.is_finite() || dim.min < 0.0 {
                issues.push(format!(
                    "adjustable {} bounds must be finite and non-negative",
                    dim.field
                ));
            } else if dim.min > dim.max {
                issues.push(format!(
                    "adjustable {} bounds inverted: min {} > max {}",
                    dim.field, dim.min, dim.max
                ));
            } else if !dim.contains(self.value_of(dim.field)) {
                issues.push(format!(
                    "baseline {} {} lies outside adjustable bounds [{}, {}]",
                    dim.field,
                    self.value_of(dim.field),
                    dim.min,
                    dim.max
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn compatibility_is_symmetric() {
        use strum::IntoEnumIterator;
        for a in Category::iter() {
            for b in Category::iter() {
                assert_eq!(a.is_compatible(b), b.is_compatible(a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn category_parses_both_spellings() {
        assert_eq!(Category::from_str("sweet-spot").unwrap(), Category::SweetSpot);
        assert_eq!(Category::from_str("Sweet_Spot").unwrap(), Category::SweetSpot);
        assert_eq!(Category::SweetSpot.to_string(), "sweet_spot");
        assert_eq!(Weekday::from_str("tue").unwrap(), Weekday::Tuesday);
    }

    #[test]
    fn estimated_stress_of_threshold_hour() {
        let seg = WorkoutSegment::new(SegmentKind::Steady, 60.0, 100.0, 100.0);
        assert!((seg.estimated_stress() - 100.0).abs() < 1e-4);
    }
}
