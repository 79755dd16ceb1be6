use serde::{Deserialize, Serialize};

/// Per-component breakdown of one (workout, request) score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub total: f32,

    pub category: f32,
    pub phase: f32,
    pub weekday: f32,
    pub stress: f32,
    pub duration: f32,
    // Positive when fresh, negative when recently used
    pub variety: f32,
}

impl ScoreDetails {
    pub(crate) fn sum(&mut self) {
        self.total =
            self.category + self.phase + self.weekday + self.stress + self.duration + self.variety;
    }
}
