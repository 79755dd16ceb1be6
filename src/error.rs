use crate::workout::{Category, Phase, Weekday};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Library Load Error ({path}): {reason}")]
    LibraryLoad { path: String, reason: String },

    #[error(
        "No candidate for {category} / {phase} / {weekday} at threshold {threshold:.1}{}",
        describe_best(.best_score)
    )]
    NoCandidate {
        category: Category,
        phase: Phase,
        weekday: Weekday,
        threshold: f32,
        /// `None` when the library is empty.
        best_score: Option<f32>,
    },

    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl WsError {
    pub fn library_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LibraryLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Fatal errors abort a whole plan run; the rest only fail one slot.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NoCandidate { .. } | Self::InvalidInput(_))
    }
}

fn describe_best(best_score: &Option<f32>) -> String {
    match best_score {
        Some(score) => format!(" (best score seen: {:.1})", score),
        None => " (library is empty)".to_string(),
    }
}

pub type WsResult<T> = Result<T, WsError>;
