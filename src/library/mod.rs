pub mod handle;
pub mod loader;

pub use self::handle::LibraryHandle;

use crate::workout::Workout;
use serde::Serialize;

/// Validated, read-only workout catalog. Entry order is file order and is
/// the tie-break order for selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Library {
    pub(crate) version: String,
    pub(crate) description: String,
    pub(crate) workouts: Vec<Workout>,
    #[serde(skip)]
    pub(crate) checksum: String,
}

impl Library {
    pub fn entries(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// SHA-256 of the bytes the catalog was parsed from.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}
