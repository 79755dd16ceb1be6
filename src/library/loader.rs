use super::Library;
use crate::consts::STRESS_DIVERGENCE_WARN;
use crate::error::{WsError, WsResult};
use crate::util::calculate_bytes_hash;
use crate::workout::Workout;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Deserialize)]
struct CatalogFile {
    version: String,
    #[serde(default)]
    description: String,
    workouts: Vec<Workout>,
}

impl Library {
    /// Reads and fully validates a catalog. Nothing is returned unless every
    /// entry passes.
    pub fn load<P: AsRef<Path>>(path: P) -> WsResult<Library> {
        let source = path.as_ref().display().to_string();
        debug!("Loading workout library from: {}", source);

        let bytes = fs::read(&path)
            .map_err(|e| WsError::library_load(&source, format!("cannot read file: {}", e)))?;
        Self::parse(&bytes, &source)
    }

    pub fn from_reader<R: Read>(mut reader: R, source: &str) -> WsResult<Library> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| WsError::library_load(source, format!("cannot read: {}", e)))?;
        Self::parse(&bytes, source)
    }

    pub fn from_json_str(content: &str) -> WsResult<Library> {
        Self::parse(content.as_bytes(), "<memory>")
    }

    fn parse(bytes: &[u8], source: &str) -> WsResult<Library> {
        let file: CatalogFile = serde_json::from_slice(bytes)
            .map_err(|e| WsError::library_load(source, format!("malformed catalog: {}", e)))?;

        validate_entries(&file.workouts).map_err(|reason| WsError::library_load(source, reason))?;

        for w in &file.workouts {
            let estimated = w.estimated_stress();
            if w.stress > 0.0 && ((estimated - w.stress).abs() / w.stress) > STRESS_DIVERGENCE_WARN {
                warn!(
                    "Workout '{}' declares stress {:.1} but its segments suggest {:.1}",
                    w.id, w.stress, estimated
                );
            }
        }

        let library = Library {
            version: file.version,
            description: file.description,
            workouts: file.workouts,
            checksum: calculate_bytes_hash(bytes),
        };

        info!(
            "📚 Library '{}' v{} loaded: {} workouts (sha256 {})",
            source,
            library.version,
            library.len(),
            &library.checksum[..12]
        );
        Ok(library)
    }
}

fn validate_entries(workouts: &[Workout]) -> Result<(), String> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (idx, w) in workouts.iter().enumerate() {
        let label = if w.id.is_empty() {
            format!("#{}", idx)
        } else {
            format!("'{}'", w.id)
        };

        for issue in w.violations() {
            issues.push(format!("workout {}: {}", label, issue));
        }
        if !w.id.is_empty() && !seen.insert(w.id.as_str()) {
            issues.push(format!("workout {}: duplicate identifier", label));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues.join("; "))
    }
}
