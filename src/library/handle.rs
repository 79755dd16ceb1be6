use super::Library;
use crate::error::WsResult;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lazily loads one catalog on first access and shares it afterwards.
///
/// Concurrent first callers block on a single load; a failed load is not
/// cached, so the next call retries. Independent handles may point at
/// different catalogs within the same process.
pub struct LibraryHandle {
    path: PathBuf,
    cell: OnceCell<Arc<Library>>,
}

impl LibraryHandle {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cell: OnceCell::new(),
        }
    }

    /// Wraps an already loaded library (no file access ever happens).
    pub fn preloaded(library: Library) -> Self {
        Self {
            path: PathBuf::new(),
            cell: OnceCell::with_value(Arc::new(library)),
        }
    }

    pub fn get(&self) -> WsResult<Arc<Library>> {
        self.cell
            .get_or_try_init(|| Library::load(&self.path).map(Arc::new))
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
