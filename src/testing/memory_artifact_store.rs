use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store that records every filesystem effect.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub dirs: RefCell<Vec<PathBuf>>,
    pub executables: RefCell<Vec<PathBuf>>,
    pub removed: RefCell<Vec<PathBuf>>,
    fail_writes_under: Option<PathBuf>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes to any path below `dir`.
    pub fn failing_writes_under(dir: impl Into<PathBuf>) -> Self {
        Self { fail_writes_under: Some(dir.into()), ..Self::default() }
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// True when nothing at all was touched.
    pub fn is_untouched(&self) -> bool {
        self.files.borrow().is_empty()
            && self.dirs.borrow().is_empty()
            && self.executables.borrow().is_empty()
            && self.removed.borrow().is_empty()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        if self.fail_writes_under.as_deref().is_some_and(|dir| path.starts_with(dir)) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
        }
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn make_executable(&self, path: &Path) -> Result<(), AppError> {
        self.executables.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
