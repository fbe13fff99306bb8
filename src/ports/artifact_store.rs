use std::path::Path;

use crate::domain::AppError;

/// Port for the files the installer creates on the host.
pub trait ArtifactStore {
    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write `contents` to `path`, replacing an existing file.
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), AppError>;

    /// Mark `path` executable by its owner, group, and others.
    fn make_executable(&self, path: &Path) -> Result<(), AppError>;

    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
