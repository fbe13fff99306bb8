use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Writes installer artifacts straight to the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        debug!(path = %path.display(), "creating directory");
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        debug!(path = %path.display(), bytes = contents.len(), "writing file");
        fs::write(path, contents)?;
        Ok(())
    }

    fn make_executable(&self, path: &Path) -> Result<(), AppError> {
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(path)?;
        Ok(())
    }
}
