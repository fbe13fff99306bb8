//! dgraph-helper: interactive wizard that configures, installs, and starts
//! Dgraph as a systemd service.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{DialoguerPrompter, FilesystemArtifactStore, LocalHost, SystemCommandRunner};
use app::AppContext;

pub use app::api::InstallOutcome;
pub use app::commit::RenderedArtifacts;
pub use app::settings::InstallerSettings;
pub use domain::{AppError, InstallConfig};

/// Run the interactive install against the local host.
pub fn install(settings: &InstallerSettings) -> Result<InstallOutcome, AppError> {
    let mut ctx = AppContext::new(
        DialoguerPrompter::new(),
        LocalHost::new(),
        SystemCommandRunner::new(),
        FilesystemArtifactStore::new(),
    );
    app::api::install(&mut ctx, settings)
}

/// Check that the local host can be installed on, without prompting.
pub fn preflight(settings: &InstallerSettings) -> Result<(), AppError> {
    app::api::preflight(&LocalHost::new(), settings)
}
