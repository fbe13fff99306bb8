//! Host checks that must pass before the wizard asks anything.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::HostEnvironment;

use super::settings::InstallerSettings;

pub const SUPPORTED_OS: &str = "linux";

pub fn ensure_supported_os(host: &impl HostEnvironment) -> Result<(), AppError> {
    if host.os() != SUPPORTED_OS {
        return Err(AppError::UnsupportedOs(host.os().to_string()));
    }
    Ok(())
}

pub fn ensure_permissions(host: &impl HostEnvironment, service_dir: &Path) -> Result<(), AppError> {
    if !host.can_write(service_dir) {
        return Err(AppError::InsufficientPermissions(service_dir.to_path_buf()));
    }
    Ok(())
}

/// Run every host check; the first failure aborts.
pub fn run_preflight(
    host: &impl HostEnvironment,
    settings: &InstallerSettings,
) -> Result<(), AppError> {
    debug!(
        os = host.os(),
        service_dir = %settings.service_dir.display(),
        "running pre-flight checks"
    );
    ensure_supported_os(host)?;
    ensure_permissions(host, &settings.service_dir)?;
    info!("pre-flight checks passed");
    Ok(())
}
