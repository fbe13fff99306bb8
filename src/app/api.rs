//! API facade for the application.
//!
//! Glues the context, the wizard, and the commit step together so the CLI
//! and tests drive the same flow.

use tracing::info;

use crate::app::AppContext;
use crate::app::commit::{Installer, RenderedArtifacts, render_artifacts};
use crate::app::preflight::run_preflight;
use crate::app::settings::InstallerSettings;
use crate::app::summary::render_summary;
use crate::app::wizard::Wizard;
use crate::domain::{AppError, InstallConfig};
use crate::ports::{ArtifactStore, CommandRunner, HostEnvironment, Prompter};

const PROCEED_MESSAGE: &str = "Proceed with install?";

/// How an install run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallOutcome {
    /// Every commit step succeeded.
    Installed(InstallConfig),
    /// The operator declined the final confirmation; nothing was changed.
    Declined,
    /// Artifacts rendered for a dry run; nothing was changed.
    DryRun(RenderedArtifacts),
}

/// Check the host, walk the wizard, confirm, and commit.
pub fn install<P, H, R, S>(
    ctx: &mut AppContext<P, H, R, S>,
    settings: &InstallerSettings,
) -> Result<InstallOutcome, AppError>
where
    P: Prompter,
    H: HostEnvironment,
    R: CommandRunner,
    S: ArtifactStore,
{
    settings.validate()?;
    run_preflight(ctx.host(), settings)?;

    let defaults = InstallConfig::with_install_dir(&settings.default_install_dir);
    let config = Wizard::new(ctx.prompter_mut(), defaults.clone()).run()?;

    println!("{}", render_summary(&config, &defaults));
    if !ctx.prompter_mut().confirm(PROCEED_MESSAGE, true)? {
        info!("install declined at confirmation");
        return Ok(InstallOutcome::Declined);
    }

    if settings.dry_run {
        return Ok(InstallOutcome::DryRun(render_artifacts(&config, settings)?));
    }

    println!("Installing...");
    Installer::new(ctx.runner(), ctx.store(), settings).install(&config)?;
    Ok(InstallOutcome::Installed(config))
}

/// Run only the host checks.
pub fn preflight(
    host: &impl HostEnvironment,
    settings: &InstallerSettings,
) -> Result<(), AppError> {
    settings.validate()?;
    run_preflight(host, settings)
}
