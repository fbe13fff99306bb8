//! Side effects that turn a confirmed [`InstallConfig`] into a running service.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::adapters::render_service_unit;
use crate::domain::{AppError, InstallConfig};
use crate::ports::{ArtifactStore, CommandRunner};

use super::settings::InstallerSettings;

const SYSTEMCTL: &str = "systemctl";

/// Everything the installer writes, rendered without touching the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub config_path: PathBuf,
    pub config_yaml: String,
    pub unit_path: PathBuf,
    pub unit: String,
}

pub fn render_artifacts(
    config: &InstallConfig,
    settings: &InstallerSettings,
) -> Result<RenderedArtifacts, AppError> {
    let exec_start = config.launch_command(&settings.binary_path);
    Ok(RenderedArtifacts {
        config_path: config.config_path(),
        config_yaml: config.to_yaml()?,
        unit_path: settings.unit_path(),
        unit: render_service_unit(&exec_start)?,
    })
}

/// Runs the install steps in order. The first failure stops the run and
/// leaves earlier steps in place.
pub struct Installer<'a, R: CommandRunner, S: ArtifactStore> {
    runner: &'a R,
    store: &'a S,
    settings: &'a InstallerSettings,
}

impl<'a, R: CommandRunner, S: ArtifactStore> Installer<'a, R, S> {
    pub fn new(runner: &'a R, store: &'a S, settings: &'a InstallerSettings) -> Self {
        Self { runner, store, settings }
    }

    pub fn install(&self, config: &InstallConfig) -> Result<(), AppError> {
        let artifacts = render_artifacts(config, self.settings)?;
        self.install_binary()?;
        self.write_config(config, &artifacts)?;
        self.install_service(&artifacts)?;
        self.start_service()
    }

    fn install_binary(&self) -> Result<(), AppError> {
        let script = self.settings.script_path();
        let script_name = self.settings.install_script_name.as_str();
        info!(url = %self.settings.install_script_url, "downloading install script");
        self.runner.run("curl", &[&self.settings.install_script_url, "-o", script_name])?;
        self.store.make_executable(script)?;
        self.runner.run(&self.settings.script_command(), &[])?;
        self.store.remove_file(script)?;
        debug!(script = script_name, "install script removed");
        Ok(())
    }

    fn write_config(
        &self,
        config: &InstallConfig,
        artifacts: &RenderedArtifacts,
    ) -> Result<(), AppError> {
        self.store.create_dir_all(&config.install_dir)?;
        for dir in config.data_dirs() {
            self.store.create_dir_all(dir)?;
        }
        self.store.write_file(&artifacts.config_path, &artifacts.config_yaml)?;
        info!(path = %artifacts.config_path.display(), "wrote server configuration");
        Ok(())
    }

    fn install_service(&self, artifacts: &RenderedArtifacts) -> Result<(), AppError> {
        self.store.write_file(&artifacts.unit_path, &artifacts.unit)?;
        info!(path = %artifacts.unit_path.display(), "wrote service unit");
        self.runner.run(SYSTEMCTL, &["daemon-reload"])
    }

    fn start_service(&self) -> Result<(), AppError> {
        let service = self.settings.service_name.as_str();
        self.runner.run(SYSTEMCTL, &["start", service])?;
        self.runner.run(SYSTEMCTL, &["status", service])
    }
}
