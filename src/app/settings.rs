//! Fixed host locations the installer works with.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, DEFAULT_INSTALL_DIR};

pub const DEFAULT_SERVICE_DIR: &str = "/etc/systemd/system/";
pub const DEFAULT_SERVICE_NAME: &str = "dgraph";
pub const DEFAULT_BINARY_PATH: &str = "/usr/local/bin/dgraph";
pub const DEFAULT_INSTALL_SCRIPT_URL: &str = "https://nightly.dgraph.io";
pub const DEFAULT_INSTALL_SCRIPT_NAME: &str = "install_dgraph.sh";

/// Installer settings. Every field has a default and may be overridden
/// from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallerSettings {
    /// Directory holding systemd unit files; must be writable.
    pub service_dir: PathBuf,
    pub service_name: String,
    /// Server binary the install script places on the host.
    pub binary_path: PathBuf,
    pub install_script_url: String,
    /// File name the install script is downloaded to, in the working directory.
    pub install_script_name: String,
    /// Install directory offered by the first wizard gate.
    pub default_install_dir: PathBuf,
    /// Print the artifacts instead of installing.
    pub dry_run: bool,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            service_dir: PathBuf::from(DEFAULT_SERVICE_DIR),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            binary_path: PathBuf::from(DEFAULT_BINARY_PATH),
            install_script_url: DEFAULT_INSTALL_SCRIPT_URL.to_string(),
            install_script_name: DEFAULT_INSTALL_SCRIPT_NAME.to_string(),
            default_install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            dry_run: false,
        }
    }
}

impl InstallerSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.install_script_url.trim().is_empty() {
            return Err(AppError::config_error("install script URL must not be empty"));
        }
        if !is_plain_file_name(&self.service_name) {
            return Err(AppError::config_error(format!(
                "invalid service name '{}': must be a plain name",
                self.service_name
            )));
        }
        if !is_plain_file_name(&self.install_script_name) {
            return Err(AppError::config_error(format!(
                "invalid install script name '{}': must be a plain file name",
                self.install_script_name
            )));
        }
        if !self.default_install_dir.is_absolute() {
            return Err(AppError::config_error(format!(
                "install directory must be absolute: {}",
                self.default_install_dir.display()
            )));
        }
        Ok(())
    }

    /// Path of the generated unit file.
    pub fn unit_path(&self) -> PathBuf {
        self.service_dir.join(format!("{}.service", self.service_name))
    }

    pub fn script_path(&self) -> &Path {
        Path::new(&self.install_script_name)
    }

    /// Program name that runs the downloaded script from the working directory.
    pub fn script_command(&self) -> String {
        format!("./{}", self.install_script_name)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}
