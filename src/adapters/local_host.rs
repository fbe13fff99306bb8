use std::path::Path;

use nix::unistd::{AccessFlags, access};

use crate::ports::HostEnvironment;

/// The machine the wizard runs on.
#[derive(Debug, Clone, Default)]
pub struct LocalHost;

impl LocalHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for LocalHost {
    fn os(&self) -> &str {
        std::env::consts::OS
    }

    fn can_write(&self, dir: &Path) -> bool {
        access(dir, AccessFlags::W_OK).is_ok()
    }
}
