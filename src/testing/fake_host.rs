use std::path::Path;

use crate::ports::HostEnvironment;

/// Host with a fixed OS name and write permission.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub os: String,
    pub writable: bool,
}

impl FakeHost {
    pub fn linux_root() -> Self {
        Self { os: "linux".to_string(), writable: true }
    }

    pub fn linux_user() -> Self {
        Self { os: "linux".to_string(), writable: false }
    }

    pub fn macos() -> Self {
        Self { os: "macos".to_string(), writable: true }
    }
}

impl HostEnvironment for FakeHost {
    fn os(&self) -> &str {
        &self.os
    }

    fn can_write(&self, _dir: &Path) -> bool {
        self.writable
    }
}
