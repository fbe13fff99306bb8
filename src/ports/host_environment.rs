use std::path::Path;

/// Port for inspecting the host before anything is prompted or written.
pub trait HostEnvironment {
    /// Operating system name in `std::env::consts::OS` form.
    fn os(&self) -> &str;

    /// Whether the current user may write into `dir`.
    fn can_write(&self, dir: &Path) -> bool;
}
