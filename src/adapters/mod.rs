pub mod dialoguer_prompter;
pub mod filesystem_artifacts;
pub mod local_host;
pub mod system_command;
pub mod unit_template;

pub use dialoguer_prompter::DialoguerPrompter;
pub use filesystem_artifacts::FilesystemArtifactStore;
pub use local_host::LocalHost;
pub use system_command::SystemCommandRunner;
pub use unit_template::render_service_unit;
