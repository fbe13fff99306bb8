mod artifact_store;
mod command_runner;
mod host_environment;
mod prompter;

pub use artifact_store::ArtifactStore;
pub use command_runner::CommandRunner;
pub use host_environment::HostEnvironment;
pub use prompter::Prompter;
