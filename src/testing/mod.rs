mod fake_host;
mod memory_artifact_store;
mod recording_runner;
mod scripted_prompter;

pub use fake_host::FakeHost;
pub use memory_artifact_store::MemoryArtifactStore;
pub use recording_runner::RecordingRunner;
pub use scripted_prompter::{Answer, ScriptedPrompter};
