use crate::ports::{ArtifactStore, CommandRunner, HostEnvironment, Prompter};

/// Application context holding dependencies for the install flow.
pub struct AppContext<P: Prompter, H: HostEnvironment, R: CommandRunner, S: ArtifactStore> {
    prompter: P,
    host: H,
    runner: R,
    store: S,
}

impl<P: Prompter, H: HostEnvironment, R: CommandRunner, S: ArtifactStore> AppContext<P, H, R, S> {
    /// Create a new application context.
    pub fn new(prompter: P, host: H, runner: R, store: S) -> Self {
        Self { prompter, host, runner, store }
    }

    /// Get a mutable reference to the operator prompter.
    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Get a reference to the host environment.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get a reference to the external command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (P, H, R, S) {
        (self.prompter, self.host, self.runner, self.store)
    }
}
