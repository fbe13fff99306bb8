use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Command runner that records invocations instead of spawning them.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command whose rendered form starts with `prefix`.
    pub fn failing_on(prefix: impl Into<String>) -> Self {
        Self { fail_on: Some(prefix.into()), ..Self::default() }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let rendered =
            std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        self.commands.borrow_mut().push(rendered.clone());
        if self.fail_on.as_deref().is_some_and(|prefix| rendered.starts_with(prefix)) {
            return Err(AppError::CommandFailed {
                command: rendered,
                details: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
