use crate::domain::AppError;

/// Port for running external programs synchronously.
pub trait CommandRunner {
    /// Run `program` with `args`, inheriting stdio.
    ///
    /// A spawn failure or non-zero exit is returned as
    /// [`AppError::CommandFailed`].
    fn run(&self, program: &str, args: &[&str]) -> Result<(), AppError>;
}
