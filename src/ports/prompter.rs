use crate::domain::{AppError, Validation};

/// Port for asking the operator typed questions.
///
/// Validators run on the raw answer text. A rejected answer is reported
/// inline and the same question is asked again; validation failures never
/// surface as `Err`.
pub trait Prompter {
    /// Ask for free text. `default` is offered when present.
    fn ask_string(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<String, AppError>;

    /// Ask for an integer. Answers that do not parse are rejected inline.
    fn ask_integer(
        &mut self,
        message: &str,
        default: i64,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<i64, AppError>;

    /// Ask for a float. Answers that do not parse are rejected inline.
    fn ask_float(
        &mut self,
        message: &str,
        default: f64,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<f64, AppError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError>;

    /// Select one or more integers from `start..start + count`.
    ///
    /// Re-asks until at least one value is chosen.
    fn multi_select_range(
        &mut self,
        message: &str,
        start: u32,
        count: u32,
    ) -> Result<Vec<u32>, AppError>;
}
