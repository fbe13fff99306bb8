use std::collections::VecDeque;

use crate::domain::{AppError, Validation};
use crate::ports::Prompter;

/// One scripted operator response.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Accept the offered default.
    Default,
    Text(String),
    YesNo(bool),
    Select(Vec<u32>),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

/// Prompter that replays a fixed list of answers.
///
/// Answers rejected by a validator are recorded in `rejections` and the
/// next scripted answer is tried, the way a terminal re-asks.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self { answers: answers.into_iter().collect(), ..Self::default() }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer, AppError> {
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", message)))
    }

    fn next_text(
        &mut self,
        message: &str,
        default: Option<String>,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<String, AppError> {
        self.asked.push(message.to_string());
        loop {
            let candidate = match self.next(message)? {
                Answer::Default => default.clone().ok_or_else(|| {
                    AppError::Prompt(format!("'{}' has no default to accept", message))
                })?,
                Answer::Text(value) => value,
                other => {
                    return Err(AppError::Prompt(format!(
                        "expected text for '{}', got {:?}",
                        message, other
                    )));
                }
            };
            match validator(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(reason) => self.rejections.push(reason),
            }
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_string(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<String, AppError> {
        let default = default.filter(|value| !value.is_empty()).map(str::to_string);
        self.next_text(message, default, validator)
    }

    fn ask_integer(
        &mut self,
        message: &str,
        default: i64,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<i64, AppError> {
        let answer = self.next_text(message, Some(default.to_string()), &|answer: &str| {
            answer.parse::<i64>().map_err(|_| format!("Invalid Integer. Got {}", answer))?;
            validator(answer)
        })?;
        answer.parse::<i64>().map_err(|e| AppError::Prompt(e.to_string()))
    }

    fn ask_float(
        &mut self,
        message: &str,
        default: f64,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<f64, AppError> {
        let answer = self.next_text(message, Some(format!("{:.2}", default)), &|answer: &str| {
            answer.parse::<f64>().map_err(|_| format!("Invalid number. Got {}", answer))?;
            validator(answer)
        })?;
        answer.parse::<f64>().map_err(|e| AppError::Prompt(e.to_string()))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        self.asked.push(message.to_string());
        match self.next(message)? {
            Answer::Default => Ok(default),
            Answer::YesNo(value) => Ok(value),
            other => {
                Err(AppError::Prompt(format!("expected yes/no for '{}', got {:?}", message, other)))
            }
        }
    }

    fn multi_select_range(
        &mut self,
        message: &str,
        start: u32,
        count: u32,
    ) -> Result<Vec<u32>, AppError> {
        self.asked.push(message.to_string());
        loop {
            match self.next(message)? {
                Answer::Select(chosen) if chosen.is_empty() => {
                    self.rejections.push("At least one option must be selected.".to_string());
                }
                Answer::Select(chosen) => {
                    if let Some(bad) = chosen.iter().find(|v| **v < start || **v >= start + count) {
                        return Err(AppError::Prompt(format!(
                            "{} is not offered by '{}'",
                            bad, message
                        )));
                    }
                    return Ok(chosen);
                }
                other => {
                    return Err(AppError::Prompt(format!(
                        "expected selection for '{}', got {:?}",
                        message, other
                    )));
                }
            }
        }
    }
}
