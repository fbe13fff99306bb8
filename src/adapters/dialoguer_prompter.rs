//! Terminal prompts backed by `dialoguer`.

use std::io::ErrorKind;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect};

use crate::domain::{AppError, Validation};
use crate::ports::Prompter;

/// Interactive prompter for a real terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }

    fn ask_text(
        &self,
        message: &str,
        default: Option<String>,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<String, AppError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default);
        }
        input
            .validate_with(|answer: &String| validator(answer.as_str()))
            .interact_text()
            .map_err(|err| prompt_error(err, message))
    }
}

fn prompt_error(err: DialoguerError, message: &str) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => AppError::Cancelled,
        err => AppError::Prompt(format!("'{}': {}", message, err)),
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_string(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<String, AppError> {
        let default = default.filter(|value| !value.is_empty()).map(str::to_string);
        self.ask_text(message, default, validator)
    }

    fn ask_integer(
        &mut self,
        message: &str,
        default: i64,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<i64, AppError> {
        let answer = self.ask_text(message, Some(default.to_string()), &|answer: &str| {
            answer.parse::<i64>().map_err(|_| format!("Invalid Integer. Got {}", answer))?;
            validator(answer)
        })?;
        answer.parse::<i64>().map_err(|e| AppError::Prompt(format!("'{}': {}", message, e)))
    }

    fn ask_float(
        &mut self,
        message: &str,
        default: f64,
        validator: &dyn Fn(&str) -> Validation,
    ) -> Result<f64, AppError> {
        let answer = self.ask_text(message, Some(format!("{:.2}", default)), &|answer: &str| {
            answer.parse::<f64>().map_err(|_| format!("Invalid number. Got {}", answer))?;
            validator(answer)
        })?;
        answer.parse::<f64>().map_err(|e| AppError::Prompt(format!("'{}': {}", message, e)))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|err| prompt_error(err, message))
    }

    fn multi_select_range(
        &mut self,
        message: &str,
        start: u32,
        count: u32,
    ) -> Result<Vec<u32>, AppError> {
        let values: Vec<u32> = (start..start.saturating_add(count)).collect();
        let items: Vec<String> = values.iter().map(u32::to_string).collect();
        loop {
            let chosen = MultiSelect::with_theme(&self.theme)
                .with_prompt(message)
                .items(&items)
                .interact()
                .map_err(|err| prompt_error(err, message))?;
            if !chosen.is_empty() {
                return Ok(chosen.into_iter().map(|index| values[index]).collect());
            }
            println!("At least one option must be selected.");
        }
    }
}
