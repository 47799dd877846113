use crate::error::{Result, WizardError};
use crate::prompt::Prompter;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};
use std::io::ErrorKind;
use zeroize::Zeroizing;

/// Interactive prompts on the controlling terminal.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn map_err(err: dialoguer::Error) -> WizardError {
    let dialoguer::Error::IO(err) = err;
    match err.kind() {
        ErrorKind::Interrupted | ErrorKind::UnexpectedEof => WizardError::Aborted,
        _ => WizardError::Io {
            operation: "read",
            target: "terminal".to_string(),
            source: err,
        },
    }
}

impl Prompter for TermPrompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(map_err)
    }

    fn ask_bool(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(map_err)?
            .ok_or(WizardError::Aborted)
    }

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64> {
        Input::<i64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .map_err(map_err)
    }

    fn ask_password(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_confirmation("Please confirm", "Values do not match")
            .allow_empty_password(false)
            .interact()
            .map(Zeroizing::new)
            .map_err(map_err)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(map_err)
    }
}
