//! Canned-answer prompter for tests and non-interactive runs.

use crate::error::{Result, WizardError};
use crate::prompt::Prompter;
use std::collections::VecDeque;
use zeroize::Zeroizing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Bool(bool),
    Int(i64),
    Password(String),
    Choice(usize),
    /// Accept the prompt's default.
    Default,
    /// Cancel the prompt.
    Abort,
}

impl Answer {
    pub fn text(value: &str) -> Self {
        Answer::Text(value.to_string())
    }

    pub fn password(value: &str) -> Self {
        Answer::Password(value.to_string())
    }
}

/// Answers prompts from a fixed queue and records every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// How many prompts contained `needle`.
    pub fn count_asked(&self, needle: &str) -> usize {
        self.asked.iter().filter(|p| p.contains(needle)).count()
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| WizardError::Parse {
            what: format!("scripted answer for '{}'", prompt),
            reason: "no answers left".to_string(),
        })
    }
}

fn mismatch(prompt: &str, expected: &str, got: &Answer) -> WizardError {
    WizardError::Parse {
        what: format!("scripted answer for '{}'", prompt),
        reason: format!("expected {}, got {:?}", expected, got),
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(value) => Ok(value),
            Answer::Default => Ok(default.to_string()),
            Answer::Abort => Err(WizardError::Aborted),
            other => Err(mismatch(prompt, "text", &other)),
        }
    }

    fn ask_bool(&mut self, prompt: &str, default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Bool(value) => Ok(value),
            Answer::Default => Ok(default),
            Answer::Abort => Err(WizardError::Aborted),
            other => Err(mismatch(prompt, "bool", &other)),
        }
    }

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64> {
        match self.next(prompt)? {
            Answer::Int(value) => Ok(value),
            Answer::Default => Ok(default),
            Answer::Abort => Err(WizardError::Aborted),
            other => Err(mismatch(prompt, "int", &other)),
        }
    }

    fn ask_password(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        match self.next(prompt)? {
            Answer::Password(value) | Answer::Text(value) => Ok(Zeroizing::new(value)),
            Answer::Abort => Err(WizardError::Aborted),
            other => Err(mismatch(prompt, "password", &other)),
        }
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        match self.next(prompt)? {
            Answer::Choice(index) if index < items.len() => Ok(Some(index)),
            Answer::Default => Ok(Some(0)),
            Answer::Abort => Ok(None),
            other => Err(mismatch(prompt, "choice", &other)),
        }
    }
}
