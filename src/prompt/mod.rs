//! Prompt provider abstraction.
//!
//! Every question the wizards ask goes through [`Prompter`], so the
//! terminal can be swapped for a scripted double in tests.

use crate::error::Result;
use zeroize::Zeroizing;

pub mod scripted;
pub mod term;

pub use scripted::{Answer, ScriptedPrompter};
pub use term::TermPrompter;

pub trait Prompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String>;

    fn ask_bool(&mut self, prompt: &str, default: bool) -> Result<bool>;

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64>;

    fn ask_password(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    /// Index of the chosen item, or `None` if the user backed out.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}
