//! Secret-creation wizards.
//!
//! [`Creator`] owns the collaborators for one run: the store, the prompt
//! provider, the clipboard and the output stream. Each wizard collects all
//! of its fields first and writes to the store exactly once at the end, so
//! an abort at any prompt leaves the store untouched.

use crate::core::generate::{self, GenerationRequest};
use crate::core::naming;
use crate::core::sanitize;
use crate::core::store::SecretStore;
use crate::error::{Result, WizardError};
use crate::models::config::GenerationSection;
use crate::models::secret::Secret;
use crate::models::wizard_kind::WizardKind;
use crate::prompt::Prompter;
use crate::util::clipboard::Clipboard;
use dialoguer::console::style;
use std::io::Write;
use zeroize::Zeroizing;

mod aws;
mod gcp;
mod generic;
mod pin;
mod website;

/// Outcome of a successful wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub kind: WizardKind,
    pub name: String,
    /// The primary value was generated rather than typed in.
    pub generated: bool,
}

/// Generated or user-supplied primary value.
struct Value {
    secret: Zeroizing<String>,
    generated: bool,
}

/// A required name component must keep a path segment after sanitizing.
fn require_segment(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(WizardError::empty(field));
    }
    if sanitize::sanitize(value).is_empty() {
        return Err(WizardError::Validation {
            field,
            reason: format!("'{}' contains no usable characters", value),
        });
    }
    Ok(())
}

pub struct Creator<'a> {
    store: &'a mut dyn SecretStore,
    prompter: &'a mut dyn Prompter,
    clipboard: &'a mut dyn Clipboard,
    out: &'a mut dyn Write,
    generation: GenerationSection,
    print: bool,
}

impl<'a> Creator<'a> {
    pub fn new(
        store: &'a mut dyn SecretStore,
        prompter: &'a mut dyn Prompter,
        clipboard: &'a mut dyn Clipboard,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            store,
            prompter,
            clipboard,
            out,
            generation: GenerationSection::default(),
            print: false,
        }
    }

    /// Defaults offered by the generation prompts.
    pub fn with_generation(mut self, generation: GenerationSection) -> Self {
        self.generation = generation;
        self
    }

    /// Print generated values instead of copying them to the clipboard.
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Show the type menu, then run the chosen wizard.
    pub fn run(&mut self) -> Result<Created> {
        let items: Vec<String> = WizardKind::ALL
            .iter()
            .map(|kind| kind.label().to_string())
            .collect();
        let choice = self.prompter.select(
            "Please select the type of secret you would like to create",
            &items,
        )?;
        match choice.and_then(|index| WizardKind::ALL.get(index).copied()) {
            Some(kind) => self.run_kind(kind),
            None => Err(WizardError::Aborted),
        }
    }

    pub fn run_kind(&mut self, kind: WizardKind) -> Result<Created> {
        tracing::debug!(kind = ?kind, "starting wizard");
        match kind {
            WizardKind::Website => self.create_website(),
            WizardKind::Pin => self.create_pin(),
            WizardKind::Generic => self.create_generic(),
            WizardKind::AwsIam => self.create_aws(),
            WizardKind::GcpServiceAccount => self.create_gcp(),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(|source| WizardError::Io {
            operation: "write",
            target: "output".to_string(),
            source,
        })
    }

    fn header(&mut self, text: &str) -> Result<()> {
        let line = style(text).green().to_string();
        self.say(&line)
    }

    /// Ask for a name component that must not be empty.
    fn ask_required(&mut self, prompt: &str, field: &'static str) -> Result<String> {
        let value = self.prompter.ask_string(prompt, "")?;
        require_segment(field, &value)?;
        Ok(value)
    }

    /// Ask for an optional field. Failures other than abort yield an empty value.
    fn ask_optional(&mut self, prompt: &str) -> Result<String> {
        match self.prompter.ask_string(prompt, "") {
            Ok(value) => Ok(value),
            Err(WizardError::Aborted) => Err(WizardError::Aborted),
            Err(err) => {
                tracing::warn!(prompt, error = %err, "optional field left empty");
                Ok(String::new())
            }
        }
    }

    fn ask_count(&mut self, prompt: &str, default: usize, field: &'static str) -> Result<usize> {
        let default = i64::try_from(default).unwrap_or(i64::MAX);
        let value = self.prompter.ask_int(prompt, default)?;
        usize::try_from(value).map_err(|_| WizardError::Validation {
            field,
            reason: format!("must be at least 1, got {}", value),
        })
    }

    /// Ask whether to generate a password; otherwise read one.
    fn password_value(&mut self, password_prompt: &str) -> Result<Value> {
        if self
            .prompter
            .ask_bool("Do you want to generate a new password?", true)?
        {
            let secret = self.generate_password()?;
            return Ok(Value {
                secret,
                generated: true,
            });
        }
        let secret = self.prompter.ask_password(password_prompt)?;
        Ok(Value {
            secret,
            generated: false,
        })
    }

    /// Ask whether to generate a PIN; otherwise read one.
    fn pin_value(&mut self) -> Result<Value> {
        if self
            .prompter
            .ask_bool("Do you want to generate a new PIN?", true)?
        {
            let length = self.ask_count(
                "How long should the PIN be?",
                self.generation.pin_length,
                "PIN length",
            )?;
            let secret = generate::generate(GenerationRequest::Pin { length })?;
            return Ok(Value {
                secret,
                generated: true,
            });
        }
        let secret = self.prompter.ask_password("Please enter the PIN")?;
        Ok(Value {
            secret,
            generated: false,
        })
    }

    /// Passphrase or random charset password, as the user prefers.
    fn generate_password(&mut self) -> Result<Zeroizing<String>> {
        let request = if self
            .prompter
            .ask_bool("Do you want a rememberable password?", true)?
        {
            let words = self.ask_count(
                "How many words should be combined into a passphrase?",
                self.generation.passphrase_words,
                "Word count",
            )?;
            GenerationRequest::Passphrase { words }
        } else {
            let length = self.ask_count(
                "How long should the password be?",
                self.generation.password_length,
                "Password length",
            )?;
            let symbols = self
                .prompter
                .ask_bool("Do you want to include symbols?", self.generation.symbols)?;
            GenerationRequest::Charset { length, symbols }
        };
        generate::generate(request)
    }

    /// Pick the store prefix, build the canonical name, resolve a collision.
    fn secret_name(&mut self, kind: WizardKind, components: &[&str]) -> Result<String> {
        let prefix = naming::choose_store_prefix(&*self.store, &mut *self.prompter)?;
        let candidate = naming::build_name(&prefix, kind, components);
        tracing::debug!(name = %candidate, "candidate name");
        naming::resolve_collision(&*self.store, &mut *self.prompter, candidate)
    }

    fn commit(&mut self, name: &str, secret: &Secret) -> Result<()> {
        self.store
            .set(name, secret)
            .map_err(|e| WizardError::storage(name, e))?;
        let keys: Vec<&str> = secret.fields().iter().map(|f| f.key.as_str()).collect();
        tracing::info!(name, fields = ?keys, "secret created");
        Ok(())
    }

    /// Show or copy a generated value. User-supplied values are left alone.
    fn print_or_copy(&mut self, kind: WizardKind, name: &str, value: &Value) -> Result<()> {
        if !kind.generates_value() || !value.generated {
            return Ok(());
        }
        if self.print {
            let line = format!(
                "The generated password for {} is:\n{}",
                name,
                style(value.secret.as_str()).yellow()
            );
            return self.say(&line);
        }
        self.clipboard
            .copy(name, value.secret.as_bytes())
            .map_err(|e| WizardError::clipboard(name, e))?;
        self.say(&format!("Copied the generated password for {} to the clipboard", name))
    }
}
