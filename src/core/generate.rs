//! Value generation: passphrases, random charset passwords and PINs.

use crate::constants;
use crate::error::{Result, WizardError};
use rand::{rngs::OsRng, Rng};
use std::sync::OnceLock;
use zeroize::Zeroizing;

/// Which generator to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRequest {
    /// Capitalized dictionary words joined by single spaces.
    Passphrase { words: usize },
    /// Alphanumeric characters, optionally extended with symbols.
    Charset { length: usize, symbols: bool },
    /// Digits only.
    Pin { length: usize },
}

/// Single dispatch point for all generators.
pub fn generate(request: GenerationRequest) -> Result<Zeroizing<String>> {
    match request {
        GenerationRequest::Passphrase { words } => {
            require_in_range("Word count", words)?;
            Ok(passphrase(words))
        }
        GenerationRequest::Charset { length, symbols } => {
            require_in_range("Password length", length)?;
            let mut charset = constants::CHARSET_ALPHANUMERIC.to_string();
            if symbols {
                charset.push_str(constants::CHARSET_SYMBOLS);
            }
            Ok(from_charset(length, &charset))
        }
        GenerationRequest::Pin { length } => {
            require_in_range("PIN length", length)?;
            Ok(from_charset(length, constants::CHARSET_DIGITS))
        }
    }
}

fn require_in_range(field: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(WizardError::Validation {
            field,
            reason: "must be at least 1".to_string(),
        });
    }
    if value > constants::MAX_GENERATED_LENGTH {
        return Err(WizardError::Validation {
            field,
            reason: format!(
                "must be at most {}, got {}",
                constants::MAX_GENERATED_LENGTH,
                value
            ),
        });
    }
    Ok(())
}

fn from_charset(length: usize, charset: &str) -> Zeroizing<String> {
    let chars: Vec<char> = charset.chars().collect();
    let mut rng = OsRng;
    let mut out = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        out.push(chars[rng.gen_range(0..chars.len())]);
    }
    out
}

fn passphrase(words: usize) -> Zeroizing<String> {
    let list = wordlist();
    let mut rng = OsRng;
    let mut out = Zeroizing::new(String::new());
    for i in 0..words {
        if i > 0 {
            out.push(' ');
        }
        let word = list[rng.gen_range(0..list.len())];
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn wordlist() -> &'static [&'static str] {
    static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    WORDS
        .get_or_init(|| {
            include_str!("../assets/wordlist.txt")
                .lines()
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .collect()
        })
        .as_slice()
}
