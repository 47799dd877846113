//! Clipboard access by piping into a copy command.

use anyhow::{bail, Context, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

pub trait Clipboard {
    /// Copy `value` to the clipboard; `name` identifies the secret it belongs to.
    fn copy(&mut self, name: &str, value: &[u8]) -> Result<()>;
}

/// Tools tried in order when no command is configured.
const KNOWN_TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
];

pub struct CommandClipboard {
    command: Option<Vec<String>>,
}

impl CommandClipboard {
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self { command }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        match &self.command {
            Some(cmd) => vec![cmd.clone()],
            None => KNOWN_TOOLS
                .iter()
                .map(|tool| tool.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&mut self, name: &str, value: &[u8]) -> Result<()> {
        for argv in self.candidates() {
            let Some((program, args)) = argv.split_first() else {
                bail!("clipboard command is empty");
            };
            let mut child = match Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(program = %program, "clipboard tool not found");
                    continue;
                }
                Err(e) => return Err(e).with_context(|| format!("spawn {}", program)),
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(value)
                    .with_context(|| format!("write to {}", program))?;
            }
            let status = child
                .wait()
                .with_context(|| format!("wait for {}", program))?;
            if !status.success() {
                bail!("{} exited with {}", program, status);
            }
            tracing::debug!(secret = name, program = %program, "copied to clipboard");
            return Ok(());
        }
        bail!("no clipboard tool found (install wl-copy, xclip, xsel or pbcopy, or use --print)")
    }
}
