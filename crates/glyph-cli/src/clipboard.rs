//! Clipboard sinks for the Copy action.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::Config;
use crate::error::CliError;

pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), CliError>;
}

/// Pipes text into a system helper such as `pbcopy` or `xclip`.
#[derive(Clone, Debug)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command: &[String]) -> Result<Self, CliError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| CliError::Clipboard("No clipboard command configured".into()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, CliError> {
        Self::new(&config.clipboard_command)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CliError> {
        debug!(program = %self.program, "Spawning clipboard helper");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| CliError::Clipboard(format!("Failed to start {}: {e}", self.program)))?;

        // stdin must be closed before waiting or the helper never exits
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // reap the helper even when the write failed
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(CliError::Clipboard(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}

/// Keeps copied text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CliError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
