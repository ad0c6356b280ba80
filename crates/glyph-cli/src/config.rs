//! Configuration from environment variables

use std::env;

use chess_glyphs::Mode;
use tracing::debug;

use crate::error::CliError;

#[cfg(target_os = "macos")]
const DEFAULT_CLIPBOARD_CMD: &str = "pbcopy";
#[cfg(target_os = "windows")]
const DEFAULT_CLIPBOARD_CMD: &str = "clip";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_CLIPBOARD_CMD: &str = "xclip -selection clipboard";

#[derive(Clone, Debug)]
pub struct Config {
    /// Mode used when no --mode/--greek flag is given
    pub default_mode: Mode,

    /// Program and arguments that read clipboard text from stdin
    pub clipboard_command: Vec<String>,
}

impl Config {
    /// Load configuration from `PGN_GLYPHS_*` environment variables.
    pub fn load() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `load` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_mode: Mode = match lookup("PGN_GLYPHS_MODE") {
            Some(raw) => raw.parse()?,
            None => Mode::default(),
        };

        let clipboard_raw = lookup("PGN_GLYPHS_CLIPBOARD_CMD")
            .unwrap_or_else(|| DEFAULT_CLIPBOARD_CMD.to_string());
        let clipboard_command: Vec<String> =
            clipboard_raw.split_whitespace().map(String::from).collect();
        if clipboard_command.is_empty() {
            return Err(CliError::Config(
                "PGN_GLYPHS_CLIPBOARD_CMD is empty".to_string(),
            ));
        }

        debug!(mode = %default_mode, clipboard = %clipboard_raw, "Loaded config");

        Ok(Self {
            default_mode,
            clipboard_command,
        })
    }
}
