//! Full rendering pipeline: symbol conversion followed by variation layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::convert_symbols;
use crate::error::ParseModeError;
use crate::pgn::{extract_tags, TagPair};
use crate::variations::format_nested_variations;

/// How file letters are spelled in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Plain,
    Greek,
}

impl Mode {
    pub fn uses_greek_files(self) -> bool {
        self == Mode::Greek
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Greek => "greek",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "en" => Ok(Mode::Plain),
            "greek" | "gr" => Ok(Mode::Greek),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Whether variations are laid out as an indented tree or left on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Nested,
    Flat,
}

/// Rendered output plus the header tags that were stripped from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    pub mode: Mode,
    pub tags: Vec<TagPair>,
    pub output: String,
}

impl Rendering {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Convert and lay out move text, as the Convert EN / Convert GR actions do.
pub fn render(text: &str, mode: Mode) -> String {
    render_with(text, mode, Layout::Nested)
}

pub fn render_with(text: &str, mode: Mode, layout: Layout) -> String {
    let converted = convert_symbols(text, mode.uses_greek_files());
    match layout {
        Layout::Nested => format_nested_variations(&converted),
        Layout::Flat => converted,
    }
}

pub fn render_report(text: &str, mode: Mode, layout: Layout) -> Rendering {
    Rendering {
        mode,
        tags: extract_tags(text),
        output: render_with(text, mode, layout),
    }
}
