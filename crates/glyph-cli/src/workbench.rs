//! Input/output buffers and the four user actions.
//!
//! The front end reads text into the workbench, fires actions and reads the
//! output back; nothing here touches a terminal or a window.

use chess_glyphs::{render_report, Layout, Mode, Rendering};
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear,
    ConvertPlain,
    ConvertGreek,
    Copy,
}

impl Action {
    pub fn convert(mode: Mode) -> Self {
        match mode {
            Mode::Plain => Action::ConvertPlain,
            Mode::Greek => Action::ConvertGreek,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workbench {
    input: String,
    layout: Layout,
    rendering: Option<Rendering>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Rendered text of the last conversion; empty before any conversion.
    pub fn output(&self) -> &str {
        self.rendering.as_ref().map_or("", |r| r.output.as_str())
    }

    pub fn apply(&mut self, action: Action, clipboard: &mut dyn Clipboard) -> Result<(), CliError> {
        match action {
            Action::Clear => {
                self.input.clear();
                self.rendering = None;
                debug!("Cleared workbench");
            }
            Action::ConvertPlain => self.convert(Mode::Plain),
            Action::ConvertGreek => self.convert(Mode::Greek),
            Action::Copy => {
                let text = self.output();
                clipboard.set_text(text)?;
                info!(chars = text.chars().count(), "Copied output to clipboard");
            }
        }
        Ok(())
    }

    /// Pretty JSON of the last conversion's report, or None before any conversion.
    pub fn report_json(&self) -> Result<Option<String>, CliError> {
        match &self.rendering {
            Some(rendering) => Ok(Some(rendering.to_json()?)),
            None => Ok(None),
        }
    }

    fn convert(&mut self, mode: Mode) {
        let rendering = render_report(&self.input, mode, self.layout);
        debug!(
            %mode,
            input_len = self.input.len(),
            output_len = rendering.output.len(),
            tags = rendering.tags.len(),
            "Converted input"
        );
        self.rendering = Some(rendering);
    }
}
