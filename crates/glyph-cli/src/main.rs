//! PGN glyph converter
//!
//! Reads move text from a file or stdin, renders piece letters as Unicode
//! figurines (optionally with Greek file letters), lays variations out as an
//! indented tree and writes the result to stdout or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chess_glyphs::pgn::extract_header;
use chess_glyphs::{Layout, Mode};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glyph_cli::clipboard::CommandClipboard;
use glyph_cli::config::Config;
use glyph_cli::workbench::{Action, Workbench};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render chess move text with Unicode piece glyphs")]
struct Cli {
    /// Input file; stdin when omitted or "-"
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// plain (en) or greek (gr)
    #[arg(short, long, value_name = "MODE", conflicts_with = "greek")]
    mode: Option<Mode>,

    /// Shorthand for --mode greek
    #[arg(short, long)]
    greek: bool,

    /// Keep variations on one line
    #[arg(long)]
    flat: bool,

    /// Print a JSON report with the header tags
    #[arg(long)]
    json: bool,

    /// Also copy the output to the system clipboard
    #[arg(short, long)]
    copy: bool,
}

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let mode = if cli.greek {
        Mode::Greek
    } else {
        cli.mode.unwrap_or(config.default_mode)
    };
    let layout = if cli.flat { Layout::Flat } else { Layout::Nested };

    let text = read_input(cli.input.as_deref())?;
    if let (Some(white), Some(black)) = (
        extract_header(&text, "White"),
        extract_header(&text, "Black"),
    ) {
        info!(%white, %black, "Converting game");
    }

    let mut clipboard = CommandClipboard::from_config(&config)?;
    let mut workbench = Workbench::with_layout(layout);
    workbench.set_input(text);
    workbench.apply(Action::convert(mode), &mut clipboard)?;

    let rendered = if cli.json {
        workbench.report_json()?.unwrap_or_default()
    } else {
        workbench.output().to_string()
    };
    write_output(cli.output.as_deref(), &rendered)?;

    if cli.copy {
        info!(program = clipboard.program(), "Copying output");
        workbench.apply(Action::Copy, &mut clipboard)?;
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            info!(path = %p.display(), "Reading input");
            fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            fs::write(p, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", p.display()))?;
            info!(path = %p.display(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write stdout")?;
        }
    }
    Ok(())
}
