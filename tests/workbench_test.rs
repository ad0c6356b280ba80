//! Integration tests: drive the workbench through the Clear / Convert / Copy
//! actions the way the command-line front end does.

mod common;

use chess_glyphs::{Layout, Mode, Rendering};
use common::SAMPLE_GAME;
use glyph_cli::clipboard::MemoryClipboard;
use glyph_cli::config::Config;
use glyph_cli::error::CliError;
use glyph_cli::workbench::{Action, Workbench};
use pretty_assertions::assert_eq;

#[test]
fn test_convert_greek_then_copy() {
    let mut clipboard = MemoryClipboard::default();
    let mut bench = Workbench::new();
    bench.set_input(SAMPLE_GAME);

    bench.apply(Action::ConvertGreek, &mut clipboard).unwrap();
    bench.apply(Action::Copy, &mut clipboard).unwrap();

    let copied = clipboard.contents.unwrap();
    assert_eq!(copied, bench.output());
    assert!(copied.starts_with("1. ε4 ε5 2. ♞ζ3 ♘γ6"));
    assert_eq!(copied.lines().count(), 3);
}

#[test]
fn test_reconvert_replaces_output() {
    let mut clipboard = MemoryClipboard::default();
    let mut bench = Workbench::new();
    bench.set_input("1. e4 e5");

    bench.apply(Action::ConvertGreek, &mut clipboard).unwrap();
    assert_eq!(bench.output(), "1. ε4 ε5");
    bench.apply(Action::ConvertPlain, &mut clipboard).unwrap();
    assert_eq!(bench.output(), "1. e4 e5");
    assert_eq!(bench.input(), "1. e4 e5");
}

#[test]
fn test_copy_after_clear_copies_nothing() {
    let mut clipboard = MemoryClipboard::default();
    let mut bench = Workbench::new();
    bench.set_input(SAMPLE_GAME);
    bench.apply(Action::ConvertPlain, &mut clipboard).unwrap();
    bench.apply(Action::Clear, &mut clipboard).unwrap();
    bench.apply(Action::Copy, &mut clipboard).unwrap();

    assert_eq!(clipboard.contents.as_deref(), Some(""));
}

#[test]
fn test_json_report_round_trip() {
    let mut clipboard = MemoryClipboard::default();
    let mut bench = Workbench::with_layout(Layout::Flat);
    bench.set_input(SAMPLE_GAME);
    bench.apply(Action::convert(Mode::Plain), &mut clipboard).unwrap();

    let json = bench.report_json().unwrap().unwrap();
    let parsed: Rendering = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.mode, Mode::Plain);
    let keys: Vec<&str> = parsed.tags.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(keys, vec!["Event", "White", "Black", "Result"]);
    assert!(!parsed.output.contains('\n'));
}

#[test]
fn test_config_mode_feeds_action() {
    let config = Config::from_lookup(|key| match key {
        "PGN_GLYPHS_MODE" => Some("greek".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(Action::convert(config.default_mode), Action::ConvertGreek);

    let err = Config::from_lookup(|key| match key {
        "PGN_GLYPHS_MODE" => Some("klingon".to_string()),
        _ => None,
    })
    .unwrap_err();
    assert!(matches!(err, CliError::Mode(_)));
    assert!(err.to_string().contains("klingon"));
}
