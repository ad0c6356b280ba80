//! Symbol conversion: piece letters to figurine glyphs.

use shakmaty::Color;
use tracing::{debug, trace};

use crate::glyphs::{piece_glyph, transliterate_files};
use crate::pgn::is_tag_line;
use crate::token::{tokenize_line, TokenKind};

/// Convert move text to glyph notation on a single line.
///
/// Tag lines (`[White "..."]`) and empty lines are dropped. Each remaining line
/// starts with white to move; the side alternates after every token that is not
/// a move-number marker, and `N.` / `N...` markers reset it to white / black.
/// With `use_greek_files` the file letters a..h are written in Greek.
pub fn convert_symbols(text: &str, use_greek_files: bool) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        if is_tag_line(line) {
            trace!(line, "skipping tag line");
            continue;
        }
        // a line of only spaces is kept and joins as an empty entry
        lines.push(convert_line(line, use_greek_files));
    }

    debug!(lines = lines.len(), greek = use_greek_files, "converted move text");
    lines.join(" ")
}

/// Convert a single line of move text.
pub fn convert_line(line: &str, use_greek_files: bool) -> String {
    let mut color = Color::White;
    let mut out = Vec::new();

    for token in tokenize_line(line) {
        if let Some(next) = token.forced_color() {
            out.push(token.raw.to_string());
            color = next;
            continue;
        }

        let converted = match token.kind {
            TokenKind::Piece(role) => {
                // piece letters are ASCII, so the rest starts at byte 1
                let rest = &token.raw[1..];
                let mut s = String::with_capacity(token.raw.len() + 2);
                s.push(piece_glyph(role, color));
                s.push_str(&spell_files(rest, use_greek_files));
                s
            }
            _ => spell_files(token.raw, use_greek_files),
        };
        out.push(converted);
        color = !color;
    }

    out.join(" ")
}

fn spell_files(text: &str, use_greek_files: bool) -> String {
    if use_greek_files {
        transliterate_files(text)
    } else {
        text.to_string()
    }
}
