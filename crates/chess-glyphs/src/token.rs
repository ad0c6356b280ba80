//! Move-text tokenizer.
//!
//! A line is split on whitespace and every word is classified as a move-number
//! marker, a piece move or anything else. Words carrying their move number
//! (`1.Nf3`, `7...O-O`) are split into the marker and the move first.

use std::sync::LazyLock;

use regex::Regex;
use shakmaty::{Color, Role};

use crate::glyphs::piece_role;

static ATTACHED_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.+)([^.].*)$").expect("attached move number regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Ends with `.`; white moves next.
    WhiteMarker,
    /// Ends with `...`; black moves next.
    BlackMarker,
    /// Starts with a piece letter.
    Piece(Role),
    /// Pawn moves, castling, results, anything unrecognised.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToken<'a> {
    pub raw: &'a str,
    pub kind: TokenKind,
}

impl<'a> MoveToken<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let kind = if raw.ends_with("...") {
            TokenKind::BlackMarker
        } else if raw.ends_with('.') {
            TokenKind::WhiteMarker
        } else {
            match raw.chars().next().and_then(piece_role) {
                Some(role) => TokenKind::Piece(role),
                None => TokenKind::Other,
            }
        };
        Self { raw, kind }
    }

    /// Side to move after this token, if it is a move-number marker.
    pub fn forced_color(&self) -> Option<Color> {
        match self.kind {
            TokenKind::WhiteMarker => Some(Color::White),
            TokenKind::BlackMarker => Some(Color::Black),
            TokenKind::Piece(_) | TokenKind::Other => None,
        }
    }
}

/// Split `12...Nf6` into `("12...", "Nf6")`. Returns None for words without
/// an attached move number, including bare markers like `12.`.
pub fn split_move_number(word: &str) -> Option<(&str, &str)> {
    let cap = ATTACHED_NUMBER_RE.captures(word)?;
    Some((cap.get(1)?.as_str(), cap.get(2)?.as_str()))
}

/// Tokenize one line of move text.
pub fn tokenize_line(line: &str) -> Vec<MoveToken<'_>> {
    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        match split_move_number(word) {
            Some((number, mv)) => {
                tokens.push(MoveToken::classify(number));
                tokens.push(MoveToken::classify(mv));
            }
            None => tokens.push(MoveToken::classify(word)),
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(MoveToken::classify("1.").kind, TokenKind::WhiteMarker);
        assert_eq!(MoveToken::classify("23...").kind, TokenKind::BlackMarker);
        assert_eq!(MoveToken::classify("...").kind, TokenKind::BlackMarker);
        assert_eq!(MoveToken::classify("4.").forced_color(), Some(Color::White));
        assert_eq!(MoveToken::classify("4...").forced_color(), Some(Color::Black));
    }

    #[test]
    fn test_classify_moves() {
        assert_eq!(MoveToken::classify("Nf3").kind, TokenKind::Piece(Role::Knight));
        assert_eq!(MoveToken::classify("Qxd8+").kind, TokenKind::Piece(Role::Queen));
        assert_eq!(MoveToken::classify("e4").kind, TokenKind::Other);
        assert_eq!(MoveToken::classify("O-O").kind, TokenKind::Other);
        assert_eq!(MoveToken::classify("1-0").kind, TokenKind::Other);
        assert_eq!(MoveToken::classify("e4").forced_color(), None);
    }

    #[test]
    fn test_split_move_number() {
        assert_eq!(split_move_number("1.Nf3"), Some(("1.", "Nf3")));
        assert_eq!(split_move_number("12...Qxd5"), Some(("12...", "Qxd5")));
        assert_eq!(split_move_number("1."), None);
        assert_eq!(split_move_number("1...."), None);
        assert_eq!(split_move_number("Nf3"), None);
        assert_eq!(split_move_number("(3.Nc3"), None);
    }

    #[test]
    fn test_tokenize_line() {
        let raws: Vec<&str> = tokenize_line("1.e4 e5  2. Nf3")
            .into_iter()
            .map(|t| t.raw)
            .collect();
        assert_eq!(raws, vec!["1.", "e4", "e5", "2.", "Nf3"]);
        assert!(tokenize_line("   ").is_empty());
    }
}
