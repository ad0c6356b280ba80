//! Fixed lookup tables: piece letters to figurine glyphs, files to Greek letters.

use shakmaty::{Color, Role};

/// File letters and their Greek transliteration, a..h.
pub const GREEK_FILES: [(char, char); 8] = [
    ('a', 'α'),
    ('b', 'β'),
    ('c', 'γ'),
    ('d', 'δ'),
    ('e', 'ε'),
    ('f', 'ζ'),
    ('g', 'η'),
    ('h', 'θ'),
];

/// Map an upper-case SAN piece letter to its role.
pub fn piece_role(letter: char) -> Option<Role> {
    match letter {
        'K' => Some(Role::King),
        'Q' => Some(Role::Queen),
        'R' => Some(Role::Rook),
        'B' => Some(Role::Bishop),
        'N' => Some(Role::Knight),
        'P' => Some(Role::Pawn),
        _ => None,
    }
}

/// Glyph for a piece moved by `color`.
///
/// White moves use the solid figurines, black moves the outlined ones.
pub fn piece_glyph(role: Role, color: Color) -> char {
    match (color, role) {
        (Color::White, Role::King) => '♚',
        (Color::White, Role::Queen) => '♛',
        (Color::White, Role::Rook) => '♜',
        (Color::White, Role::Bishop) => '♝',
        (Color::White, Role::Knight) => '♞',
        (Color::White, Role::Pawn) => '♟',
        (Color::Black, Role::King) => '♔',
        (Color::Black, Role::Queen) => '♕',
        (Color::Black, Role::Rook) => '♖',
        (Color::Black, Role::Bishop) => '♗',
        (Color::Black, Role::Knight) => '♘',
        (Color::Black, Role::Pawn) => '♙',
    }
}

/// Greek letter for a file letter, if `ch` is one of a..h.
pub fn greek_file(ch: char) -> Option<char> {
    GREEK_FILES
        .iter()
        .find(|(file, _)| *file == ch)
        .map(|(_, greek)| *greek)
}

/// Replace every file letter in `text` with its Greek counterpart.
pub fn transliterate_files(text: &str) -> String {
    text.chars().map(|c| greek_file(c).unwrap_or(c)).collect()
}
