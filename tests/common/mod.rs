/// A short game with headers, one variation and a result.
#[allow(dead_code)]
pub const SAMPLE_GAME: &str = r#"[Event "Club Championship"]
[White "Alpha"]
[Black "Beta"]
[Result "1-0"]

1. e4 e5 2. Nf3 Nc6 (2... d6 3. d4) 3. Bb5 a6
4. Ba4 Nf6 5. O-O Be7 1-0
"#;

/// Move text with a variation nested inside another.
#[allow(dead_code)]
pub const NESTED_VARIATIONS: &str = "1. e4 (1. d4 d5 (1... Nf6 2. c4) 2. c4) 1... e5";

/// Leading spaces of every line.
#[allow(dead_code)]
pub fn indents(text: &str) -> Vec<usize> {
    text.lines()
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .collect()
}
