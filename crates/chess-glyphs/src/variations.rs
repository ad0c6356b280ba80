//! Nested layout for parenthesized variations.

/// One level of variation indentation.
pub const INDENT_UNIT: &str = "  ";

/// Break the text at every parenthesis and indent by nesting depth.
///
/// Each `(` starts a new line indented at the depth it opens from; each `)`
/// is followed by a new line indented at the depth it closes to. Unmatched
/// `)` never push the depth below zero. The result is trimmed.
pub fn format_nested_variations(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut depth: usize = 0;

    for ch in text.chars() {
        match ch {
            '(' => {
                out.push('\n');
                push_indent(&mut out, depth);
                out.push('(');
                depth += 1;
            }
            ')' => {
                out.push(')');
                depth = depth.saturating_sub(1);
                out.push('\n');
                push_indent(&mut out, depth);
            }
            _ => out.push(ch),
        }
    }

    out.trim().to_string()
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT_UNIT);
    }
}
