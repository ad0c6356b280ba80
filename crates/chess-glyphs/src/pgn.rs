//! PGN tag-pair utilities — lightweight regex-based header reader.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\[(\w+)\s+"([^"]*)"\]"#).expect("tag pair regex"));

/// A `[Key "Value"]` header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    pub key: String,
    pub value: String,
}

/// Lines starting with `[` are metadata, never move text.
pub fn is_tag_line(line: &str) -> bool {
    line.starts_with('[')
}

/// Collect the well-formed tag pairs of a PGN text, in order.
/// Tag lines that don't match `[Key "Value"]` are ignored.
pub fn extract_tags(pgn: &str) -> Vec<TagPair> {
    pgn.lines()
        .filter(|line| is_tag_line(line))
        .filter_map(|line| TAG_RE.captures(line))
        .map(|cap| TagPair {
            key: cap[1].to_string(),
            value: cap[2].to_string(),
        })
        .collect()
}

/// Extract a string value from a PGN header (e.g. White, Event).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str().to_string();
    if value.is_empty() { None } else { Some(value) }
}
