//! Chess move text to Unicode glyph conversion.
//!
//! Two pure transforms make up the pipeline: `convert::convert_symbols` swaps
//! piece letters for figurine glyphs (optionally spelling files in Greek) and
//! `variations::format_nested_variations` lays parenthesized variations out as
//! an indented tree. `render` composes them.

pub mod convert;
pub mod error;
pub mod glyphs;
pub mod pgn;
pub mod render;
pub mod token;
pub mod variations;

pub use convert::convert_symbols;
pub use render::{render, render_report, render_with, Layout, Mode, Rendering};
pub use variations::format_nested_variations;
