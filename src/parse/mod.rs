//! Grammar-based chord label parsing.
//!
//! `tokens` holds the lexical fragments, `degree_list` the sub-parser for
//! parenthesized degree lists, and `grammar` the ordered production rules.

pub mod degree_list;
pub mod grammar;
pub mod tokens;

// Re-export commonly used functions
pub use degree_list::parse_degree_list;
pub use grammar::{is_chord_label, parse_chord_label, NO_CHORD};
pub use tokens::{is_degree, is_note, is_shorthand};
