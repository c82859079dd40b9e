//! Chord label parsing library for music information retrieval.
//!
//! Parses chord labels written in the compact text syntax of Harte et al.,
//! "Symbolic Representation of Musical Chords: A Proposed Syntax for Text
//! Annotations" (ISMIR 2005) — root note, shorthand quality, explicit degree
//! lists with omit markers, bass degree, and the `N` no-chord sentinel — and
//! reduces them to absolute pitch-class sets modulo 12.
//!
//! ```
//! use chordlabel::chord_label_to_pitch_classes;
//!
//! let chord = chord_label_to_pitch_classes("G#:maj").unwrap();
//! assert_eq!(chord.root, Some(8));
//! assert_eq!(chord.pitch_classes.iter().copied().collect::<Vec<_>>(), [0, 3, 8]);
//! ```
//!
//! Everything is a pure transformation of an input string into a value:
//! no shared mutable state, no I/O, safe for unbounded parallel use.

pub mod error;
pub mod ext;
pub mod models;
pub mod parse;
pub mod theory;

// Re-export commonly used types
pub use error::ChordError;
pub use models::{DegreeList, ParsedChordLabel, PitchClass, PitchClassChord};
pub use parse::{is_chord_label, is_degree, is_note, is_shorthand, parse_chord_label};

/// Parse a chord label and reduce it to its pitch-class representation.
///
/// Fails with [`ChordError::InvalidLabel`] when no grammar alternative
/// matches, or with [`ChordError::UnknownInterval`]/[`ChordError::UnknownNote`]
/// for structured inputs bypassing the grammar.
pub fn chord_label_to_pitch_classes(label: &str) -> Result<PitchClassChord, ChordError> {
    let parsed = parse_chord_label(label)?;
    PitchClassChord::from_label(&parsed)
}
