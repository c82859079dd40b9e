//! Data models for parsed chord labels and their pitch-class reductions.

pub mod label;
pub mod pitch_classes;

// Re-export commonly used types
pub use label::{DegreeList, ParsedChordLabel};
pub use pitch_classes::{PitchClass, PitchClassChord};
