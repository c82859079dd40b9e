//! Music-theory lookup tables and pitch arithmetic.
//!
//! The tables are fixed domain knowledge: natural letter semitones, diatonic
//! interval spans (unreduced, so interval 9 is 14 semitones, not 2) and the
//! chord-quality shorthand vocabulary. They are static, immutable and
//! initialized once.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::ChordError;

lazy_static! {
    /// Chord-quality shorthand -> semitone offsets relative to the root (unreduced)
    static ref SHORTHANDS: HashMap<&'static str, &'static [i32]> = {
        let mut m: HashMap<&'static str, &'static [i32]> = HashMap::new();
        // triads
        m.insert("maj", &[0, 4, 7]);
        m.insert("min", &[0, 3, 7]);
        m.insert("dim", &[0, 3, 6]);
        m.insert("aug", &[0, 4, 8]);
        // sevenths
        m.insert("maj7", &[0, 4, 7, 11]);
        m.insert("min7", &[0, 3, 7, 10]);
        m.insert("7", &[0, 4, 7, 10]);
        m.insert("dim7", &[0, 3, 6, 9]);
        m.insert("hdim7", &[0, 3, 6, 10]);
        m.insert("minmaj7", &[0, 3, 7, 11]);
        // sixths
        m.insert("maj6", &[0, 4, 7, 9]);
        m.insert("min6", &[0, 3, 7, 9]);
        // ninths
        m.insert("9", &[0, 4, 7, 10, 14]);
        m.insert("maj9", &[0, 4, 7, 11, 14]);
        m.insert("min9", &[0, 3, 7, 10, 14]);
        // suspensions
        m.insert("sus4", &[0, 5, 7]);
        m.insert("sus2", &[0, 2, 7]);
        m
    };
}

/// Semitone of a natural letter (C=0, D=2, E=4, F=5, G=7, A=9, B=11)
fn natural_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Unreduced semitone span of an interval number (1-13), diatonic mapping
fn interval_semitones(number: u32) -> Option<i32> {
    match number {
        1 => Some(0),
        2 => Some(2),
        3 => Some(4),
        4 => Some(5),
        5 => Some(7),
        6 => Some(9),
        7 => Some(11),
        8 => Some(12),
        9 => Some(14),
        10 => Some(16),
        11 => Some(17),
        12 => Some(19),
        13 => Some(21),
        _ => None,
    }
}

/// Semitone offsets of a shorthand quality, or `None` for an unknown name
pub fn shorthand_offsets(name: &str) -> Option<&'static [i32]> {
    SHORTHANDS.get(name).copied()
}

fn count_accidentals(token: &str) -> i32 {
    let sharps = token.matches('#').count() as i32;
    let flats = token.matches('b').count() as i32;
    sharps - flats
}

/// Resolve a degree token (`"3"`, `"b7"`, `"#11"`) to its semitone offset
/// from the root. The offset is not reduced modulo 12.
pub fn degree_to_semitones(degree: &str) -> Result<i32, ChordError> {
    let number: String = degree.chars().filter(|c| *c != '#' && *c != 'b').collect();
    let number: u32 = number
        .parse()
        .map_err(|_| ChordError::UnknownInterval(degree.to_string()))?;
    let base = interval_semitones(number)
        .ok_or_else(|| ChordError::UnknownInterval(degree.to_string()))?;
    Ok(base + count_accidentals(degree))
}

/// Resolve a note token (`"C"`, `"G#"`, `"Bbb"`) to a pitch class in [0, 11].
///
/// Accidental effect is additive (+1 per sharp, -1 per flat); the result is
/// reduced modulo 12, so extreme stacking wraps around (`"Cbb"` -> 10).
pub fn note_to_pitch_class(note: &str) -> Result<u8, ChordError> {
    let mut naturals = note.chars().filter(|c| *c != '#' && *c != 'b');
    let letter = naturals
        .next()
        .ok_or_else(|| ChordError::UnknownNote(note.to_string()))?;
    if naturals.next().is_some() {
        return Err(ChordError::UnknownNote(note.to_string()));
    }
    let base = natural_semitone(letter).ok_or_else(|| ChordError::UnknownNote(note.to_string()))?;
    Ok((base + count_accidentals(note)).rem_euclid(12) as u8)
}

/// Position of a natural letter in the musical alphabet (A=0 .. G=6)
fn letter_index(note: &str) -> Result<i32, ChordError> {
    let letter = note
        .chars()
        .find(|c| *c != '#' && *c != 'b')
        .ok_or_else(|| ChordError::UnknownNote(note.to_string()))?;
    if !('A'..='G').contains(&letter) {
        return Err(ChordError::UnknownNote(note.to_string()));
    }
    Ok(letter as i32 - 'A' as i32)
}

/// Express `note` as a degree relative to `root`.
///
/// The interval number comes from the cyclic letter distance (so A to C is
/// always some kind of third); the accidentals make up the difference between
/// the actual pitch-class distance and the diatonic span of that interval.
/// Examples: (A, C) -> `b3`, (G, C#) -> `#4`, (Cb, G#) -> `##5`.
pub fn interval_to_degree(root: &str, note: &str) -> Result<String, ChordError> {
    let steps = (letter_index(note)? - letter_index(root)?).rem_euclid(7);
    let number = (steps + 1) as u32;
    let base = interval_semitones(number)
        .ok_or_else(|| ChordError::UnknownInterval(number.to_string()))?;
    let actual = (note_to_pitch_class(note)? as i32 - note_to_pitch_class(root)? as i32).rem_euclid(12);

    // normalize the accidental count to (-6, +6]
    let mut alter = (actual - base).rem_euclid(12);
    if alter > 6 {
        alter -= 12;
    }

    let marks = if alter >= 0 {
        "#".repeat(alter as usize)
    } else {
        "b".repeat(-alter as usize)
    };
    Ok(format!("{}{}", marks, number))
}
