//! Lexical fragments of the chord grammar.
//!
//! A note is a natural letter A-G followed by a run of sharps then a run of
//! flats; a degree is sharps/flats followed by an interval number 1-13; the
//! shorthand vocabulary comes from the fixed quality table.

use crate::theory;

/// Scan a note token at the start of `s`, returning `(token, rest)`.
///
/// Accepts a natural letter, then any number of `#`, then any number of `b`
/// (that textual grouping; arithmetically the order would not matter).
pub(crate) fn scan_note(s: &str) -> Option<(&str, &str)> {
    let first = s.chars().next()?;
    if !('A'..='G').contains(&first) {
        return None;
    }
    let bytes = s.as_bytes();
    let mut end = 1;
    while end < bytes.len() && bytes[end] == b'#' {
        end += 1;
    }
    while end < bytes.len() && bytes[end] == b'b' {
        end += 1;
    }
    Some((&s[..end], &s[end..]))
}

/// True iff `s` is a complete note token
pub fn is_note(s: &str) -> bool {
    matches!(scan_note(s), Some((_, rest)) if rest.is_empty())
}

/// True iff `s` is a complete degree token: `#`/`b` modifiers then an
/// interval number in [1, 13]
pub fn is_degree(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i] == b'#' {
        i += 1;
    }
    while i < bytes.len() && bytes[i] == b'b' {
        i += 1;
    }
    let digits = &s[i..];
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(digits.parse::<u32>(), Ok(n) if (1..=13).contains(&n))
}

/// True iff `s` is a known chord-quality shorthand name
pub fn is_shorthand(s: &str) -> bool {
    theory::shorthand_offsets(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_note() {
        assert_eq!(scan_note("G#:maj"), Some(("G#", ":maj")));
        assert_eq!(scan_note("Bbb/3"), Some(("Bbb", "/3")));
        assert_eq!(scan_note("A"), Some(("A", "")));
        assert_eq!(scan_note("H"), None);
        assert_eq!(scan_note(""), None);
    }

    #[test]
    fn test_is_note() {
        assert!(is_note("C"));
        assert!(is_note("G#"));
        assert!(is_note("Bb"));
        assert!(is_note("F##bb"));
        assert!(!is_note("c"));
        assert!(!is_note("N"));
        assert!(!is_note("Cb#")); // sharps must precede flats textually
        assert!(!is_note("C4"));
        assert!(!is_note(""));
    }

    #[test]
    fn test_is_degree() {
        assert!(is_degree("1"));
        assert!(is_degree("13"));
        assert!(is_degree("b3"));
        assert!(is_degree("bb3"));
        assert!(is_degree("#11"));
        assert!(!is_degree("14"));
        assert!(!is_degree("0"));
        assert!(!is_degree("01"));
        assert!(!is_degree("3b")); // modifiers come before the number
        assert!(!is_degree("*5")); // the omit marker is not part of the degree
        assert!(!is_degree(""));
    }

    #[test]
    fn test_is_shorthand() {
        for name in [
            "maj", "min", "dim", "aug", "maj7", "min7", "7", "dim7", "hdim7", "minmaj7", "maj6",
            "min6", "9", "maj9", "min9", "sus4", "sus2",
        ] {
            assert!(is_shorthand(name), "{name} should be a shorthand");
        }
        assert!(!is_shorthand("major"));
        assert!(!is_shorthand(""));
    }
}
