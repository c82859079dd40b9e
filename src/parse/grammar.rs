//! Chord label grammar: ordered production rules.
//!
//! Four alternatives are tried in fixed priority order; the first one that
//! matches the **entire** trimmed input wins:
//! 1. `root ':' shorthand ['(' degree-list ')'] ['/' bass]`
//! 2. `root ':' '(' degree-list ')' ['/' bass]`
//! 3. `root ['/' bass]`
//! 4. the no-chord literal `N`
//!
//! Priority order matters: a bare root is a textual prefix of the shorthand
//! and explicit-degree forms, so alternative 3 must come after 1 and 2.

use crate::error::ChordError;
use crate::models::label::{DegreeList, ParsedChordLabel};
use crate::parse::degree_list::parse_degree_list;
use crate::parse::tokens::{self, scan_note};

/// The no-chord sentinel label
pub const NO_CHORD: &str = "N";

/// True iff some grammar alternative fully matches `label`
pub fn is_chord_label(label: &str) -> bool {
    parse_chord_label(label).is_ok()
}

/// Parse a chord label into its structured form.
///
/// Leading/trailing spaces are stripped before matching; partial matches are
/// rejected. Fails with [`ChordError::InvalidLabel`] when no alternative
/// matches.
pub fn parse_chord_label(label: &str) -> Result<ParsedChordLabel, ChordError> {
    let s = label.trim_matches(' ');

    if let Some(parsed) = parse_shorthand_chord(s) {
        log::debug!("'{}' parsed as shorthand chord", s);
        return Ok(parsed);
    }
    if let Some(parsed) = parse_degree_chord(s) {
        log::debug!("'{}' parsed as explicit-degree chord", s);
        return Ok(parsed);
    }
    if let Some(parsed) = parse_bare_root(s) {
        log::debug!("'{}' parsed as bare root", s);
        return Ok(parsed);
    }
    if s == NO_CHORD {
        log::debug!("'{}' parsed as no-chord", s);
        return Ok(ParsedChordLabel::NoChord);
    }

    Err(ChordError::InvalidLabel(label.to_string()))
}

// ============================================================================
// Production Rules
// ============================================================================

/// Alternative 1: `root ':' shorthand ['(' degree-list ')'] ['/' bass]`
fn parse_shorthand_chord(s: &str) -> Option<ParsedChordLabel> {
    let (root, rest) = scan_note(s)?;
    let rest = rest.strip_prefix(':')?;

    // the shorthand runs up to the degree list or bass, if any
    let end = rest.find(['(', '/']).unwrap_or(rest.len());
    let (shorthand, rest) = rest.split_at(end);
    if !tokens::is_shorthand(shorthand) {
        return None;
    }

    let (degrees, rest) = scan_degree_list(rest)?;
    let bass = scan_bass(rest)?;
    Some(ParsedChordLabel::Shorthand {
        root: root.to_string(),
        shorthand: shorthand.to_string(),
        degrees,
        bass,
    })
}

/// Alternative 2: `root ':' '(' degree-list ')' ['/' bass]`
fn parse_degree_chord(s: &str) -> Option<ParsedChordLabel> {
    let (root, rest) = scan_note(s)?;
    let rest = rest.strip_prefix(':')?;
    if !rest.starts_with('(') {
        return None;
    }
    let (degrees, rest) = scan_degree_list(rest)?;
    let bass = scan_bass(rest)?;
    Some(ParsedChordLabel::Degrees {
        root: root.to_string(),
        degrees,
        bass,
    })
}

/// Alternative 3: `root ['/' bass]`
fn parse_bare_root(s: &str) -> Option<ParsedChordLabel> {
    let (root, rest) = scan_note(s)?;
    let bass = scan_bass(rest)?;
    Some(ParsedChordLabel::Root {
        root: root.to_string(),
        bass,
    })
}

/// Scan an optional parenthesized degree list; an absent list parses as
/// empty. The matcher strips the parentheses, so the sub-parser only ever
/// sees the interior.
fn scan_degree_list(s: &str) -> Option<(DegreeList, &str)> {
    let inner = match s.strip_prefix('(') {
        Some(inner) => inner,
        None => return Some((DegreeList::default(), s)),
    };
    let close = inner.find(')')?;
    let interior = &inner[..close];
    if !degree_list_matches(interior) {
        return None;
    }
    Some((parse_degree_list(interior), &inner[close + 1..]))
}

/// Validate a degree-list interior: comma-separated degrees, optional single
/// space after each comma, optional `*` omit prefix per degree
fn degree_list_matches(interior: &str) -> bool {
    if interior.is_empty() {
        return false;
    }
    for (i, raw) in interior.split(',').enumerate() {
        let token = if i > 0 {
            raw.strip_prefix(' ').unwrap_or(raw)
        } else {
            raw
        };
        let token = token.strip_prefix('*').unwrap_or(token);
        if !tokens::is_degree(token) {
            return false;
        }
    }
    true
}

/// Scan the optional `'/' bass` tail. Returns `None` when the remaining
/// input is neither empty nor a valid bass (rejecting the whole alternative,
/// since matches must consume the entire input).
fn scan_bass(s: &str) -> Option<Option<String>> {
    if s.is_empty() {
        return Some(None);
    }
    let bass = s.strip_prefix('/')?;
    if tokens::is_degree(bass) {
        Some(Some(bass.to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_chord() {
        let parsed = parse_chord_label("G#:maj").unwrap();
        assert_eq!(parsed.root(), Some("G#"));
        assert_eq!(parsed.shorthand(), Some("maj"));
        assert_eq!(parsed.bass(), None);
        assert!(!parsed.is_nochord());
    }

    #[test]
    fn test_shorthand_with_degrees_and_bass() {
        let parsed = parse_chord_label("A:maj(7)/2").unwrap();
        assert_eq!(parsed.root(), Some("A"));
        assert_eq!(parsed.shorthand(), Some("maj"));
        assert_eq!(parsed.degree_list_include(), ["7".to_string()]);
        assert_eq!(parsed.bass(), Some("2"));
    }

    #[test]
    fn test_longest_shorthand_wins() {
        // "maj7" must not stop at "maj" leaving an unmatched "7"
        let parsed = parse_chord_label("C:maj7").unwrap();
        assert_eq!(parsed.shorthand(), Some("maj7"));
        let parsed = parse_chord_label("C:minmaj7/7").unwrap();
        assert_eq!(parsed.shorthand(), Some("minmaj7"));
        assert_eq!(parsed.bass(), Some("7"));
    }

    #[test]
    fn test_explicit_degree_chord() {
        let parsed = parse_chord_label("A:(1, 4, *5)/4").unwrap();
        assert_eq!(parsed.root(), Some("A"));
        assert_eq!(parsed.shorthand(), None);
        assert_eq!(parsed.degree_list_include(), ["1".to_string(), "4".to_string()]);
        assert_eq!(parsed.degree_list_omit(), ["5".to_string()]);
        assert_eq!(parsed.bass(), Some("4"));
    }

    #[test]
    fn test_bare_root() {
        let parsed = parse_chord_label("A/3").unwrap();
        assert_eq!(parsed.root(), Some("A"));
        assert_eq!(parsed.shorthand(), None);
        assert_eq!(parsed.bass(), Some("3"));

        let parsed = parse_chord_label("Bb").unwrap();
        assert_eq!(parsed.root(), Some("Bb"));
        assert_eq!(parsed.bass(), None);
    }

    #[test]
    fn test_nochord() {
        let parsed = parse_chord_label("N").unwrap();
        assert!(parsed.is_nochord());
        assert_eq!(parsed.root(), None);
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(
            parse_chord_label("  G#:maj  ").unwrap(),
            parse_chord_label("G#:maj").unwrap()
        );
        assert_eq!(parse_chord_label(" N ").unwrap(), ParsedChordLabel::NoChord);
    }

    #[test]
    fn test_partial_matches_rejected() {
        for label in [
            "A:maj extra",
            "A:maj(7",
            "A:()",
            "A:maj/",
            "A:maj/X",
            "A:(1,)",
            "A//3",
            "A:",
            "NN",
        ] {
            assert!(
                parse_chord_label(label).is_err(),
                "{label} should not parse"
            );
        }
    }

    #[test]
    fn test_invalid_label_error() {
        let err = parse_chord_label("X:invalidquality").unwrap_err();
        assert_eq!(err, ChordError::InvalidLabel("X:invalidquality".to_string()));
    }

    #[test]
    fn test_is_chord_label() {
        assert!(is_chord_label("A:maj(7)/2"));
        assert!(is_chord_label("A:(1, 4, *5)/4"));
        assert!(is_chord_label("A/3"));
        assert!(is_chord_label("N"));
        assert!(!is_chord_label("X:invalidquality"));
        assert!(!is_chord_label(""));
    }

    #[test]
    fn test_bass_is_a_degree_not_a_note() {
        // the core grammar only accepts degree basses
        assert!(parse_chord_label("C:maj/G").is_err());
        assert!(parse_chord_label("C:maj/b7").is_ok());
    }
}
