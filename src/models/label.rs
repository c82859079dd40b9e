//! Parsed chord label structures.
//!
//! A parsed label is a tagged union over the four grammar alternatives, so
//! "exactly one of shorthand or explicit degree list, or neither" holds at
//! the type level. The flattened accessors mirror the field contract of the
//! matcher: fields absent from the matched alternative read as `None`/empty.

use serde::{Deserialize, Serialize};

/// A degree list split into included and omitted degrees.
///
/// Both sides hold raw degree strings in source order; duplicates are
/// preserved as given.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeList {
    pub include: Vec<String>,
    pub omit: Vec<String>,
}

impl DegreeList {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.omit.is_empty()
    }
}

/// A chord label parsed into one of the four grammar alternatives
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ParsedChordLabel {
    /// `root ':' shorthand ['(' degree-list ')'] ['/' bass]`
    Shorthand {
        root: String,
        shorthand: String,
        degrees: DegreeList,
        bass: Option<String>,
    },
    /// `root ':' '(' degree-list ')' ['/' bass]`
    Degrees {
        root: String,
        degrees: DegreeList,
        bass: Option<String>,
    },
    /// `root ['/' bass]`
    Root { root: String, bass: Option<String> },
    /// The `N` sentinel: no harmonic content
    NoChord,
}

impl ParsedChordLabel {
    /// Root note token, `None` only for no-chord
    pub fn root(&self) -> Option<&str> {
        match self {
            Self::Shorthand { root, .. } | Self::Degrees { root, .. } | Self::Root { root, .. } => {
                Some(root)
            }
            Self::NoChord => None,
        }
    }

    /// Shorthand quality name, if the shorthand alternative matched
    pub fn shorthand(&self) -> Option<&str> {
        match self {
            Self::Shorthand { shorthand, .. } => Some(shorthand),
            _ => None,
        }
    }

    /// Included degrees of the degree list (empty when no list was present)
    pub fn degree_list_include(&self) -> &[String] {
        match self {
            Self::Shorthand { degrees, .. } | Self::Degrees { degrees, .. } => &degrees.include,
            _ => &[],
        }
    }

    /// Omitted degrees of the degree list (empty when no list was present)
    pub fn degree_list_omit(&self) -> &[String] {
        match self {
            Self::Shorthand { degrees, .. } | Self::Degrees { degrees, .. } => &degrees.omit,
            _ => &[],
        }
    }

    /// Bass degree token, if present
    pub fn bass(&self) -> Option<&str> {
        match self {
            Self::Shorthand { bass, .. } | Self::Degrees { bass, .. } | Self::Root { bass, .. } => {
                bass.as_deref()
            }
            Self::NoChord => None,
        }
    }

    pub fn is_nochord(&self) -> bool {
        matches!(self, Self::NoChord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nochord_accessors() {
        let label = ParsedChordLabel::NoChord;
        assert!(label.is_nochord());
        assert_eq!(label.root(), None);
        assert_eq!(label.shorthand(), None);
        assert_eq!(label.bass(), None);
        assert!(label.degree_list_include().is_empty());
        assert!(label.degree_list_omit().is_empty());
    }

    #[test]
    fn test_flattened_accessors() {
        let label = ParsedChordLabel::Shorthand {
            root: "G#".to_string(),
            shorthand: "maj7".to_string(),
            degrees: DegreeList {
                include: vec!["9".to_string()],
                omit: vec!["5".to_string()],
            },
            bass: Some("3".to_string()),
        };
        assert!(!label.is_nochord());
        assert_eq!(label.root(), Some("G#"));
        assert_eq!(label.shorthand(), Some("maj7"));
        assert_eq!(label.degree_list_include(), ["9".to_string()]);
        assert_eq!(label.degree_list_omit(), ["5".to_string()]);
        assert_eq!(label.bass(), Some("3"));
    }

    #[test]
    fn test_bare_root_has_no_degrees() {
        let label = ParsedChordLabel::Root {
            root: "A".to_string(),
            bass: None,
        };
        assert_eq!(label.shorthand(), None);
        assert!(label.degree_list_include().is_empty());
    }
}
