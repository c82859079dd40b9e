//! Extended chord label grammar for corpus cleanup work.
//!
//! A looser companion to the core grammar: the quality is free-form text and
//! the bass may be a note name as well as a degree. Useful for surveying and
//! rewriting label sets whose vocabulary does not fit the fixed shorthand
//! table. Every rewrite returns a new value; nothing is mutated in place.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::parse::grammar::NO_CHORD;
use crate::parse::tokens::{self, scan_note};
use crate::theory;

/// A chord label split into root, free-form quality text and optional bass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtendedLabel {
    root: Option<String>,
    kind: String,
    bass: Option<String>,
}

impl ExtendedLabel {
    /// Parse `root` + free-form quality + optional `/bass`, or the `N`
    /// sentinel. The bass tail is recognized only when it is a complete note
    /// or degree token; otherwise the `/` stays part of the quality text.
    pub fn parse(label: &str) -> Result<Self, ChordError> {
        let s = label.trim_matches(' ');
        if s == NO_CHORD {
            return Ok(Self {
                root: None,
                kind: String::new(),
                bass: None,
            });
        }
        let (root, rest) =
            scan_note(s).ok_or_else(|| ChordError::InvalidLabel(label.to_string()))?;
        let (kind, bass) = match rest.rfind('/') {
            Some(i) if tokens::is_note(&rest[i + 1..]) || tokens::is_degree(&rest[i + 1..]) => {
                (&rest[..i], Some(rest[i + 1..].to_string()))
            }
            _ => (rest, None),
        };
        Ok(Self {
            root: Some(root.to_string()),
            kind: kind.to_string(),
            bass,
        })
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// The quality text, including any leading `:` (e.g. `":maj"`)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn bass(&self) -> Option<&str> {
        self.bass.as_deref()
    }

    pub fn is_nochord(&self) -> bool {
        self.root.is_none()
    }

    /// Render back to label text
    pub fn label(&self) -> String {
        let root = match &self.root {
            Some(root) => root,
            None => return NO_CHORD.to_string(),
        };
        match &self.bass {
            Some(bass) => format!("{}{}/{}", root, self.kind, bass),
            None => format!("{}{}", root, self.kind),
        }
    }

    /// Rewrite a note bass as a degree relative to the root; degree basses
    /// and bassless labels pass through unchanged.
    pub fn bass_as_degree(self) -> Result<Self, ChordError> {
        let note_bass = match (&self.root, &self.bass) {
            (Some(root), Some(bass)) if tokens::is_note(bass) => {
                Some((root.clone(), bass.clone()))
            }
            _ => None,
        };
        match note_bass {
            Some((root, bass)) => {
                let degree = theory::interval_to_degree(&root, &bass)?;
                Ok(Self {
                    bass: Some(degree),
                    ..self
                })
            }
            None => Ok(self),
        }
    }

    /// Remap the quality text through a substitution map; unmapped kinds
    /// pass through unchanged.
    pub fn map_kind(self, kinds: &HashMap<String, String>) -> Self {
        match kinds.get(&self.kind) {
            Some(mapped) => Self {
                kind: mapped.clone(),
                ..self
            },
            None => self,
        }
    }
}

/// Collect the distinct quality strings across a label set
pub fn unique_kinds(labels: &[&str]) -> Result<BTreeSet<String>, ChordError> {
    labels
        .iter()
        .map(|label| ExtendedLabel::parse(label).map(|e| e.kind().to_string()))
        .collect()
}

/// Rewrite note basses as degrees across a label set
pub fn bass_to_degree(labels: &[&str]) -> Result<Vec<String>, ChordError> {
    labels
        .iter()
        .map(|label| Ok(ExtendedLabel::parse(label)?.bass_as_degree()?.label()))
        .collect()
}

/// Remap quality strings across a label set
pub fn map_kinds(labels: &[&str], kinds: &HashMap<String, String>) -> Result<Vec<String>, ChordError> {
    labels
        .iter()
        .map(|label| Ok(ExtendedLabel::parse(label)?.map_kind(kinds).label()))
        .collect()
}
