//! Pitch-class reduction of parsed chord labels.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::models::label::ParsedChordLabel;
use crate::theory;

/// A note identity in 12-tone equal temperament, in [0, 11]
pub type PitchClass = u8;

/// A chord reduced to absolute pitch classes
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PitchClassChord {
    pub root: Option<PitchClass>,
    pub bass: Option<PitchClass>,
    pub pitch_classes: BTreeSet<PitchClass>,
    pub is_nochord: bool,
}

impl PitchClassChord {
    /// The no-chord value: no root, no bass, empty set
    pub fn no_chord() -> Self {
        Self {
            root: None,
            bass: None,
            pitch_classes: BTreeSet::new(),
            is_nochord: true,
        }
    }

    /// Reduce a parsed label to its pitch-class representation.
    ///
    /// The root is included first, then every shorthand offset, include
    /// degree and the bass, each mapped `(root + offset) mod 12`. Omit
    /// degrees are applied strictly after inclusion, so an omission can
    /// cancel any pitch class, the root's included. The bass pitch class is
    /// computed independently and never re-inserted after an omission.
    pub fn from_label(label: &ParsedChordLabel) -> Result<Self, ChordError> {
        let root_token = match label.root() {
            Some(root) => root,
            None => return Ok(Self::no_chord()),
        };
        let root_pc = theory::note_to_pitch_class(root_token)?;

        let mut offsets: Vec<i32> = Vec::new();
        if let Some(shorthand) = label.shorthand() {
            let quality = theory::shorthand_offsets(shorthand)
                .ok_or_else(|| ChordError::InvalidLabel(shorthand.to_string()))?;
            offsets.extend_from_slice(quality);
        }
        for degree in label.degree_list_include() {
            offsets.push(theory::degree_to_semitones(degree)?);
        }
        let bass_offset = match label.bass() {
            Some(bass) => Some(theory::degree_to_semitones(bass)?),
            None => None,
        };
        if let Some(offset) = bass_offset {
            offsets.push(offset);
        }

        let mut pitch_classes = BTreeSet::new();
        pitch_classes.insert(root_pc);
        for offset in &offsets {
            pitch_classes.insert(add_mod12(root_pc, *offset));
        }
        for degree in label.degree_list_omit() {
            let pc = add_mod12(root_pc, theory::degree_to_semitones(degree)?);
            pitch_classes.remove(&pc);
        }

        let bass = bass_offset.map(|offset| add_mod12(root_pc, offset));
        Ok(Self {
            root: Some(root_pc),
            bass,
            pitch_classes,
            is_nochord: false,
        })
    }
}

fn add_mod12(root: PitchClass, offset: i32) -> PitchClass {
    (root as i32 + offset).rem_euclid(12) as PitchClass
}
