//! Notes on a tablature staff
//!
//! Besides string and fret, a note carries simple on/off properties and a few
//! "special" properties that hold a value of their own (trill fret, tapped
//! harmonic fret, artificial harmonic, bend). Special properties can be
//! addressed generically through `SpecialNotePropertyKind`, which is what the
//! removal actions use to record and restore them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::chord_name::{Key, Variation};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimpleProperty {
    Tied,
    Muted,
    HammerOnOrPullOff,
    Ghost,
    NaturalHarmonic,
    Vibrato,
    WideVibrato,
    LetRing,
    PalmMuted,
    Tapped,
    Staccato,
    Accent,
    HeavyAccent,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HarmonicOctave {
    #[default]
    Octave,
    Octave15ma,
    Octave22ma,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ArtificialHarmonic {
    pub key: Key,
    pub variation: Variation,
    pub octave: HarmonicOctave,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BendType {
    #[default]
    NormalBend,
    BendAndRelease,
    BendAndHold,
    PreBend,
    PreBendAndRelease,
    PreBendAndHold,
    GradualRelease,
    ImmediateRelease,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bend {
    pub bend_type: BendType,
    /// Pitches are measured in quarter steps
    pub bent_pitch: i32,
    pub release_pitch: i32,
    pub duration: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialNotePropertyKind {
    Trill,
    TappedHarmonic,
    ArtificialHarmonic,
    Bend,
}

impl SpecialNotePropertyKind {
    pub fn name(&self) -> &'static str {
        match self {
            SpecialNotePropertyKind::Trill => "Trill",
            SpecialNotePropertyKind::TappedHarmonic => "Tapped Harmonic",
            SpecialNotePropertyKind::ArtificialHarmonic => "Artificial Harmonic",
            SpecialNotePropertyKind::Bend => "Bend",
        }
    }
}

/// Value of a special property, as stored on a note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialNoteProperty {
    Trill(i32),
    TappedHarmonic(i32),
    ArtificialHarmonic(ArtificialHarmonic),
    Bend(Bend),
}

impl SpecialNoteProperty {
    pub fn kind(&self) -> SpecialNotePropertyKind {
        match self {
            SpecialNoteProperty::Trill(_) => SpecialNotePropertyKind::Trill,
            SpecialNoteProperty::TappedHarmonic(_) => SpecialNotePropertyKind::TappedHarmonic,
            SpecialNoteProperty::ArtificialHarmonic(_) => {
                SpecialNotePropertyKind::ArtificialHarmonic
            }
            SpecialNoteProperty::Bend(_) => SpecialNotePropertyKind::Bend,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Note {
    /// 0 = highest string
    pub string: i32,
    pub fret: i32,
    pub properties: BTreeSet<SimpleProperty>,
    trill_fret: Option<i32>,
    tapped_harmonic_fret: Option<i32>,
    artificial_harmonic: Option<ArtificialHarmonic>,
    bend: Option<Bend>,
}

impl Note {
    pub fn new(string: i32, fret: i32) -> Self {
        Self {
            string,
            fret,
            ..Self::default()
        }
    }

    pub fn has_property(&self, property: SimpleProperty) -> bool {
        self.properties.contains(&property)
    }

    pub fn set_property(&mut self, property: SimpleProperty, set: bool) {
        if set {
            self.properties.insert(property);
        } else {
            self.properties.remove(&property);
        }
    }

    pub fn has_trill(&self) -> bool {
        self.trill_fret.is_some()
    }

    pub fn trill_fret(&self) -> Option<i32> {
        self.trill_fret
    }

    pub fn set_trill_fret(&mut self, fret: i32) {
        self.trill_fret = Some(fret);
    }

    pub fn clear_trill(&mut self) {
        self.trill_fret = None;
    }

    pub fn has_tapped_harmonic(&self) -> bool {
        self.tapped_harmonic_fret.is_some()
    }

    pub fn tapped_harmonic_fret(&self) -> Option<i32> {
        self.tapped_harmonic_fret
    }

    pub fn set_tapped_harmonic_fret(&mut self, fret: i32) {
        self.tapped_harmonic_fret = Some(fret);
    }

    pub fn clear_tapped_harmonic(&mut self) {
        self.tapped_harmonic_fret = None;
    }

    pub fn has_artificial_harmonic(&self) -> bool {
        self.artificial_harmonic.is_some()
    }

    pub fn artificial_harmonic(&self) -> Option<&ArtificialHarmonic> {
        self.artificial_harmonic.as_ref()
    }

    pub fn set_artificial_harmonic(&mut self, harmonic: ArtificialHarmonic) {
        self.artificial_harmonic = Some(harmonic);
    }

    pub fn clear_artificial_harmonic(&mut self) {
        self.artificial_harmonic = None;
    }

    pub fn has_bend(&self) -> bool {
        self.bend.is_some()
    }

    pub fn bend(&self) -> Option<&Bend> {
        self.bend.as_ref()
    }

    pub fn set_bend(&mut self, bend: Bend) {
        self.bend = Some(bend);
    }

    pub fn clear_bend(&mut self) {
        self.bend = None;
    }

    pub fn special_property(&self, kind: SpecialNotePropertyKind) -> Option<SpecialNoteProperty> {
        match kind {
            SpecialNotePropertyKind::Trill => self.trill_fret.map(SpecialNoteProperty::Trill),
            SpecialNotePropertyKind::TappedHarmonic => self
                .tapped_harmonic_fret
                .map(SpecialNoteProperty::TappedHarmonic),
            SpecialNotePropertyKind::ArtificialHarmonic => self
                .artificial_harmonic
                .map(SpecialNoteProperty::ArtificialHarmonic),
            SpecialNotePropertyKind::Bend => self.bend.map(SpecialNoteProperty::Bend),
        }
    }

    pub fn set_special_property(&mut self, property: SpecialNoteProperty) {
        match property {
            SpecialNoteProperty::Trill(fret) => self.set_trill_fret(fret),
            SpecialNoteProperty::TappedHarmonic(fret) => self.set_tapped_harmonic_fret(fret),
            SpecialNoteProperty::ArtificialHarmonic(harmonic) => {
                self.set_artificial_harmonic(harmonic)
            }
            SpecialNoteProperty::Bend(bend) => self.set_bend(bend),
        }
    }

    pub fn clear_special_property(&mut self, kind: SpecialNotePropertyKind) {
        match kind {
            SpecialNotePropertyKind::Trill => self.clear_trill(),
            SpecialNotePropertyKind::TappedHarmonic => self.clear_tapped_harmonic(),
            SpecialNotePropertyKind::ArtificialHarmonic => self.clear_artificial_harmonic(),
            SpecialNotePropertyKind::Bend => self.clear_bend(),
        }
    }
}
