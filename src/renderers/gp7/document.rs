//! Export document model for Guitar Pro 7
//!
//! A flat representation of a score, close to the layout of the GPIF file:
//! tracks and master bars are ordered lists, while bars, voices, beats, notes
//! and rhythms live in id-keyed maps and refer to one another by id. The
//! converter that fills this in assigns every id; the serializer only reads
//! them. Every id referenced from a list must exist in its map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

macro_rules! define_id {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            #[serde(transparent)]
            pub struct $name(pub i32);

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

define_id!(BarId, VoiceId, BeatId, NoteId, RhythmId);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ScoreInfo {
    pub title: String,
    pub subtitle: String,
    pub artist: String,
    pub album: String,
    pub words: String,
    pub music: String,
    pub copyright: String,
    pub tabber: String,
    pub instructions: String,
    pub notices: String,
}

/// A MIDI sound available to a track
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Sound {
    pub label: String,
    pub midi_preset: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Staff {
    /// MIDI note per string
    pub tuning: Vec<i32>,
    pub capo: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Track {
    pub name: String,
    pub sounds: Vec<Sound>,
    pub staves: Vec<Staff>,
}

/// Rehearsal section shown above a master bar
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Section {
    pub letter: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats: i32,
    pub beat_value: i32,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            beats: 4,
            beat_value: 4,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySignature {
    pub accidental_count: i32,
    pub minor: bool,
    pub sharps: bool,
}

impl Default for KeySignature {
    fn default() -> Self {
        Self {
            accidental_count: 0,
            minor: false,
            sharps: true,
        }
    }
}

/// One measure across all staves
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MasterBar {
    /// One bar per staff, in track/staff order
    pub bar_ids: Vec<BarId>,
    pub section: Option<Section>,
    pub time_signature: TimeSignature,
    pub key_signature: KeySignature,
    pub double_bar: bool,
    pub free_time: bool,
    pub repeat_start: bool,
    pub repeat_end: bool,
    pub repeat_count: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClefType {
    #[default]
    G2,
    F4,
    C3,
    C4,
    Neutral,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Bar {
    pub clef: ClefType,
    pub voice_ids: Vec<VoiceId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Voice {
    pub beat_ids: Vec<BeatId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Beat {
    pub note_ids: Vec<NoteId>,
    pub rhythm_id: RhythmId,
    pub grace_note: bool,
}

/// Spelled pitch, e.g. ('F', "#", 3)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Pitch {
    pub note: char,
    pub accidental: String,
    pub octave: i32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            note: 'C',
            accidental: String::new(),
            octave: 4,
        }
    }
}

impl Pitch {
    pub fn new(note: char, accidental: impl Into<String>, octave: i32) -> Self {
        Self {
            note,
            accidental: accidental.into(),
            octave,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Note {
    pub string: i32,
    pub fret: i32,
    pub concert_pitch: Pitch,
    pub transposed_pitch: Pitch,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Rhythm {
    /// Denominator of the note value (4 = quarter note)
    pub duration: i32,
    pub dots: i32,
    pub tuplet_num: i32,
    /// Zero or negative when the rhythm is not part of a tuplet
    pub tuplet_denom: i32,
}

impl Default for Rhythm {
    fn default() -> Self {
        Self {
            duration: 4,
            dots: 0,
            tuplet_num: -1,
            tuplet_denom: -1,
        }
    }
}

impl Rhythm {
    pub fn new(duration: i32) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn with_dots(mut self, dots: i32) -> Self {
        self.dots = dots;
        self
    }

    pub fn with_tuplet(mut self, num: i32, denom: i32) -> Self {
        self.tuplet_num = num;
        self.tuplet_denom = denom;
        self
    }

    pub fn has_tuplet(&self) -> bool {
        self.tuplet_denom > 0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Document {
    pub score_info: ScoreInfo,
    pub tracks: Vec<Track>,
    pub master_bars: Vec<MasterBar>,
    pub bars: BTreeMap<BarId, Bar>,
    pub voices: BTreeMap<VoiceId, Voice>,
    pub beats: BTreeMap<BeatId, Beat>,
    pub notes: BTreeMap<NoteId, Note>,
    pub rhythms: BTreeMap<RhythmId, Rhythm>,
}
