//! Staves, voices and positions within a system

use serde::{Deserialize, Serialize};

use super::dynamic::Dynamic;
use super::note::Note;

/// Number of voices on every staff
pub const NUM_VOICES: usize = 2;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Clef {
    #[default]
    Treble,
    Bass,
}

/// Note value of a position, as a denominator of a whole note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DurationType {
    WholeNote = 1,
    HalfNote = 2,
    #[default]
    QuarterNote = 4,
    EighthNote = 8,
    SixteenthNote = 16,
    ThirtySecondNote = 32,
    SixtyFourthNote = 64,
}

/// A column of simultaneous notes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Position {
    pub position: i32,
    pub duration_type: DurationType,
    pub notes: Vec<Note>,
}

impl Position {
    pub fn new(position: i32, duration_type: DurationType) -> Self {
        Self {
            position,
            duration_type,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn note_on_string(&self, string: i32) -> Option<&Note> {
        self.notes.iter().find(|note| note.string == string)
    }

    pub fn note_on_string_mut(&mut self, string: i32) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.string == string)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Voice {
    pub positions: Vec<Position>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Staff {
    pub clef: Clef,
    pub string_count: usize,
    pub voices: Vec<Voice>,
    pub dynamics: Vec<Dynamic>,
}

impl Default for Staff {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Staff {
    pub fn new(string_count: usize) -> Self {
        Self {
            clef: Clef::Treble,
            string_count,
            voices: vec![Voice::default(); NUM_VOICES],
            dynamics: Vec::new(),
        }
    }
}
