//! Chord diagrams (fretboard shapes) and inline chord text

use serde::{Deserialize, Serialize};

use super::chord_name::ChordName;

/// A named chord shape, listed once per score
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ChordDiagram {
    pub chord_name: ChordName,
    pub top_fret: i32,
    /// Fret per string, highest string first; -1 marks a muted string
    pub fret_numbers: Vec<i32>,
}

impl ChordDiagram {
    pub fn new(chord_name: ChordName, top_fret: i32, fret_numbers: Vec<i32>) -> Self {
        Self {
            chord_name,
            top_fret,
            fret_numbers,
        }
    }
}

/// A chord name written above the staff at a position in a system
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ChordText {
    pub position: i32,
    pub chord_name: ChordName,
}

impl ChordText {
    pub fn new(position: i32, chord_name: ChordName) -> Self {
        Self {
            position,
            chord_name,
        }
    }
}
