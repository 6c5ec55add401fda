//! Locating notes inside a score

use serde::{Deserialize, Serialize};
use std::fmt;

use super::note::Note;
use super::score::Score;

/// Path to a note: system, staff, voice, position (index within the voice)
/// and string.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ScoreLocation {
    pub system: usize,
    pub staff: usize,
    pub voice: usize,
    pub position: usize,
    pub string: i32,
}

impl ScoreLocation {
    pub fn new(system: usize, staff: usize, voice: usize, position: usize, string: i32) -> Self {
        Self {
            system,
            staff,
            voice,
            position,
            string,
        }
    }

    pub fn note<'a>(&self, score: &'a Score) -> Option<&'a Note> {
        score
            .systems()
            .get(self.system)?
            .staves
            .get(self.staff)?
            .voices
            .get(self.voice)?
            .positions
            .get(self.position)?
            .note_on_string(self.string)
    }

    pub fn note_mut<'a>(&self, score: &'a mut Score) -> Option<&'a mut Note> {
        score
            .systems_mut()
            .get_mut(self.system)?
            .staves
            .get_mut(self.staff)?
            .voices
            .get_mut(self.voice)?
            .positions
            .get_mut(self.position)?
            .note_on_string_mut(self.string)
    }
}

impl fmt::Display for ScoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "system {}, staff {}, voice {}, position {}, string {}",
            self.system, self.staff, self.voice, self.position, self.string
        )
    }
}
