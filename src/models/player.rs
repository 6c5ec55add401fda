//! Players and instruments
//!
//! A player is a performer with a tuning; an instrument is the sound they
//! play. Player changes in a system assign players and instruments to staves.

use serde::{Deserialize, Serialize};

use super::tuning::Tuning;

/// MIDI preset for a steel-string acoustic guitar
pub const MIDI_PRESET_ACOUSTIC_GUITAR_STEEL: u8 = 25;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub description: String,
    pub tuning: Tuning,
    pub max_volume: u8,
    pub pan: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            description: "Untitled".to_string(),
            tuning: Tuning::default(),
            max_volume: 127,
            pan: 64,
        }
    }
}

impl Player {
    pub fn new(description: impl Into<String>, tuning: Tuning) -> Self {
        Self {
            description: description.into(),
            tuning,
            ..Self::default()
        }
    }

    pub fn string_count(&self) -> usize {
        self.tuning.string_count()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Instrument {
    pub description: String,
    pub midi_preset: u8,
}

impl Default for Instrument {
    fn default() -> Self {
        Self {
            description: "Untitled".to_string(),
            midi_preset: MIDI_PRESET_ACOUSTIC_GUITAR_STEEL,
        }
    }
}

impl Instrument {
    pub fn new(description: impl Into<String>, midi_preset: u8) -> Self {
        Self {
            description: description.into(),
            midi_preset,
        }
    }
}
