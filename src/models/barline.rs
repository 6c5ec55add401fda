//! Barlines and the markings that live on them

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BarType {
    #[default]
    SingleBar,
    DoubleBar,
    FreeTimeBar,
    RepeatStart,
    RepeatEnd,
    DoubleBarFine,
}

/// A lettered reference point (A, B, ... Z, AA, ...)
///
/// The letters are assigned by `score_utils::adjust_rehearsal_signs`, never
/// directly by the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct RehearsalSign {
    pub letters: String,
    pub description: String,
}

impl RehearsalSign {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            letters: String::new(),
            description: description.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats_per_measure: i32,
    pub beat_value: i32,
    pub visible: bool,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            beats_per_measure: 4,
            beat_value: 4,
            visible: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyType {
    #[default]
    Major,
    Minor,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct KeySignature {
    pub key_type: KeyType,
    pub num_accidentals: i32,
    pub sharps: bool,
    pub visible: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Barline {
    pub position: i32,
    pub bar_type: BarType,
    pub repeat_count: i32,
    pub time_signature: TimeSignature,
    pub key_signature: KeySignature,
    pub rehearsal_sign: Option<RehearsalSign>,
}

impl Barline {
    pub fn new(position: i32, bar_type: BarType) -> Self {
        Self {
            position,
            bar_type,
            ..Self::default()
        }
    }

    pub fn with_rehearsal_sign(mut self, sign: RehearsalSign) -> Self {
        self.rehearsal_sign = Some(sign);
        self
    }

    pub fn has_rehearsal_sign(&self) -> bool {
        self.rehearsal_sign.is_some()
    }
}
