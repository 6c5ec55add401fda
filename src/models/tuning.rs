//! String tunings for tablature staves

use serde::{Deserialize, Serialize};

/// A tuning, stored as one MIDI note per string from the highest string to the lowest
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tuning {
    pub name: String,
    /// Shift (in octaves) applied to the standard notation staff
    pub music_notation_offset: i8,
    pub sharps: bool,
    pub notes: Vec<u8>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            name: "Standard".to_string(),
            music_notation_offset: 0,
            sharps: true,
            notes: vec![64, 59, 55, 50, 45, 40],
        }
    }
}

impl Tuning {
    pub fn new(name: impl Into<String>, notes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            notes,
            ..Self::default()
        }
    }

    pub fn string_count(&self) -> usize {
        self.notes.len()
    }

    /// MIDI note of an open string (0 = highest string)
    pub fn note(&self, string: usize) -> Option<u8> {
        self.notes.get(string).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_guitar() {
        let tuning = Tuning::default();
        assert_eq!(tuning.string_count(), 6);
        assert_eq!(tuning.note(0), Some(64));
        assert_eq!(tuning.note(5), Some(40));
        assert_eq!(tuning.note(6), None);
    }
}
