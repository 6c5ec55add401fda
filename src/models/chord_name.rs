//! Chord names shared by chord diagrams and inline chord text
//!
//! A chord name is rendered to text through its `Display` implementation,
//! e.g. `C`, `F#m7`, `Bbmaj9/D`, `(Asus4)` or `N.C.`. That rendering is also
//! the sort key used when listing the chords of a score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Key {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Key {
    pub fn letter(&self) -> char {
        match self {
            Key::C => 'C',
            Key::D => 'D',
            Key::E => 'E',
            Key::F => 'F',
            Key::G => 'G',
            Key::A => 'A',
            Key::B => 'B',
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Variation {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Variation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Variation::DoubleFlat => "bb",
            Variation::Flat => "b",
            Variation::Natural => "",
            Variation::Sharp => "#",
            Variation::DoubleSharp => "x",
        }
    }
}

/// Chord quality
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Formula {
    #[default]
    Major,
    Minor,
    Augmented,
    Diminished,
    PowerChord,
    Major6th,
    Minor6th,
    Dominant7th,
    Major7th,
    Minor7th,
    Augmented7th,
    Diminished7th,
    MinorMajor7th,
    Minor7thFlatted5th,
}

impl Formula {
    pub fn symbol(&self) -> &'static str {
        match self {
            Formula::Major => "",
            Formula::Minor => "m",
            Formula::Augmented => "+",
            Formula::Diminished => "°",
            Formula::PowerChord => "5",
            Formula::Major6th => "6",
            Formula::Minor6th => "m6",
            Formula::Dominant7th => "7",
            Formula::Major7th => "maj7",
            Formula::Minor7th => "m7",
            Formula::Augmented7th => "+7",
            Formula::Diminished7th => "°7",
            Formula::MinorMajor7th => "m/maj7",
            Formula::Minor7thFlatted5th => "m7b5",
        }
    }

    /// Symbol with the seventh replaced by an extension (9, 11, 13) where
    /// the formula allows it, e.g. `maj7` + 9 -> `maj9`.
    fn symbol_with_extension(&self, extension: u8) -> String {
        match self {
            Formula::Dominant7th => extension.to_string(),
            Formula::Major7th => format!("maj{}", extension),
            Formula::Minor7th => format!("m{}", extension),
            Formula::Augmented7th => format!("+{}", extension),
            Formula::MinorMajor7th => format!("m/maj{}", extension),
            _ => format!("{}{}", self.symbol(), extension),
        }
    }
}

/// Alterations and additions; rendered in declaration order
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormulaModification {
    Extended9th,
    Extended11th,
    Extended13th,
    Suspended2nd,
    Suspended4th,
    Added2nd,
    Added4th,
    Added6th,
    Added9th,
    Added11th,
    Flatted5th,
    Raised5th,
    Flatted9th,
    Raised9th,
    Raised11th,
    Flatted13th,
}

impl FormulaModification {
    fn extension(&self) -> Option<u8> {
        match self {
            FormulaModification::Extended9th => Some(9),
            FormulaModification::Extended11th => Some(11),
            FormulaModification::Extended13th => Some(13),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FormulaModification::Extended9th => "9",
            FormulaModification::Extended11th => "11",
            FormulaModification::Extended13th => "13",
            FormulaModification::Suspended2nd => "sus2",
            FormulaModification::Suspended4th => "sus4",
            FormulaModification::Added2nd => "add2",
            FormulaModification::Added4th => "add4",
            FormulaModification::Added6th => "add6",
            FormulaModification::Added9th => "add9",
            FormulaModification::Added11th => "add11",
            FormulaModification::Flatted5th => "b5",
            FormulaModification::Raised5th => "#5",
            FormulaModification::Flatted9th => "b9",
            FormulaModification::Raised9th => "#9",
            FormulaModification::Raised11th => "#11",
            FormulaModification::Flatted13th => "b13",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChordName {
    pub tonic_key: Key,
    pub tonic_variation: Variation,
    pub formula: Formula,
    pub modifications: BTreeSet<FormulaModification>,
    pub bass_key: Key,
    pub bass_variation: Variation,
    pub brackets: bool,
    pub no_chord: bool,
}

impl ChordName {
    /// Chord with the bass note equal to the tonic
    pub fn new(key: Key, variation: Variation, formula: Formula) -> Self {
        Self {
            tonic_key: key,
            tonic_variation: variation,
            formula,
            bass_key: key,
            bass_variation: variation,
            ..Self::default()
        }
    }

    pub fn with_modification(mut self, modification: FormulaModification) -> Self {
        self.modifications.insert(modification);
        self
    }

    pub fn with_bass(mut self, key: Key, variation: Variation) -> Self {
        self.bass_key = key;
        self.bass_variation = variation;
        self
    }

    pub fn has_alternate_bass(&self) -> bool {
        self.bass_key != self.tonic_key || self.bass_variation != self.tonic_variation
    }

    fn render(&self) -> String {
        if self.no_chord {
            return "N.C.".to_string();
        }

        let mut text = String::new();
        text.push(self.tonic_key.letter());
        text.push_str(self.tonic_variation.symbol());

        // Only the highest extension is shown.
        let extension = self
            .modifications
            .iter()
            .filter_map(FormulaModification::extension)
            .max();
        match extension {
            Some(ext) => text.push_str(&self.formula.symbol_with_extension(ext)),
            None => text.push_str(self.formula.symbol()),
        }

        for modification in &self.modifications {
            if modification.extension().is_none() {
                text.push_str(modification.symbol());
            }
        }

        if self.has_alternate_bass() {
            text.push('/');
            text.push(self.bass_key.letter());
            text.push_str(self.bass_variation.symbol());
        }

        text
    }
}

impl fmt::Display for ChordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.brackets {
            write!(f, "({})", self.render())
        } else {
            write!(f, "{}", self.render())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(ChordName::new(Key::C, Variation::Natural, Formula::Major).to_string(), "C");
        assert_eq!(ChordName::new(Key::F, Variation::Sharp, Formula::Minor7th).to_string(), "F#m7");
        assert_eq!(ChordName::new(Key::E, Variation::Flat, Formula::PowerChord).to_string(), "Eb5");
    }

    #[test]
    fn test_extension_replaces_seventh() {
        let name = ChordName::new(Key::B, Variation::Flat, Formula::Major7th)
            .with_modification(FormulaModification::Extended9th)
            .with_bass(Key::D, Variation::Natural);
        assert_eq!(name.to_string(), "Bbmaj9/D");

        let name = ChordName::new(Key::G, Variation::Natural, Formula::Dominant7th)
            .with_modification(FormulaModification::Extended9th)
            .with_modification(FormulaModification::Extended13th);
        assert_eq!(name.to_string(), "G13");
    }

    #[test]
    fn test_modifications_and_brackets() {
        let mut name = ChordName::new(Key::A, Variation::Natural, Formula::Major)
            .with_modification(FormulaModification::Suspended4th);
        name.brackets = true;
        assert_eq!(name.to_string(), "(Asus4)");

        let no_chord = ChordName {
            no_chord: true,
            ..ChordName::default()
        };
        assert_eq!(no_chord.to_string(), "N.C.");
    }
}
