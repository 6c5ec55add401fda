//! Document model for tablature scores
//!
//! The `Score` aggregate owns systems, players, instruments, chord diagrams
//! and view filters. Everything below it is a plain value type with
//! structural equality, so whole scores can be compared after undo/redo.

pub mod barline;
pub mod chord;
pub mod chord_name;
pub mod dynamic;
pub mod note;
pub mod player;
pub mod score;
pub mod score_info;
pub mod score_location;
pub mod score_utils;
pub mod staff;
pub mod system;
pub mod tempo_marker;
pub mod tuning;
pub mod view_filter;

// Re-export commonly used types
pub use barline::{BarType, Barline, KeySignature, KeyType, RehearsalSign, TimeSignature};
pub use chord::{ChordDiagram, ChordText};
pub use chord_name::{ChordName, Formula, FormulaModification, Key, Variation};
pub use dynamic::{Dynamic, VolumeLevel};
pub use note::{
    ArtificialHarmonic, Bend, BendType, HarmonicOctave, Note, SimpleProperty, SpecialNoteProperty,
    SpecialNotePropertyKind,
};
pub use player::{Instrument, Player};
pub use score::{Score, ScoreError, MAX_LINE_SPACING, MIN_LINE_SPACING};
pub use score_info::ScoreInfo;
pub use score_location::ScoreLocation;
pub use staff::{Clef, DurationType, Position, Staff, Voice};
pub use system::{ActivePlayer, PlayerChange, System};
pub use tempo_marker::TempoMarker;
pub use tuning::Tuning;
pub use view_filter::{FilterRule, Operation, Subject, ViewFilter};
