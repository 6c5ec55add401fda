//! Tempo markers
//!
//! The tempo dialog in the editor collects these fields and hands back a
//! fully populated `TempoMarker`; the model only validates the tempo range.

use serde::{Deserialize, Serialize};

use super::score::ScoreError;

/// Descriptions offered by the editor as suggestions
pub const STANDARD_DESCRIPTIONS: [&str; 11] = [
    "Fast Rock",
    "Faster",
    "Moderate Rock",
    "Moderately",
    "Moderately Fast Rock",
    "Moderately Slow Funk",
    "Moderately Slow Rock",
    "Slow Blues",
    "Slow Rock",
    "Slower",
    "Slowly",
];

pub const MIN_BEATS_PER_MINUTE: i32 = 40;
pub const MAX_BEATS_PER_MINUTE: i32 = 300;
pub const DEFAULT_BEATS_PER_MINUTE: i32 = 120;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MarkerType {
    NotShown,
    #[default]
    StandardMarker,
    ListessoMarker,
    AlterationOfPaceMarker,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BeatType {
    Half,
    HalfDotted,
    #[default]
    Quarter,
    QuarterDotted,
    Eighth,
    EighthDotted,
    Sixteenth,
    SixteenthDotted,
    ThirtySecond,
    ThirtySecondDotted,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TripletFeel {
    #[default]
    NoTripletFeel,
    TripletFeelEighth,
    TripletFeelSixteenth,
    TripletFeelEighthOff,
    TripletFeelSixteenthOff,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlterationOfPace {
    #[default]
    NoAlterationOfPace,
    Accelerando,
    Ritardando,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TempoMarker {
    pub position: i32,
    pub marker_type: MarkerType,
    pub beat_type: BeatType,
    /// Beat type the `beat_type` is played as, for listesso markers
    pub listesso_beat_type: BeatType,
    pub triplet_feel: TripletFeel,
    pub alteration_of_pace: AlterationOfPace,
    beats_per_minute: i32,
    pub description: String,
}

impl Default for TempoMarker {
    fn default() -> Self {
        Self {
            position: 0,
            marker_type: MarkerType::default(),
            beat_type: BeatType::default(),
            listesso_beat_type: BeatType::Half,
            triplet_feel: TripletFeel::default(),
            alteration_of_pace: AlterationOfPace::default(),
            beats_per_minute: DEFAULT_BEATS_PER_MINUTE,
            description: String::new(),
        }
    }
}

impl TempoMarker {
    pub fn new(position: i32) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn beats_per_minute(&self) -> i32 {
        self.beats_per_minute
    }

    pub fn set_beats_per_minute(&mut self, bpm: i32) -> Result<(), ScoreError> {
        if !(MIN_BEATS_PER_MINUTE..=MAX_BEATS_PER_MINUTE).contains(&bpm) {
            return Err(ScoreError::InvalidBeatsPerMinute(bpm));
        }
        self.beats_per_minute = bpm;
        Ok(())
    }

    pub fn is_listesso(&self) -> bool {
        self.marker_type == MarkerType::ListessoMarker
    }

    /// Whether the metronome mark (beat type and bpm) is displayed
    pub fn shows_metronome_mark(&self) -> bool {
        matches!(
            self.marker_type,
            MarkerType::StandardMarker | MarkerType::ListessoMarker
        )
    }
}
