//! The score aggregate
//!
//! A `Score` owns every system, player, instrument, chord diagram and view
//! filter of a document. Collections are exposed as read-only slices; shape
//! changes go through the insert/remove methods. Indices passed to those
//! methods must be valid (the editor validates them before calling).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chord::ChordDiagram;
use super::player::{Instrument, Player};
use super::score_info::ScoreInfo;
use super::system::System;
use super::view_filter::ViewFilter;

pub const MIN_LINE_SPACING: i32 = 6;
pub const MAX_LINE_SPACING: i32 = 14;
pub const DEFAULT_LINE_SPACING: i32 = 9;

/// Invalid values rejected by the score model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Invalid line spacing: {0} (must be between 6 and 14)")]
    InvalidLineSpacing(i32),

    #[error("Invalid tempo: {0} bpm")]
    InvalidBeatsPerMinute(i32),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    score_info: ScoreInfo,
    systems: Vec<System>,
    players: Vec<Player>,
    instruments: Vec<Instrument>,
    chord_diagrams: Vec<ChordDiagram>,
    view_filters: Vec<ViewFilter>,
    line_spacing: i32,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self {
            score_info: ScoreInfo::default(),
            systems: Vec::new(),
            players: Vec::new(),
            instruments: Vec::new(),
            chord_diagrams: Vec::new(),
            view_filters: Vec::new(),
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }

    pub fn score_info(&self) -> &ScoreInfo {
        &self.score_info
    }

    pub fn set_score_info(&mut self, info: ScoreInfo) {
        self.score_info = info;
    }

    // Systems

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// Mutable access to system contents; the sequence itself is fixed
    pub fn systems_mut(&mut self) -> &mut [System] {
        &mut self.systems
    }

    /// Insert before `index`, or append when `index` is `None`
    pub fn insert_system(&mut self, system: System, index: Option<usize>) {
        match index {
            Some(i) => self.systems.insert(i, system),
            None => self.systems.push(system),
        }
    }

    pub fn remove_system(&mut self, index: usize) -> System {
        self.systems.remove(index)
    }

    // Players

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn insert_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn insert_player_at(&mut self, player: Player, index: usize) {
        self.players.insert(index, player);
    }

    pub fn remove_player(&mut self, index: usize) -> Player {
        self.players.remove(index)
    }

    // Instruments

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn insert_instrument(&mut self, instrument: Instrument) {
        self.instruments.push(instrument);
    }

    pub fn insert_instrument_at(&mut self, instrument: Instrument, index: usize) {
        self.instruments.insert(index, instrument);
    }

    pub fn remove_instrument(&mut self, index: usize) -> Instrument {
        self.instruments.remove(index)
    }

    // Chord diagrams

    pub fn chord_diagrams(&self) -> &[ChordDiagram] {
        &self.chord_diagrams
    }

    pub fn insert_chord_diagram(&mut self, diagram: ChordDiagram, index: Option<usize>) {
        match index {
            Some(i) => self.chord_diagrams.insert(i, diagram),
            None => self.chord_diagrams.push(diagram),
        }
    }

    pub fn remove_chord_diagram(&mut self, index: usize) -> ChordDiagram {
        self.chord_diagrams.remove(index)
    }

    // View filters

    pub fn view_filters(&self) -> &[ViewFilter] {
        &self.view_filters
    }

    pub fn insert_view_filter(&mut self, filter: ViewFilter, index: Option<usize>) {
        match index {
            Some(i) => self.view_filters.insert(i, filter),
            None => self.view_filters.push(filter),
        }
    }

    pub fn remove_view_filter(&mut self, index: usize) -> ViewFilter {
        self.view_filters.remove(index)
    }

    // Layout

    pub fn line_spacing(&self) -> i32 {
        self.line_spacing
    }

    pub fn set_line_spacing(&mut self, value: i32) -> Result<(), ScoreError> {
        if !(MIN_LINE_SPACING..=MAX_LINE_SPACING).contains(&value) {
            return Err(ScoreError::InvalidLineSpacing(value));
        }
        self.line_spacing = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spacing_bounds() {
        let mut score = Score::new();
        assert_eq!(score.line_spacing(), DEFAULT_LINE_SPACING);

        for value in MIN_LINE_SPACING..=MAX_LINE_SPACING {
            score.set_line_spacing(value).unwrap();
            assert_eq!(score.line_spacing(), value);
        }

        for value in [i32::MIN, -1, 0, 5, 15, 100] {
            assert_eq!(
                score.set_line_spacing(value),
                Err(ScoreError::InvalidLineSpacing(value))
            );
            assert_eq!(score.line_spacing(), MAX_LINE_SPACING);
        }
    }

    #[test]
    fn test_insert_system_appends_without_index() {
        let mut score = Score::new();
        let mut first = System::new();
        first.barlines[1].position = 10;
        let second = System::new();

        score.insert_system(first.clone(), None);
        score.insert_system(second.clone(), None);
        assert_eq!(score.systems(), &[first.clone(), second.clone()]);

        score.insert_system(second.clone(), Some(0));
        assert_eq!(score.systems(), &[second.clone(), first, second]);
    }

    #[test]
    fn test_equality_covers_line_spacing() {
        let mut a = Score::new();
        let b = Score::new();
        assert_eq!(a, b);
        a.set_line_spacing(12).unwrap();
        assert_ne!(a, b);
    }
}
