//! Systems: one line of notation across all staves

use serde::{Deserialize, Serialize};

use super::barline::Barline;
use super::chord::ChordText;
use super::staff::Staff;
use super::tempo_marker::TempoMarker;

/// A player (and the instrument they play) assigned to a staff
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivePlayer {
    pub player_number: usize,
    pub instrument_number: usize,
}

impl ActivePlayer {
    pub fn new(player_number: usize, instrument_number: usize) -> Self {
        Self {
            player_number,
            instrument_number,
        }
    }
}

/// Assignment of players to staves from `position` onward
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct PlayerChange {
    pub position: i32,
    /// Active players, indexed by staff
    active_players: Vec<Vec<ActivePlayer>>,
}

impl PlayerChange {
    pub fn new(position: i32) -> Self {
        Self {
            position,
            active_players: Vec::new(),
        }
    }

    pub fn insert_active_player(&mut self, staff: usize, player: ActivePlayer) {
        if self.active_players.len() <= staff {
            self.active_players.resize(staff + 1, Vec::new());
        }
        self.active_players[staff].push(player);
    }

    pub fn players_for_staff(&self, staff: usize) -> &[ActivePlayer] {
        self.active_players
            .get(staff)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Staff a player is assigned to, if any
    pub fn staff_for_player(&self, player_number: usize) -> Option<usize> {
        self.active_players
            .iter()
            .position(|players| players.iter().any(|p| p.player_number == player_number))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct System {
    pub staves: Vec<Staff>,
    /// Ordered left to right; always starts and ends with a barline
    pub barlines: Vec<Barline>,
    pub player_changes: Vec<PlayerChange>,
    pub chords: Vec<ChordText>,
    pub tempo_markers: Vec<TempoMarker>,
}

impl Default for System {
    fn default() -> Self {
        Self {
            staves: Vec::new(),
            barlines: vec![Barline::default(), Barline::default()],
            player_changes: Vec::new(),
            chords: Vec::new(),
            tempo_markers: Vec::new(),
        }
    }
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a barline, keeping barlines ordered by position
    pub fn insert_barline(&mut self, barline: Barline) {
        let index = self
            .barlines
            .iter()
            .position(|b| b.position > barline.position)
            .unwrap_or(self.barlines.len());
        self.barlines.insert(index, barline);
    }

    pub fn barline_at(&self, position: i32) -> Option<&Barline> {
        self.barlines.iter().find(|b| b.position == position)
    }

    pub fn barline_at_mut(&mut self, position: i32) -> Option<&mut Barline> {
        self.barlines.iter_mut().find(|b| b.position == position)
    }

    /// Insert a tempo marker, keeping markers ordered by position
    pub fn insert_tempo_marker(&mut self, marker: TempoMarker) {
        let index = self
            .tempo_markers
            .iter()
            .position(|m| m.position > marker.position)
            .unwrap_or(self.tempo_markers.len());
        self.tempo_markers.insert(index, marker);
    }

    /// Remove the tempo marker at a position, returning it
    pub fn remove_tempo_marker(&mut self, position: i32) -> Option<TempoMarker> {
        let index = self.tempo_markers.iter().position(|m| m.position == position)?;
        Some(self.tempo_markers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::barline::BarType;

    #[test]
    fn test_barlines_stay_ordered() {
        let mut system = System::new();
        system.barlines[1].position = 40;
        system.insert_barline(Barline::new(20, BarType::DoubleBar));
        system.insert_barline(Barline::new(10, BarType::SingleBar));

        let positions: Vec<i32> = system.barlines.iter().map(|b| b.position).collect();
        assert_eq!(positions, vec![0, 10, 20, 40]);
        assert_eq!(system.barline_at(20).map(|b| b.bar_type), Some(BarType::DoubleBar));
    }

    #[test]
    fn test_player_change_staff_lookup() {
        let mut change = PlayerChange::new(0);
        change.insert_active_player(1, ActivePlayer::new(3, 0));
        assert!(change.players_for_staff(0).is_empty());
        assert_eq!(change.players_for_staff(1), &[ActivePlayer::new(3, 0)]);
        assert_eq!(change.staff_for_player(3), Some(1));
        assert_eq!(change.staff_for_player(0), None);
    }
}
