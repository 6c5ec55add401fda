use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::score_utils;
use crate::models::{
    ChordDiagram, Instrument, Player, RehearsalSign, Score, ScoreError, ScoreInfo, ScoreLocation,
    SpecialNoteProperty, SpecialNotePropertyKind, System, TempoMarker, ViewFilter,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("No note found at {0}")]
    LocationNotFound(ScoreLocation),

    #[error("No system at index {0}")]
    SystemNotFound(usize),

    #[error("No barline at position {position} in system {system}")]
    BarlineNotFound { system: usize, position: i32 },

    #[error("No tempo marker at position {position} in system {system}")]
    TempoMarkerNotFound { system: usize, position: i32 },

    #[error("Index {index} out of range for {collection}")]
    IndexOutOfRange { collection: &'static str, index: usize },

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("No undo history available")]
    NoUndoHistory,

    #[error("No redo history available")]
    NoRedoHistory,
}

/// A reversible edit to a score
///
/// Each variant carries whatever it needs to restore the prior state: removal
/// actions hold the removed value, edits hold both the old and new values.
/// `redo` followed by `undo` leaves the score equal to where it started.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Clear a special property (trill, tapped harmonic, ...) from a note
    RemoveSpecialNoteProperty {
        location: ScoreLocation,
        kind: SpecialNotePropertyKind,
        /// Value found on the note when the action was created
        original: Option<SpecialNoteProperty>,
    },
    SetLineSpacing {
        old_spacing: i32,
        new_spacing: i32,
    },
    InsertSystem {
        index: usize,
        system: System,
    },
    RemoveSystem {
        index: usize,
        system: System,
    },
    AddPlayer {
        index: usize,
        player: Player,
    },
    RemovePlayer {
        index: usize,
        player: Player,
    },
    AddInstrument {
        index: usize,
        instrument: Instrument,
    },
    RemoveInstrument {
        index: usize,
        instrument: Instrument,
    },
    AddChordDiagram {
        index: usize,
        diagram: ChordDiagram,
    },
    RemoveChordDiagram {
        index: usize,
        diagram: ChordDiagram,
    },
    AddViewFilter {
        index: usize,
        filter: ViewFilter,
    },
    RemoveViewFilter {
        index: usize,
        filter: ViewFilter,
    },
    AddTempoMarker {
        system: usize,
        marker: TempoMarker,
    },
    RemoveTempoMarker {
        system: usize,
        marker: TempoMarker,
    },
    /// Attach a sign to a barline and relabel every sign in the score
    AddRehearsalSign {
        system: usize,
        barline_position: i32,
        sign: RehearsalSign,
    },
    RemoveRehearsalSign {
        system: usize,
        barline_position: i32,
        sign: RehearsalSign,
    },
    EditScoreInfo {
        old_info: ScoreInfo,
        new_info: ScoreInfo,
    },
    /// A group of actions undone and redone as one step
    Batch {
        description: String,
        actions: Vec<Action>,
    },
}

impl Action {
    pub fn remove_special_note_property(
        score: &Score,
        location: ScoreLocation,
        kind: SpecialNotePropertyKind,
    ) -> Result<Self, ActionError> {
        let note = location
            .note(score)
            .ok_or(ActionError::LocationNotFound(location))?;

        Ok(Action::RemoveSpecialNoteProperty {
            location,
            kind,
            original: note.special_property(kind),
        })
    }

    pub fn remove_tapped_harmonic(score: &Score, location: ScoreLocation) -> Result<Self, ActionError> {
        Self::remove_special_note_property(score, location, SpecialNotePropertyKind::TappedHarmonic)
    }

    pub fn remove_trill(score: &Score, location: ScoreLocation) -> Result<Self, ActionError> {
        Self::remove_special_note_property(score, location, SpecialNotePropertyKind::Trill)
    }

    pub fn remove_artificial_harmonic(
        score: &Score,
        location: ScoreLocation,
    ) -> Result<Self, ActionError> {
        Self::remove_special_note_property(
            score,
            location,
            SpecialNotePropertyKind::ArtificialHarmonic,
        )
    }

    pub fn remove_bend(score: &Score, location: ScoreLocation) -> Result<Self, ActionError> {
        Self::remove_special_note_property(score, location, SpecialNotePropertyKind::Bend)
    }

    pub fn set_line_spacing(score: &Score, spacing: i32) -> Self {
        Action::SetLineSpacing {
            old_spacing: score.line_spacing(),
            new_spacing: spacing,
        }
    }

    pub fn remove_system(score: &Score, index: usize) -> Result<Self, ActionError> {
        let system = score
            .systems()
            .get(index)
            .cloned()
            .ok_or(ActionError::IndexOutOfRange { collection: "systems", index })?;
        Ok(Action::RemoveSystem { index, system })
    }

    pub fn remove_player(score: &Score, index: usize) -> Result<Self, ActionError> {
        let player = score
            .players()
            .get(index)
            .cloned()
            .ok_or(ActionError::IndexOutOfRange { collection: "players", index })?;
        Ok(Action::RemovePlayer { index, player })
    }

    pub fn remove_instrument(score: &Score, index: usize) -> Result<Self, ActionError> {
        let instrument = score
            .instruments()
            .get(index)
            .cloned()
            .ok_or(ActionError::IndexOutOfRange { collection: "instruments", index })?;
        Ok(Action::RemoveInstrument { index, instrument })
    }

    pub fn remove_chord_diagram(score: &Score, index: usize) -> Result<Self, ActionError> {
        let diagram = score
            .chord_diagrams()
            .get(index)
            .cloned()
            .ok_or(ActionError::IndexOutOfRange { collection: "chord diagrams", index })?;
        Ok(Action::RemoveChordDiagram { index, diagram })
    }

    pub fn remove_view_filter(score: &Score, index: usize) -> Result<Self, ActionError> {
        let filter = score
            .view_filters()
            .get(index)
            .cloned()
            .ok_or(ActionError::IndexOutOfRange { collection: "view filters", index })?;
        Ok(Action::RemoveViewFilter { index, filter })
    }

    pub fn remove_tempo_marker(
        score: &Score,
        system: usize,
        position: i32,
    ) -> Result<Self, ActionError> {
        let marker = score
            .systems()
            .get(system)
            .ok_or(ActionError::SystemNotFound(system))?
            .tempo_markers
            .iter()
            .find(|m| m.position == position)
            .cloned()
            .ok_or(ActionError::TempoMarkerNotFound { system, position })?;
        Ok(Action::RemoveTempoMarker { system, marker })
    }

    pub fn remove_rehearsal_sign(
        score: &Score,
        system: usize,
        barline_position: i32,
    ) -> Result<Self, ActionError> {
        let sign = score
            .systems()
            .get(system)
            .ok_or(ActionError::SystemNotFound(system))?
            .barline_at(barline_position)
            .and_then(|barline| barline.rehearsal_sign.clone())
            .ok_or(ActionError::BarlineNotFound {
                system,
                position: barline_position,
            })?;
        Ok(Action::RemoveRehearsalSign {
            system,
            barline_position,
            sign,
        })
    }

    pub fn edit_score_info(score: &Score, info: ScoreInfo) -> Self {
        Action::EditScoreInfo {
            old_info: score.score_info().clone(),
            new_info: info,
        }
    }

    /// Menu text for this action (e.g. "Undo Remove Tapped Harmonic")
    pub fn description(&self) -> String {
        match self {
            Action::RemoveSpecialNoteProperty { kind, .. } => format!("Remove {}", kind.name()),
            Action::SetLineSpacing { .. } => "Edit Line Spacing".to_string(),
            Action::InsertSystem { .. } => "Insert System".to_string(),
            Action::RemoveSystem { .. } => "Remove System".to_string(),
            Action::AddPlayer { .. } => "Add Player".to_string(),
            Action::RemovePlayer { .. } => "Remove Player".to_string(),
            Action::AddInstrument { .. } => "Add Instrument".to_string(),
            Action::RemoveInstrument { .. } => "Remove Instrument".to_string(),
            Action::AddChordDiagram { .. } => "Add Chord Diagram".to_string(),
            Action::RemoveChordDiagram { .. } => "Remove Chord Diagram".to_string(),
            Action::AddViewFilter { .. } => "Add View Filter".to_string(),
            Action::RemoveViewFilter { .. } => "Remove View Filter".to_string(),
            Action::AddTempoMarker { .. } => "Add Tempo Marker".to_string(),
            Action::RemoveTempoMarker { .. } => "Remove Tempo Marker".to_string(),
            Action::AddRehearsalSign { .. } => "Add Rehearsal Sign".to_string(),
            Action::RemoveRehearsalSign { .. } => "Remove Rehearsal Sign".to_string(),
            Action::EditScoreInfo { .. } => "Edit Score Information".to_string(),
            Action::Batch { description, .. } => description.clone(),
        }
    }

    /// Apply the edit
    pub fn redo(&self, score: &mut Score) -> Result<(), ActionError> {
        log::debug!("redo: {}", self.description());

        match self {
            Action::RemoveSpecialNoteProperty { location, kind, .. } => {
                let note = location
                    .note_mut(score)
                    .ok_or(ActionError::LocationNotFound(*location))?;
                note.clear_special_property(*kind);
            }
            Action::SetLineSpacing { new_spacing, .. } => score.set_line_spacing(*new_spacing)?,
            Action::InsertSystem { index, system } => {
                check_insert_index("systems", *index, score.systems().len())?;
                score.insert_system(system.clone(), Some(*index));
            }
            Action::RemoveSystem { index, .. } => {
                check_remove_index("systems", *index, score.systems().len())?;
                score.remove_system(*index);
            }
            Action::AddPlayer { index, player } => {
                check_insert_index("players", *index, score.players().len())?;
                score.insert_player_at(player.clone(), *index);
            }
            Action::RemovePlayer { index, .. } => {
                check_remove_index("players", *index, score.players().len())?;
                score.remove_player(*index);
            }
            Action::AddInstrument { index, instrument } => {
                check_insert_index("instruments", *index, score.instruments().len())?;
                score.insert_instrument_at(instrument.clone(), *index);
            }
            Action::RemoveInstrument { index, .. } => {
                check_remove_index("instruments", *index, score.instruments().len())?;
                score.remove_instrument(*index);
            }
            Action::AddChordDiagram { index, diagram } => {
                check_insert_index("chord diagrams", *index, score.chord_diagrams().len())?;
                score.insert_chord_diagram(diagram.clone(), Some(*index));
            }
            Action::RemoveChordDiagram { index, .. } => {
                check_remove_index("chord diagrams", *index, score.chord_diagrams().len())?;
                score.remove_chord_diagram(*index);
            }
            Action::AddViewFilter { index, filter } => {
                check_insert_index("view filters", *index, score.view_filters().len())?;
                score.insert_view_filter(filter.clone(), Some(*index));
            }
            Action::RemoveViewFilter { index, .. } => {
                check_remove_index("view filters", *index, score.view_filters().len())?;
                score.remove_view_filter(*index);
            }
            Action::AddTempoMarker { system, marker } => {
                system_mut(score, *system)?.insert_tempo_marker(marker.clone());
            }
            Action::RemoveTempoMarker { system, marker } => {
                remove_tempo_marker(score, *system, marker.position)?;
            }
            Action::AddRehearsalSign {
                system,
                barline_position,
                sign,
            } => {
                set_rehearsal_sign(score, *system, *barline_position, Some(sign.clone()))?;
            }
            Action::RemoveRehearsalSign {
                system,
                barline_position,
                ..
            } => {
                set_rehearsal_sign(score, *system, *barline_position, None)?;
            }
            Action::EditScoreInfo { new_info, .. } => score.set_score_info(new_info.clone()),
            Action::Batch { actions, .. } => {
                for (applied, action) in actions.iter().enumerate() {
                    if let Err(e) = action.redo(score) {
                        // Leave the score as it was before the batch
                        for done in actions[..applied].iter().rev() {
                            if let Err(rollback) = done.undo(score) {
                                log::warn!("Rollback of '{}' failed: {}", done.description(), rollback);
                            }
                        }
                        return Err(e);
                    }
                }
            }
        }

        Ok(())
    }

    /// Restore the state from before `redo`
    pub fn undo(&self, score: &mut Score) -> Result<(), ActionError> {
        log::debug!("undo: {}", self.description());

        match self {
            Action::RemoveSpecialNoteProperty {
                location,
                kind,
                original,
            } => {
                let note = location
                    .note_mut(score)
                    .ok_or(ActionError::LocationNotFound(*location))?;
                match original {
                    Some(value) => note.set_special_property(*value),
                    None => note.clear_special_property(*kind),
                }
            }
            Action::SetLineSpacing { old_spacing, .. } => score.set_line_spacing(*old_spacing)?,
            Action::InsertSystem { index, .. } => {
                check_remove_index("systems", *index, score.systems().len())?;
                score.remove_system(*index);
            }
            Action::RemoveSystem { index, system } => {
                check_insert_index("systems", *index, score.systems().len())?;
                score.insert_system(system.clone(), Some(*index));
            }
            Action::AddPlayer { index, .. } => {
                check_remove_index("players", *index, score.players().len())?;
                score.remove_player(*index);
            }
            Action::RemovePlayer { index, player } => {
                check_insert_index("players", *index, score.players().len())?;
                score.insert_player_at(player.clone(), *index);
            }
            Action::AddInstrument { index, .. } => {
                check_remove_index("instruments", *index, score.instruments().len())?;
                score.remove_instrument(*index);
            }
            Action::RemoveInstrument { index, instrument } => {
                check_insert_index("instruments", *index, score.instruments().len())?;
                score.insert_instrument_at(instrument.clone(), *index);
            }
            Action::AddChordDiagram { index, .. } => {
                check_remove_index("chord diagrams", *index, score.chord_diagrams().len())?;
                score.remove_chord_diagram(*index);
            }
            Action::RemoveChordDiagram { index, diagram } => {
                check_insert_index("chord diagrams", *index, score.chord_diagrams().len())?;
                score.insert_chord_diagram(diagram.clone(), Some(*index));
            }
            Action::AddViewFilter { index, .. } => {
                check_remove_index("view filters", *index, score.view_filters().len())?;
                score.remove_view_filter(*index);
            }
            Action::RemoveViewFilter { index, filter } => {
                check_insert_index("view filters", *index, score.view_filters().len())?;
                score.insert_view_filter(filter.clone(), Some(*index));
            }
            Action::AddTempoMarker { system, marker } => {
                remove_tempo_marker(score, *system, marker.position)?;
            }
            Action::RemoveTempoMarker { system, marker } => {
                system_mut(score, *system)?.insert_tempo_marker(marker.clone());
            }
            Action::AddRehearsalSign {
                system,
                barline_position,
                ..
            } => {
                set_rehearsal_sign(score, *system, *barline_position, None)?;
            }
            Action::RemoveRehearsalSign {
                system,
                barline_position,
                sign,
            } => {
                set_rehearsal_sign(score, *system, *barline_position, Some(sign.clone()))?;
            }
            Action::EditScoreInfo { old_info, .. } => score.set_score_info(old_info.clone()),
            Action::Batch { actions, .. } => {
                // Undo batch in reverse order
                for (undone, action) in actions.iter().rev().enumerate() {
                    if let Err(e) = action.undo(score) {
                        let first_undone = actions.len() - undone;
                        for done in &actions[first_undone..] {
                            if let Err(rollback) = done.redo(score) {
                                log::warn!("Rollback of '{}' failed: {}", done.description(), rollback);
                            }
                        }
                        return Err(e);
                    }
                }
            }
        }

        Ok(())
    }
}

fn check_insert_index(collection: &'static str, index: usize, len: usize) -> Result<(), ActionError> {
    if index > len {
        return Err(ActionError::IndexOutOfRange { collection, index });
    }
    Ok(())
}

fn check_remove_index(collection: &'static str, index: usize, len: usize) -> Result<(), ActionError> {
    if index >= len {
        return Err(ActionError::IndexOutOfRange { collection, index });
    }
    Ok(())
}

fn system_mut(score: &mut Score, index: usize) -> Result<&mut System, ActionError> {
    score
        .systems_mut()
        .get_mut(index)
        .ok_or(ActionError::SystemNotFound(index))
}

fn remove_tempo_marker(score: &mut Score, system: usize, position: i32) -> Result<(), ActionError> {
    system_mut(score, system)?
        .remove_tempo_marker(position)
        .map(|_| ())
        .ok_or(ActionError::TempoMarkerNotFound { system, position })
}

/// Set or clear a barline's rehearsal sign, then relabel all signs.
fn set_rehearsal_sign(
    score: &mut Score,
    system: usize,
    position: i32,
    sign: Option<RehearsalSign>,
) -> Result<(), ActionError> {
    let barline = system_mut(score, system)?
        .barline_at_mut(position)
        .ok_or(ActionError::BarlineNotFound { system, position })?;
    barline.rehearsal_sign = sign;

    score_utils::adjust_rehearsal_signs(score);
    Ok(())
}
