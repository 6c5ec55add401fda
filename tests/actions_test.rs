// Reversible edits: each action's undo restores the score it started from

use tabscore::models::score_utils::adjust_rehearsal_signs;
use tabscore::models::{
    BarType, Barline, Bend, BendType, DurationType, Note, Player, Position, RehearsalSign,
    Score, ScoreError, ScoreInfo, ScoreLocation, SpecialNoteProperty, Staff, System,
    TempoMarker, ViewFilter,
};
use tabscore::undo::{Action, ActionError, UndoStack};

/// One system, one staff, with a note on string 2 at the first position
fn score_with_note(note: Note) -> Score {
    let mut staff = Staff::new(6);
    staff.voices[0]
        .positions
        .push(Position::new(0, DurationType::QuarterNote).with_note(note));

    let mut system = System::new();
    system.staves.push(staff);

    let mut score = Score::new();
    score.insert_system(system, None);
    score
}

fn note_location() -> ScoreLocation {
    ScoreLocation::new(0, 0, 0, 0, 2)
}

#[test]
fn test_remove_tapped_harmonic() {
    let mut note = Note::new(2, 5);
    note.set_tapped_harmonic_fret(17);
    let mut score = score_with_note(note);

    let action = Action::remove_tapped_harmonic(&score, note_location()).unwrap();
    assert_eq!(action.description(), "Remove Tapped Harmonic");

    action.redo(&mut score).unwrap();
    let note = note_location().note(&score).unwrap();
    assert!(!note.has_tapped_harmonic());

    action.undo(&mut score).unwrap();
    let note = note_location().note(&score).unwrap();
    assert!(note.has_tapped_harmonic());
    assert_eq!(note.tapped_harmonic_fret(), Some(17));
}

#[test]
fn test_remove_bend_restores_value() {
    let bend = Bend {
        bend_type: BendType::BendAndRelease,
        bent_pitch: 4,
        release_pitch: 0,
        duration: 1,
    };
    let mut note = Note::new(2, 7);
    note.set_bend(bend);
    let mut score = score_with_note(note);
    let original = score.clone();

    let action = Action::remove_bend(&score, note_location()).unwrap();
    match &action {
        Action::RemoveSpecialNoteProperty { original, .. } => {
            assert_eq!(*original, Some(SpecialNoteProperty::Bend(bend)));
        }
        other => panic!("unexpected action {:?}", other),
    }

    action.redo(&mut score).unwrap();
    assert!(!note_location().note(&score).unwrap().has_bend());

    action.undo(&mut score).unwrap();
    assert_eq!(score, original);
}

#[test]
fn test_remove_property_at_missing_location() {
    let score = score_with_note(Note::new(2, 5));
    let missing = ScoreLocation::new(0, 0, 0, 0, 4);

    assert_eq!(
        Action::remove_trill(&score, missing),
        Err(ActionError::LocationNotFound(missing))
    );
}

#[test]
fn test_set_line_spacing() {
    let mut score = Score::new();
    let action = Action::set_line_spacing(&score, 13);

    action.redo(&mut score).unwrap();
    assert_eq!(score.line_spacing(), 13);

    action.undo(&mut score).unwrap();
    assert_eq!(score.line_spacing(), 9);

    let invalid = Action::set_line_spacing(&score, 2);
    assert_eq!(
        invalid.redo(&mut score),
        Err(ActionError::Score(ScoreError::InvalidLineSpacing(2)))
    );
    assert_eq!(score.line_spacing(), 9);
}

#[test]
fn test_remove_actions_round_trip() {
    let mut score = Score::new();
    score.insert_system(System::new(), None);
    score.insert_player(Player::default());
    score.insert_view_filter(ViewFilter::new("All Instruments"), None);
    let original = score.clone();

    let actions = [
        Action::remove_system(&score, 0).unwrap(),
        Action::remove_player(&score, 0).unwrap(),
        Action::remove_view_filter(&score, 0).unwrap(),
    ];

    for action in &actions {
        action.redo(&mut score).unwrap();
    }
    assert!(score.systems().is_empty());
    assert!(score.players().is_empty());
    assert!(score.view_filters().is_empty());

    for action in actions.iter().rev() {
        action.undo(&mut score).unwrap();
    }
    assert_eq!(score, original);
}

#[test]
fn test_remove_out_of_range() {
    let score = Score::new();
    assert_eq!(
        Action::remove_player(&score, 0),
        Err(ActionError::IndexOutOfRange {
            collection: "players",
            index: 0
        })
    );
    assert!(Action::remove_instrument(&score, 3).is_err());
    assert!(Action::remove_chord_diagram(&score, 0).is_err());
}

#[test]
fn test_tempo_marker_actions() {
    let mut score = Score::new();
    score.insert_system(System::new(), None);
    let original = score.clone();

    let mut marker = TempoMarker::new(8);
    marker.set_beats_per_minute(90).unwrap();
    let add = Action::AddTempoMarker {
        system: 0,
        marker: marker.clone(),
    };

    add.redo(&mut score).unwrap();
    assert_eq!(score.systems()[0].tempo_markers, vec![marker]);

    let remove = Action::remove_tempo_marker(&score, 0, 8).unwrap();
    remove.redo(&mut score).unwrap();
    assert!(score.systems()[0].tempo_markers.is_empty());
    remove.undo(&mut score).unwrap();
    add.undo(&mut score).unwrap();
    assert_eq!(score, original);

    assert_eq!(
        Action::remove_tempo_marker(&score, 0, 8),
        Err(ActionError::TempoMarkerNotFound {
            system: 0,
            position: 8
        })
    );
}

#[test]
fn test_rehearsal_sign_actions_relabel() {
    let mut system = System::new();
    system.insert_barline(
        Barline::new(4, BarType::SingleBar).with_rehearsal_sign(RehearsalSign::new("Intro")),
    );
    system.insert_barline(
        Barline::new(8, BarType::SingleBar).with_rehearsal_sign(RehearsalSign::new("Verse")),
    );
    let mut score = Score::new();
    score.insert_system(system, None);
    adjust_rehearsal_signs(&mut score);
    let original = score.clone();

    let remove = Action::remove_rehearsal_sign(&score, 0, 4).unwrap();
    remove.redo(&mut score).unwrap();

    let verse = score.systems()[0].barline_at(8).unwrap();
    assert_eq!(verse.rehearsal_sign.as_ref().unwrap().letters, "A");

    remove.undo(&mut score).unwrap();
    assert_eq!(score, original);

    let add = Action::AddRehearsalSign {
        system: 0,
        barline_position: 0,
        sign: RehearsalSign::new("Count In"),
    };
    add.redo(&mut score).unwrap();
    let labels: Vec<&str> = score.systems()[0]
        .barlines
        .iter()
        .filter_map(|b| b.rehearsal_sign.as_ref())
        .map(|sign| sign.letters.as_str())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C"]);

    add.undo(&mut score).unwrap();
    assert_eq!(score, original);
}

#[test]
fn test_edit_score_info() {
    let mut score = Score::new();
    let info = ScoreInfo {
        title: "Song".to_string(),
        artist: "Band".to_string(),
        ..ScoreInfo::default()
    };

    let action = Action::edit_score_info(&score, info.clone());
    action.redo(&mut score).unwrap();
    assert_eq!(score.score_info(), &info);

    action.undo(&mut score).unwrap();
    assert_eq!(score.score_info(), &ScoreInfo::default());
}

#[test]
fn test_undo_stack_with_note_actions() {
    let mut note = Note::new(2, 5);
    note.set_tapped_harmonic_fret(17);
    note.set_trill_fret(7);
    let mut score = score_with_note(note);
    let original = score.clone();
    let mut stack = UndoStack::default();

    let action = Action::remove_tapped_harmonic(&score, note_location()).unwrap();
    stack.push(action, &mut score).unwrap();
    let action = Action::remove_trill(&score, note_location()).unwrap();
    stack.push(action, &mut score).unwrap();

    assert_eq!(stack.undo_text().as_deref(), Some("Remove Trill"));
    let note = note_location().note(&score).unwrap();
    assert!(!note.has_trill() && !note.has_tapped_harmonic());

    stack.undo(&mut score).unwrap();
    stack.undo(&mut score).unwrap();
    assert_eq!(score, original);

    stack.redo(&mut score).unwrap();
    assert_eq!(stack.redo_text().as_deref(), Some("Remove Trill"));
}

#[test]
fn test_actions_serialize() {
    let action = Action::set_line_spacing(&Score::new(), 12);
    let json = serde_json::to_string(&action).unwrap();
    let restored: Action = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, action);
}
