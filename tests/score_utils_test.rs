// Whole-score queries and bulk edits

use tabscore::models::score_utils::{
    add_standard_filters, adjust_rehearsal_signs, current_players, find_all_chord_names,
    rehearsal_label,
};
use tabscore::models::{
    ActivePlayer, BarType, Barline, ChordDiagram, ChordName, ChordText, FilterRule, Formula,
    FormulaModification, Key, Operation, Player, PlayerChange, RehearsalSign, Score, Staff,
    System, Tuning, Variation, ViewFilter,
};

fn system_with_signs(count: usize) -> System {
    let mut system = System::new();
    for i in 0..count {
        let position = (i as i32 + 1) * 4;
        system.insert_barline(
            Barline::new(position, BarType::SingleBar)
                .with_rehearsal_sign(RehearsalSign::new(format!("Part {}", i))),
        );
    }
    system
}

fn letters(score: &Score) -> Vec<String> {
    score
        .systems()
        .iter()
        .flat_map(|system| system.barlines.iter())
        .filter_map(|barline| barline.rehearsal_sign.as_ref())
        .map(|sign| sign.letters.clone())
        .collect()
}

#[test]
fn test_rehearsal_labels() {
    assert_eq!(rehearsal_label(0), "A");
    assert_eq!(rehearsal_label(25), "Z");
    assert_eq!(rehearsal_label(26), "AA");
    assert_eq!(rehearsal_label(51), "AZ");
    assert_eq!(rehearsal_label(52), "AAA");
}

#[test]
fn test_adjust_rehearsal_signs_across_systems() {
    let mut score = Score::new();
    score.insert_system(system_with_signs(20), None);
    score.insert_system(system_with_signs(7), None);

    adjust_rehearsal_signs(&mut score);

    let labels = letters(&score);
    assert_eq!(labels.len(), 27);
    assert_eq!(labels[0], "A");
    assert_eq!(labels[19], "T");
    assert_eq!(labels[20], "U");
    assert_eq!(labels[25], "Z");
    assert_eq!(labels[26], "AA");
}

#[test]
fn test_adjust_rehearsal_signs_without_signs() {
    let mut score = Score::new();
    score.insert_system(System::new(), None);
    let before = score.clone();

    adjust_rehearsal_signs(&mut score);
    assert_eq!(score, before);
}

#[test]
fn test_find_all_chord_names_dedups_and_sorts() {
    let c = ChordName::new(Key::C, Variation::Natural, Formula::Major);
    let a_minor = ChordName::new(Key::A, Variation::Natural, Formula::Minor);
    let g7 = ChordName::new(Key::G, Variation::Natural, Formula::Dominant7th);

    let mut score = Score::new();
    score.insert_chord_diagram(ChordDiagram::new(c.clone(), 0, vec![0, 1, 0, 2, 3, -1]), None);
    score.insert_chord_diagram(ChordDiagram::new(g7.clone(), 0, vec![1, 0, 0, 0, 2, 3]), None);

    let mut system = System::new();
    system.chords.push(ChordText::new(0, a_minor.clone()));
    system.chords.push(ChordText::new(8, c.clone()));
    score.insert_system(system, None);

    let names = find_all_chord_names(&score);
    assert_eq!(names, vec![a_minor, c, g7]);
}

#[test]
fn test_chord_names_compare_on_all_fields() {
    let plain = ChordName::new(Key::A, Variation::Natural, Formula::Major);
    let slash = plain.clone().with_bass(Key::E, Variation::Natural);
    let sus = plain.clone().with_modification(FormulaModification::Suspended4th);

    let mut score = Score::new();
    let mut system = System::new();
    for name in [&plain, &slash, &sus, &plain] {
        system.chords.push(ChordText::new(0, name.clone()));
    }
    score.insert_system(system, None);

    let names: Vec<String> = find_all_chord_names(&score)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, vec!["A", "A/E", "Asus4"]);
}

#[test]
fn test_chord_names_with_equal_text_have_stable_order() {
    let no_chord_d = ChordName {
        no_chord: true,
        ..ChordName::new(Key::D, Variation::Natural, Formula::Major)
    };
    let no_chord_c = ChordName {
        no_chord: true,
        ..ChordName::new(Key::C, Variation::Natural, Formula::Major)
    };
    assert_eq!(no_chord_c.to_string(), no_chord_d.to_string());

    for order in [[&no_chord_d, &no_chord_c], [&no_chord_c, &no_chord_d]] {
        let mut score = Score::new();
        let mut system = System::new();
        for name in order {
            system.chords.push(ChordText::new(0, name.clone()));
        }
        score.insert_system(system, None);

        assert_eq!(
            find_all_chord_names(&score),
            vec![no_chord_c.clone(), no_chord_d.clone()]
        );
    }
}

#[test]
fn test_add_standard_filters() {
    let mut score = Score::new();
    score.insert_view_filter(ViewFilter::new("Custom"), None);

    add_standard_filters(&mut score);

    let filters = score.view_filters();
    assert_eq!(filters.len(), 4);
    assert_eq!(filters[1].description, "All Instruments");
    assert!(filters[1].rules().is_empty());

    assert_eq!(filters[2].description, "Guitars");
    assert_eq!(
        filters[2].rules(),
        &[FilterRule::num_strings(Operation::GreaterThanEqual, 6)]
    );

    assert_eq!(filters[3].description, "Basses");
    assert_eq!(
        filters[3].rules(),
        &[FilterRule::num_strings(Operation::LessThanEqual, 5)]
    );
}

fn change(position: i32, staff: usize, player: usize) -> PlayerChange {
    let mut change = PlayerChange::new(position);
    change.insert_active_player(staff, ActivePlayer::new(player, 0));
    change
}

#[test]
fn test_current_players() {
    let mut first = System::new();
    first.player_changes.push(change(0, 0, 0));
    first.player_changes.push(change(10, 0, 1));

    let mut second = System::new();
    second.player_changes.push(change(5, 0, 2));

    let mut score = Score::new();
    score.insert_system(first, None);
    score.insert_system(System::new(), None);
    score.insert_system(second, None);

    assert_eq!(current_players(&score, 0, 0).map(|c| c.position), Some(0));
    assert_eq!(current_players(&score, 0, 9).map(|c| c.position), Some(0));
    assert_eq!(current_players(&score, 0, 10).map(|c| c.position), Some(10));

    // Carried over from an earlier system
    let carried = current_players(&score, 1, 0).unwrap();
    assert_eq!(carried.players_for_staff(0)[0].player_number, 1);

    assert_eq!(current_players(&score, 2, 4).map(|c| c.position), Some(10));
    assert_eq!(current_players(&score, 2, 5).map(|c| c.position), Some(5));
}

#[test]
fn test_current_players_without_changes() {
    let mut score = Score::new();
    score.insert_system(System::new(), None);
    assert!(current_players(&score, 0, 100).is_none());
}

#[test]
fn test_view_filter_accept() {
    let mut score = Score::new();
    score.insert_player(Player::new("Guitar", Tuning::default()));
    score.insert_player(Player::new("Bass", Tuning::new("Bass", vec![43, 38, 33, 28])));

    let mut system = System::new();
    system.staves = vec![Staff::new(6), Staff::new(4)];
    let mut assignment = PlayerChange::new(0);
    assignment.insert_active_player(0, ActivePlayer::new(0, 0));
    assignment.insert_active_player(1, ActivePlayer::new(1, 0));
    system.player_changes.push(assignment);
    score.insert_system(system, None);

    add_standard_filters(&mut score);
    let filters = score.view_filters();

    // All Instruments
    assert!(filters[0].accept(&score, 0, 0));
    assert!(filters[0].accept(&score, 0, 1));
    // Guitars
    assert!(filters[1].accept(&score, 0, 0));
    assert!(!filters[1].accept(&score, 0, 1));
    // Basses
    assert!(!filters[2].accept(&score, 0, 0));
    assert!(filters[2].accept(&score, 0, 1));

    let mut by_name = ViewFilter::new("Bass by name");
    by_name.add_rule(FilterRule::player_name("^Bass$").unwrap());
    assert!(by_name.accept(&score, 0, 1));
    assert!(!by_name.accept(&score, 0, 0));

    // A stored pattern that no longer compiles hides every staff
    let mut broken = ViewFilter::new("Broken");
    broken.add_rule(FilterRule::PlayerName {
        pattern: "[".to_string(),
    });
    assert!(!broken.accept(&score, 0, 0));
    assert!(!broken.accept(&score, 0, 1));
}

#[test]
fn test_view_filter_staff_without_players() {
    let mut score = Score::new();
    score.insert_player(Player::default());
    score.insert_system(System::new(), None);

    let mut guitars = ViewFilter::new("Guitars");
    guitars.add_rule(FilterRule::num_strings(Operation::GreaterThanEqual, 6));
    assert!(!guitars.accept(&score, 0, 0));
}
