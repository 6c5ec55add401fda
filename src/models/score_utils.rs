//! Score-wide queries and passes
//!
//! These are free functions over a `Score` rather than methods, since each one
//! walks several collections at once.

use std::collections::BTreeSet;

use super::chord_name::ChordName;
use super::score::Score;
use super::system::PlayerChange;
use super::view_filter::{FilterRule, Operation, ViewFilter};

/// Find the player change in effect at a given system and position.
///
/// Changes in earlier systems always apply; changes in the target system apply
/// if they are at or before `position_index`. The last applicable change wins.
/// Scans from the first system on every call.
pub fn current_players(
    score: &Score,
    system_index: usize,
    position_index: i32,
) -> Option<&PlayerChange> {
    let mut last_change = None;

    for (i, system) in score.systems().iter().enumerate() {
        if i > system_index {
            break;
        }

        for change in &system.player_changes {
            if i < system_index || change.position <= position_index {
                last_change = Some(change);
            }
        }
    }

    last_change
}

/// Label for the n-th rehearsal sign (0-based): A..Z, AA..AZ, AAA..AAZ, ...
pub fn rehearsal_label(index: usize) -> String {
    let length = index / 26 + 1;
    let last = (b'A' + (index % 26) as u8) as char;

    let mut label = "A".repeat(length - 1);
    label.push(last);
    label
}

/// Endless sequence of rehearsal sign labels
#[derive(Clone, Debug, Default)]
pub struct RehearsalLetters {
    index: usize,
}

impl RehearsalLetters {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for RehearsalLetters {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let label = rehearsal_label(self.index);
        self.index += 1;
        Some(label)
    }
}

/// Relabel every rehearsal sign in document order (systems top to bottom,
/// barlines left to right).
pub fn adjust_rehearsal_signs(score: &mut Score) {
    let signs = score
        .systems_mut()
        .iter_mut()
        .flat_map(|system| system.barlines.iter_mut())
        .filter_map(|barline| barline.rehearsal_sign.as_mut());

    let mut count = 0;
    for (sign, letters) in signs.zip(RehearsalLetters::new()) {
        sign.letters = letters;
        count += 1;
    }

    log::debug!("Relabelled {} rehearsal signs", count);
}

/// Append the default "All Instruments", "Guitars" and "Basses" filters.
pub fn add_standard_filters(score: &mut Score) {
    let all = ViewFilter::new("All Instruments");
    score.insert_view_filter(all, None);

    let mut guitars = ViewFilter::new("Guitars");
    guitars.add_rule(FilterRule::num_strings(Operation::GreaterThanEqual, 6));
    score.insert_view_filter(guitars, None);

    let mut basses = ViewFilter::new("Basses");
    basses.add_rule(FilterRule::num_strings(Operation::LessThanEqual, 5));
    score.insert_view_filter(basses, None);
}

/// Every distinct chord name used by a chord diagram or chord text, sorted
/// alphabetically by its rendered text. Names that render the same keep
/// their field order.
pub fn find_all_chord_names(score: &Score) -> Vec<ChordName> {
    let diagram_names = score.chord_diagrams().iter().map(|d| &d.chord_name);
    let text_names = score
        .systems()
        .iter()
        .flat_map(|system| system.chords.iter())
        .map(|chord| &chord.chord_name);

    let unique: BTreeSet<&ChordName> = diagram_names.chain(text_names).collect();

    let mut names: Vec<ChordName> = unique.into_iter().cloned().collect();
    // Stable, so equal renderings stay in set order
    names.sort_by_cached_key(|name| name.to_string());
    names
}
