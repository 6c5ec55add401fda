//! Editing session behind the WASM API
//!
//! Holds the open score and its undo history. Every editing entry point goes
//! through the undo stack so the host's undo/redo buttons cover it.

use crate::models::{score_utils, Score, ScoreLocation};
use crate::undo::{Action, ActionError, UndoStack};

#[derive(Clone, Debug, Default)]
pub struct Session {
    score: Score,
    undo_stack: UndoStack,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    /// Replace the open score and forget the previous history
    pub fn load_score(&mut self, score: Score) {
        log::info!("Loaded score with {} systems", score.systems().len());
        self.score = score;
        self.undo_stack.clear();
    }

    pub fn set_line_spacing(&mut self, spacing: i32) -> Result<(), ActionError> {
        let action = Action::set_line_spacing(&self.score, spacing);
        self.undo_stack.push(action, &mut self.score)
    }

    pub fn remove_tapped_harmonic(&mut self, location: ScoreLocation) -> Result<(), ActionError> {
        let action = Action::remove_tapped_harmonic(&self.score, location)?;
        self.undo_stack.push(action, &mut self.score)
    }

    /// Add the standard view filters as a single undo step
    pub fn add_standard_filters(&mut self) -> Result<(), ActionError> {
        let mut preview = self.score.clone();
        score_utils::add_standard_filters(&mut preview);

        let first_new = self.score.view_filters().len();
        self.undo_stack.begin_macro("Add Standard Filters");
        for (index, filter) in preview.view_filters().iter().enumerate().skip(first_new) {
            let action = Action::AddViewFilter {
                index,
                filter: filter.clone(),
            };
            if let Err(e) = self.undo_stack.push(action, &mut self.score) {
                self.undo_stack.end_macro();
                return Err(e);
            }
        }
        self.undo_stack.end_macro();
        Ok(())
    }

    pub fn adjust_rehearsal_signs(&mut self) {
        score_utils::adjust_rehearsal_signs(&mut self.score);
    }

    /// Rendered names of every chord in the score, sorted
    pub fn find_all_chord_names(&self) -> Vec<String> {
        score_utils::find_all_chord_names(&self.score)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn undo(&mut self) -> Result<(), ActionError> {
        self.undo_stack.undo(&mut self.score)
    }

    pub fn redo(&mut self) -> Result<(), ActionError> {
        self.undo_stack.redo(&mut self.score)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }
}
