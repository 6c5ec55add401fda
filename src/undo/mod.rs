//! Reversible edits and the undo stack
//!
//! Every change to a `Score` made by the editor is an `Action`. Pushing an
//! action onto the `UndoStack` applies it; the stack then walks back and
//! forth through its history with `undo`/`redo`.

mod action;

pub use action::{Action, ActionError};

use crate::models::Score;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An open group of actions being collected into one undo step
#[derive(Clone, Debug, Default)]
struct PendingMacro {
    description: String,
    actions: Vec<Action>,
}

/// Manages undo/redo history
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UndoStack {
    /// Stack of actions that can be undone
    pub actions: VecDeque<Action>,
    /// Current position in the stack (for redo support)
    pub current_index: usize,
    /// Maximum number of actions to keep in history
    max_size: usize,
    #[serde(skip)]
    pending_macro: Option<PendingMacro>,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(100)
    }
}

impl PartialEq for UndoStack {
    fn eq(&self, other: &Self) -> bool {
        // Only compare serialized fields (skip transient fields)
        self.actions == other.actions
            && self.current_index == other.current_index
            && self.max_size == other.max_size
    }
}

impl UndoStack {
    /// Create a new undo stack with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            actions: VecDeque::new(),
            current_index: 0,
            max_size,
            pending_macro: None,
        }
    }

    /// Apply an action and record it.
    ///
    /// Nothing is recorded if the action fails. While a macro is open the
    /// action joins the macro instead of becoming its own undo step.
    pub fn push(&mut self, action: Action, score: &mut Score) -> Result<(), ActionError> {
        action.redo(score)?;

        match self.pending_macro.as_mut() {
            Some(pending) => pending.actions.push(action),
            None => self.record(action),
        }
        Ok(())
    }

    /// Start grouping pushed actions into a single undo step
    pub fn begin_macro(&mut self, description: impl Into<String>) {
        self.end_macro();
        self.pending_macro = Some(PendingMacro {
            description: description.into(),
            actions: Vec::new(),
        });
    }

    /// Close the open macro and add it to the history
    pub fn end_macro(&mut self) {
        if let Some(pending) = self.pending_macro.take() {
            if !pending.actions.is_empty() {
                self.record(Action::Batch {
                    description: pending.description,
                    actions: pending.actions,
                });
            }
        }
    }

    fn record(&mut self, action: Action) {
        log::debug!("Recorded action: {}", action.description());

        // Truncate any redo history when new action is added
        self.actions.truncate(self.current_index);
        self.actions.push_back(action);
        self.current_index = self.actions.len();

        // Enforce max size
        if self.actions.len() > self.max_size {
            self.actions.pop_front();
            self.current_index = self.current_index.saturating_sub(1);
        }
    }

    /// Undo the last action
    pub fn undo(&mut self, score: &mut Score) -> Result<(), ActionError> {
        // Finalize any open macro first
        self.end_macro();

        if !self.can_undo() {
            return Err(ActionError::NoUndoHistory);
        }

        self.actions[self.current_index - 1].undo(score)?;
        self.current_index -= 1;
        Ok(())
    }

    /// Redo the last undone action
    pub fn redo(&mut self, score: &mut Score) -> Result<(), ActionError> {
        if !self.can_redo() {
            return Err(ActionError::NoRedoHistory);
        }

        self.actions[self.current_index].redo(score)?;
        self.current_index += 1;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index < self.actions.len()
    }

    /// Description of the action `undo` would revert
    pub fn undo_text(&self) -> Option<String> {
        self.current_index
            .checked_sub(1)
            .and_then(|i| self.actions.get(i))
            .map(Action::description)
    }

    /// Description of the action `redo` would apply
    pub fn redo_text(&self) -> Option<String> {
        self.actions.get(self.current_index).map(Action::description)
    }

    /// Clear all undo history
    pub fn clear(&mut self) {
        self.actions.clear();
        self.current_index = 0;
        self.pending_macro = None;
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.current_index
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.actions.len() - self.current_index
    }
}
