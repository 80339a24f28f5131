//! Undo/redo for designer state.

use super::DesignerState;

impl DesignerState {
    /// Undo last committed change. Returns `false` at the start of history.
    ///
    /// An unfinished drag or resize is cancelled first.
    pub fn undo(&mut self) -> bool {
        self.cancel_interaction();
        match self.history.undo() {
            Some(previous) => {
                self.template = previous;
                self.sync_selection();
                tracing::debug!("Undo, {} step(s) left", self.history.undo_depth());
                true
            }
            None => false,
        }
    }

    /// Redo last undone change. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        self.cancel_interaction();
        match self.history.redo() {
            Some(next) => {
                self.template = next;
                self.sync_selection();
                tracing::debug!("Redo, {} step(s) left", self.history.redo_depth());
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Clear history, keeping the current template as its only entry.
    pub fn clear_history(&mut self) {
        self.history.reset(self.template.clone());
    }
}
