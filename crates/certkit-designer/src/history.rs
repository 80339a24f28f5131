//! Bounded undo/redo log of state snapshots.
//!
//! The log always holds at least the state the session started from. The
//! cursor points at the entry matching the current state; `undo` and `redo`
//! move it and hand back a copy of the snapshot there.

use std::collections::VecDeque;

/// Default number of snapshots retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct UndoRedoManager<T: Clone> {
    entries: VecDeque<T>,
    cursor: usize,
    limit: usize,
}

impl<T: Clone> UndoRedoManager<T> {
    /// Starts a log holding `initial`. `limit` counts every retained snapshot
    /// including the initial one and is raised to at least 2.
    pub fn new(initial: T, limit: usize) -> Self {
        let mut entries = VecDeque::with_capacity(limit.max(2));
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            limit: limit.max(2),
        }
    }

    /// Appends a committed state, discarding any redo branch.
    pub fn record(&mut self, state: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(state);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        tracing::trace!(
            "History recorded, depth {} of {}",
            self.entries.len(),
            self.limit
        );
    }

    /// Steps back one snapshot. `None` at the start of history.
    pub fn undo(&mut self) -> Option<T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Steps forward one snapshot. `None` at the end of history.
    pub fn redo(&mut self) -> Option<T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of undo steps available.
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of redo steps available.
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    /// Drops all history and starts over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.cursor = 0;
    }

    /// Applies `f` to the snapshot at the cursor only.
    pub fn update_current(&mut self, f: impl FnOnce(&mut T)) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            f(entry);
        }
    }

    /// Applies `f` to every retained snapshot.
    ///
    /// Used for fields that must survive undo, such as a persistence id
    /// assigned after the first save.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut T)) {
        self.entries.iter_mut().for_each(&mut f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_has_nothing_to_undo() {
        let manager = UndoRedoManager::new(0, 10);
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
        assert_eq!(manager.current(), Some(&0));
    }

    #[test]
    fn test_update_current_leaves_other_entries() {
        let mut manager = UndoRedoManager::new(0, 10);
        manager.record(1);
        manager.record(2);
        manager.undo();
        manager.update_current(|v| *v += 10);
        assert_eq!(manager.current(), Some(&11));
        assert_eq!(manager.redo(), Some(2));
        manager.undo();
        assert_eq!(manager.undo(), Some(0));
    }

    #[test]
    fn test_record_truncates_redo_branch() {
        let mut manager = UndoRedoManager::new(0, 10);
        manager.record(1);
        manager.record(2);
        assert_eq!(manager.undo(), Some(1));
        manager.record(3);
        assert!(!manager.can_redo());
        assert_eq!(manager.undo(), Some(1));
        assert_eq!(manager.undo(), Some(0));
        assert_eq!(manager.undo(), None);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut manager = UndoRedoManager::new(0, 3);
        for i in 1..=5 {
            manager.record(i);
        }
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.undo(), Some(4));
        assert_eq!(manager.undo(), Some(3));
        assert_eq!(manager.undo(), None);
    }

    #[test]
    fn test_update_all() {
        let mut manager = UndoRedoManager::new(1, 5);
        manager.record(2);
        manager.update_all(|v| *v *= 10);
        assert_eq!(manager.current(), Some(&20));
        assert_eq!(manager.undo(), Some(10));
    }
}
