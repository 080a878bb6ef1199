//! Undo/redo over the table collection.
//!
//! History entries are full value-copied snapshots of the [`TableStore`],
//! pushed immediately before each committed mutation - a gesture end or a
//! single action, never per pointer-move frame. Any committed mutation after
//! an undo clears the redo stack (branching-history invalidation). Undo and
//! redo on an empty stack are no-ops, not errors.

use tableplan_core::constants::HISTORY_LIMIT;

use crate::table_store::TableStore;

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    undo_stack: Vec<TableStore>,
    redo_stack: Vec<TableStore>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Records the pre-mutation state and invalidates the redo branch.
    pub fn push(&mut self, snapshot: TableStore) {
        self.redo_stack.clear();
        if self.undo_stack.len() >= HISTORY_LIMIT {
            self.undo_stack.remove(0);
            tracing::debug!("history limit reached, dropping oldest snapshot");
        }
        self.undo_stack.push(snapshot);
    }

    /// Restores the most recent snapshot, moving `current` to the redo
    /// stack. Returns `None` (leaving `current` untouched) when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: &TableStore) -> Option<TableStore> {
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(restored)
    }

    /// Inverse of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &TableStore) -> Option<TableStore> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(restored)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableplan_core::model::{Table, TableShape};

    fn store_with(n: usize) -> TableStore {
        let mut store = TableStore::new();
        for _ in 0..n {
            let id = store.generate_id();
            store.insert(Table::new(id, TableShape::Circle));
        }
        store
    }

    #[test]
    fn undo_on_empty_is_a_noop() {
        let mut history = CommandHistory::new();
        let current = store_with(1);
        assert!(history.undo(&current).is_none());
        assert!(history.redo(&current).is_none());
    }

    #[test]
    fn push_invalidates_redo() {
        let mut history = CommandHistory::new();
        history.push(store_with(0));
        let current = store_with(1);
        let _ = history.undo(&current);
        assert!(history.can_redo());

        history.push(store_with(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut history = CommandHistory::new();
        let before = store_with(1);
        let after = store_with(2);

        history.push(before.clone());
        let undone = history.undo(&after).unwrap();
        assert_eq!(undone.len(), before.len());

        let redone = history.redo(&undone).unwrap();
        assert_eq!(redone.len(), after.len());
    }

    #[test]
    fn depth_is_capped() {
        let mut history = CommandHistory::new();
        for i in 0..(HISTORY_LIMIT + 10) {
            history.push(store_with(i % 3));
        }
        let mut undos = 0;
        let current = store_with(0);
        let mut cursor = current;
        while let Some(prev) = history.undo(&cursor) {
            cursor = prev;
            undos += 1;
        }
        assert_eq!(undos, HISTORY_LIMIT);
    }
}
