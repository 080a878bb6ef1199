//! The commit protocol and undo/redo actions.
//!
//! Every committed mutation pushes the pre-mutation collection to the undo
//! stack first and bumps the revision counter. Gestures are one commit at
//! pointer-up, never one per move frame; the snapshot they push is the one
//! captured at pointer-down.

use super::EditorState;

impl EditorState {
    /// Records the current collection as a history entry and counts the
    /// mutation about to happen. Call immediately before any committed
    /// mutation outside a gesture.
    pub(crate) fn commit(&mut self) {
        self.history.push(self.tables.clone());
        self.revision += 1;
    }

    /// Commits a finished gesture with the snapshot captured at its start.
    pub(crate) fn commit_gesture(&mut self, pre: crate::table_store::TableStore) {
        self.history.push(pre);
        self.revision += 1;
    }

    /// Restores the previous committed state. No-op when there is nothing
    /// to undo.
    pub fn undo(&mut self) {
        let Some(restored) = self.history.undo(&self.tables) else {
            return;
        };
        self.tables = restored;
        self.selection.prune(&self.tables);
        self.revision += 1;
        tracing::debug!(tables = self.tables.len(), "undo");
    }

    /// Re-applies the most recently undone state. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        let Some(restored) = self.history.redo(&self.tables) else {
            return;
        };
        self.tables = restored;
        self.selection.prune(&self.tables);
        self.revision += 1;
        tracing::debug!(tables = self.tables.len(), "redo");
    }
}
