//! Table actions: create, update, delete, duplicate, z-order.
//!
//! Each action is atomic and commits exactly one history entry. Unknown ids
//! are warn-and-ignore; geometry invariants are enforced by the model's own
//! clamping, never by rejecting the action.

use tableplan_core::constants::DUPLICATE_OFFSET;
use tableplan_core::model::{Point, Table, TableId, TablePatch, TableShape};

use super::EditorState;

impl EditorState {
    /// Adds a table with default geometry at the center of the current view
    /// (snapped when snapping is on), on top of the stack, and selects it.
    pub fn add_table(&mut self, shape: TableShape) -> TableId {
        let center = self.viewport.to_world(
            self.viewport.canvas_width() / 2.0,
            self.viewport.canvas_height() / 2.0,
        );
        self.add_table_at(shape, center)
    }

    /// Adds a table with default geometry centered on `center`.
    pub fn add_table_at(&mut self, shape: TableShape, center: Point) -> TableId {
        self.commit();

        let id = self.tables.generate_id();
        let mut table = Table::new(id, shape);
        let origin = Point::new(center.x - table.width / 2.0, center.y - table.height / 2.0);
        table.position = self.grid.apply(origin);
        table.z_index = self.tables.max_z().map_or(0, |z| z + 1);
        self.tables.insert(table);

        self.selection.set_selected(Some(id));
        tracing::debug!(id, ?shape, "table added");
        id
    }

    /// Applies a field patch to a table.
    pub fn update_table(&mut self, id: TableId, patch: TablePatch) {
        if !self.tables.contains(id) {
            tracing::warn!(id, "update ignored: unknown table");
            return;
        }
        self.commit();
        if let Some(table) = self.tables.get_mut(id) {
            table.apply_patch(patch);
        }
    }

    /// Removes a table and clears any selection or hover pointing at it.
    pub fn delete_table(&mut self, id: TableId) {
        if !self.tables.contains(id) {
            tracing::warn!(id, "delete ignored: unknown table");
            return;
        }
        self.commit();
        self.tables.remove(id);
        self.selection.prune(&self.tables);
        tracing::debug!(id, "table deleted");
    }

    /// Clones a table under a fresh id, offset so the copy is visible, on
    /// top of the stack, and selects the copy.
    pub fn duplicate_table(&mut self, id: TableId) -> Option<TableId> {
        let Some(source) = self.tables.get(id).cloned() else {
            tracing::warn!(id, "duplicate ignored: unknown table");
            return None;
        };
        self.commit();

        let new_id = self.tables.generate_id();
        let (dx, dy) = DUPLICATE_OFFSET;
        let mut copy = source;
        copy.id = new_id;
        copy.label = format!("Table {}", new_id);
        copy.position = Point::new(copy.position.x + dx, copy.position.y + dy);
        copy.z_index = self.tables.max_z().map_or(0, |z| z + 1);
        self.tables.insert(copy);

        self.selection.set_selected(Some(new_id));
        tracing::debug!(source = id, copy = new_id, "table duplicated");
        Some(new_id)
    }

    /// Moves a table above everything else.
    pub fn bring_to_front(&mut self, id: TableId) {
        let Some(top) = self.tables.max_z() else {
            return;
        };
        if !self.tables.contains(id) {
            tracing::warn!(id, "bring_to_front ignored: unknown table");
            return;
        }
        self.commit();
        if let Some(table) = self.tables.get_mut(id) {
            table.z_index = top + 1;
        }
    }

    /// Moves a table below everything else.
    pub fn send_to_back(&mut self, id: TableId) {
        let Some(bottom) = self.tables.min_z() else {
            return;
        };
        if !self.tables.contains(id) {
            tracing::warn!(id, "send_to_back ignored: unknown table");
            return;
        }
        self.commit();
        if let Some(table) = self.tables.get_mut(id) {
            table.z_index = bottom - 1;
        }
    }
}
