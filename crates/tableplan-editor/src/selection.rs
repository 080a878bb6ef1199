//! Selection and hover state.
//!
//! At most one table is selected and at most one hovered at a time. The
//! manager only holds ids; it validates them against the store on demand so
//! undo/redo and deletions cannot leave it pointing at a ghost.

use tableplan_core::model::{Point, TableId};

use crate::table_store::TableStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionManager {
    selected: Option<TableId>,
    hovered: Option<TableId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<TableId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<TableId> {
        self.hovered
    }

    pub fn set_selected(&mut self, id: Option<TableId>) {
        self.selected = id;
    }

    pub fn set_hovered(&mut self, id: Option<TableId>) {
        self.hovered = id;
    }

    /// Selects the topmost table whose footprint contains `point`, or clears
    /// the selection when the point hits empty canvas. Returns the new
    /// selection.
    pub fn select_at(
        &mut self,
        store: &TableStore,
        point: &Point,
        tolerance: f64,
    ) -> Option<TableId> {
        self.selected = Self::hit_test(store, point, tolerance);
        self.selected
    }

    /// Topmost table under `point`, if any. Iterates in reverse draw order so
    /// overlapping tables resolve to the one drawn last.
    pub fn hit_test(store: &TableStore, point: &Point, tolerance: f64) -> Option<TableId> {
        store
            .draw_order()
            .into_iter()
            .rev()
            .find(|id| {
                store
                    .get(*id)
                    .is_some_and(|t| t.contains_point(point, tolerance))
            })
    }

    /// Drops any id that no longer resolves. Called after undo/redo and
    /// deletes.
    pub fn prune(&mut self, store: &TableStore) {
        if self.selected.is_some_and(|id| !store.contains(id)) {
            self.selected = None;
        }
        if self.hovered.is_some_and(|id| !store.contains(id)) {
            self.hovered = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableplan_core::model::{Table, TableShape};

    fn store_with_two_overlapping() -> (TableStore, TableId, TableId) {
        let mut store = TableStore::new();
        let mut below = Table::new(store.generate_id(), TableShape::Rectangle);
        below.position = Point::new(0.0, 0.0);
        below.z_index = 0;
        let mut above = Table::new(store.generate_id(), TableShape::Rectangle);
        above.position = Point::new(40.0, 20.0);
        above.z_index = 3;
        let (b, a) = (below.id, above.id);
        store.insert(below);
        store.insert(above);
        (store, b, a)
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let (store, _, above) = store_with_two_overlapping();
        let mut sel = SelectionManager::new();
        // Inside both footprints.
        assert_eq!(sel.select_at(&store, &Point::new(60.0, 40.0), 0.0), Some(above));
    }

    #[test]
    fn empty_canvas_clears_selection() {
        let (store, below, _) = store_with_two_overlapping();
        let mut sel = SelectionManager::new();
        sel.set_selected(Some(below));
        assert_eq!(sel.select_at(&store, &Point::new(900.0, 900.0), 0.0), None);
    }

    #[test]
    fn prune_drops_dead_ids() {
        let (mut store, below, above) = store_with_two_overlapping();
        let mut sel = SelectionManager::new();
        sel.set_selected(Some(above));
        sel.set_hovered(Some(below));
        store.remove(above);
        sel.prune(&store);
        assert_eq!(sel.selected(), None);
        assert_eq!(sel.hovered(), Some(below));
    }
}
