//! Storage for the table collection.
//!
//! Owns the tables, hands out ids, and answers draw-order queries. Draw order
//! is by `z_index` (ties broken by id, so order is total and stable); the
//! indices themselves need not be contiguous - bring-to-front and
//! send-to-back just move past the current extremes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tableplan_core::model::{Table, TableId};

/// The table collection of one floor plan.
///
/// Cloning a store is a full value copy; the undo/redo history relies on
/// snapshots being independent of the live collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStore {
    tables: HashMap<TableId, Table>,
    next_id: TableId,
}

impl TableStore {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            next_id: 1,
        }
    }

    /// Generates a fresh table id.
    pub fn generate_id(&mut self) -> TableId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn insert(&mut self, table: Table) {
        // Keep the id generator ahead of restored snapshots and loaded plans.
        if table.id >= self.next_id {
            self.next_id = table.id + 1;
        }
        self.tables.insert(table.id, table);
    }

    pub fn remove(&mut self, id: TableId) -> Option<Table> {
        self.tables.remove(&id)
    }

    pub fn get(&self, id: TableId) -> Option<&Table> {
        self.tables.get(&id)
    }

    pub fn get_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(&id)
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.tables.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.tables.values_mut()
    }

    /// Table ids from back to front.
    pub fn draw_order(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self.tables.keys().copied().collect();
        ids.sort_by_key(|id| (self.tables[id].z_index, *id));
        ids
    }

    /// Highest z-index in the collection.
    pub fn max_z(&self) -> Option<i32> {
        self.tables.values().map(|t| t.z_index).max()
    }

    /// Lowest z-index in the collection.
    pub fn min_z(&self) -> Option<i32> {
        self.tables.values().map(|t| t.z_index).min()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableplan_core::model::TableShape;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut store = TableStore::new();
        let a = store.generate_id();
        let b = store.generate_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn insert_keeps_id_generator_ahead() {
        let mut store = TableStore::new();
        store.insert(Table::new(41, TableShape::Circle));
        assert_eq!(store.generate_id(), 42);
    }

    #[test]
    fn draw_order_sorts_by_z_then_id() {
        let mut store = TableStore::new();
        let mut a = Table::new(store.generate_id(), TableShape::Circle);
        a.z_index = 5;
        let mut b = Table::new(store.generate_id(), TableShape::Circle);
        b.z_index = -1;
        let mut c = Table::new(store.generate_id(), TableShape::Circle);
        c.z_index = 5;
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        store.insert(a);
        store.insert(b);
        store.insert(c);

        assert_eq!(store.draw_order(), vec![b_id, a_id, c_id]);
    }
}
