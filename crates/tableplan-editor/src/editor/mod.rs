//! Editor state aggregate for host-shell integration.
//! Owns the table collection and every piece of editing state around it.
//!
//! This module is split into submodules for better organization:
//! - `tables`: table creation, update, deletion, duplication, z-order
//! - `history`: the commit protocol and undo/redo actions
//! - `viewport`: zoom, pan, canvas size, grid controls
//! - `input`: the pointer/keyboard interaction state machine
//! - `persistence`: the save protocol (saving flag, deferred-save merge)

mod history;
mod input;
mod persistence;
mod tables;
mod viewport;

use uuid::Uuid;

use tableplan_core::model::{Table, TableId};
use tableplan_core::seating::{self, Seat};

use crate::grid::GridSettings;
use crate::handles::{self, Handle};
use crate::history::CommandHistory;
use crate::interaction::InteractionMode;
use crate::selection::SelectionManager;
use crate::table_store::TableStore;
use crate::viewport::Viewport;

use tableplan_core::model::Point;

/// The floor-plan editor: table collection, selection, viewport, grid,
/// interaction mode, undo/redo, and the save bookkeeping.
///
/// All actions are synchronous, in-memory, and atomic; the only suspending
/// operation is [`save`](EditorState::save). One value of this type is one
/// editing session over one floor plan.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub(crate) tables: TableStore,
    pub(crate) selection: SelectionManager,
    pub(crate) viewport: Viewport,
    pub(crate) grid: GridSettings,
    pub(crate) mode: InteractionMode,
    pub(crate) history: CommandHistory,
    /// Collection snapshot captured at gesture start; becomes the history
    /// entry when the gesture commits, or the restore source on Escape.
    pub(crate) pre_gesture: Option<TableStore>,
    /// Host-reported focus: while a text entry has focus the editor ignores
    /// its keyboard shortcuts.
    pub(crate) text_entry_focused: bool,

    pub(crate) plan_id: Uuid,
    pub(crate) plan_name: String,
    /// Counts committed mutations of the table collection.
    pub(crate) revision: u64,
    pub(crate) saving: bool,
    pub(crate) save_requested: bool,
    pub(crate) in_flight_revision: u64,
    pub(crate) last_saved_revision: Option<u64>,
}

impl EditorState {
    /// Creates an editor for the floor plan identified by the host shell.
    pub fn new(plan_id: Uuid, plan_name: impl Into<String>) -> Self {
        Self {
            tables: TableStore::new(),
            selection: SelectionManager::new(),
            viewport: Viewport::default(),
            grid: GridSettings::default(),
            mode: InteractionMode::Idle,
            history: CommandHistory::new(),
            pre_gesture: None,
            text_entry_focused: false,
            plan_id,
            plan_name: plan_name.into(),
            revision: 0,
            saving: false,
            save_requested: false,
            in_flight_revision: 0,
            last_saved_revision: None,
        }
    }

    /// Seeds the editor with an existing table collection (a loaded plan).
    /// Clears history: the loaded state is the new baseline.
    pub fn with_tables(mut self, tables: impl IntoIterator<Item = Table>) -> Self {
        for table in tables {
            self.tables.insert(table);
        }
        self.history.clear();
        self
    }

    pub fn tables(&self) -> &TableStore {
        &self.tables
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id)
    }

    /// Tables in draw order (back to front), the order the render target
    /// paints them.
    pub fn draw_order(&self) -> Vec<&Table> {
        self.tables
            .draw_order()
            .into_iter()
            .filter_map(|id| self.tables.get(id))
            .collect()
    }

    /// Derived seat layout for a table. Recomputed on every call.
    pub fn seats_for(&self, id: TableId) -> Vec<Seat> {
        self.tables.get(id).map(seating::layout).unwrap_or_default()
    }

    pub fn selected(&self) -> Option<TableId> {
        self.selection.selected()
    }

    pub fn hovered(&self) -> Option<TableId> {
        self.selection.hovered()
    }

    pub fn selected_table(&self) -> Option<&Table> {
        self.selection.selected().and_then(|id| self.tables.get(id))
    }

    /// Handle positions for the selected table, for drawing and hit-testing.
    pub fn selection_handles(&self) -> Vec<(Handle, Point)> {
        self.selected_table().map(handles::positions).unwrap_or_default()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn plan_id(&self) -> Uuid {
        self.plan_id
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn set_plan_name(&mut self, name: impl Into<String>) {
        self.plan_name = name.into();
    }

    /// Selects a table directly (panel click, not canvas).
    pub fn set_selection(&mut self, id: Option<TableId>) {
        if let Some(id) = id {
            if !self.tables.contains(id) {
                tracing::warn!(id, "selection ignored: unknown table");
                return;
            }
        }
        self.selection.set_selected(id);
    }

    pub fn set_hover(&mut self, id: Option<TableId>) {
        self.selection.set_hovered(id);
    }

    /// Host-shell focus report; shortcuts are ignored while a text entry is
    /// focused.
    pub fn set_text_entry_focus(&mut self, focused: bool) {
        self.text_entry_focused = focused;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Uuid::new_v4(), "Untitled")
    }
}
