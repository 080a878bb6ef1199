//! The pointer/keyboard interaction state machine.
//!
//! Gestures follow a strict begin/commit protocol: pointer-down captures a
//! collection snapshot and enters a gesture mode, pointer-moves apply
//! transient geometry updates that never touch history, pointer-up commits
//! the snapshot as exactly one undo entry (and only when something actually
//! changed). Escape cancels the gesture and restores the pre-gesture state
//! with no history entry.

use tableplan_core::constants::{HANDLE_HIT_RADIUS, MIN_TABLE_SIZE, NUDGE_STEP};
use tableplan_core::model::{Point, TableId, TableShape};

use crate::handles::{self, Handle};
use crate::interaction::{InteractionMode, Key, KeyInput, Modifiers};
use crate::selection::SelectionManager;
use crate::table_store::TableStore;

use super::EditorState;

impl EditorState {
    /// Pointer press on the canvas. Decides the gesture: a handle of the
    /// selected table starts resize/rotate, a table body starts a drag (and
    /// selects), empty canvas starts a pan (and clears the selection).
    pub fn pointer_down(&mut self, screen_x: f64, screen_y: f64) {
        if !self.mode.is_idle() {
            // A second button mid-gesture neither restarts nor aborts it.
            return;
        }
        let world = self.viewport.to_world(screen_x, screen_y);
        let handle_tolerance = HANDLE_HIT_RADIUS / self.viewport.zoom();

        // Handles of the current selection sit above table bodies.
        let handle_hit = self
            .selected_table()
            .and_then(|t| handles::hit_test(t, &world, handle_tolerance).map(|h| (t.clone(), h)));
        if let Some((table, handle)) = handle_hit {
            self.pre_gesture = Some(self.tables.clone());
            self.mode = match handle {
                Handle::Resize(handle) => InteractionMode::Resizing {
                    table_id: table.id,
                    handle,
                    start_origin: table.position,
                    start_width: table.width,
                    start_height: table.height,
                    start_pointer: world,
                },
                Handle::Rotate => {
                    let c = table.center();
                    InteractionMode::Rotating {
                        table_id: table.id,
                        start_pointer_angle: pointer_angle(&world, &c),
                        start_rotation: table.rotation,
                    }
                }
            };
            return;
        }

        // Selects the topmost table under the pointer, or clears the
        // selection over empty canvas.
        if let Some(id) = self.selection.select_at(&self.tables, &world, 0.0) {
            let origin = self.tables.get(id).map(|t| t.position).unwrap_or(Point::ZERO);
            self.pre_gesture = Some(self.tables.clone());
            self.mode = InteractionMode::Dragging {
                table_id: id,
                grab_offset: Point::new(world.x - origin.x, world.y - origin.y),
            };
        } else {
            self.mode = InteractionMode::Panning {
                start_pointer: Point::new(screen_x, screen_y),
                start_pan: Point::new(self.viewport.pan_x(), self.viewport.pan_y()),
            };
        }
    }

    /// Pointer movement. Drives the active gesture transiently; while idle
    /// it only maintains the hovered table.
    pub fn pointer_move(&mut self, screen_x: f64, screen_y: f64) {
        let world = self.viewport.to_world(screen_x, screen_y);

        match self.mode {
            InteractionMode::Idle => {
                let hovered = SelectionManager::hit_test(&self.tables, &world, 0.0);
                self.selection.set_hovered(hovered);
            }
            InteractionMode::Dragging {
                table_id,
                grab_offset,
            } => {
                let proposed = Point::new(world.x - grab_offset.x, world.y - grab_offset.y);
                let position = self.grid.apply(proposed);
                if let Some(table) = self.tables.get_mut(table_id) {
                    table.position = position;
                }
            }
            InteractionMode::Resizing {
                table_id,
                handle,
                start_origin,
                start_width,
                start_height,
                start_pointer,
            } => {
                let dx = world.x - start_pointer.x;
                let dy = world.y - start_pointer.y;
                let (dir_x, dir_y) = handle.direction();

                let mut new_w = (start_width + dir_x * dx).max(MIN_TABLE_SIZE);
                let mut new_h = (start_height + dir_y * dy).max(MIN_TABLE_SIZE);
                if let Some(table) = self.tables.get_mut(table_id) {
                    if table.shape == TableShape::Square {
                        let side = new_w.max(new_h);
                        new_w = side;
                        new_h = side;
                    }
                    // Keep the corner opposite the handle anchored.
                    table.position = Point::new(
                        if dir_x < 0.0 {
                            start_origin.x + start_width - new_w
                        } else {
                            start_origin.x
                        },
                        if dir_y < 0.0 {
                            start_origin.y + start_height - new_h
                        } else {
                            start_origin.y
                        },
                    );
                    table.width = new_w;
                    table.height = new_h;
                }
            }
            InteractionMode::Rotating {
                table_id,
                start_pointer_angle,
                start_rotation,
            } => {
                if let Some(table) = self.tables.get_mut(table_id) {
                    let angle = pointer_angle(&world, &table.center());
                    table.set_rotation(start_rotation + angle - start_pointer_angle);
                }
            }
            InteractionMode::Panning {
                start_pointer,
                start_pan,
            } => {
                self.viewport.set_pan(
                    start_pan.x + screen_x - start_pointer.x,
                    start_pan.y + screen_y - start_pointer.y,
                );
            }
        }
    }

    /// Pointer release. Commits the gesture: one history entry, captured at
    /// gesture start, and only if the gesture changed a table. Pans commit
    /// nothing - history covers the table collection only.
    pub fn pointer_up(&mut self) {
        let mode = std::mem::take(&mut self.mode);
        let pre = self.pre_gesture.take();

        match mode {
            InteractionMode::Idle | InteractionMode::Panning { .. } => {}
            InteractionMode::Dragging { table_id, .. } => {
                if let Some(table) = self.tables.get_mut(table_id) {
                    table.position = self.grid.apply(table.position);
                }
                self.finish_table_gesture(table_id, pre);
            }
            InteractionMode::Resizing { table_id, .. }
            | InteractionMode::Rotating { table_id, .. } => {
                self.finish_table_gesture(table_id, pre);
            }
        }
    }

    /// Cancels the in-progress gesture, restoring whatever it was
    /// manipulating. Returns whether a gesture was active.
    pub fn cancel_gesture(&mut self) -> bool {
        let mode = std::mem::take(&mut self.mode);
        let pre = self.pre_gesture.take();

        match mode {
            InteractionMode::Idle => false,
            InteractionMode::Panning { start_pan, .. } => {
                self.viewport.set_pan(start_pan.x, start_pan.y);
                true
            }
            gesture => {
                if let (Some(pre), Some(id)) = (pre, gesture.table_id()) {
                    if let (Some(original), Some(live)) =
                        (pre.get(id).cloned(), self.tables.get_mut(id))
                    {
                        *live = original;
                    }
                }
                tracing::debug!("gesture cancelled");
                true
            }
        }
    }

    /// Keyboard shortcut dispatch. Returns whether the key was consumed.
    /// Inactive while the host reports a focused text entry.
    pub fn handle_key(&mut self, input: KeyInput) -> bool {
        if self.text_entry_focused {
            return false;
        }
        let m = input.modifiers;
        match input.key {
            Key::Escape => self.cancel_gesture(),
            Key::Delete | Key::Backspace => match self.selection.selected() {
                Some(id) => {
                    self.delete_table(id);
                    true
                }
                None => false,
            },
            Key::ArrowUp => self.nudge_selected(0.0, -1.0, m),
            Key::ArrowDown => self.nudge_selected(0.0, 1.0, m),
            Key::ArrowLeft => self.nudge_selected(-1.0, 0.0, m),
            Key::ArrowRight => self.nudge_selected(1.0, 0.0, m),
            Key::Char('z') if m.primary => {
                if m.shift {
                    self.redo();
                } else {
                    self.undo();
                }
                true
            }
            Key::Char('y') if m.primary => {
                self.redo();
                true
            }
            Key::Char('d') if m.primary => self
                .selection
                .selected()
                .and_then(|id| self.duplicate_table(id))
                .is_some(),
            Key::Char('g') if !m.primary => {
                self.toggle_grid();
                true
            }
            Key::Char('s') if !m.primary => {
                self.toggle_snap();
                true
            }
            Key::Char('0') => {
                self.reset_view();
                true
            }
            _ => false,
        }
    }

    /// Arrow-key nudge: one world unit, or a full grid cell with Shift.
    /// The result is snap-rounded when snapping is on, unless Alt bypasses
    /// it. Each nudge is one committed mutation.
    fn nudge_selected(&mut self, dx: f64, dy: f64, m: Modifiers) -> bool {
        if !self.mode.is_idle() {
            return false;
        }
        let Some(id) = self.selection.selected() else {
            return false;
        };
        if !self.tables.contains(id) {
            return false;
        }

        let step = if m.shift { self.grid.size } else { NUDGE_STEP };
        let snap = self.grid.snap && !m.alt;
        self.commit();
        if let Some(table) = self.tables.get_mut(id) {
            let mut p = Point::new(table.position.x + dx * step, table.position.y + dy * step);
            if snap {
                p = self.grid.snap_point(p);
            }
            table.position = p;
        }
        true
    }

    fn finish_table_gesture(&mut self, table_id: TableId, pre: Option<TableStore>) {
        let Some(pre) = pre else {
            return;
        };
        if pre.get(table_id) != self.tables.get(table_id) {
            self.commit_gesture(pre);
            tracing::debug!(id = table_id, "gesture committed");
        }
    }
}

/// Pointer angle around a center, in degrees.
fn pointer_angle(pointer: &Point, center: &Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}
