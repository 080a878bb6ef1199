//! Interaction mode and raw input types.
//!
//! The mode is a tagged union with one variant per gesture, each carrying
//! only the fields that gesture needs - invalid combinations (a drag offset
//! without a drag, a resize handle while panning) are unrepresentable. A
//! gesture runs from pointer-down to pointer-up; Escape cancels it.

use tableplan_core::model::{Point, TableId};

use crate::handles::ResizeHandle;

/// Current gesture of the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Moving a table. `grab_offset` is pointer-world minus table origin at
    /// pointer-down, so the table does not jump under the cursor.
    Dragging {
        table_id: TableId,
        grab_offset: Point,
    },
    /// Dragging a corner handle. The starting rectangle and pointer anchor
    /// the delta math; the opposite corner stays fixed.
    Resizing {
        table_id: TableId,
        handle: ResizeHandle,
        start_origin: Point,
        start_width: f64,
        start_height: f64,
        start_pointer: Point,
    },
    /// Dragging the rotate handle. Rotation follows the pointer angle around
    /// the table center relative to where the gesture started.
    Rotating {
        table_id: TableId,
        start_pointer_angle: f64,
        start_rotation: f64,
    },
    /// Dragging empty canvas pans the viewport. Both anchors are in screen
    /// space: pan deltas are pixel deltas.
    Panning {
        start_pointer: Point,
        start_pan: Point,
    },
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    /// The table being manipulated, when the gesture has one.
    pub fn table_id(&self) -> Option<TableId> {
        match self {
            InteractionMode::Dragging { table_id, .. }
            | InteractionMode::Resizing { table_id, .. }
            | InteractionMode::Rotating { table_id, .. } => Some(*table_id),
            InteractionMode::Idle | InteractionMode::Panning { .. } => None,
        }
    }
}

/// Modifier keys held during a pointer or key event. `primary` is Ctrl, or
/// Cmd on macOS hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub primary: bool,
}

/// Keys the editor reacts to. Printable keys arrive as lowercase `Char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// A keyboard event as delivered by the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_primary(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                primary: true,
                ..Modifiers::default()
            },
        }
    }
}
