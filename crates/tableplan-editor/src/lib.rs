//! # Tableplan Editor
//!
//! Core of the interactive floor-plan editor: staff place, resize, rotate,
//! and arrange seating tables; the ordering subsystem reads the committed
//! collection (and the derived seat layout) back out of `tableplan-core`.
//!
//! ## Architecture
//!
//! ```text
//! EditorState (aggregate + action API)
//!   ├── TableStore (collection, id generation, z draw order)
//!   ├── SelectionManager (selected / hovered ids)
//!   ├── Viewport (screen <-> world under pan + zoom)
//!   ├── GridSettings (visibility + snap policy)
//!   ├── InteractionMode (one variant per gesture)
//!   └── CommandHistory (undo/redo snapshots of the collection)
//!
//! PersistenceGateway (async save of the plan document)
//! ```
//!
//! Input flows one way: a pointer or key event proposes a geometry delta, the
//! snap policy adjusts it, `EditorState` commits the mutation (pushing a
//! pre-mutation snapshot to history at gesture boundaries, never per frame),
//! and the seat layout is recomputed from the result on read.

pub mod editor;
pub mod grid;
pub mod handles;
pub mod history;
pub mod interaction;
pub mod persistence;
pub mod selection;
pub mod table_store;
pub mod viewport;

pub use editor::EditorState;
pub use grid::GridSettings;
pub use handles::{Handle, ResizeHandle};
pub use history::CommandHistory;
pub use interaction::{InteractionMode, Key, KeyInput, Modifiers};
pub use persistence::{JsonFileGateway, PersistenceGateway, PlanDocument};
pub use selection::SelectionManager;
pub use table_store::TableStore;
pub use viewport::Viewport;

pub use tableplan_core::{Point, Seat, Table, TableId, TablePatch, TableShape, TableStatus};
