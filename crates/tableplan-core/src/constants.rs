//! Shared numeric policy for the floor plan.
//!
//! All values are in world units unless noted otherwise. One world unit maps
//! to one screen pixel at zoom 1.0.

/// Smallest width/height a table may have. Geometry below this is clamped.
pub const MIN_TABLE_SIZE: f64 = 20.0;

/// Default footprint for newly created round and square tables.
pub const DEFAULT_TABLE_SIZE: f64 = 80.0;

/// Default width for newly created rectangular tables.
pub const DEFAULT_RECT_WIDTH: f64 = 120.0;

/// Zoom bounds for the editor viewport.
pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;

/// Multiplicative step used by zoom in/out.
pub const ZOOM_STEP: f64 = 1.2;

/// Default grid spacing.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Seat disc diameter.
pub const SEAT_DIAMETER: f64 = 18.0;

/// Seats on a round table sit on a ring of this fraction of the table radius.
pub const SEAT_RING_RATIO: f64 = 0.8;

/// Offset applied to a duplicated table so the copy is visibly adjacent.
pub const DUPLICATE_OFFSET: (f64, f64) = (24.0, 24.0);

/// Arrow-key nudge distance without modifiers.
pub const NUDGE_STEP: f64 = 1.0;

/// Hit radius for resize/rotate handles, in screen pixels.
pub const HANDLE_HIT_RADIUS: f64 = 8.0;

/// Distance of the rotate handle above the table's top edge.
pub const ROTATE_HANDLE_OFFSET: f64 = 28.0;

/// Maximum number of undo snapshots retained.
pub const HISTORY_LIMIT: usize = 256;
