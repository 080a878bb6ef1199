//! Resize and rotate handle geometry.
//!
//! A selected table exposes four corner resize handles and one rotate handle
//! floating above its top edge. Handle positions follow the table's rotation,
//! so hit-testing works on rotated tables without special cases. The render
//! target draws handles at the positions reported here; the interaction
//! machine hit-tests against the same positions.

use tableplan_core::constants::ROTATE_HANDLE_OFFSET;
use tableplan_core::model::{rotate_point, Point, Table};

/// Corner being dragged during a resize gesture. The opposite corner stays
/// anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthEast,
        ResizeHandle::SouthWest,
    ];

    /// Unit direction of the handle from the table center: -1 is the
    /// top/left side, +1 the bottom/right side.
    pub fn direction(&self) -> (f64, f64) {
        match self {
            ResizeHandle::NorthWest => (-1.0, -1.0),
            ResizeHandle::NorthEast => (1.0, -1.0),
            ResizeHandle::SouthEast => (1.0, 1.0),
            ResizeHandle::SouthWest => (-1.0, 1.0),
        }
    }
}

/// A manipulable affordance on the selected table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Resize(ResizeHandle),
    Rotate,
}

/// World positions of all handles for a table, rotate handle last.
pub fn positions(table: &Table) -> Vec<(Handle, Point)> {
    let center = table.center();
    let hw = table.width / 2.0;
    let hh = table.height / 2.0;

    let mut out: Vec<(Handle, Point)> = ResizeHandle::ALL
        .iter()
        .map(|h| {
            let (dx, dy) = h.direction();
            let corner = Point::new(center.x + dx * hw, center.y + dy * hh);
            (
                Handle::Resize(*h),
                rotate_point(corner, center, table.rotation),
            )
        })
        .collect();

    let above = Point::new(center.x, center.y - hh - ROTATE_HANDLE_OFFSET);
    out.push((Handle::Rotate, rotate_point(above, center, table.rotation)));
    out
}

/// The handle under a world point, if any. Rotate wins over resize when they
/// overlap on a tiny table.
pub fn hit_test(table: &Table, point: &Point, tolerance: f64) -> Option<Handle> {
    let mut hit = None;
    for (handle, pos) in positions(table) {
        if pos.distance_to(point) <= tolerance {
            hit = Some(handle);
            if handle == Handle::Rotate {
                break;
            }
        }
    }
    hit
}
