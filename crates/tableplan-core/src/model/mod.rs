use serde::{Deserialize, Serialize};

mod table;

pub use table::{normalize_rotation, Table, TablePatch, TableShape, TableStatus};

/// Identifier of a table within a floor plan. Generated by the editor's
/// table store; unique within one plan, not globally.
pub type TableId = u64;

/// A point in world coordinates. The floor plan uses a screen-style frame:
/// origin top-left, +x right, +y down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotates `p` around `center` by `angle_deg` degrees (clockwise in the
/// screen frame, since +y points down).
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    let (s, c) = rad.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}
