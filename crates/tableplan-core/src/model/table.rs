use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RECT_WIDTH, DEFAULT_TABLE_SIZE, MIN_TABLE_SIZE};

use super::{Point, TableId};

/// Footprint variant of a seating table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    Circle,
    Rectangle,
    Square,
}

/// Service status of a table. The editor carries it through untouched; the
/// ordering subsystem is what actually drives transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    OutOfService,
}

/// A seating table on the floor plan.
///
/// `position` is the table origin: the top-left corner of the unrotated
/// bounding rectangle. `rotation` is in degrees, normalized into `[0, 360)`,
/// and rotates the table around its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub shape: TableShape,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub seat_count: u32,
    pub label: String,
    pub rotation: f64,
    pub status: TableStatus,
    pub z_index: i32,
}

/// Field patch applied by the editor's `update_table` action. `None` fields
/// are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablePatch {
    pub shape: Option<TableShape>,
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub seat_count: Option<u32>,
    pub label: Option<String>,
    pub rotation: Option<f64>,
    pub status: Option<TableStatus>,
}

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_rotation(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid(-1e-16, 360.0) yields 360.0 exactly
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

impl Table {
    /// Creates a table with the default geometry for its shape.
    pub fn new(id: TableId, shape: TableShape) -> Self {
        let (width, height, seat_count) = match shape {
            TableShape::Circle => (DEFAULT_TABLE_SIZE, DEFAULT_TABLE_SIZE, 4),
            TableShape::Square => (DEFAULT_TABLE_SIZE, DEFAULT_TABLE_SIZE, 4),
            TableShape::Rectangle => (DEFAULT_RECT_WIDTH, DEFAULT_TABLE_SIZE, 6),
        };
        Self {
            id,
            shape,
            position: Point::ZERO,
            width,
            height,
            seat_count,
            label: format!("Table {}", id),
            rotation: 0.0,
            status: TableStatus::default(),
            z_index: 0,
        }
    }

    /// Center of the table in world coordinates.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Axis-aligned bounding box of the (rotated) table:
    /// `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let c = self.center();
        let rad = self.rotation.to_radians();
        let (sin, cos) = rad.sin_cos();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (dx, dy) in [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)] {
            let x = c.x + dx * cos - dy * sin;
            let y = c.y + dx * sin + dy * cos;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Hit-tests a world point against the table footprint.
    ///
    /// The point is rotated into the table's local frame first, so rotated
    /// tables hit-test correctly. `tolerance` grows the footprint on every
    /// side (pass the pick radius divided by the current zoom).
    pub fn contains_point(&self, p: &Point, tolerance: f64) -> bool {
        let c = self.center();
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        let rad = (-self.rotation).to_radians();
        let (sin, cos) = rad.sin_cos();
        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;

        let half_w = self.width / 2.0 + tolerance;
        let half_h = self.height / 2.0 + tolerance;

        match self.shape {
            TableShape::Circle => {
                let nx = rx / half_w;
                let ny = ry / half_h;
                nx * nx + ny * ny <= 1.0
            }
            TableShape::Rectangle | TableShape::Square => {
                rx.abs() <= half_w && ry.abs() <= half_h
            }
        }
    }

    /// Sets the footprint size, clamping to the minimum table size. Square
    /// tables keep `width == height` (the larger candidate wins).
    pub fn set_size(&mut self, width: f64, height: f64) {
        let mut w = width.max(MIN_TABLE_SIZE);
        let mut h = height.max(MIN_TABLE_SIZE);
        if w != width || h != height {
            tracing::warn!(id = self.id, width, height, "table size clamped to minimum");
        }
        if self.shape == TableShape::Square {
            let side = w.max(h);
            w = side;
            h = side;
        }
        self.width = w;
        self.height = h;
    }

    /// Sets the rotation, normalized into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = normalize_rotation(degrees);
    }

    /// Applies a field patch, enforcing the geometry invariants.
    pub fn apply_patch(&mut self, patch: TablePatch) {
        if let Some(shape) = patch.shape {
            self.shape = shape;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if patch.width.is_some() || patch.height.is_some() || patch.shape.is_some() {
            let w = patch.width.unwrap_or(self.width);
            let h = patch.height.unwrap_or(self.height);
            self.set_size(w, h);
        }
        if let Some(seat_count) = patch.seat_count {
            self.seat_count = seat_count;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(rotation) = patch.rotation {
            self.set_rotation(rotation);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_normalizes_into_range() {
        assert_eq!(normalize_rotation(0.0), 0.0);
        assert_eq!(normalize_rotation(360.0), 0.0);
        assert_eq!(normalize_rotation(450.0), 90.0);
        assert_eq!(normalize_rotation(-90.0), 270.0);
        assert!(normalize_rotation(-0.0001) < 360.0);
    }

    #[test]
    fn size_clamps_to_minimum() {
        let mut table = Table::new(1, TableShape::Rectangle);
        table.set_size(5.0, -10.0);
        assert_eq!(table.width, MIN_TABLE_SIZE);
        assert_eq!(table.height, MIN_TABLE_SIZE);
    }

    #[test]
    fn square_keeps_equal_sides() {
        let mut table = Table::new(1, TableShape::Square);
        table.set_size(100.0, 60.0);
        assert_eq!(table.width, 100.0);
        assert_eq!(table.height, 100.0);
    }

    #[test]
    fn patch_leaves_unset_fields_alone() {
        let mut table = Table::new(7, TableShape::Circle);
        let label = table.label.clone();
        table.apply_patch(TablePatch {
            rotation: Some(370.0),
            status: Some(TableStatus::Reserved),
            ..Default::default()
        });
        assert_eq!(table.rotation, 10.0);
        assert_eq!(table.status, TableStatus::Reserved);
        assert_eq!(table.label, label);
        assert_eq!(table.width, DEFAULT_TABLE_SIZE);
    }

    #[test]
    fn rotated_rectangle_hit_test() {
        let mut table = Table::new(1, TableShape::Rectangle);
        table.position = Point::new(0.0, 0.0);
        table.set_size(120.0, 40.0);
        table.set_rotation(90.0);

        // After a 90 degree turn the long axis runs vertically through the
        // center at (60, 20).
        assert!(table.contains_point(&Point::new(60.0, 75.0), 0.0));
        assert!(!table.contains_point(&Point::new(115.0, 20.0), 0.0));
    }

    #[test]
    fn circle_hit_test_excludes_corners() {
        let mut table = Table::new(1, TableShape::Circle);
        table.position = Point::new(0.0, 0.0);
        // Corner of the bounding box is outside the disc.
        assert!(!table.contains_point(&Point::new(2.0, 2.0), 0.0));
        assert!(table.contains_point(&table.center(), 0.0));
    }
}
