//! Grid settings and the snap policy.
//!
//! Snapping rounds a continuous coordinate to the nearest grid multiple. It
//! applies to drag commits and keyboard nudges when enabled; resize and
//! rotate gestures keep raw values so direct manipulation stays smooth.

use serde::{Deserialize, Serialize};

use tableplan_core::constants::DEFAULT_GRID_SIZE;
use tableplan_core::model::Point;

use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridSettings {
    pub size: f64,
    pub visible: bool,
    pub snap: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            visible: true,
            snap: true,
        }
    }
}

impl GridSettings {
    /// Rounds a coordinate to the nearest grid multiple.
    pub fn snap_value(&self, v: f64) -> f64 {
        (v / self.size).round() * self.size
    }

    /// Snaps both axes of a point.
    pub fn snap_point(&self, p: Point) -> Point {
        Point::new(self.snap_value(p.x), self.snap_value(p.y))
    }

    /// Snaps a point only when snapping is enabled.
    pub fn apply(&self, p: Point) -> Point {
        if self.snap {
            self.snap_point(p)
        } else {
            p
        }
    }

    /// World-space grid line coordinates covering the visible region, for
    /// the render target: `(vertical xs, horizontal ys)`.
    pub fn visible_lines(&self, viewport: &Viewport) -> (Vec<f64>, Vec<f64>) {
        let top_left = viewport.to_world(0.0, 0.0);
        let bottom_right = viewport.to_world(viewport.canvas_width(), viewport.canvas_height());

        let lines = |from: f64, to: f64| -> Vec<f64> {
            let mut v = (from / self.size).floor() * self.size;
            let mut out = Vec::new();
            while v <= to {
                out.push(v);
                v += self.size;
            }
            out
        };

        (
            lines(top_left.x, bottom_right.x),
            lines(top_left.y, bottom_right.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        let grid = GridSettings::default(); // size 20
        assert_eq!(grid.snap_value(53.0), 60.0);
        assert_eq!(grid.snap_value(49.0), 40.0);
        assert_eq!(grid.snap_value(-13.0), -20.0);
        assert_eq!(grid.snap_value(0.0), 0.0);
    }

    #[test]
    fn apply_respects_the_toggle() {
        let mut grid = GridSettings::default();
        let p = Point::new(53.0, 77.0);
        assert_eq!(grid.apply(p), Point::new(60.0, 80.0));
        grid.snap = false;
        assert_eq!(grid.apply(p), p);
    }

    #[test]
    fn visible_lines_cover_the_viewport() {
        let grid = GridSettings::default();
        let mut vp = Viewport::new(100.0, 100.0);
        vp.set_pan(0.0, 0.0);
        let (xs, ys) = grid.visible_lines(&vp);
        assert_eq!(xs, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(ys.len(), 6);
    }
}
