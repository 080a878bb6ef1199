//! Viewport and coordinate transformation for the floor-plan canvas.
//!
//! Handles conversion between screen coordinates (pointer events, pixels)
//! and world coordinates (table geometry) under pan and zoom. The floor plan
//! uses a screen-style world frame - origin top-left, +y down - so the
//! mapping is a straight scale-and-translate with no axis flip:
//!
//! ```text
//! world  = (screen - pan) / zoom
//! screen = world * zoom + pan
//! ```

use std::fmt;

use tableplan_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use tableplan_core::model::Point;

/// The viewport transformation state (zoom, pan, canvas size).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport at 1:1 zoom with no pan.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (called when the render surface resizes).
    /// Pan and zoom are left untouched, so an in-progress gesture keeps
    /// transforming against the live surface.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Sets the zoom level, clamped into the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a screen-space point (pixels) to world coordinates.
    pub fn to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts world coordinates to screen space.
    pub fn to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            world_x * self.zoom + self.pan_x,
            world_y * self.zoom + self.pan_y,
        )
    }

    /// Zooms while keeping the world point under `screen` fixed on screen.
    /// This is what wheel-zoom at the cursor calls.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, new_zoom: f64) {
        let anchor = self.to_world(screen_x, screen_y);
        self.set_zoom(new_zoom);
        self.pan_x = screen_x - anchor.x * self.zoom;
        self.pan_y = screen_y - anchor.y * self.zoom;
    }

    /// Resets to 1:1 zoom and zero pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
