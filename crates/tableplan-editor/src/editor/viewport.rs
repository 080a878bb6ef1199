//! Viewport and grid actions.
//!
//! None of these touch the table collection, so none of them create history
//! entries. A render-surface resize may arrive mid-gesture; it only updates
//! the canvas dimensions and the gesture carries on against the live
//! transform.

use crate::grid::GridSettings;

use super::EditorState;

impl EditorState {
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Wheel-zoom anchored at the cursor.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, zoom: f64) {
        self.viewport.zoom_at(screen_x, screen_y, zoom);
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.viewport.set_pan(x, y);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    /// Sets zoom and pan in one step (restoring a remembered view). Zoom is
    /// clamped as usual.
    pub fn set_viewport(&mut self, zoom: f64, pan_x: f64, pan_y: f64) {
        self.viewport.set_zoom(zoom);
        self.viewport.set_pan(pan_x, pan_y);
    }

    /// Render-surface resize. Pan and zoom are preserved.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
    }

    /// Restores zoom 1.0 and pan (0, 0).
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    pub fn set_grid(&mut self, grid: GridSettings) {
        if grid.size <= 0.0 {
            tracing::warn!(size = grid.size, "grid size must be positive; ignored");
            return;
        }
        self.grid = grid;
    }

    pub fn toggle_grid(&mut self) {
        self.grid.visible = !self.grid.visible;
    }

    pub fn toggle_snap(&mut self) {
        self.grid.snap = !self.grid.snap;
    }
}
