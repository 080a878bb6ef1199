//! # Tableplan Core
//!
//! Shared domain model for the Tableplan floor-plan product.
//!
//! This crate holds everything both the floor-plan editor and the ordering
//! subsystem need to agree on:
//!
//! - **Tables**: the seating units staff arrange on the floor plan, with
//!   shape, size, rotation, seat count, status, and draw order
//! - **Seats**: per-table diner positions derived from table geometry by the
//!   seat layout generator - computed on every read, never persisted
//! - **Constants**: the shared numeric policy (minimum table size, zoom
//!   bounds, grid defaults, seat sizing)
//! - **Errors**: the persistence error taxonomy
//!
//! The editor itself (viewport, gestures, undo/redo) lives in
//! `tableplan-editor`.

pub mod constants;
pub mod error;
pub mod model;
pub mod seating;

pub use error::PersistenceError;
pub use model::{Point, Table, TableId, TablePatch, TableShape, TableStatus};
pub use seating::{layout, Seat};
