//! Seat layout generation.
//!
//! Seats are derived from table geometry on every read; they are never
//! stored. [`layout`] is pure and deterministic: the same table always
//! produces the same seats, so the editor and the ordering subsystem agree
//! without sharing state.
//!
//! Offsets are relative to the table origin in the table's unrotated local
//! frame; the render target applies the table's rotation to the whole group.
//! Every seat center lies within the table's bounding box inflated by one
//! seat diameter on each side.

use serde::{Deserialize, Serialize};

use crate::constants::{SEAT_DIAMETER, SEAT_RING_RATIO};
use crate::model::{Point, Table, TableShape};

/// A diner position derived from a table. Ephemeral: recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// 1-based seat number, stable for a given table geometry.
    pub number: u32,
    /// Center of the seat disc, relative to the table origin.
    pub offset: Point,
    pub diameter: f64,
}

/// Computes the seat layout for a table.
///
/// Returns exactly `seat_count` seats; a count of zero yields an empty
/// layout rather than an error.
pub fn layout(table: &Table) -> Vec<Seat> {
    if table.seat_count == 0 {
        return Vec::new();
    }
    match table.shape {
        TableShape::Circle => ring_layout(table),
        TableShape::Rectangle | TableShape::Square => perimeter_layout(table),
    }
}

/// Seats evenly spaced on a ring inside a round table. Seat 1 sits at angle
/// zero (+x from the center), subsequent seats proceed clockwise in screen
/// coordinates.
fn ring_layout(table: &Table) -> Vec<Seat> {
    let n = table.seat_count;
    let radius = SEAT_RING_RATIO * table.width.min(table.height) / 2.0;
    let cx = table.width / 2.0;
    let cy = table.height / 2.0;

    (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * std::f64::consts::TAU;
            Seat {
                number: i + 1,
                offset: Point::new(cx + radius * angle.cos(), cy + radius * angle.sin()),
                diameter: SEAT_DIAMETER,
            }
        })
        .collect()
}

/// Seats distributed along a rectangular perimeter, proportional to side
/// length, assigned clockwise starting from the top edge.
fn perimeter_layout(table: &Table) -> Vec<Seat> {
    let counts = perimeter_counts(table.width, table.height, table.seat_count);
    let w = table.width;
    let h = table.height;
    // Seats sit just outside the edge, touching it.
    let gap = SEAT_DIAMETER / 2.0;

    let mut seats = Vec::with_capacity(table.seat_count as usize);
    let mut number = 0;
    let mut push = |offset: Point, seats: &mut Vec<Seat>| {
        number += 1;
        seats.push(Seat {
            number,
            offset,
            diameter: SEAT_DIAMETER,
        });
    };

    // Top: left to right.
    for k in 0..counts[0] {
        let frac = (k + 1) as f64 / (counts[0] + 1) as f64;
        push(Point::new(w * frac, -gap), &mut seats);
    }
    // Right: top to bottom.
    for k in 0..counts[1] {
        let frac = (k + 1) as f64 / (counts[1] + 1) as f64;
        push(Point::new(w + gap, h * frac), &mut seats);
    }
    // Bottom: right to left.
    for k in 0..counts[2] {
        let frac = (k + 1) as f64 / (counts[2] + 1) as f64;
        push(Point::new(w * (1.0 - frac), h + gap), &mut seats);
    }
    // Left: bottom to top.
    for k in 0..counts[3] {
        let frac = (k + 1) as f64 / (counts[3] + 1) as f64;
        push(Point::new(-gap, h * (1.0 - frac)), &mut seats);
    }

    seats
}

/// Per-side seat counts `[top, right, bottom, left]` for a rectangular table.
///
/// Each side gets the ceiling of its proportional share of the perimeter,
/// then the excess is trimmed long sides first, alternating between the two
/// long sides before touching the short ones. Ties (`width == height`) treat
/// the horizontal pair as long.
fn perimeter_counts(width: f64, height: f64, n: u32) -> [u32; 4] {
    let perimeter = 2.0 * (width + height);
    let horizontal_share = ((n as f64) * width / perimeter).ceil() as u32;
    let vertical_share = ((n as f64) * height / perimeter).ceil() as u32;

    let mut counts = [
        horizontal_share,
        vertical_share,
        horizontal_share,
        vertical_share,
    ];
    let trim_order: [usize; 4] = if width >= height {
        [0, 2, 1, 3]
    } else {
        [1, 3, 0, 2]
    };

    let mut excess = counts.iter().map(|&c| c as i64).sum::<i64>() - n as i64;
    let mut i = 0;
    while excess > 0 {
        let side = trim_order[i % 4];
        if counts[side] > 0 {
            counts[side] -= 1;
            excess -= 1;
        }
        i += 1;
    }
    counts
}
