//! Deterministic grid layout
//!
//! Lays out `n` photos as a uniform `rows × cols` grid with
//! `rows = ceil(sqrt(n))` and `cols = ceil(n / rows)`, filling the safe area
//! row by row. Identical inputs always produce identical output.

use crate::{safe_area, PhotoSlot, Rect, SAFE_MARGIN};

/// Grid layout of `photos_count` slots inside the default safe margin.
///
/// Inputs are not validated: a spacing large enough to make slot extents
/// negative yields negative-sized slots. Use `SpreadLayoutEngine` for checked
/// inputs.
pub fn generate_layout(
    photos_count: usize,
    spread_width: f32,
    spread_height: f32,
    spacing: f32,
) -> Vec<PhotoSlot> {
    grid_slots(photos_count, spread_width, spread_height, spacing, SAFE_MARGIN)
}

/// Rows and columns of the grid holding `photos_count` photos
pub fn grid_shape(photos_count: usize) -> (usize, usize) {
    if photos_count == 0 {
        return (0, 0);
    }
    let rows = (photos_count as f64).sqrt().ceil() as usize;
    let cols = photos_count.div_ceil(rows);
    (rows, cols)
}

pub(crate) fn grid_slots(
    photos_count: usize,
    spread_width: f32,
    spread_height: f32,
    spacing: f32,
    margin: f32,
) -> Vec<PhotoSlot> {
    if photos_count == 0 {
        return Vec::new();
    }

    let safe = safe_area(spread_width, spread_height, margin);
    let (rows, cols) = grid_shape(photos_count);

    let slot_width = (safe.width - spacing * (cols - 1) as f32) / cols as f32;
    let slot_height = (safe.height - spacing * (rows - 1) as f32) / rows as f32;

    // Far edges come from the next track's near edge, and the last track ends
    // on the safe area edge, so rounding never leaks past either
    let left = |col: usize| safe.x + col as f32 * (slot_width + spacing);
    let top = |row: usize| safe.y + row as f32 * (slot_height + spacing);
    let right = |col: usize| {
        if col + 1 == cols {
            safe.right()
        } else {
            left(col + 1) - spacing
        }
    };
    let bottom = |row: usize| {
        if row + 1 == rows {
            safe.bottom()
        } else {
            top(row + 1) - spacing
        }
    };

    (0..photos_count)
        .map(|i| {
            let row = i / cols;
            let col = i % cols;
            let bounds = Rect::from_edges(left(col), top(row), right(col), bottom(row));
            PhotoSlot::new(i, bounds)
        })
        .collect()
}
