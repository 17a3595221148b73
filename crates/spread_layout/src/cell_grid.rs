//! Square cell grid used by the randomized layout
//!
//! The safe area is divided into `cell_size × cell_size` cells in row-major
//! order. Cells are created fresh for every generation call and marked
//! occupied as placements are accepted.

use crate::{Placement, Rect, SAFE_MARGIN};

/// One grid unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCell {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub occupied: bool,
}

/// Row-major grid of square cells covering the safe area
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Vec<Vec<LayoutCell>>,
    cell_size: f32,
    cols: usize,
    origin: f32,
    safe_right: f32,
    safe_bottom: f32,
}

impl CellGrid {
    /// Build a grid over a `safe_width × safe_height` area whose top-left
    /// corner sits at `(margin, margin)`
    pub fn build(safe_width: f32, safe_height: f32, cell_size: f32, margin: f32) -> Self {
        let (cols, rows) = if cell_size > 0.0 && cell_size.is_finite() {
            (
                (safe_width / cell_size).floor().max(0.0) as usize,
                (safe_height / cell_size).floor().max(0.0) as usize,
            )
        } else {
            (0, 0)
        };

        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| LayoutCell {
                        x: cell_edge(margin, cell_size, col),
                        y: cell_edge(margin, cell_size, row),
                        width: cell_size,
                        height: cell_size,
                        occupied: false,
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(rows, cols, cell_size, "built layout cell grid");

        Self {
            cells,
            cell_size,
            cols,
            origin: margin,
            safe_right: margin + safe_width,
            safe_bottom: margin + safe_height,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        if self.cells.is_empty() {
            0
        } else {
            self.cols
        }
    }

    /// A grid without rows or columns cannot hold any placement
    pub fn is_degenerate(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Whether every cell of the `rows × cols` block anchored at
    /// `(start_row, start_col)` exists and is unoccupied
    pub fn is_block_free(&self, start_row: usize, start_col: usize, rows: usize, cols: usize) -> bool {
        if start_row + rows > self.rows() || start_col + cols > self.cols() {
            return false;
        }
        self.cells[start_row..start_row + rows]
            .iter()
            .all(|row| row[start_col..start_col + cols].iter().all(|cell| !cell.occupied))
    }

    /// Mark every cell of a placement occupied
    pub fn occupy(&mut self, placement: &Placement) {
        for row in &mut self.cells[placement.start_row..placement.start_row + placement.rows] {
            for cell in &mut row[placement.start_col..placement.start_col + placement.cols] {
                cell.occupied = true;
            }
        }
    }

    /// Slot rectangle for a placement, shrunk by `spacing` on the right and
    /// bottom edges so neighbouring slots keep a visible gap.
    ///
    /// The far edges are measured from the grid origin and never pass the
    /// safe area, so blocks that share a cell edge never overlap.
    pub fn placement_bounds(&self, placement: &Placement, spacing: f32) -> Rect {
        let anchor = &self.cells[placement.start_row][placement.start_col];
        let end_col = placement.start_col + placement.cols;
        let end_row = placement.start_row + placement.rows;
        let right = (cell_edge(self.origin, self.cell_size, end_col) - spacing).min(self.safe_right);
        let bottom =
            (cell_edge(self.origin, self.cell_size, end_row) - spacing).min(self.safe_bottom);
        Rect::from_edges(anchor.x, anchor.y, right, bottom)
    }
}

/// Position of the `index`-th cell boundary along one axis
fn cell_edge(origin: f32, cell_size: f32, index: usize) -> f32 {
    origin + index as f32 * cell_size
}

/// Build a grid over the safe area using the default safe margin
pub fn build_grid(safe_width: f32, safe_height: f32, cell_size: f32) -> CellGrid {
    CellGrid::build(safe_width, safe_height, cell_size, SAFE_MARGIN)
}
