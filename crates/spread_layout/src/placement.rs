//! Block placement search over a cell grid
//!
//! The search is greedy: it tries block sizes from the largest requested
//! height and width downwards and returns the first free anchor in row-major
//! order. It is not an optimal packer.

use crate::CellGrid;

/// Accepted block sizes, in cells (inclusive on both ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanRange {
    pub min_cols: usize,
    pub min_rows: usize,
    pub max_cols: usize,
    pub max_rows: usize,
}

impl SpanRange {
    pub fn new(min_cols: usize, min_rows: usize, max_cols: usize, max_rows: usize) -> Self {
        Self {
            min_cols,
            min_rows,
            max_cols,
            max_rows,
        }
    }

    /// The downgraded span tried when a photo's own size class does not fit
    pub fn minimal() -> Self {
        Self::new(1, 1, 2, 2)
    }
}

/// A block of cells chosen for one photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start_row: usize,
    pub start_col: usize,
    pub cols: usize,
    pub rows: usize,
}

/// Find the first free block within `span`, largest heights and widths first.
///
/// The grid is not modified; callers must `occupy` the returned block before
/// searching again.
pub fn find_best_fit(grid: &CellGrid, span: SpanRange) -> Option<Placement> {
    let grid_rows = grid.rows();
    let grid_cols = grid.cols();
    let min_rows = span.min_rows.max(1);
    let min_cols = span.min_cols.max(1);

    for rows in (min_rows..=span.max_rows).rev() {
        if rows > grid_rows {
            continue;
        }
        for cols in (min_cols..=span.max_cols).rev() {
            if cols > grid_cols {
                continue;
            }
            for start_row in 0..=grid_rows - rows {
                for start_col in 0..=grid_cols - cols {
                    if grid.is_block_free(start_row, start_col, rows, cols) {
                        return Some(Placement {
                            start_row,
                            start_col,
                            cols,
                            rows,
                        });
                    }
                }
            }
        }
    }

    None
}
