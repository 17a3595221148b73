//! Spread Layout - Automatic collage layout for photobook spreads
//!
//! This crate computes non-overlapping photo slots inside the printable area
//! of a two-page spread, either as a deterministic grid or as a randomized
//! arrangement of cell blocks that callers can cycle through for variety, or
//! from a catalog of preset collage templates.

mod cell_grid;
mod collage;
mod config;
mod engine;
mod error;
mod format;
mod geometry;
mod grid_layout;
mod photobook;
mod placement;
mod random_layout;
mod slot;
mod variants;

pub use cell_grid::*;
pub use collage::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use format::*;
pub use geometry::*;
pub use grid_layout::*;
pub use photobook::*;
pub use placement::*;
pub use random_layout::*;
pub use slot::*;
pub use variants::*;

/// Fixed inset from the canvas edge, in design units
pub const SAFE_MARGIN: f32 = 5.0;

/// Gap between neighbouring slots, in design units
pub const DEFAULT_PHOTO_SPACING: f32 = 5.0;
