//! Preset collage templates
//!
//! Hand-drawn arrangements for spreads holding one, two or three photos.
//! Template coordinates are in a 1200×600 design space (two 600×600 pages of
//! the 20×20 book) and are scaled onto the target canvas.

use crate::{safe_area, PhotoSlot, Rect, SAFE_MARGIN};

/// Width of the space template slots are drawn in
pub const TEMPLATE_SPREAD_WIDTH: f32 = 1200.0;

/// Height of the space template slots are drawn in
pub const TEMPLATE_SPREAD_HEIGHT: f32 = 600.0;

/// A named, fixed arrangement of slots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollageTemplate {
    pub id: &'static str,
    pub slots: &'static [Rect],
}

impl CollageTemplate {
    /// Slots of this template scaled onto a `spread_width × spread_height`
    /// canvas and clipped to the safe area inside `margin`.
    ///
    /// Slots keep template order and are numbered `slot-0..`.
    pub fn slots_for(&self, spread_width: f32, spread_height: f32, margin: f32) -> Vec<PhotoSlot> {
        let safe = safe_area(spread_width, spread_height, margin);
        let scale_x = spread_width / TEMPLATE_SPREAD_WIDTH;
        let scale_y = spread_height / TEMPLATE_SPREAD_HEIGHT;

        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let bounds = Rect::from_edges(
                    (slot.x * scale_x).max(safe.x),
                    (slot.y * scale_y).max(safe.y),
                    (slot.right() * scale_x).min(safe.right()),
                    (slot.bottom() * scale_y).min(safe.bottom()),
                );
                PhotoSlot::new(i, bounds)
            })
            .collect()
    }
}

// =============================================================================
// Catalog
// =============================================================================

pub static COLLAGES_1_PHOTO: [CollageTemplate; 12] = [
    CollageTemplate {
        id: "1-1",
        slots: &[Rect::new(80.0, 150.0, 200.0, 300.0)],
    },
    CollageTemplate {
        id: "1-2",
        slots: &[Rect::new(80.0, 200.0, 300.0, 200.0)],
    },
    CollageTemplate {
        id: "1-3",
        slots: &[Rect::new(80.0, 300.0, 200.0, 200.0)],
    },
    CollageTemplate {
        id: "1-4",
        slots: &[Rect::new(80.0, 200.0, 440.0, 200.0)],
    },
    CollageTemplate {
        id: "1-5",
        slots: &[Rect::new(80.0, 180.0, 440.0, 240.0)],
    },
    CollageTemplate {
        id: "1-6",
        slots: &[Rect::new(80.0, 200.0, 440.0, 200.0)],
    },
    CollageTemplate {
        id: "1-7",
        slots: &[Rect::new(320.0, 150.0, 200.0, 300.0)],
    },
    CollageTemplate {
        id: "1-8",
        slots: &[Rect::new(220.0, 200.0, 300.0, 200.0)],
    },
    CollageTemplate {
        id: "1-9",
        slots: &[Rect::new(320.0, 300.0, 200.0, 200.0)],
    },
    CollageTemplate {
        id: "1-10",
        slots: &[Rect::new(80.0, 200.0, 440.0, 200.0)],
    },
    CollageTemplate {
        id: "1-11",
        slots: &[Rect::new(80.0, 180.0, 440.0, 240.0)],
    },
    CollageTemplate {
        id: "1-12",
        slots: &[Rect::new(80.0, 200.0, 440.0, 200.0)],
    },
];

pub static COLLAGES_2_PHOTO: [CollageTemplate; 8] = [
    CollageTemplate {
        id: "2-1",
        slots: &[
            Rect::new(80.0, 150.0, 200.0, 300.0),
            Rect::new(320.0, 150.0, 200.0, 300.0),
        ],
    },
    CollageTemplate {
        id: "2-2",
        slots: &[
            Rect::new(80.0, 200.0, 150.0, 200.0),
            Rect::new(270.0, 200.0, 250.0, 200.0),
        ],
    },
    CollageTemplate {
        id: "2-3",
        slots: &[
            Rect::new(270.0, 200.0, 250.0, 200.0),
            Rect::new(80.0, 200.0, 150.0, 200.0),
        ],
    },
    CollageTemplate {
        id: "2-4",
        slots: &[
            Rect::new(80.0, 150.0, 220.0, 300.0),
            Rect::new(340.0, 150.0, 180.0, 300.0),
        ],
    },
    CollageTemplate {
        id: "2-5",
        slots: &[
            Rect::new(80.0, 180.0, 220.0, 240.0),
            Rect::new(340.0, 180.0, 180.0, 240.0),
        ],
    },
    CollageTemplate {
        id: "2-6",
        slots: &[
            Rect::new(80.0, 180.0, 180.0, 240.0),
            Rect::new(300.0, 180.0, 220.0, 240.0),
        ],
    },
    CollageTemplate {
        id: "2-7",
        slots: &[
            Rect::new(80.0, 200.0, 220.0, 200.0),
            Rect::new(340.0, 200.0, 180.0, 200.0),
        ],
    },
    CollageTemplate {
        id: "2-8",
        slots: &[
            Rect::new(80.0, 200.0, 180.0, 200.0),
            Rect::new(300.0, 200.0, 220.0, 200.0),
        ],
    },
];

pub static COLLAGES_3_PHOTO: [CollageTemplate; 2] = [
    CollageTemplate {
        id: "3-1",
        slots: &[
            Rect::new(460.0, 80.0, 380.0, 240.0),
            Rect::new(460.0, 340.0, 380.0, 240.0),
            Rect::new(900.0, 160.0, 300.0, 360.0),
        ],
    },
    CollageTemplate {
        id: "3-2",
        slots: &[
            Rect::new(460.0, 80.0, 300.0, 360.0),
            Rect::new(780.0, 80.0, 420.0, 240.0),
            Rect::new(780.0, 340.0, 420.0, 240.0),
        ],
    },
];

/// Templates holding exactly `photos_count` photos; empty when none exist
pub fn templates_for(photos_count: usize) -> &'static [CollageTemplate] {
    match photos_count {
        1 => &COLLAGES_1_PHOTO,
        2 => &COLLAGES_2_PHOTO,
        3 => &COLLAGES_3_PHOTO,
        _ => &[],
    }
}

/// Slots of `template` on a canvas, inside the default safe margin
pub fn collage_layout(
    template: &CollageTemplate,
    spread_width: f32,
    spread_height: f32,
) -> Vec<PhotoSlot> {
    template.slots_for(spread_width, spread_height, SAFE_MARGIN)
}
