//! Photo slots placed on a spread

use crate::Rect;
use serde::{Deserialize, Serialize};

/// Slot orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Horizontal iff strictly wider than tall
    pub fn from_extent(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A rectangular placement region on a spread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSlot {
    /// Identifier, unique within one generated layout
    pub id: String,
    pub orientation: Orientation,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Photo bound to this slot; the layout engine never sets it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<String>,
}

impl PhotoSlot {
    /// Create an empty slot for the photo at `index`, deriving its orientation
    pub fn new(index: usize, bounds: Rect) -> Self {
        Self {
            id: slot_id(index),
            orientation: Orientation::from_extent(bounds.width, bounds.height),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            photo_id: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.photo_id.is_none()
    }
}

/// Identifier of the slot generated for the photo at `index`
pub fn slot_id(index: usize) -> String {
    format!("slot-{}", index)
}
