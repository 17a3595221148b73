//! Rectangles in design units

use serde::{Deserialize, Serialize};

/// A rectangle in spread coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning `left..right` and `top..bottom`.
    ///
    /// Width and height are trimmed by an ulp where f32 rounding would push
    /// `right()` past `right` or `bottom()` past `bottom`, so the result never
    /// leaves the given edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, extent_within(left, right), extent_within(top, bottom))
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the interiors of two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether `other` lies entirely within this rectangle, allowing `tolerance`
    /// of floating point slack on every edge.
    pub fn contains_rect(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// Largest extent from `start` whose far edge stays at or before `end`
fn extent_within(start: f32, end: f32) -> f32 {
    let mut extent = end - start;
    while extent > 0.0 && start + extent > end {
        extent = f32::from_bits(extent.to_bits() - 1);
    }
    extent
}

/// The printable area of a canvas once `margin` is removed from every edge.
///
/// Its right and bottom edges never pass `spread_width - margin` and
/// `spread_height - margin`.
pub fn safe_area(spread_width: f32, spread_height: f32, margin: f32) -> Rect {
    Rect::from_edges(
        margin,
        margin,
        spread_width - margin,
        spread_height - margin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(5.0, 10.0, 20.0, 30.0);
        assert_eq!(rect.right(), 25.0);
        assert_eq!(rect.bottom(), 40.0);
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(5.0, 5.0, 390.0, 190.0);
        assert!(outer.contains_rect(&Rect::new(5.0, 5.0, 390.0, 190.0), 0.0));
        assert!(!outer.contains_rect(&Rect::new(4.0, 5.0, 10.0, 10.0), 0.0));
        assert!(outer.contains_rect(&Rect::new(4.9995, 5.0, 10.0, 10.0), 0.001));
    }

    #[test]
    fn test_from_edges_never_overshoots() {
        let rect = Rect::from_edges(5.0, 5.0, 395.0, 195.0);
        assert_eq!(rect, Rect::new(5.0, 5.0, 390.0, 190.0));

        // Differences that round up would otherwise land an ulp past the edge
        let mut left = 5.0f32;
        while left < 96.0 {
            let rect = Rect::from_edges(left, left, 96.37, 96.37);
            assert!(rect.right() <= 96.37, "{:?}", rect);
            assert!(rect.bottom() <= 96.37, "{:?}", rect);
            left += 0.173;
        }
    }

    #[test]
    fn test_from_edges_shared_edge_does_not_intersect() {
        let a = Rect::from_edges(5.0, 5.0, 36.123, 40.0);
        let b = Rect::from_edges(36.123, 5.0, 96.37, 40.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_safe_area() {
        let area = safe_area(400.0, 200.0, 5.0);
        assert_eq!(area, Rect::new(5.0, 5.0, 390.0, 190.0));

        let area = safe_area(101.37, 213.3, 5.0);
        assert!(area.right() <= 101.37 - 5.0);
        assert!(area.bottom() <= 213.3 - 5.0);
    }
}
