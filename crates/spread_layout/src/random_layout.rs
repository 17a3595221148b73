//! Randomized bin-packing layout
//!
//! Each photo draws a size class and an orientation, the requests are placed
//! in shuffled order onto a square cell grid, and every accepted block is
//! marked occupied before the next search. If the grid is degenerate or any
//! single photo cannot be placed, the whole call returns the deterministic
//! grid layout instead of a partial result.

use crate::grid_layout::grid_slots;
use crate::{
    find_best_fit, safe_area, CellGrid, LayoutConfig, Orientation, PhotoSlot, SpanRange,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Relative size of a photo in the randomized layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// 2–3 cells on each axis
    Normal,
    /// 3–4 cells on the long axis, 2–3 on the short one
    Large,
}

/// Size class and orientation drawn for one photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRequest {
    /// Index of the photo this request belongs to
    pub index: usize,
    pub size_class: SizeClass,
    /// Decides which axis is long for large photos
    pub orientation: Orientation,
}

impl SlotRequest {
    /// Draw a size class, then an orientation
    pub fn draw<R: Rng + ?Sized>(index: usize, rng: &mut R, config: &LayoutConfig) -> Self {
        let size_class = if rng.gen::<f32>() < config.large_probability {
            SizeClass::Large
        } else {
            SizeClass::Normal
        };
        let orientation = if rng.gen::<f32>() > config.horizontal_threshold {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Self {
            index,
            size_class,
            orientation,
        }
    }

    pub fn span(&self) -> SpanRange {
        match (self.size_class, self.orientation) {
            (SizeClass::Normal, _) => SpanRange::new(2, 2, 3, 3),
            (SizeClass::Large, Orientation::Horizontal) => SpanRange::new(3, 2, 4, 3),
            (SizeClass::Large, Orientation::Vertical) => SpanRange::new(2, 3, 3, 4),
        }
    }
}

/// Outcome of one randomized generation
#[derive(Debug, Clone, PartialEq)]
pub struct RandomLayout {
    /// Slots ordered by photo index
    pub slots: Vec<PhotoSlot>,
    /// Whether the deterministic grid was substituted
    pub fell_back: bool,
}

/// Randomized layout using the thread-local random source
pub fn generate_random_layout(
    photos_count: usize,
    spread_width: f32,
    spread_height: f32,
    spacing: f32,
) -> Vec<PhotoSlot> {
    generate_random_layout_with(
        &mut rand::thread_rng(),
        photos_count,
        spread_width,
        spread_height,
        spacing,
    )
    .slots
}

/// Randomized layout drawing from `rng`; a seeded generator reproduces the
/// same arrangement
pub fn generate_random_layout_with<R: Rng + ?Sized>(
    rng: &mut R,
    photos_count: usize,
    spread_width: f32,
    spread_height: f32,
    spacing: f32,
) -> RandomLayout {
    let config = LayoutConfig::default().with_spacing(spacing);
    random_slots(rng, photos_count, spread_width, spread_height, &config)
}

pub(crate) fn random_slots<R: Rng + ?Sized>(
    rng: &mut R,
    photos_count: usize,
    spread_width: f32,
    spread_height: f32,
    config: &LayoutConfig,
) -> RandomLayout {
    if photos_count == 0 {
        return RandomLayout {
            slots: Vec::new(),
            fell_back: false,
        };
    }

    let fallback = || RandomLayout {
        slots: grid_slots(
            photos_count,
            spread_width,
            spread_height,
            config.spacing,
            config.safe_margin,
        ),
        fell_back: true,
    };

    let safe = safe_area(spread_width, spread_height, config.safe_margin);
    let cell_size = safe.width.min(safe.height) / config.grid_divisions as f32;
    let mut grid = CellGrid::build(safe.width, safe.height, cell_size, config.safe_margin);
    if grid.is_degenerate() {
        tracing::debug!(
            spread_width,
            spread_height,
            cell_size,
            "cell grid is empty, using grid layout"
        );
        return fallback();
    }

    let mut requests: Vec<SlotRequest> = (0..photos_count)
        .map(|index| SlotRequest::draw(index, &mut *rng, config))
        .collect();
    requests.shuffle(rng);

    let mut slots = Vec::with_capacity(photos_count);
    for request in &requests {
        let placement = find_best_fit(&grid, request.span())
            .or_else(|| find_best_fit(&grid, SpanRange::minimal()));

        let Some(placement) = placement else {
            tracing::debug!(
                photo = request.index,
                placed = slots.len(),
                "photo does not fit, using grid layout"
            );
            return fallback();
        };

        grid.occupy(&placement);
        tracing::trace!(photo = request.index, ?placement, "placed photo");
        slots.push(PhotoSlot::new(
            request.index,
            grid.placement_bounds(&placement, config.spacing),
        ));
    }

    let mut indexed: Vec<(usize, PhotoSlot)> = requests
        .iter()
        .map(|request| request.index)
        .zip(slots)
        .collect();
    indexed.sort_by_key(|(index, _)| *index);

    RandomLayout {
        slots: indexed.into_iter().map(|(_, slot)| slot).collect(),
        fell_back: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_layout, Rect};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // 130×70 leaves a 120×60 safe area: 10-unit cells, 12 columns, 6 rows
    const WIDTH: f32 = 130.0;
    const HEIGHT: f32 = 70.0;

    /// Every draw is 0.0: large, vertical
    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_request_spans() {
        let config = LayoutConfig::default();
        let large = SlotRequest::draw(0, &mut zero_rng(), &config);
        assert_eq!(large.size_class, SizeClass::Large);
        assert_eq!(large.orientation, Orientation::Vertical);
        assert_eq!(large.span(), SpanRange::new(2, 3, 3, 4));

        let mut max_rng = StepRng::new(u64::MAX, 0);
        let normal = SlotRequest::draw(1, &mut max_rng, &config);
        assert_eq!(normal.size_class, SizeClass::Normal);
        assert_eq!(normal.orientation, Orientation::Horizontal);
        assert_eq!(normal.span(), SpanRange::new(2, 2, 3, 3));

        let wide = SlotRequest {
            index: 2,
            size_class: SizeClass::Large,
            orientation: Orientation::Horizontal,
        };
        assert_eq!(wide.span(), SpanRange::new(3, 2, 4, 3));
    }

    #[test]
    fn test_single_large_vertical_photo() {
        let layout = generate_random_layout_with(&mut zero_rng(), 1, WIDTH, HEIGHT, 5.0);
        assert!(!layout.fell_back);
        assert_eq!(layout.slots.len(), 1);

        let slot = &layout.slots[0];
        assert_eq!(slot.id, "slot-0");
        assert_eq!(slot.bounds(), Rect::new(5.0, 5.0, 25.0, 35.0));
        assert_eq!(slot.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_orientation_follows_extent() {
        // A horizontal normal photo takes a 3×3 block, which is square
        let mut max_rng = StepRng::new(u64::MAX, 0);
        let layout = generate_random_layout_with(&mut max_rng, 1, WIDTH, HEIGHT, 5.0);
        let slot = &layout.slots[0];
        assert_eq!(slot.bounds(), Rect::new(5.0, 5.0, 25.0, 25.0));
        assert_eq!(slot.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_downgrades_to_minimal_span() {
        // Four 4×3 blocks fill the top four rows; the remaining two rows only
        // take 2×2 blocks, six of them.
        let layout = generate_random_layout_with(&mut zero_rng(), 10, WIDTH, HEIGHT, 5.0);
        assert!(!layout.fell_back);
        assert_eq!(layout.slots.len(), 10);

        let small = layout
            .slots
            .iter()
            .filter(|slot| slot.width == 15.0 && slot.height == 15.0)
            .count();
        assert_eq!(small, 6);
    }

    #[test]
    fn test_single_failure_falls_back_for_all_photos() {
        let layout = generate_random_layout_with(&mut zero_rng(), 11, WIDTH, HEIGHT, 5.0);
        assert!(layout.fell_back);
        assert_eq!(layout.slots, generate_layout(11, WIDTH, HEIGHT, 5.0));
    }

    #[test]
    fn test_degenerate_grid_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let layout = generate_random_layout_with(&mut rng, 3, 10.0, 10.0, 5.0);
        assert!(layout.fell_back);
        assert_eq!(layout.slots, generate_layout(3, 10.0, 10.0, 5.0));
    }

    #[test]
    fn test_small_canvas_still_builds_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let layout = generate_random_layout_with(&mut rng, 1, 20.0, 20.0, 0.0);
        assert!(!layout.fell_back);
        assert_eq!(layout.slots.len(), 1);
    }

    #[test]
    fn test_slots_stay_inside_safe_area_exactly() {
        let mut width = 100.0f32;
        while width < 800.0 {
            let safe = safe_area(width, 213.3, crate::SAFE_MARGIN);
            for spacing in [0.0, 5.0] {
                let mut rng = StdRng::seed_from_u64(width.to_bits() as u64);
                let layout = generate_random_layout_with(&mut rng, 8, width, 213.3, spacing);
                for (i, a) in layout.slots.iter().enumerate() {
                    assert!(safe.contains_rect(&a.bounds(), 0.0), "{:?} in {:?}", a, safe);
                    for b in &layout.slots[i + 1..] {
                        assert!(!a.bounds().intersects(&b.bounds()), "{:?} {:?}", a, b);
                    }
                }
            }
            width += 3.37;
        }
    }

    #[test]
    fn test_zero_photos() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = generate_random_layout_with(&mut rng, 0, 400.0, 200.0, 5.0);
        assert!(layout.slots.is_empty());
        assert!(!layout.fell_back);
        assert!(generate_random_layout(0, 400.0, 200.0, 5.0).is_empty());
    }

    #[test]
    fn test_slots_ordered_by_photo_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let layout = generate_random_layout_with(&mut rng, 6, 400.0, 200.0, 5.0);
        for (i, slot) in layout.slots.iter().enumerate() {
            assert_eq!(slot.id, format!("slot-{}", i));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let first = generate_random_layout_with(&mut StdRng::seed_from_u64(9), 5, 400.0, 200.0, 5.0);
        let second = generate_random_layout_with(&mut StdRng::seed_from_u64(9), 5, 400.0, 200.0, 5.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeds_give_variety() {
        let layouts: Vec<Vec<PhotoSlot>> = (0..16)
            .map(|seed| {
                generate_random_layout_with(&mut StdRng::seed_from_u64(seed), 4, 400.0, 200.0, 5.0)
                    .slots
            })
            .collect();
        assert!(layouts.iter().any(|layout| *layout != layouts[0]));
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let slots = generate_random_layout(5, 600.0, 300.0, 5.0);
        assert_eq!(slots.len(), 5);
    }
}
