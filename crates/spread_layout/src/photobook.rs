//! Book-level spread generation
//!
//! Splits a flat photo list evenly across the spreads of a book, lays out
//! each spread, and binds photos to slots by index.

use crate::{
    FillMethod, LayoutError, PhotoSlot, PhotobookFormat, Result, SpreadLayoutEngine,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Photo reference supplied by the photo bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
}

/// Book-wide settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotobookConfig {
    pub format: PhotobookFormat,
    pub spreads_count: usize,
}

/// One laid-out spread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub id: String,
    pub slots: Vec<PhotoSlot>,
}

impl Spread {
    pub fn filled_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }
}

/// Bind `photos` to `slots` by index; extra slots stay empty and extra
/// photos are ignored
pub fn assign_photos(slots: &mut [PhotoSlot], photos: &[PhotoRef]) {
    for (slot, photo) in slots.iter_mut().zip(photos) {
        slot.photo_id = Some(photo.id.clone());
    }
}

/// Photos placed on each spread so every photo gets a slot
pub fn photos_per_spread(photos_count: usize, spreads_count: usize) -> usize {
    if spreads_count == 0 {
        0
    } else {
        photos_count.div_ceil(spreads_count)
    }
}

/// Lay out every spread of a book with the default engine
pub fn generate_spreads<R: Rng + ?Sized>(
    photos: &[PhotoRef],
    config: PhotobookConfig,
    fill_method: FillMethod,
    rng: &mut R,
) -> Result<Vec<Spread>> {
    SpreadLayoutEngine::default().generate_spreads(photos, config, fill_method, rng)
}

impl SpreadLayoutEngine {
    /// Lay out every spread of a book.
    ///
    /// Each spread holds `ceil(photos / spreads)` slots; spreads past the end
    /// of the photo list keep empty slots. Collage spreads take the catalog's
    /// templates for that photo count in turn.
    pub fn generate_spreads<R: Rng + ?Sized>(
        &self,
        photos: &[PhotoRef],
        config: PhotobookConfig,
        fill_method: FillMethod,
        rng: &mut R,
    ) -> Result<Vec<Spread>> {
        if config.spreads_count == 0 {
            return Err(LayoutError::InvalidArgument(
                "a photobook needs at least one spread".to_string(),
            ));
        }

        let per_spread = photos_per_spread(photos.len(), config.spreads_count);
        let canvas = config.format.specs().dimensions();
        match fill_method {
            FillMethod::Manual => self.check_grid(per_spread, canvas)?,
            FillMethod::Auto => self.check_random(per_spread, canvas)?,
            FillMethod::Collage => self.check_collage(per_spread, canvas)?,
        }

        let spreads: Vec<Spread> = (0..config.spreads_count)
            .map(|i| {
                let mut slots = match fill_method {
                    FillMethod::Manual => self.grid_unchecked(per_spread, canvas),
                    FillMethod::Auto => self.random_unchecked(&mut *rng, per_spread, canvas).slots,
                    FillMethod::Collage => self.collage_unchecked(per_spread, i, canvas),
                };
                let start = (i * per_spread).min(photos.len());
                let end = (start + per_spread).min(photos.len());
                assign_photos(&mut slots, &photos[start..end]);
                Spread {
                    id: format!("spread-{}", i),
                    slots,
                }
            })
            .collect();

        tracing::debug!(
            format = %config.format,
            spreads = spreads.len(),
            per_spread,
            photos = photos.len(),
            "generated photobook spreads"
        );
        Ok(spreads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collage_layout, generate_layout, COLLAGES_3_PHOTO};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn photos(count: usize) -> Vec<PhotoRef> {
        (0..count)
            .map(|i| PhotoRef {
                id: format!("photo-{}", i),
                width: 4000,
                height: 3000,
                url: format!("https://cdn.example.com/{}.jpg", i),
            })
            .collect()
    }

    fn config(spreads_count: usize) -> PhotobookConfig {
        PhotobookConfig {
            format: PhotobookFormat::Square20,
            spreads_count,
        }
    }

    #[test]
    fn test_photos_per_spread() {
        assert_eq!(photos_per_spread(10, 3), 4);
        assert_eq!(photos_per_spread(9, 3), 3);
        assert_eq!(photos_per_spread(0, 3), 0);
        assert_eq!(photos_per_spread(5, 0), 0);
    }

    #[test]
    fn test_assign_photos_by_index() {
        let mut slots = generate_layout(3, 400.0, 200.0, 5.0);
        assign_photos(&mut slots, &photos(2));
        assert_eq!(slots[0].photo_id.as_deref(), Some("photo-0"));
        assert_eq!(slots[1].photo_id.as_deref(), Some("photo-1"));
        assert!(slots[2].is_empty());
    }

    #[test]
    fn test_manual_spreads() {
        let mut rng = StdRng::seed_from_u64(0);
        let spreads = generate_spreads(&photos(10), config(3), FillMethod::Manual, &mut rng).unwrap();
        assert_eq!(spreads.len(), 3);

        let ids: Vec<&str> = spreads.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["spread-0", "spread-1", "spread-2"]);

        for spread in &spreads {
            assert_eq!(spread.slots.len(), 4);
        }
        assert_eq!(spreads[0].filled_slots(), 4);
        assert_eq!(spreads[1].filled_slots(), 4);
        assert_eq!(spreads[2].filled_slots(), 2);
        assert_eq!(spreads[1].slots[0].photo_id.as_deref(), Some("photo-4"));
        assert_eq!(spreads[2].slots[1].photo_id.as_deref(), Some("photo-9"));
    }

    #[test]
    fn test_spreads_past_photo_list_stay_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let spreads = generate_spreads(&photos(3), config(5), FillMethod::Manual, &mut rng).unwrap();
        assert_eq!(spreads.len(), 5);
        assert_eq!(spreads[2].filled_slots(), 1);
        assert_eq!(spreads[3].filled_slots(), 0);
        assert_eq!(spreads[4].slots.len(), 1);
    }

    #[test]
    fn test_auto_spreads() {
        let mut rng = StdRng::seed_from_u64(21);
        let spreads = generate_spreads(&photos(8), config(2), FillMethod::Auto, &mut rng).unwrap();
        for spread in &spreads {
            assert_eq!(spread.slots.len(), 4);
            assert_eq!(spread.filled_slots(), 4);
        }
        assert_eq!(spreads[1].slots[3].photo_id.as_deref(), Some("photo-7"));
    }

    #[test]
    fn test_collage_spreads_cycle_templates() {
        let mut rng = StdRng::seed_from_u64(0);
        let spreads =
            generate_spreads(&photos(9), config(3), FillMethod::Collage, &mut rng).unwrap();
        let expected: Vec<Vec<PhotoSlot>> = COLLAGES_3_PHOTO
            .iter()
            .cycle()
            .take(3)
            .map(|template| collage_layout(template, 400.0, 200.0))
            .collect();
        for (spread, slots) in spreads.iter().zip(&expected) {
            assert_eq!(spread.slots.len(), 3);
            assert_eq!(spread.filled_slots(), 3);
            assert!(spread
                .slots
                .iter()
                .zip(slots)
                .all(|(slot, template)| slot.bounds() == template.bounds()));
        }
        assert_eq!(spreads[2].slots[2].photo_id.as_deref(), Some("photo-8"));
    }

    #[test]
    fn test_collage_spreads_need_a_template() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_spreads(&photos(8), config(2), FillMethod::Collage, &mut rng);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_spreads_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_spreads(&photos(4), config(0), FillMethod::Manual, &mut rng);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_no_photos_gives_empty_spreads() {
        let mut rng = StdRng::seed_from_u64(0);
        let spreads = generate_spreads(&[], config(2), FillMethod::Auto, &mut rng).unwrap();
        assert_eq!(spreads.len(), 2);
        assert!(spreads.iter().all(|spread| spread.slots.is_empty()));
    }
}
