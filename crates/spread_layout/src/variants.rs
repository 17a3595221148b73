//! Next/previous layout variants
//!
//! Variant 0 is the grid layout. Every later variant is a randomized layout
//! seeded from the cycler's base seed and the variant index, so stepping back
//! to a variant reproduces it exactly and a `(seed, index)` pair can be shared.

use crate::{Dimensions, PhotoSlot, RandomLayout, Result, SpreadLayoutEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Cycles through layout variants for a fixed photo count and canvas
#[derive(Debug, Clone)]
pub struct VariantCycler {
    engine: SpreadLayoutEngine,
    photos_count: usize,
    canvas: Dimensions,
    base_seed: u64,
    index: u64,
}

impl VariantCycler {
    /// Start at variant 0; fails if either layout mode rejects the inputs
    pub fn new(
        engine: SpreadLayoutEngine,
        photos_count: usize,
        canvas: Dimensions,
        base_seed: u64,
    ) -> Result<Self> {
        engine.check_random(photos_count, canvas)?;
        Ok(Self {
            engine,
            photos_count,
            canvas,
            base_seed,
            index: 0,
        })
    }

    /// Start at a fresh random base seed
    pub fn with_random_seed(
        engine: SpreadLayoutEngine,
        photos_count: usize,
        canvas: Dimensions,
    ) -> Result<Self> {
        Self::new(engine, photos_count, canvas, rand::random())
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Slots of the current variant
    pub fn current(&self) -> Vec<PhotoSlot> {
        self.variant(self.index).slots
    }

    /// Advance one variant and return its slots
    pub fn next_variant(&mut self) -> Vec<PhotoSlot> {
        self.index = self.index.saturating_add(1);
        self.current()
    }

    /// Step back one variant, stopping at 0, and return its slots
    pub fn previous_variant(&mut self) -> Vec<PhotoSlot> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jump straight to variant `index`
    pub fn select(&mut self, index: u64) -> Vec<PhotoSlot> {
        self.index = index;
        self.current()
    }

    /// Layout of variant `index`, with the fallback flag of randomized variants
    pub fn variant(&self, index: u64) -> RandomLayout {
        if index == 0 {
            return RandomLayout {
                slots: self.engine.grid_unchecked(self.photos_count, self.canvas),
                fell_back: false,
            };
        }
        let mut rng = StdRng::seed_from_u64(variant_seed(self.base_seed, index));
        self.engine
            .random_unchecked(&mut rng, self.photos_count, self.canvas)
    }
}

fn variant_seed(base_seed: u64, index: u64) -> u64 {
    base_seed ^ index.wrapping_mul(SEED_STRIDE)
}
