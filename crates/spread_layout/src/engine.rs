//! Checked layout entry points
//!
//! `generate_layout` and `generate_random_layout` accept any input and may
//! produce negative-sized slots for degenerate canvases. The engine validates
//! its inputs first and reports `LayoutError::InvalidArgument` instead.

use crate::grid_layout::grid_slots;
use crate::random_layout::random_slots;
use crate::{
    grid_shape, safe_area, templates_for, CollageTemplate, Dimensions, LayoutConfig, LayoutError,
    PhotoSlot, PhotobookFormat, RandomLayout, Result,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the slots of a spread are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMethod {
    /// Randomized bin-packing layout
    Auto,
    /// Deterministic grid
    #[default]
    Manual,
    /// Preset collage template for the photo count
    Collage,
}

/// Layout generator bound to a validated configuration
#[derive(Debug, Clone, Default)]
pub struct SpreadLayoutEngine {
    config: LayoutConfig,
}

impl SpreadLayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Deterministic grid layout
    pub fn grid_layout(&self, photos_count: usize, canvas: Dimensions) -> Result<Vec<PhotoSlot>> {
        self.check_grid(photos_count, canvas)?;
        Ok(self.grid_unchecked(photos_count, canvas))
    }

    /// Randomized layout drawing from `rng`
    pub fn random_layout<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        photos_count: usize,
        canvas: Dimensions,
    ) -> Result<RandomLayout> {
        self.check_random(photos_count, canvas)?;
        Ok(self.random_unchecked(rng, photos_count, canvas))
    }

    /// Slots of a preset collage template
    pub fn collage_layout(
        &self,
        template: &CollageTemplate,
        canvas: Dimensions,
    ) -> Result<Vec<PhotoSlot>> {
        self.check_canvas(canvas)?;
        Ok(template.slots_for(canvas.width, canvas.height, self.config.safe_margin))
    }

    /// Layout for a spread of `format` using `method`.
    ///
    /// `FillMethod::Collage` uses the first template holding `photos_count`
    /// photos.
    pub fn layout<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        method: FillMethod,
        photos_count: usize,
        format: PhotobookFormat,
    ) -> Result<Vec<PhotoSlot>> {
        let canvas = format.specs().dimensions();
        match method {
            FillMethod::Manual => self.grid_layout(photos_count, canvas),
            FillMethod::Auto => Ok(self.random_layout(rng, photos_count, canvas)?.slots),
            FillMethod::Collage => {
                self.check_collage(photos_count, canvas)?;
                Ok(self.collage_unchecked(photos_count, 0, canvas))
            }
        }
    }

    pub(crate) fn grid_unchecked(&self, photos_count: usize, canvas: Dimensions) -> Vec<PhotoSlot> {
        grid_slots(
            photos_count,
            canvas.width,
            canvas.height,
            self.config.spacing,
            self.config.safe_margin,
        )
    }

    pub(crate) fn random_unchecked<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        photos_count: usize,
        canvas: Dimensions,
    ) -> RandomLayout {
        random_slots(rng, photos_count, canvas.width, canvas.height, &self.config)
    }

    /// Slots of template `variant` (wrapping) among those holding
    /// `photos_count` photos; empty when there is no such template
    pub(crate) fn collage_unchecked(
        &self,
        photos_count: usize,
        variant: usize,
        canvas: Dimensions,
    ) -> Vec<PhotoSlot> {
        let templates = templates_for(photos_count);
        if templates.is_empty() {
            return Vec::new();
        }
        templates[variant % templates.len()].slots_for(
            canvas.width,
            canvas.height,
            self.config.safe_margin,
        )
    }

    /// Inputs for which the grid layout yields positive, in-bounds slots
    pub(crate) fn check_grid(&self, photos_count: usize, canvas: Dimensions) -> Result<()> {
        self.check_canvas(canvas)?;
        if photos_count == 0 {
            return Ok(());
        }

        let safe = safe_area(canvas.width, canvas.height, self.config.safe_margin);
        let (rows, cols) = grid_shape(photos_count);
        let spacing = self.config.spacing;
        let slot_width = (safe.width - spacing * (cols - 1) as f32) / cols as f32;
        let slot_height = (safe.height - spacing * (rows - 1) as f32) / rows as f32;
        if slot_width <= 0.0 || slot_height <= 0.0 {
            return Err(LayoutError::InvalidArgument(format!(
                "{} photos with spacing {} do not fit a {}×{} canvas",
                photos_count, spacing, canvas.width, canvas.height
            )));
        }
        Ok(())
    }

    /// Inputs for which both the randomized layout and its grid fallback
    /// yield positive, in-bounds slots
    pub(crate) fn check_random(&self, photos_count: usize, canvas: Dimensions) -> Result<()> {
        self.check_grid(photos_count, canvas)?;

        let safe = safe_area(canvas.width, canvas.height, self.config.safe_margin);
        let cell_size = safe.width.min(safe.height) / self.config.grid_divisions as f32;
        if self.config.spacing >= cell_size {
            return Err(LayoutError::InvalidArgument(format!(
                "spacing {} is not smaller than the grid cell size {}",
                self.config.spacing, cell_size
            )));
        }
        Ok(())
    }

    /// Photo counts the collage catalog has templates for
    pub(crate) fn check_collage(&self, photos_count: usize, canvas: Dimensions) -> Result<()> {
        self.check_canvas(canvas)?;
        if photos_count > 0 && templates_for(photos_count).is_empty() {
            return Err(LayoutError::InvalidArgument(format!(
                "no collage template holds {} photos",
                photos_count
            )));
        }
        Ok(())
    }

    fn check_canvas(&self, canvas: Dimensions) -> Result<()> {
        if !canvas.width.is_finite() || !canvas.height.is_finite() {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas size must be finite, got {}×{}",
                canvas.width, canvas.height
            )));
        }
        let margin = self.config.safe_margin;
        if canvas.width <= margin * 2.0 || canvas.height <= margin * 2.0 {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas {}×{} has no area inside a safe margin of {}",
                canvas.width, canvas.height, margin
            )));
        }
        Ok(())
    }
}
