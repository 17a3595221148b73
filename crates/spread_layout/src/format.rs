//! Photobook Format Table
//!
//! Static lookup from a named paper format to its spread canvas size (design
//! units) and the print metadata shown to the customer. There is exactly one
//! table; parsing an unknown key is an error, never a silent default.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

// =============================================================================
// Formats
// =============================================================================

/// Available photobook formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotobookFormat {
    /// 20×20 cm square book
    #[serde(rename = "20x20")]
    Square20 = 0,
    /// 21×30 cm book
    #[serde(rename = "21x30")]
    A4 = 1,
    /// 30×30 cm square book
    #[serde(rename = "30x30")]
    Square30 = 2,
}

impl PhotobookFormat {
    pub const ALL: [PhotobookFormat; 3] = [
        PhotobookFormat::Square20,
        PhotobookFormat::A4,
        PhotobookFormat::Square30,
    ];

    /// Table key, as used in URLs and saved configs
    pub fn key(&self) -> &'static str {
        match self {
            PhotobookFormat::Square20 => "20x20",
            PhotobookFormat::A4 => "21x30",
            PhotobookFormat::Square30 => "30x30",
        }
    }

    pub fn specs(&self) -> &'static FormatSpecs {
        &FORMAT_SPECS[*self as usize]
    }
}

impl fmt::Display for PhotobookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PhotobookFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        PhotobookFormat::ALL
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| LayoutError::UnknownFormat(s.to_string()))
    }
}

// =============================================================================
// Specs
// =============================================================================

/// Width and height of a spread canvas in design units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

/// Canvas size and print metadata for one format
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatSpecs {
    pub format: PhotobookFormat,
    pub width: f32,
    pub height: f32,
    #[serde(rename = "spreadMM")]
    pub spread_mm: &'static str,
    #[serde(rename = "spreadPX")]
    pub spread_px: &'static str,
    #[serde(rename = "coverMM")]
    pub cover_mm: &'static str,
    #[serde(rename = "coverPX")]
    pub cover_px: &'static str,
    #[serde(rename = "spineMM")]
    pub spine_mm: &'static str,
    #[serde(rename = "spinePX")]
    pub spine_px: &'static str,
    pub spreads_range: &'static str,
    /// Print sizes that depend on the number of spreads in the book
    pub spread_variants: &'static [SpreadPrintSpec],
}

impl FormatSpecs {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Print sizes for a book with a given range of spread counts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadPrintSpec {
    pub spreads: RangeInclusive<u32>,
    /// Spread size in millimetres (width, height)
    pub spread_mm: (u32, u32),
    /// Spread size in pixels at print resolution (width, height)
    pub spread_px: (u32, u32),
    pub cover_mm: (u32, u32),
    pub cover_px: (u32, u32),
    pub spine_mm: u32,
    pub spine_px: u32,
}

impl SpreadPrintSpec {
    const fn new(
        spreads: RangeInclusive<u32>,
        cover_mm_width: u32,
        cover_px_width: u32,
        spine_mm: u32,
        spine_px: u32,
    ) -> Self {
        Self {
            spreads,
            spread_mm: (400, 203),
            spread_px: (4724, 2398),
            cover_mm: (cover_mm_width, 240),
            cover_px: (cover_px_width, 2835),
            spine_mm,
            spine_px,
        }
    }
}

/// Print variants of the 20×20 format by spread count
pub const SPREAD_SPECS_20X20: &[SpreadPrintSpec] = &[
    SpreadPrintSpec::new(10..=13, 457, 5390, 8, 94),
    SpreadPrintSpec::new(14..=17, 458, 5402, 9, 106),
    SpreadPrintSpec::new(18..=21, 461, 5445, 12, 142),
    SpreadPrintSpec::new(22..=25, 463, 5469, 14, 165),
];

/// Indexed by `PhotobookFormat` discriminant
pub static FORMAT_SPECS: [FormatSpecs; 3] = [
    FormatSpecs {
        format: PhotobookFormat::Square20,
        width: 400.0,
        height: 200.0,
        spread_mm: "400×203",
        spread_px: "4724×2398",
        cover_mm: "457-463×240",
        cover_px: "5390-5469×2835",
        spine_mm: "8-14",
        spine_px: "94-165",
        spreads_range: "10 to 25",
        spread_variants: SPREAD_SPECS_20X20,
    },
    FormatSpecs {
        format: PhotobookFormat::A4,
        width: 420.0,
        height: 300.0,
        spread_mm: "420×300",
        spread_px: "4961×3543",
        cover_mm: "477×330",
        cover_px: "5634×3898",
        spine_mm: "10",
        spine_px: "118",
        spreads_range: "standard",
        spread_variants: &[],
    },
    FormatSpecs {
        format: PhotobookFormat::Square30,
        width: 600.0,
        height: 300.0,
        spread_mm: "600×300",
        spread_px: "7087×3543",
        cover_mm: "657×330",
        cover_px: "7756×3898",
        spine_mm: "12",
        spine_px: "142",
        spreads_range: "large",
        spread_variants: &[],
    },
];

/// Canvas size of a spread in the given format
pub fn dimensions_for(format: PhotobookFormat) -> Dimensions {
    format.specs().dimensions()
}

/// Print sizes for a book of `spreads_count` spreads, if the format defines
/// per-count variants covering that count
pub fn print_spec_for(format: PhotobookFormat, spreads_count: u32) -> Option<&'static SpreadPrintSpec> {
    format
        .specs()
        .spread_variants
        .iter()
        .find(|spec| spec.spreads.contains(&spreads_count))
}
