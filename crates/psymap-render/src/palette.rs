//! Score banding and series colors.
//!
//! Two banded palettes share the same 80/60/40/20 cuts: the map palette
//! colors nodes on the personality map, the card palette colors trait
//! cards. History lines cycle through a fixed series palette instead, so
//! line colors track the trait, not its score.

use crate::buffer::PackedRgba;

// Map palette.
pub const BAND_VERY_HIGH: PackedRgba = PackedRgba::rgb(0x00, 0xC8, 0x51);
pub const BAND_HIGH: PackedRgba = PackedRgba::rgb(0x33, 0xB5, 0xE5);
pub const BAND_MEDIUM: PackedRgba = PackedRgba::rgb(0xFF, 0xBB, 0x33);
pub const BAND_LOW: PackedRgba = PackedRgba::rgb(0xFF, 0x6B, 0x6B);
pub const BAND_VERY_LOW: PackedRgba = PackedRgba::rgb(0x99, 0x33, 0xCC);

// Edge strokes.
pub const EDGE_POSITIVE: PackedRgba = PackedRgba::rgb(0x4C, 0xAF, 0x50);
pub const EDGE_NEGATIVE: PackedRgba = PackedRgba::rgb(0xFF, 0x98, 0x00);
pub const EDGE_INCONSISTENT: PackedRgba = PackedRgba::rgb(0xFF, 0x6B, 0x6B);

// Chart accents.
pub const RADAR_STROKE: PackedRgba = PackedRgba::rgb(0x4C, 0xAF, 0x50);
pub const RADAR_GRID: PackedRgba = PackedRgba::rgb(0x6E, 0x6E, 0x6E);
pub const RADAR_POINT: PackedRgba = PackedRgba::rgb(0x8B, 0x5C, 0xF6);
pub const CROSS_POINT: PackedRgba = PackedRgba::rgb(0x4C, 0xAF, 0x50);

/// Node color for a percent score on the map.
#[must_use]
pub fn band_color(score: f64) -> PackedRgba {
    if score >= 80.0 {
        BAND_VERY_HIGH
    } else if score >= 60.0 {
        BAND_HIGH
    } else if score >= 40.0 {
        BAND_MEDIUM
    } else if score >= 20.0 {
        BAND_LOW
    } else {
        BAND_VERY_LOW
    }
}

/// Accent color for trait cards and history series.
#[must_use]
pub fn card_color(score: f64) -> PackedRgba {
    if score >= 80.0 {
        PackedRgba::rgb(0x4C, 0xAF, 0x50)
    } else if score >= 60.0 {
        PackedRgba::rgb(0x8B, 0xC3, 0x4A)
    } else if score >= 40.0 {
        PackedRgba::rgb(0xFF, 0xC1, 0x07)
    } else if score >= 20.0 {
        PackedRgba::rgb(0xFF, 0x98, 0x00)
    } else {
        PackedRgba::rgb(0xF4, 0x43, 0x36)
    }
}

/// Fixed palette for history lines, cycled by series index.
const SERIES: [PackedRgba; 8] = [
    PackedRgba::rgb(0x4C, 0xAF, 0x50),
    PackedRgba::rgb(0x33, 0xB5, 0xE5),
    PackedRgba::rgb(0xFF, 0xBB, 0x33),
    PackedRgba::rgb(0xFF, 0x6B, 0x6B),
    PackedRgba::rgb(0x99, 0x33, 0xCC),
    PackedRgba::rgb(0x8B, 0xC3, 0x4A),
    PackedRgba::rgb(0xFF, 0x98, 0x00),
    PackedRgba::rgb(0x8B, 0x5C, 0xF6),
];

/// Stable per-series color for history lines: trait `i` always maps to
/// the same palette slot, so a trait keeps its color across renders.
#[must_use]
pub fn series_color(index: usize) -> PackedRgba {
    SERIES[index % SERIES.len()]
}
