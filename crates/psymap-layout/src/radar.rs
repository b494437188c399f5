//! Radar chart geometry and derived axis sets.
//!
//! A radar projects `{axis, value}` pairs (value domain fixed at
//! [0, 100]) onto a polar chart. Besides the plain one-axis-per-trait
//! view, two derived views are computed from letter-named trait scores:
//! the 8-axis letter-preference view and the 16-category joint-preference
//! view with its display-only amplification.

use psymap_core::profile::TraitMap;
use psymap_core::{Point, Rect};

/// One radar axis: the full (untruncated) label and its value.
///
/// Renderers may shorten the label for space; tooltips always use the
/// full label carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarDatum {
    pub axis: String,
    pub value: f64,
}

impl RadarDatum {
    #[must_use]
    pub fn new(axis: impl Into<String>, value: f64) -> Self {
        Self {
            axis: axis.into(),
            value: value.clamp(0.0, 100.0),
        }
    }
}

// ── Polar projection ────────────────────────────────────────────────

/// Computed radar geometry in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    /// Polygon vertex per axis, in axis order.
    pub vertices: Vec<Point>,
    /// Outer end of each axis spoke.
    pub axis_ends: Vec<Point>,
    /// Anchor point for each axis label (just past the spoke end).
    pub label_anchors: Vec<Point>,
    /// Grid ring radii, innermost first.
    pub rings: Vec<f64>,
}

/// Angle of axis `i` of `n`: first axis points straight up, the rest
/// proceed clockwise.
fn axis_angle(i: usize, n: usize) -> f64 {
    let slice = std::f64::consts::TAU / n as f64;
    i as f64 * slice - std::f64::consts::FRAC_PI_2
}

/// Project radar data into `bounds`.
///
/// Returns `None` for empty data or an unusable bounds rectangle (the
/// chart defers until the container has a size). `radius_fraction`
/// scales the outer radius inside the margin-derived maximum; see
/// [`crate::breakpoints::RadarStyle`].
#[must_use]
pub fn radar_geometry(
    data: &[RadarDatum],
    bounds: Rect,
    levels: usize,
    label_offset: f64,
    radius_fraction: f64,
) -> Option<RadarGeometry> {
    if data.is_empty() || bounds.is_empty() {
        return None;
    }
    let center = bounds.center();
    let max_radius = (bounds.width.min(bounds.height) / 2.0 - label_offset).max(1.0);
    let radius = max_radius * radius_fraction.clamp(0.1, 1.0);
    let n = data.len();

    let mut vertices = Vec::with_capacity(n);
    let mut axis_ends = Vec::with_capacity(n);
    let mut label_anchors = Vec::with_capacity(n);
    for (i, datum) in data.iter().enumerate() {
        let angle = axis_angle(i, n);
        let (cos, sin) = (angle.cos(), angle.sin());
        let r = datum.value.clamp(0.0, 100.0) / 100.0 * radius;
        vertices.push(Point::new(center.x + r * cos, center.y + r * sin));
        axis_ends.push(Point::new(center.x + radius * cos, center.y + radius * sin));
        label_anchors.push(Point::new(
            center.x + (radius + label_offset) * cos,
            center.y + (radius + label_offset) * sin,
        ));
    }

    let levels = levels.max(1);
    let rings = (1..=levels)
        .map(|lvl| radius / levels as f64 * lvl as f64)
        .collect();

    Some(RadarGeometry {
        center,
        radius,
        vertices,
        axis_ends,
        label_anchors,
        rings,
    })
}

// ── Base view ───────────────────────────────────────────────────────

/// One axis per trait, values verbatim (clamped), payload order.
#[must_use]
pub fn trait_data(traits: &TraitMap) -> Vec<RadarDatum> {
    traits
        .iter()
        .map(|(name, info)| RadarDatum::new(name, info.percent()))
        .collect()
}

// ── Letter-preference views ─────────────────────────────────────────

/// The eight letter-preference axes, in display order.
pub const PREFERENCE_AXES: [&str; 8] = ["E", "I", "S", "N", "T", "F", "J", "P"];

/// Opposite pole of a preference letter.
fn opposite(letter: char) -> char {
    match letter {
        'E' => 'I',
        'I' => 'E',
        'S' => 'N',
        'N' => 'S',
        'T' => 'F',
        'F' => 'T',
        'J' => 'P',
        'P' => 'J',
        other => other,
    }
}

/// True when any letter-preference trait is present; gates the letter
/// views (feature detection by trait name).
#[must_use]
pub fn has_letter_traits(traits: &TraitMap) -> bool {
    PREFERENCE_AXES.iter().any(|l| traits.get_ci(l).is_some())
}

/// 8-axis view: each axis carries the matching trait score directly
/// (case-insensitive match, 0 when absent).
#[must_use]
pub fn preference_data(traits: &TraitMap) -> Vec<RadarDatum> {
    PREFERENCE_AXES
        .iter()
        .map(|letter| RadarDatum::new(*letter, traits.score_ci(letter)))
        .collect()
}

/// The sixteen 4-letter category codes, in display order.
pub const TYPE_CODES: [&str; 16] = [
    "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP", "ENFP",
    "ENTP", "ESTJ", "ESFJ", "ENFJ", "ENTJ",
];

/// Display floor for amplified 16-category values, in percent.
pub const AMPLIFY_FLOOR: f64 = 12.0;

/// Joint-preference estimate for one category code.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEstimate {
    pub code: &'static str,
    /// Raw joint estimate in [0, 100]: product of the four per-letter
    /// preference ratios. This is the value that means something.
    pub estimate: f64,
    /// Square-root amplified, floored display value in
    /// [`AMPLIFY_FLOOR`], 100]. Visual legibility only; never feeds back
    /// into scoring.
    pub amplified: f64,
}

/// Preference ratio for `letter` against its opposite pole:
/// `score / (score + opposite)`, denominator floored at 1.
fn preference_ratio(traits: &TraitMap, letter: char) -> f64 {
    let own = traits.score_ci(&letter.to_string());
    let opp = traits.score_ci(&opposite(letter).to_string());
    own / (own + opp).max(1.0)
}

/// 16-category joint-preference distribution.
#[must_use]
pub fn type_distribution(traits: &TraitMap) -> Vec<TypeEstimate> {
    TYPE_CODES
        .iter()
        .map(|code| {
            let product: f64 = code
                .chars()
                .map(|letter| preference_ratio(traits, letter))
                .product();
            let estimate = (100.0 * product).round();
            TypeEstimate {
                code,
                estimate,
                amplified: ((estimate / 100.0).sqrt() * 100.0).max(AMPLIFY_FLOOR),
            }
        })
        .collect()
}

/// Radar data for the 16-category view (amplified display values, full
/// code as the axis label).
#[must_use]
pub fn type_distribution_data(traits: &TraitMap) -> Vec<RadarDatum> {
    type_distribution(traits)
        .into_iter()
        .map(|est| RadarDatum::new(est.code, est.amplified))
        .collect()
}
