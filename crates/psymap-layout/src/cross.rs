//! Quadrant cross view: a single point in a two-dimensional style space.
//!
//! Each coordinate prefers a directly-named scale from the profile and
//! falls back to the average of two related category scores when no
//! scale is present. The attachment-style preset maps avoidance on X and
//! anxiety on Y.

use psymap_core::profile::TraitMap;

/// One axis of the cross: ordered scale-name aliases and a two-category
/// fallback averaged when no alias matches.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossAxis {
    pub aliases: Vec<String>,
    pub fallback: (String, String),
}

impl CrossAxis {
    #[must_use]
    pub fn new(aliases: &[&str], fallback: (&str, &str)) -> Self {
        Self {
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
            fallback: (fallback.0.to_string(), fallback.1.to_string()),
        }
    }

    /// Resolve the coordinate in [0, 100].
    #[must_use]
    pub fn resolve(&self, traits: &TraitMap) -> f64 {
        for alias in &self.aliases {
            if let Some((_, info)) = traits.get_ci(alias) {
                return info.percent();
            }
        }
        let (a, b) = (&self.fallback.0, &self.fallback.1);
        ((traits.score_ci(a) + traits.score_ci(b)) / 2.0).clamp(0.0, 100.0)
    }
}

/// A two-axis cross specification with quadrant labels.
///
/// Quadrant label order: low-x/low-y, low-x/high-y, high-x/low-y,
/// high-x/high-y.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSpec {
    pub x: CrossAxis,
    pub y: CrossAxis,
    pub quadrants: [String; 4],
}

impl CrossSpec {
    /// Attachment-style preset: X = avoidance, Y = anxiety; either
    /// coordinate falls back to averaging its category with the
    /// disorganized category.
    #[must_use]
    pub fn attachment() -> Self {
        Self {
            x: CrossAxis::new(&["Avoidance", "Avoidant"], ("Avoidant", "Disorganized")),
            y: CrossAxis::new(&["Anxiety", "Anxious"], ("Anxious", "Disorganized")),
            quadrants: [
                "Secure".to_string(),
                "Anxious".to_string(),
                "Avoidant".to_string(),
                "Disorganized".to_string(),
            ],
        }
    }
}

/// Resolved cross coordinates, both in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossPoint {
    pub x: f64,
    pub y: f64,
}

impl CrossPoint {
    /// Index into [`CrossSpec::quadrants`] for this point; the center
    /// lines belong to the low side.
    #[must_use]
    pub fn quadrant(&self) -> usize {
        match (self.x > 50.0, self.y > 50.0) {
            (false, false) => 0,
            (false, true) => 1,
            (true, false) => 2,
            (true, true) => 3,
        }
    }
}

/// Resolve both coordinates of a cross view against a trait map.
#[must_use]
pub fn resolve_cross(spec: &CrossSpec, traits: &TraitMap) -> CrossPoint {
    CrossPoint {
        x: spec.x.resolve(traits),
        y: spec.y.resolve(traits),
    }
}
