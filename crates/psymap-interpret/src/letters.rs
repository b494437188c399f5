//! Letter-code resolution: one letter per dimension, higher score wins.

use psymap_core::profile::TraitMap;

/// An ordered set of bipolar letter dimensions.
///
/// Each position of the resolved code is decided independently by
/// comparing the scores of the two poles; a tie resolves to the
/// first-listed pole (for the standard system: E, S, T, J).
#[derive(Debug, Clone, PartialEq)]
pub struct LetterSystem {
    pairs: Vec<(String, String)>,
}

impl LetterSystem {
    #[must_use]
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// The standard four-dimension system: E/I, S/N, T/F, J/P.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&[("E", "I"), ("S", "N"), ("T", "F"), ("J", "P")])
    }

    /// True when any pole of any dimension appears among the trait
    /// names (case-insensitive).
    #[must_use]
    pub fn applicable(&self, traits: &TraitMap) -> bool {
        self.pairs
            .iter()
            .any(|(a, b)| traits.get_ci(a).is_some() || traits.get_ci(b).is_some())
    }

    /// Resolve the code. Deterministic: repeated calls with identical
    /// scores produce the identical code.
    #[must_use]
    pub fn resolve(&self, traits: &TraitMap) -> String {
        self.pairs
            .iter()
            .map(|(a, b)| {
                if traits.score_ci(a) >= traits.score_ci(b) {
                    a.as_str()
                } else {
                    b.as_str()
                }
            })
            .collect()
    }
}
