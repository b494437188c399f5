//! Rule-based style resolution.
//!
//! A test's description dictionary may carry a `scoring.rules` table:
//! an ordered map of style label to a conjunction of threshold
//! conditions over raw (non-percent) sub-scores, written as
//! `<Dimension>_min` / `<Dimension>_max` keys. The first rule whose
//! conditions all hold, in declaration order, determines the style.

use psymap_core::profile::{TraitInfo, TraitMap};
use serde_json::Value;
use tracing::debug;

/// Threshold comparison direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Raw score must be >= the threshold.
    Min,
    /// Raw score must be <= the threshold.
    Max,
}

/// One conjunctive condition of a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub dimension: String,
    pub comparator: Comparator,
    pub threshold: f64,
}

impl Condition {
    fn holds(&self, raw: f64) -> bool {
        match self.comparator {
            Comparator::Min => raw >= self.threshold,
            Comparator::Max => raw <= self.threshold,
        }
    }
}

/// A named rule: all conditions must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub label: String,
    pub conditions: Vec<Condition>,
}

/// Ordered rule list decoded from a description dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<StyleRule>,
}

/// Default point scale for dimensions whose payload omits `max_score`.
const DEFAULT_MAX_RAW: f64 = 6.0;

/// A trait's raw sub-score: the payload value when present, otherwise
/// reconstructed from the percent score on the dimension's point scale.
#[must_use]
pub fn raw_score(info: &TraitInfo) -> f64 {
    match info.raw_score {
        Some(raw) => raw,
        None => {
            let max = info.max_score.unwrap_or(DEFAULT_MAX_RAW);
            (info.percent() / 100.0 * max).round()
        }
    }
}

impl RuleSet {
    /// Decode the `scoring.rules` table. Unknown condition suffixes are
    /// skipped; a missing or malformed table yields an empty set.
    #[must_use]
    pub fn from_definitions(definitions: &Value) -> Self {
        let Some(table) = definitions
            .get("scoring")
            .and_then(|s| s.get("rules"))
            .and_then(Value::as_object)
        else {
            return Self::default();
        };

        let rules = table
            .iter()
            .map(|(label, conditions)| StyleRule {
                label: label.clone(),
                conditions: conditions
                    .as_object()
                    .map(|object| {
                        object
                            .iter()
                            .filter_map(|(key, threshold)| {
                                parse_condition(key, threshold.as_f64().unwrap_or(0.0))
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        Self { rules }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// First rule, in declaration order, whose conditions all hold
    /// against the profile's raw sub-scores. Dimensions absent from the
    /// profile score 0.
    #[must_use]
    pub fn resolve<'a>(&'a self, traits: &TraitMap) -> Option<&'a str> {
        let raw_of = |dimension: &str| {
            traits
                .get_ci(dimension)
                .map_or(0.0, |(_, info)| raw_score(info))
        };
        self.rules
            .iter()
            .find(|rule| rule.conditions.iter().all(|c| c.holds(raw_of(&c.dimension))))
            .map(|rule| rule.label.as_str())
    }
}

fn parse_condition(key: &str, threshold: f64) -> Option<Condition> {
    let (dimension, suffix) = key.rsplit_once('_')?;
    let comparator = match suffix {
        "min" => Comparator::Min,
        "max" => Comparator::Max,
        _ => {
            debug!(key, "skipping condition with unknown suffix");
            return None;
        }
    };
    Some(Condition {
        dimension: dimension.to_string(),
        comparator,
        threshold,
    })
}
