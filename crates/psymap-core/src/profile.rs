//! Profile payload model.
//!
//! Mirrors the JSON contract of the assessment API: a profile is a map of
//! trait name to trait data, plus ordered connection and inconsistency
//! lists. Decoding is lenient: every field that can be absent has a
//! default, scores clamp to [0, 100], and unknown connection kinds fall
//! back to [`ConnectionKind::Correlation`].
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing trait field | Partial payload | Default (0 / empty string) |
//! | Score out of range | Upstream bug | Clamped at read time |
//! | Unknown `type` string | New server kind | Treated as correlation |
//! | Zero `max_score` | Degenerate raw pair | Percent resolves to 0 |

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::DecodeError;

// ── Trait data ──────────────────────────────────────────────────────

/// Per-trait payload data.
///
/// `score` is the server's 0-100 percent value; `raw_score`/`max_score`
/// carry the untranslated sub-score when the test reports one. Use
/// [`TraitInfo::percent`] rather than reading `score` directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraitInfo {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendations: String,
    #[serde(default)]
    pub stability: Option<String>,
    #[serde(default)]
    pub variance: Option<f64>,
    #[serde(default)]
    pub test_count: Option<u32>,
    #[serde(default)]
    pub raw_score: Option<f64>,
    #[serde(default)]
    pub max_score: Option<f64>,
}

impl TraitInfo {
    /// Construct from a bare percent score. Mostly useful in tests and
    /// fixtures.
    #[must_use]
    pub fn with_score(score: f64) -> Self {
        Self {
            score: Some(score),
            ..Self::default()
        }
    }

    /// The trait's percent score, clamped to [0, 100].
    ///
    /// Falls back to `raw_score / max_score` when the server omitted the
    /// percent value; a missing or zero denominator resolves to 0.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if let Some(score) = self.score {
            return score.clamp(0.0, 100.0);
        }
        match (self.raw_score, self.max_score) {
            (Some(raw), Some(max)) if max > 0.0 => (raw / max * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }

    /// Human-readable score string: `raw/max (pct%)` when a raw pair is
    /// present, `pct/100` otherwise.
    #[must_use]
    pub fn score_display(&self) -> String {
        let pct = self.percent().round() as i64;
        match (self.raw_score, self.max_score) {
            (Some(raw), Some(max)) => {
                format!("{}/{} ({pct}%)", format_number(raw), format_number(max))
            }
            _ => format!("{pct}/100"),
        }
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Score band used for node colors, card accents, and level labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl Level {
    /// Band a percent score: >=80, >=60, >=40, >=20, else very low.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::VeryHigh
        } else if score >= 60.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else if score >= 20.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very low",
        }
    }
}

// ── Ordered trait map ───────────────────────────────────────────────

/// Trait entries in payload order.
///
/// JSON object order is meaningful for display (the server lists traits
/// in presentation order), so entries are kept as an ordered sequence
/// rather than a hash map. Duplicate keys keep the first position and the
/// last value, matching JSON semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitMap {
    entries: Vec<(String, TraitInfo)>,
}

impl TraitMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a trait, preserving the original position on
    /// replacement.
    pub fn insert(&mut self, name: impl Into<String>, info: TraitInfo) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = info;
        } else {
            self.entries.push((name, info));
        }
    }

    /// Exact-name lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TraitInfo> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, i)| i)
    }

    /// Case-insensitive lookup, returning the stored name as well.
    #[must_use]
    pub fn get_ci(&self, name: &str) -> Option<(&str, &TraitInfo)> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(n, i)| (n.as_str(), i))
    }

    /// Percent score for a case-insensitive name, 0 when absent.
    #[must_use]
    pub fn score_ci(&self, name: &str) -> f64 {
        self.get_ci(name).map_or(0.0, |(_, info)| info.percent())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraitInfo)> {
        self.entries.iter().map(|(n, i)| (n.as_str(), i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for TraitMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TraitMapVisitor;

        impl<'de> Visitor<'de> for TraitMapVisitor {
            type Value = TraitMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of trait name to trait data")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = TraitMap::new();
                while let Some((name, info)) = access.next_entry::<String, TraitInfo>()? {
                    map.insert(name, info);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(TraitMapVisitor)
    }
}

impl FromIterator<(String, TraitInfo)> for TraitMap {
    fn from_iter<T: IntoIterator<Item = (String, TraitInfo)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, info) in iter {
            map.insert(name, info);
        }
        map
    }
}

// ── Connections and inconsistencies ─────────────────────────────────

/// Relation kind between two traits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Statistical correlation (solid stroke; sign from `correlation`).
    #[default]
    Correlation,
    /// Contradictory answers across tests (dashed stroke).
    Inconsistency,
}

impl<'de> Deserialize<'de> for ConnectionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s.eq_ignore_ascii_case("inconsistency") {
            Self::Inconsistency
        } else {
            Self::Correlation
        })
    }
}

/// A pairwise relation between two named traits.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub strength: f64,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub correlation: Option<f64>,
    #[serde(default)]
    pub description: String,
}

/// A detected contradiction on a single trait.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Inconsistency {
    #[serde(rename = "trait", default)]
    pub trait_name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
}

// ── Profile ─────────────────────────────────────────────────────────

/// A decoded personality profile.
///
/// Constructed fresh from each API response and never mutated by
/// rendering; interactive drag only touches transient simulation
/// coordinates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub traits: TraitMap,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub inconsistencies: Vec<Inconsistency>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    /// Server-resolved dominant style label, when the test has one.
    #[serde(default)]
    pub dominant_style: Option<String>,
}

impl Profile {
    /// Decode a profile from a JSON string.
    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// True when the profile contains at least one trait whose name
    /// matches any of `names` case-insensitively. Used for feature
    /// detection (e.g. letter-named traits imply the letter-preference
    /// views are applicable).
    #[must_use]
    pub fn has_any_trait(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.traits.get_ci(n).is_some())
    }
}

// ── Completed-result payload ────────────────────────────────────────

/// Test metadata attached to a completed result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestMeta {
    #[serde(default)]
    pub name: String,
    /// Free-form description dictionary (category codes, narrative
    /// blocks, scoring rules). Interpreted by `psymap-interpret`.
    #[serde(default)]
    pub result_definitions: serde_json::Value,
}

/// A completed test result as returned by the result and history
/// endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultPayload {
    #[serde(default)]
    pub test: TestMeta,
    #[serde(default)]
    pub completed_at: String,
    #[serde(default)]
    pub personality_map: Profile,
}

impl ResultPayload {
    /// Decode a completed result from a JSON string.
    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_clamps_and_defaults() {
        assert_eq!(TraitInfo::with_score(150.0).percent(), 100.0);
        assert_eq!(TraitInfo::with_score(-3.0).percent(), 0.0);
        assert_eq!(TraitInfo::default().percent(), 0.0);
    }

    #[test]
    fn percent_falls_back_to_raw_pair() {
        let info = TraitInfo {
            raw_score: Some(3.0),
            max_score: Some(6.0),
            ..TraitInfo::default()
        };
        assert_eq!(info.percent(), 50.0);

        let degenerate = TraitInfo {
            raw_score: Some(3.0),
            max_score: Some(0.0),
            ..TraitInfo::default()
        };
        assert_eq!(degenerate.percent(), 0.0);
    }

    #[test]
    fn score_display_prefers_raw_pair() {
        let info = TraitInfo {
            score: Some(67.0),
            raw_score: Some(4.0),
            max_score: Some(6.0),
            ..TraitInfo::default()
        };
        assert_eq!(info.score_display(), "4/6 (67%)");
        assert_eq!(TraitInfo::with_score(72.0).score_display(), "72/100");
    }

    #[test]
    fn level_bands() {
        assert_eq!(Level::for_score(92.0), Level::VeryHigh);
        assert_eq!(Level::for_score(80.0), Level::VeryHigh);
        assert_eq!(Level::for_score(79.9), Level::High);
        assert_eq!(Level::for_score(40.0), Level::Medium);
        assert_eq!(Level::for_score(20.0), Level::Low);
        assert_eq!(Level::for_score(0.0), Level::VeryLow);
    }

    #[test]
    fn decode_minimal_profile() {
        let profile = Profile::from_json(r#"{"traits": {"Openness": {"score": 70}}}"#).unwrap();
        assert_eq!(profile.traits.len(), 1);
        assert_eq!(profile.traits.score_ci("openness"), 70.0);
        assert!(profile.connections.is_empty());
        assert!(profile.inconsistencies.is_empty());
    }

    #[test]
    fn decode_preserves_trait_order() {
        let profile = Profile::from_json(
            r#"{"traits": {"Zeta": {"score": 1}, "Alpha": {"score": 2}, "Mid": {"score": 3}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = profile.traits.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn decode_tolerates_missing_optionals() {
        let profile = Profile::from_json(
            r#"{
                "traits": {"A": {}},
                "connections": [{"from": "A", "to": "B"}],
                "inconsistencies": [{"trait": "A"}]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.traits.get("A").unwrap().percent(), 0.0);
        assert_eq!(profile.connections[0].kind, ConnectionKind::Correlation);
        assert_eq!(profile.inconsistencies[0].severity, "");
    }

    #[test]
    fn unknown_connection_kind_is_correlation() {
        let conn: Connection =
            serde_json::from_str(r#"{"from": "A", "to": "B", "type": "novel_kind"}"#).unwrap();
        assert_eq!(conn.kind, ConnectionKind::Correlation);

        let inc: Connection =
            serde_json::from_str(r#"{"from": "A", "to": "B", "type": "INCONSISTENCY"}"#).unwrap();
        assert_eq!(inc.kind, ConnectionKind::Inconsistency);
    }

    #[test]
    fn bad_payload_is_an_error() {
        let err = Profile::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid payload"));
    }
}
