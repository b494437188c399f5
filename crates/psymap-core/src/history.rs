//! History aggregation for trend charting.
//!
//! Reshapes a sequence of completed results into one row per result with
//! a score column for every trait seen in *any* result. Traits keep their
//! first-seen order so a given trait stays on the same series (and the
//! same series color) across renders.

use crate::profile::ResultPayload;

/// One time-series row: a past result's date and test labels plus scores
/// aligned with [`HistorySeries::traits`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub test: String,
    pub scores: Vec<f64>,
}

/// Reshaped history: the union of trait names (first-seen order) and one
/// row per input result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySeries {
    pub traits: Vec<String>,
    pub rows: Vec<HistoryRow>,
}

impl HistorySeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Scores of a single trait across rows, in row order.
    #[must_use]
    pub fn series(&self, trait_name: &str) -> Option<Vec<f64>> {
        let idx = self.traits.iter().position(|t| t == trait_name)?;
        Some(self.rows.iter().map(|row| row.scores[idx]).collect())
    }
}

/// Aggregate past results into a chartable series.
///
/// Traits absent from a given result report 0 in that row. An empty input
/// produces an empty series.
#[must_use]
pub fn aggregate_history(results: &[ResultPayload]) -> HistorySeries {
    let mut traits: Vec<String> = Vec::new();
    for result in results {
        for (name, _) in result.personality_map.traits.iter() {
            if !traits.iter().any(|t| t == name) {
                traits.push(name.to_string());
            }
        }
    }

    let rows = results
        .iter()
        .enumerate()
        .map(|(idx, result)| HistoryRow {
            date: date_label(&result.completed_at),
            test: if result.test.name.is_empty() {
                format!("Test {}", idx + 1)
            } else {
                result.test.name.clone()
            },
            scores: traits
                .iter()
                .map(|name| {
                    result
                        .personality_map
                        .traits
                        .get(name)
                        .map_or(0.0, |info| info.percent())
                })
                .collect(),
        })
        .collect();

    HistorySeries { traits, rows }
}

/// Date portion of an ISO-8601 timestamp; the raw string when it has no
/// time component.
fn date_label(completed_at: &str) -> String {
    completed_at
        .split('T')
        .next()
        .unwrap_or(completed_at)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Profile, TestMeta, TraitInfo, TraitMap};

    fn result(test: &str, date: &str, traits: &[(&str, f64)]) -> ResultPayload {
        ResultPayload {
            test: TestMeta {
                name: test.to_string(),
                ..TestMeta::default()
            },
            completed_at: date.to_string(),
            personality_map: Profile {
                traits: traits
                    .iter()
                    .map(|(n, s)| (n.to_string(), TraitInfo::with_score(*s)))
                    .collect::<TraitMap>(),
                ..Profile::default()
            },
        }
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let series = aggregate_history(&[]);
        assert!(series.is_empty());
        assert!(series.traits.is_empty());
    }

    #[test]
    fn trait_union_with_zero_fill() {
        let series = aggregate_history(&[
            result("Big Five", "2026-01-05T10:00:00Z", &[("Openness", 70.0)]),
            result("Big Five", "2026-02-01T10:00:00Z", &[("Empathy", 55.0)]),
        ]);
        assert_eq!(series.traits, vec!["Openness", "Empathy"]);
        assert_eq!(series.rows[0].scores, vec![70.0, 0.0]);
        assert_eq!(series.rows[1].scores, vec![0.0, 55.0]);
        assert_eq!(series.rows[0].date, "2026-01-05");
    }

    #[test]
    fn unnamed_tests_get_positional_labels() {
        let series = aggregate_history(&[result("", "2026-01-01", &[("A", 1.0)])]);
        assert_eq!(series.rows[0].test, "Test 1");
    }

    #[test]
    fn series_extraction_by_trait() {
        let series = aggregate_history(&[
            result("t", "d1", &[("A", 10.0), ("B", 20.0)]),
            result("t", "d2", &[("A", 30.0)]),
        ]);
        assert_eq!(series.series("A"), Some(vec![10.0, 30.0]));
        assert_eq!(series.series("B"), Some(vec![20.0, 0.0]));
        assert_eq!(series.series("C"), None);
    }
}
