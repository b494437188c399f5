//! Narrative content lookup in the description dictionary.
//!
//! Category entries may live at the dictionary root or nested under a
//! `types` or `results` container. Lookup tries the exact key first,
//! then a case-insensitive pass; a miss yields `None` so callers render
//! an empty panel instead of erroring.

use serde::Deserialize;
use serde_json::Value;

/// Narrative content for one category code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default)]
    pub social_interaction: Vec<String>,
}

impl CategoryEntry {
    /// Preferred display name: `full_name`, then `name`, then empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else {
            &self.name
        }
    }
}

/// Containers that may hold category entries, in lookup order: the
/// `types` and `results` tables, then the dictionary root.
fn containers(definitions: &Value) -> impl Iterator<Item = &Value> {
    ["types", "results"]
        .into_iter()
        .filter_map(|key| definitions.get(key).filter(|inner| inner.is_object()))
        .chain(std::iter::once(definitions))
}

/// Look up the narrative entry for a category code. Each container is
/// tried with an exact match first, then case-insensitively.
#[must_use]
pub fn lookup(definitions: &Value, code: &str) -> Option<CategoryEntry> {
    containers(definitions).find_map(|container| {
        let object = container.as_object()?;
        let value = object.get(code).or_else(|| {
            object
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(code))
                .map(|(_, v)| v)
        })?;
        serde_json::from_value(value.clone()).ok()
    })
}
