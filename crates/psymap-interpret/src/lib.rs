#![forbid(unsafe_code)]

//! Result interpretation: resolve a best-fit category code from computed
//! trait scores, then retrieve its narrative content from the test's
//! description dictionary.
//!
//! Resolution precedence:
//!
//! 1. A server-resolved `dominant_style` label on the profile.
//! 2. The first satisfied rule of the dictionary's `scoring.rules`
//!    table (ordered, conjunctive min/max conditions over raw
//!    sub-scores).
//! 3. The letter-code system, when letter-named traits are present.
//!
//! Every step is a pure function of `(profile, dictionary)`; a failed
//! lookup yields `None`, never an error.

pub mod descriptions;
pub mod letters;
pub mod rules;

pub use descriptions::{CategoryEntry, lookup};
pub use letters::LetterSystem;
pub use rules::{Comparator, Condition, RuleSet, StyleRule};

use psymap_core::Profile;
use serde_json::Value;

/// A resolved category with its narrative content.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// Resolved category code or style label.
    pub code: String,
    /// Display name: the entry's full name when known, the code
    /// otherwise.
    pub display_name: String,
    /// Narrative content, when the dictionary describes this code.
    pub entry: Option<CategoryEntry>,
}

/// Resolve the interpretation for a profile against its test's
/// description dictionary. `None` when no system applies.
#[must_use]
pub fn interpret(profile: &Profile, definitions: &Value) -> Option<Interpretation> {
    let code = resolve_code(profile, definitions)?;
    let entry = lookup(definitions, &code);
    let display_name = entry
        .as_ref()
        .map(CategoryEntry::display_name)
        .filter(|name| !name.is_empty())
        .unwrap_or(&code)
        .to_string();
    Some(Interpretation {
        code,
        display_name,
        entry,
    })
}

fn resolve_code(profile: &Profile, definitions: &Value) -> Option<String> {
    if let Some(label) = profile
        .dominant_style
        .as_ref()
        .filter(|label| !label.is_empty())
    {
        return Some(label.clone());
    }

    let ruleset = RuleSet::from_definitions(definitions);
    if !ruleset.is_empty() {
        if let Some(label) = ruleset.resolve(&profile.traits) {
            return Some(label.to_string());
        }
    }

    let letters = LetterSystem::standard();
    if letters.applicable(&profile.traits) {
        return Some(letters.resolve(&profile.traits));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use psymap_core::profile::{TraitInfo, TraitMap};
    use serde_json::json;

    fn letter_profile() -> Profile {
        let pairs: &[(&str, f64)] = &[
            ("E", 70.0),
            ("I", 30.0),
            ("S", 60.0),
            ("N", 40.0),
            ("T", 50.0),
            ("F", 50.0),
            ("J", 80.0),
            ("P", 20.0),
        ];
        Profile {
            traits: pairs
                .iter()
                .map(|(n, s)| (n.to_string(), TraitInfo::with_score(*s)))
                .collect::<TraitMap>(),
            ..Profile::default()
        }
    }

    #[test]
    fn letter_profile_resolves_a_code() {
        let defs = json!({
            "ESTJ": {"full_name": "The Executive", "description": "organized"}
        });
        let interp = interpret(&letter_profile(), &defs).unwrap();
        assert_eq!(interp.code, "ESTJ");
        assert_eq!(interp.display_name, "The Executive");
        assert!(interp.entry.is_some());
    }

    #[test]
    fn server_label_wins_over_local_resolution() {
        let mut profile = letter_profile();
        profile.dominant_style = Some("Secure".to_string());
        let interp = interpret(&profile, &Value::Null).unwrap();
        assert_eq!(interp.code, "Secure");
        // No dictionary entry: the code doubles as the display name.
        assert_eq!(interp.display_name, "Secure");
        assert!(interp.entry.is_none());
    }

    #[test]
    fn no_system_resolves_to_none() {
        let profile = Profile::default();
        assert!(interpret(&profile, &Value::Null).is_none());
    }
}
