//! Text builders for the detail panels: trait cards, the inconsistency
//! list, and the interpretation panel.

use psymap_core::normalize::NormalizedProfile;
use psymap_core::profile::Profile;
use psymap_interpret::Interpretation;

use crate::buffer::PackedRgba;
use crate::palette;

/// One trait card: accent color plus display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitCard {
    pub name: String,
    pub score_display: String,
    pub level: String,
    pub description: String,
    pub recommendations: String,
    pub color: PackedRgba,
}

/// Build one card per trait, in display order.
#[must_use]
pub fn trait_cards(profile: &NormalizedProfile) -> Vec<TraitCard> {
    profile
        .nodes
        .iter()
        .map(|node| TraitCard {
            name: node.name.clone(),
            score_display: node.info.score_display(),
            level: if node.info.level.is_empty() {
                node.level.label().to_string()
            } else {
                node.info.level.clone()
            },
            description: node.info.description.clone(),
            recommendations: node.info.recommendations.clone(),
            color: palette::card_color(node.score),
        })
        .collect()
}

/// Bulleted inconsistency lines; empty when the profile has none.
#[must_use]
pub fn inconsistency_lines(profile: &Profile) -> Vec<String> {
    profile
        .inconsistencies
        .iter()
        .map(|inc| format!("\u{2022} {}", inc.description))
        .collect()
}

/// Interpretation panel text: resolved category, display name,
/// description, then each narrative section with bulleted items.
#[must_use]
pub fn interpretation_lines(interpretation: &Interpretation) -> Vec<String> {
    let mut lines = vec![format!("Your type: {}", interpretation.code)];
    if interpretation.display_name != interpretation.code {
        lines.push(interpretation.display_name.clone());
    }
    let Some(entry) = &interpretation.entry else {
        return lines;
    };
    if !entry.description.is_empty() {
        lines.push(entry.description.clone());
    }
    for (title, items) in [
        ("Strengths", &entry.strengths),
        ("Growth areas", &entry.weaknesses),
        ("Advice", &entry.advice),
        ("Social interaction", &entry.social_interaction),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("{title}:"));
        for item in items {
            lines.push(format!("  \u{2022} {item}"));
        }
    }
    lines
}
