//! Profile normalization: raw payload to renderer-ready node/edge lists.
//!
//! Output order is deterministic: nodes follow payload trait order, edges
//! follow connection order. Connections whose endpoints do not resolve to
//! known traits are dropped, never an error.

use tracing::debug;

use crate::profile::{ConnectionKind, Level, Profile, TraitInfo};

/// One renderable trait node.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitNode {
    pub name: String,
    /// Percent score, clamped to [0, 100].
    pub score: f64,
    pub level: Level,
    pub info: TraitInfo,
    /// True when the profile flags an inconsistency on this trait.
    pub flagged: bool,
}

/// One renderable edge between two nodes, by node index.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitEdge {
    pub from: usize,
    pub to: usize,
    pub strength: f64,
    pub kind: ConnectionKind,
    pub correlation: Option<f64>,
    pub description: String,
}

/// Renderer-ready view of a profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedProfile {
    pub nodes: Vec<TraitNode>,
    pub edges: Vec<TraitEdge>,
}

impl NormalizedProfile {
    /// Node index for an exact trait name.
    #[must_use]
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }
}

/// Convert a decoded profile into node/edge lists.
///
/// Pure: the profile is not modified and repeated calls produce identical
/// output.
#[must_use]
pub fn normalize(profile: &Profile) -> NormalizedProfile {
    let nodes: Vec<TraitNode> = profile
        .traits
        .iter()
        .map(|(name, info)| {
            let score = info.percent();
            TraitNode {
                name: name.to_string(),
                score,
                level: Level::for_score(score),
                info: info.clone(),
                flagged: profile
                    .inconsistencies
                    .iter()
                    .any(|inc| inc.trait_name == name),
            }
        })
        .collect();

    let index_of = |name: &str| nodes.iter().position(|n| n.name == name);

    let edges: Vec<TraitEdge> = profile
        .connections
        .iter()
        .filter_map(|conn| match (index_of(&conn.from), index_of(&conn.to)) {
            (Some(from), Some(to)) => Some(TraitEdge {
                from,
                to,
                strength: conn.strength,
                kind: conn.kind,
                correlation: conn.correlation,
                description: conn.description.clone(),
            }),
            _ => {
                debug!(from = %conn.from, to = %conn.to, "dropping dangling connection");
                None
            }
        })
        .collect();

    NormalizedProfile { nodes, edges }
}
