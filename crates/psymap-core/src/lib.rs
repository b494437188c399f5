#![forbid(unsafe_code)]

//! Core data model for PsyMap: profile payloads, normalization, and
//! history aggregation.
//!
//! Everything in this crate is a pure transformation over decoded JSON
//! payloads from the assessment API. Decoding substitutes defaults for
//! missing optional fields and clamps scores; downstream operations are
//! total (empty inputs produce empty outputs, invalid references are
//! dropped, lookups return `Option`).

pub mod geometry;
pub mod history;
pub mod normalize;
pub mod profile;

pub use geometry::{Point, Rect};
pub use history::{HistoryRow, HistorySeries, aggregate_history};
pub use normalize::{NormalizedProfile, TraitEdge, TraitNode, normalize};
pub use profile::{
    Connection, ConnectionKind, Inconsistency, Level, Profile, ResultPayload, TestMeta, TraitInfo,
    TraitMap,
};

/// Errors from payload decoding.
#[derive(Debug)]
pub enum DecodeError {
    /// The payload was not valid JSON or did not match the expected shape.
    Payload(serde_json::Error),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Payload(err) => write!(f, "invalid payload: {err}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err)
    }
}
