#![forbid(unsafe_code)]

//! Deterministic layout engines for PsyMap.
//!
//! All engines are pure math over world-unit coordinates: identical input
//! produces identical output (no wall-clock, no OS randomness). The force
//! simulation is incremental (one [`force::ForceSimulation::tick`] per
//! host frame), so interaction never blocks on layout.

pub mod breakpoints;
pub mod cross;
pub mod force;
pub mod radar;
pub mod tooltip;

pub use breakpoints::{Breakpoint, BreakpointTracker, Breakpoints, RadarStyle};
pub use cross::{CrossAxis, CrossPoint, CrossSpec, resolve_cross};
pub use force::{ForceConfig, ForceSimulation, Margin, SettleStats};
pub use radar::{
    AMPLIFY_FLOOR, PREFERENCE_AXES, RadarDatum, RadarGeometry, TYPE_CODES, TypeEstimate,
    has_letter_traits, preference_data, radar_geometry, trait_data, type_distribution,
    type_distribution_data,
};
pub use tooltip::place_tooltip;
