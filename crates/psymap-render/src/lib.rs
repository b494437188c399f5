#![forbid(unsafe_code)]

//! Terminal renderers for PsyMap.
//!
//! The pipeline mirrors the layout crates: world-space geometry comes in,
//! styled cells go out.
//!
//! ```text
//! Profile ─► normalize() ─► ForceSimulation ─► render_map() ─► Buffer
//!                        └► radar/cross data ─► render_*()  ─► Buffer
//! ```
//!
//! Every renderer degrades instead of failing: an empty data set or a
//! zero-sized target produces an empty (or deferred) visual, never a
//! panic.

pub mod buffer;
pub mod cross;
pub mod history;
pub mod interact;
pub mod map;
pub mod painter;
pub mod palette;
pub mod panels;
pub mod radar;

pub use buffer::{Buffer, Cell, CellRect, PackedRgba};
pub use interact::{MapController, MapResponse, PointerEvent, TooltipView};
pub use map::{hover_radius, node_radius, render_map, render_map_legend};
pub use painter::Painter;
pub use palette::{band_color, card_color, series_color};
