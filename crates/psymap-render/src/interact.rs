//! Hover and drag handling for the personality map.
//!
//! The controller is a pure state machine over pointer events in world
//! coordinates. It owns the tooltip state for its map instance; the
//! simulation owns the node coordinates. Nothing here touches the
//! profile itself.

use psymap_core::normalize::NormalizedProfile;
use psymap_core::{Point, Rect};
use psymap_layout::force::ForceSimulation;
use psymap_layout::tooltip::place_tooltip;

use crate::map::node_radius;

/// Tooltip box size in world units.
const TOOLTIP_WIDTH: f64 = 220.0;
const TOOLTIP_HEIGHT: f64 = 120.0;
const TOOLTIP_PADDING: f64 = 12.0;

/// A pointer event in map world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Pressed(Point),
    Released,
}

/// Result of processing a pointer event on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapResponse {
    /// Event not relevant to the map.
    Ignored,
    /// Hover target or tooltip position changed.
    HoverChanged,
    /// A node was grabbed.
    DragStarted(usize),
    /// A grabbed node moved.
    Dragged(usize),
    /// The grabbed node was released.
    DragEnded(usize),
}

/// Tooltip ready for drawing: an origin (top-left, world units) and
/// content lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub node: usize,
    pub origin: Point,
    pub lines: Vec<String>,
}

/// Hover/drag state machine for one rendered map.
#[derive(Debug, Clone, Default)]
pub struct MapController {
    hover: Option<usize>,
    drag: Option<usize>,
    tooltip: Option<TooltipView>,
}

impl MapController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered node.
    #[must_use]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Node being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<usize> {
        self.drag
    }

    /// The tooltip to draw this frame, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipView> {
        self.tooltip.as_ref()
    }

    /// Process one pointer event against the running simulation.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        sim: &mut ForceSimulation,
        profile: &NormalizedProfile,
        viewport: Rect,
    ) -> MapResponse {
        match event {
            PointerEvent::Moved(cursor) => {
                if let Some(node) = self.drag {
                    sim.drag_to(node, cursor);
                    return MapResponse::Dragged(node);
                }
                let hit = hit_test(profile, sim, cursor);
                let changed = hit != self.hover;
                self.hover = hit;
                self.tooltip = hit.map(|node| TooltipView {
                    node,
                    origin: place_tooltip(
                        cursor,
                        TOOLTIP_WIDTH,
                        TOOLTIP_HEIGHT,
                        viewport,
                        TOOLTIP_PADDING,
                    ),
                    lines: tooltip_lines(profile, node),
                });
                if changed || hit.is_some() {
                    MapResponse::HoverChanged
                } else {
                    MapResponse::Ignored
                }
            }
            PointerEvent::Pressed(cursor) => {
                let Some(node) = hit_test(profile, sim, cursor) else {
                    return MapResponse::Ignored;
                };
                self.drag = Some(node);
                self.tooltip = None;
                sim.begin_drag(node);
                sim.drag_to(node, cursor);
                MapResponse::DragStarted(node)
            }
            PointerEvent::Released => {
                let Some(node) = self.drag.take() else {
                    return MapResponse::Ignored;
                };
                sim.end_drag(node);
                MapResponse::DragEnded(node)
            }
        }
    }
}

/// The topmost node under the cursor: nodes draw in index order, so on
/// overlap the highest index wins.
fn hit_test(profile: &NormalizedProfile, sim: &ForceSimulation, cursor: Point) -> Option<usize> {
    let mut hit = None;
    for (idx, node) in profile.nodes.iter().enumerate() {
        let Some(pos) = sim.position(idx) else {
            continue;
        };
        if pos.distance(cursor) <= node_radius(node.score) {
            hit = Some(idx);
        }
    }
    hit
}

/// Tooltip content for a node: name, score, level, dynamic-profile
/// metadata when present, then the description.
fn tooltip_lines(profile: &NormalizedProfile, node: usize) -> Vec<String> {
    let Some(node) = profile.nodes.get(node) else {
        return Vec::new();
    };
    let mut lines = vec![
        node.name.clone(),
        format!("Score: {}", node.info.score_display()),
    ];
    let level = if node.info.level.is_empty() {
        node.level.label().to_string()
    } else {
        node.info.level.clone()
    };
    lines.push(format!("Level: {level}"));
    if let Some(stability) = &node.info.stability {
        lines.push(format!("Stability: {stability}"));
    }
    if let Some(count) = node.info.test_count {
        lines.push(format!("Tests: {count}"));
    }
    if !node.info.description.is_empty() {
        lines.push(node.info.description.clone());
    }
    lines
}
