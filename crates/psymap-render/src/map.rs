//! Personality map renderer.
//!
//! Projects simulated node positions (world units) onto the braille dot
//! grid of the target area: edges first, then node circles, then the
//! text layer (scores inside nodes, names to the right). Edge style
//! encodes the relation kind; node color encodes the score band; an
//! extra ring marks traits flagged inconsistent.

use psymap_core::normalize::NormalizedProfile;
use psymap_core::profile::ConnectionKind;
use psymap_core::{Point, Rect};
use tracing::debug;

use crate::buffer::{Buffer, CellRect, PackedRgba};
use crate::painter::Painter;
use crate::palette;

/// Node circle radius in world units: grows with the score, floored so
/// small scores stay visible.
#[must_use]
pub fn node_radius(score: f64) -> f64 {
    (score / 3.5).max(18.0)
}

/// Enlarged radius while a node is hovered: the base radius plus 2,
/// with a slightly higher floor.
#[must_use]
pub fn hover_radius(score: f64) -> f64 {
    (score / 3.5 + 2.0).max(22.0)
}

/// Stroke color for an edge.
fn edge_color(kind: ConnectionKind, correlation: Option<f64>) -> PackedRgba {
    match kind {
        ConnectionKind::Inconsistency => palette::EDGE_INCONSISTENT,
        ConnectionKind::Correlation => {
            if correlation.is_some_and(|c| c > 0.0) {
                palette::EDGE_POSITIVE
            } else {
                palette::EDGE_NEGATIVE
            }
        }
    }
}

/// Edge stroke weight in dots.
fn edge_weight(strength: f64) -> i32 {
    ((strength / 15.0).max(1.0)).round() as i32
}

/// World-to-dot projection for one target area.
#[derive(Debug, Clone, Copy)]
struct Projection {
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    fn new(viewport: Rect, dots_w: i32, dots_h: i32) -> Self {
        Self {
            scale_x: f64::from(dots_w) / viewport.width,
            scale_y: f64::from(dots_h) / viewport.height,
            offset_x: viewport.x,
            offset_y: viewport.y,
        }
    }

    fn dot(&self, p: Point) -> (i32, i32) {
        (
            ((p.x - self.offset_x) * self.scale_x).round() as i32,
            ((p.y - self.offset_y) * self.scale_y).round() as i32,
        )
    }

    /// Isotropic world-to-dot scale for radii.
    fn radius(&self, r: f64) -> i32 {
        (r * self.scale_x.min(self.scale_y)).round().max(1.0) as i32
    }
}

/// Render the personality map into `area`.
///
/// `positions` come from the running force simulation, in `viewport`
/// world coordinates. `hover` enlarges that node's circle. Defers (and
/// logs) when the target or viewport has no size; an empty profile just
/// produces an empty canvas.
pub fn render_map(
    buf: &mut Buffer,
    area: CellRect,
    profile: &NormalizedProfile,
    positions: &[Point],
    viewport: Rect,
    hover: Option<usize>,
) {
    if area.is_empty() || viewport.is_empty() {
        debug!("map render deferred: zero-sized target");
        return;
    }

    let mut painter = Painter::for_area(area);
    let (dots_w, dots_h) = painter.size();
    let proj = Projection::new(viewport, dots_w, dots_h);

    // Edges under nodes.
    for edge in &profile.edges {
        let (Some(&from), Some(&to)) = (positions.get(edge.from), positions.get(edge.to)) else {
            continue;
        };
        let (x0, y0) = proj.dot(from);
        let (x1, y1) = proj.dot(to);
        let color = edge_color(edge.kind, edge.correlation);
        let weight = edge_weight(edge.strength);
        for w in 0..weight {
            // Thicken by stacking parallel strokes.
            if edge.kind == ConnectionKind::Inconsistency {
                painter.dashed_line(x0, y0 + w, x1, y1 + w, 4, 2, color);
            } else {
                painter.line(x0, y0 + w, x1, y1 + w, color);
            }
        }
    }

    // Node circles.
    for (idx, node) in profile.nodes.iter().enumerate() {
        let Some(&pos) = positions.get(idx) else {
            continue;
        };
        let (cx, cy) = proj.dot(pos);
        let radius = if hover == Some(idx) {
            hover_radius(node.score)
        } else {
            node_radius(node.score)
        };
        let r = proj.radius(radius);
        painter.circle(cx, cy, r, 0, palette::band_color(node.score));
        if node.flagged {
            painter.circle(cx, cy, r + 2, 0, palette::EDGE_INCONSISTENT);
        }
    }

    painter.flush(buf);

    // Text layer: score inside the node, name to the right.
    for (idx, node) in profile.nodes.iter().enumerate() {
        let Some(&pos) = positions.get(idx) else {
            continue;
        };
        let (dx, dy) = proj.dot(pos);
        let (cell_x, cell_y) = (
            area.x.saturating_add((dx.max(0) / 2).min(i32::from(u16::MAX)) as u16),
            area.y.saturating_add((dy.max(0) / 4).min(i32::from(u16::MAX)) as u16),
        );
        let score_text = format!("{}", node.score.round() as i64);
        buf.print_centered(cell_x, cell_y, &score_text, PackedRgba::WHITE);

        let r_cells = (proj.radius(node_radius(node.score)) / 2) as u16;
        buf.print(
            cell_x.saturating_add(r_cells).saturating_add(2),
            cell_y,
            &node.name,
            PackedRgba::WHITE,
        );
    }
}

/// Render the map legend: score bands, then edge kinds.
pub fn render_map_legend(buf: &mut Buffer, area: CellRect) {
    if area.is_empty() {
        return;
    }
    let entries: [(PackedRgba, &str); 8] = [
        (palette::BAND_VERY_HIGH, "high (80-100)"),
        (palette::BAND_HIGH, "good (60-79)"),
        (palette::BAND_MEDIUM, "medium (40-59)"),
        (palette::BAND_LOW, "low (20-39)"),
        (palette::BAND_VERY_LOW, "very low (0-19)"),
        (palette::EDGE_POSITIVE, "positive link"),
        (palette::EDGE_NEGATIVE, "negative link"),
        (palette::EDGE_INCONSISTENT, "inconsistency (dashed)"),
    ];
    let mut x = area.x;
    let mut y = area.y;
    for (color, label) in entries {
        let width = label.chars().count() as u16 + 4;
        if x + width > area.right() && x > area.x {
            x = area.x;
            y = y.saturating_add(1);
        }
        if y >= area.bottom() {
            break;
        }
        buf.set(x, y, '\u{25CF}', color);
        buf.print(x + 2, y, label, PackedRgba::WHITE);
        x = x.saturating_add(width);
    }
}
