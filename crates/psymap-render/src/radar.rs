//! Radar chart renderer.
//!
//! Dashed grid rings, axis spokes, the closed value polygon, vertex
//! markers, and axis labels. Labels are shortened to the breakpoint's
//! budget; hover lookups always report the full label.

use psymap_core::Rect;
use psymap_layout::breakpoints::RadarStyle;
use psymap_layout::radar::{RadarDatum, RadarGeometry, radar_geometry};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::buffer::{Buffer, CellRect, PackedRgba};
use crate::painter::Painter;
use crate::palette;

/// Grid ring count.
const RING_LEVELS: usize = 5;
/// Gap between the rim and label anchors, in dots.
const LABEL_OFFSET: f64 = 10.0;

/// Shorten a label to `budget` columns, appending an ellipsis when
/// anything was cut.
#[must_use]
pub fn truncate_label(label: &str, budget: usize) -> String {
    if UnicodeWidthStr::width(label) <= budget {
        return label.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('\u{2026}');
    out
}

/// Render a radar chart into `area`. Defers on empty data or target.
pub fn render_radar(
    buf: &mut Buffer,
    area: CellRect,
    data: &[RadarDatum],
    style: RadarStyle,
    stroke: PackedRgba,
) -> Option<RadarGeometry> {
    if area.is_empty() || data.is_empty() {
        debug!("radar render deferred: empty data or target");
        return None;
    }

    let mut painter = Painter::for_area(area);
    let (dots_w, dots_h) = painter.size();
    let bounds = Rect::sized(f64::from(dots_w), f64::from(dots_h));
    let geo = radar_geometry(data, bounds, RING_LEVELS, LABEL_OFFSET, style.radius_fraction)?;

    let (cx, cy) = (geo.center.x.round() as i32, geo.center.y.round() as i32);
    for &ring in &geo.rings {
        painter.circle(cx, cy, ring.round() as i32, 2, palette::RADAR_GRID);
    }
    for end in &geo.axis_ends {
        painter.line(
            cx,
            cy,
            end.x.round() as i32,
            end.y.round() as i32,
            palette::RADAR_GRID,
        );
    }

    // Closed value polygon with vertex markers.
    for (i, vertex) in geo.vertices.iter().enumerate() {
        let next = geo.vertices[(i + 1) % geo.vertices.len()];
        painter.line(
            vertex.x.round() as i32,
            vertex.y.round() as i32,
            next.x.round() as i32,
            next.y.round() as i32,
            stroke,
        );
    }
    for vertex in &geo.vertices {
        let (vx, vy) = (vertex.x.round() as i32, vertex.y.round() as i32);
        painter.point(vx, vy, palette::RADAR_POINT);
        painter.point(vx + 1, vy, palette::RADAR_POINT);
        painter.point(vx, vy + 1, palette::RADAR_POINT);
    }

    painter.flush(buf);

    for (datum, anchor) in data.iter().zip(&geo.label_anchors) {
        let label = truncate_label(&datum.axis, style.label_budget);
        let (cell_x, cell_y) = (
            area.x.saturating_add((anchor.x.round().max(0.0) as u16) / 2),
            area.y.saturating_add((anchor.y.round().max(0.0) as u16) / 4),
        );
        buf.print_centered(cell_x, cell_y.min(area.bottom().saturating_sub(1)), &label, PackedRgba::WHITE);
    }

    Some(geo)
}

/// Hover lookup: the axis whose vertex sits within `threshold` dots of
/// the pointer. Returns the full (untruncated) label and the value.
#[must_use]
pub fn hover_axis<'d>(
    geometry: &RadarGeometry,
    data: &'d [RadarDatum],
    pointer: psymap_core::Point,
    threshold: f64,
) -> Option<(&'d str, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, vertex) in geometry.vertices.iter().enumerate() {
        let d = vertex.distance(pointer);
        if d <= threshold && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.and_then(|(i, _)| data.get(i))
        .map(|datum| (datum.axis.as_str(), datum.value))
}
