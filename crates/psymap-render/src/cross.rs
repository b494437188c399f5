//! Quadrant cross renderer: a bordered square split by dashed center
//! lines, four quadrant labels, and one highlighted point.

use psymap_layout::cross::{CrossPoint, CrossSpec};
use tracing::debug;

use crate::buffer::{Buffer, CellRect, PackedRgba};
use crate::painter::Painter;
use crate::palette;

/// Render a cross view into `area`. Defers on a zero-sized target.
pub fn render_cross(buf: &mut Buffer, area: CellRect, spec: &CrossSpec, point: CrossPoint) {
    if area.is_empty() || area.width < 6 || area.height < 4 {
        debug!("cross render deferred: target too small");
        return;
    }

    draw_border(buf, area);

    let inner = CellRect::new(
        area.x + 1,
        area.y + 1,
        area.width - 2,
        area.height - 2,
    );
    let mut painter = Painter::for_area(inner);
    let (dots_w, dots_h) = painter.size();
    painter.dashed_line(dots_w / 2, 0, dots_w / 2, dots_h - 1, 2, 2, palette::RADAR_GRID);
    painter.dashed_line(0, dots_h / 2, dots_w - 1, dots_h / 2, 2, 2, palette::RADAR_GRID);
    painter.flush(buf);

    // Quadrant labels at the quarter points. Y grows downward on the
    // buffer while the value axis grows upward, so high-y labels sit in
    // the top half.
    let (qx_low, qx_high) = (
        inner.x + inner.width / 4,
        inner.x + inner.width * 3 / 4,
    );
    let (qy_low, qy_high) = (
        inner.y + inner.height * 3 / 4,
        inner.y + inner.height / 4,
    );
    buf.print_centered(qx_low, qy_low, &spec.quadrants[0], PackedRgba::GREY);
    buf.print_centered(qx_low, qy_high, &spec.quadrants[1], PackedRgba::GREY);
    buf.print_centered(qx_high, qy_low, &spec.quadrants[2], PackedRgba::GREY);
    buf.print_centered(qx_high, qy_high, &spec.quadrants[3], PackedRgba::GREY);

    // The point: x grows rightward, y value 100 is the top edge.
    let px = inner.x + ((point.x / 100.0) * f64::from(inner.width - 1)).round() as u16;
    let py = inner.y
        + (((100.0 - point.y) / 100.0) * f64::from(inner.height - 1)).round() as u16;
    buf.set(px, py, '\u{25C9}', palette::CROSS_POINT);
}

fn draw_border(buf: &mut Buffer, area: CellRect) {
    let (right, bottom) = (area.right() - 1, area.bottom() - 1);
    for x in area.x..=right {
        buf.set(x, area.y, '\u{2500}', PackedRgba::GREY);
        buf.set(x, bottom, '\u{2500}', PackedRgba::GREY);
    }
    for y in area.y..=bottom {
        buf.set(area.x, y, '\u{2502}', PackedRgba::GREY);
        buf.set(right, y, '\u{2502}', PackedRgba::GREY);
    }
    buf.set(area.x, area.y, '\u{250C}', PackedRgba::GREY);
    buf.set(right, area.y, '\u{2510}', PackedRgba::GREY);
    buf.set(area.x, bottom, '\u{2514}', PackedRgba::GREY);
    buf.set(right, bottom, '\u{2518}', PackedRgba::GREY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_point_render() {
        let mut buf = Buffer::new(60, 16);
        let point = CrossPoint { x: 50.0, y: 92.0 };
        let area = buf.area();
        render_cross(&mut buf, area, &CrossSpec::attachment(), point);
        let text = buf.to_text();
        assert!(text.contains("Secure"));
        assert!(text.contains("Disorganized"));
        assert!(text.contains('\u{25C9}'));
    }

    #[test]
    fn low_anxiety_low_avoidance_lands_bottom_left() {
        let mut buf = Buffer::new(40, 12);
        let point = CrossPoint { x: 0.0, y: 0.0 };
        let area = buf.area();
        render_cross(&mut buf, area, &CrossSpec::attachment(), point);
        // Bottom-left corner of the inner area.
        assert_eq!(buf.get(1, 10).unwrap().ch, '\u{25C9}');
    }

    #[test]
    fn tiny_targets_defer() {
        let mut buf = Buffer::new(4, 2);
        let area = buf.area();
        render_cross(
            &mut buf,
            area,
            &CrossSpec::attachment(),
            CrossPoint { x: 50.0, y: 50.0 },
        );
        assert_eq!(buf.to_text().trim(), "");
    }
}
