//! Tooltip placement: keep the box fully inside the viewport.
//!
//! The anchor starts at cursor + padding; when the box would overflow
//! the right or bottom edge it flips to the other side of the cursor,
//! and a final clamp guarantees containment whenever the box fits in
//! the viewport at all.

use psymap_core::{Point, Rect};

/// Compute the tooltip origin (top-left corner) for a cursor position.
///
/// `viewport` is taken at its own origin; the returned point is in the
/// same coordinate space. For every cursor inside the viewport and
/// every box no larger than the viewport, the full box stays inside.
#[must_use]
pub fn place_tooltip(cursor: Point, box_width: f64, box_height: f64, viewport: Rect, padding: f64) -> Point {
    let mut x = cursor.x + padding;
    let mut y = cursor.y + padding;

    if x + box_width > viewport.x + viewport.width {
        x = cursor.x - box_width - padding;
    }
    if y + box_height > viewport.y + viewport.height {
        y = cursor.y - box_height - padding;
    }

    let hi_x = (viewport.x + viewport.width - box_width).max(viewport.x);
    let hi_y = (viewport.y + viewport.height - box_height).max(viewport.y);
    Point::new(x.clamp(viewport.x, hi_x), y.clamp(viewport.y, hi_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn normal_placement_offsets_by_padding() {
        let p = place_tooltip(Point::new(100.0, 100.0), 220.0, 120.0, VIEW, 12.0);
        assert_eq!(p, Point::new(112.0, 112.0));
    }

    #[test]
    fn flips_left_near_the_right_edge() {
        let p = place_tooltip(Point::new(780.0, 100.0), 220.0, 120.0, VIEW, 12.0);
        assert_eq!(p.x, 780.0 - 220.0 - 12.0);
        assert_eq!(p.y, 112.0);
    }

    #[test]
    fn flips_up_near_the_bottom_edge() {
        let p = place_tooltip(Point::new(100.0, 590.0), 220.0, 120.0, VIEW, 12.0);
        assert_eq!(p.y, 590.0 - 120.0 - 12.0);
    }

    #[test]
    fn corner_cursor_stays_contained() {
        for cursor in [
            Point::new(0.0, 0.0),
            Point::new(800.0, 0.0),
            Point::new(0.0, 600.0),
            Point::new(800.0, 600.0),
        ] {
            let p = place_tooltip(cursor, 220.0, 120.0, VIEW, 12.0);
            assert!(p.x >= 0.0 && p.x + 220.0 <= 800.0, "{cursor:?} -> {p:?}");
            assert!(p.y >= 0.0 && p.y + 120.0 <= 600.0, "{cursor:?} -> {p:?}");
        }
    }
}
