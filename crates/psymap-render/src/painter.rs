//! Braille sub-cell painter.
//!
//! Overlays a 2x4 dot grid on every cell of a target area, giving line
//! and curve drawing an effective resolution of `2*width x 4*height`
//! dots. Dots accumulate per cell (set bits OR together); the last color
//! written to a cell wins.

use crate::buffer::{Buffer, CellRect, PackedRgba};

/// Braille dot bit for the dot at `(dx, dy)` within a cell,
/// `dx in 0..2`, `dy in 0..4`.
const DOT_BITS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

const BRAILLE_BASE: u32 = 0x2800;

/// Dot-resolution painter over a cell area.
#[derive(Debug, Clone)]
pub struct Painter {
    area: CellRect,
    dots: Vec<u8>,
    colors: Vec<Option<PackedRgba>>,
}

impl Painter {
    /// Painter covering `area` of a buffer.
    #[must_use]
    pub fn for_area(area: CellRect) -> Self {
        let cells = area.width as usize * area.height as usize;
        Self {
            area,
            dots: vec![0; cells],
            colors: vec![None; cells],
        }
    }

    /// Dot-grid size `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (i32, i32) {
        (i32::from(self.area.width) * 2, i32::from(self.area.height) * 4)
    }

    /// Set one dot. Out-of-range dots are clipped.
    pub fn point(&mut self, px: i32, py: i32, color: PackedRgba) {
        let (w, h) = self.size();
        if px < 0 || py < 0 || px >= w || py >= h {
            return;
        }
        let (cx, cy) = ((px / 2) as usize, (py / 4) as usize);
        let idx = cy * self.area.width as usize + cx;
        self.dots[idx] |= DOT_BITS[(py % 4) as usize][(px % 2) as usize];
        self.colors[idx] = Some(color);
    }

    /// Bresenham line between two dots.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PackedRgba) {
        self.stroke(x0, y0, x1, y1, color, &mut |_| true);
    }

    /// Dashed line: `on` dots drawn, `off` dots skipped, repeating.
    pub fn dashed_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        on: u32,
        off: u32,
        color: PackedRgba,
    ) {
        let period = (on + off).max(1);
        let mut step = 0u32;
        self.stroke(x0, y0, x1, y1, color, &mut |_| {
            let draw = step % period < on;
            step += 1;
            draw
        });
    }

    fn stroke(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: PackedRgba,
        include: &mut dyn FnMut(i32) -> bool,
    ) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        let mut i = 0;
        loop {
            if include(i) {
                self.point(x, y, color);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            i += 1;
        }
    }

    /// Circle outline, optionally dashed (`dash_period` 0 = solid).
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, dash_period: u32, color: PackedRgba) {
        if radius <= 0 {
            self.point(cx, cy, color);
            return;
        }
        // Enough segments that adjacent dots touch on the rim.
        let steps = (radius * 8).max(16);
        for i in 0..steps {
            if dash_period > 0 && (i as u32 / dash_period) % 2 == 1 {
                continue;
            }
            let angle = std::f64::consts::TAU * f64::from(i) / f64::from(steps);
            let px = cx + (f64::from(radius) * angle.cos()).round() as i32;
            let py = cy + (f64::from(radius) * angle.sin()).round() as i32;
            self.point(px, py, color);
        }
    }

    /// Composite the painted dots into a buffer. Cells the painter never
    /// touched are left alone; cells already holding braille glyphs
    /// merge their dots.
    pub fn flush(&self, buf: &mut Buffer) {
        for cy in 0..self.area.height {
            for cx in 0..self.area.width {
                let idx = cy as usize * self.area.width as usize + cx as usize;
                let bits = self.dots[idx];
                if bits == 0 {
                    continue;
                }
                let (bx, by) = (self.area.x + cx, self.area.y + cy);
                let mut merged = bits;
                if let Some(existing) = buf.get(bx, by) {
                    let code = existing.ch as u32;
                    if (BRAILLE_BASE..BRAILLE_BASE + 0x100).contains(&code) {
                        merged |= (code - BRAILLE_BASE) as u8;
                    }
                }
                let ch = char::from_u32(BRAILLE_BASE + u32::from(merged)).unwrap_or(' ');
                let color = self.colors[idx].unwrap_or(PackedRgba::WHITE);
                buf.set(bx, by, ch, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_sets_the_expected_braille_dot() {
        let mut painter = Painter::for_area(CellRect::new(0, 0, 2, 2));
        painter.point(0, 0, PackedRgba::WHITE);
        let mut buf = Buffer::new(2, 2);
        painter.flush(&mut buf);
        assert_eq!(buf.get(0, 0).unwrap().ch, '\u{2801}');
    }

    #[test]
    fn out_of_range_dots_clip() {
        let mut painter = Painter::for_area(CellRect::new(0, 0, 1, 1));
        painter.point(-1, 0, PackedRgba::WHITE);
        painter.point(2, 0, PackedRgba::WHITE);
        painter.point(0, 4, PackedRgba::WHITE);
        let mut buf = Buffer::new(1, 1);
        painter.flush(&mut buf);
        assert_eq!(buf.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn line_reaches_both_endpoints() {
        let mut painter = Painter::for_area(CellRect::new(0, 0, 4, 1));
        painter.line(0, 0, 7, 3, PackedRgba::WHITE);
        let mut buf = Buffer::new(4, 1);
        painter.flush(&mut buf);
        assert_ne!(buf.get(0, 0).unwrap().ch, ' ');
        assert_ne!(buf.get(3, 0).unwrap().ch, ' ');
    }

    #[test]
    fn dashed_line_skips_dots() {
        let mut solid = Painter::for_area(CellRect::new(0, 0, 8, 1));
        solid.line(0, 0, 15, 0, PackedRgba::WHITE);
        let mut dashed = Painter::for_area(CellRect::new(0, 0, 8, 1));
        dashed.dashed_line(0, 0, 15, 0, 2, 2, PackedRgba::WHITE);
        let dots = |p: &Painter| p.dots.iter().map(|b| b.count_ones()).sum::<u32>();
        assert!(dots(&dashed) < dots(&solid));
        assert!(dots(&dashed) > 0);
    }

    #[test]
    fn flush_merges_overlapping_glyphs() {
        let mut buf = Buffer::new(1, 1);
        let mut first = Painter::for_area(CellRect::new(0, 0, 1, 1));
        first.point(0, 0, PackedRgba::WHITE);
        first.flush(&mut buf);
        let mut second = Painter::for_area(CellRect::new(0, 0, 1, 1));
        second.point(1, 0, PackedRgba::WHITE);
        second.flush(&mut buf);
        assert_eq!(buf.get(0, 0).unwrap().ch, '\u{2809}');
    }

    #[test]
    fn zero_radius_circle_degrades_to_a_point() {
        let mut painter = Painter::for_area(CellRect::new(0, 0, 2, 1));
        painter.circle(1, 1, 0, 0, PackedRgba::WHITE);
        assert!(painter.dots.iter().any(|&b| b != 0));
    }
}
