//! History trend chart: one polyline per trait over past results.

use psymap_core::history::HistorySeries;
use tracing::debug;

use crate::buffer::{Buffer, CellRect, PackedRgba};
use crate::painter::Painter;
use crate::palette;

/// Left gutter reserved for the value axis labels.
const GUTTER: u16 = 4;

/// Render the trend chart into `area`.
///
/// An empty series renders its empty state instead of axes; a too-small
/// target defers.
pub fn render_history(buf: &mut Buffer, area: CellRect, series: &HistorySeries) {
    if area.is_empty() {
        debug!("history render deferred: zero-sized target");
        return;
    }
    if series.is_empty() {
        buf.print_centered(
            area.x + area.width / 2,
            area.y + area.height / 2,
            "No results yet",
            PackedRgba::GREY,
        );
        return;
    }
    if area.width <= GUTTER + 2 || area.height < 4 {
        debug!("history render deferred: target too small");
        return;
    }

    // Axis gutter: 100 at the top, 0 above the date row.
    let plot = CellRect::new(
        area.x + GUTTER,
        area.y,
        area.width - GUTTER,
        area.height - 1,
    );
    buf.print(area.x, plot.y, "100", PackedRgba::GREY);
    buf.print(area.x, plot.bottom() - 1, "0", PackedRgba::GREY);

    let mut painter = Painter::for_area(plot);
    let (dots_w, dots_h) = painter.size();

    let rows = series.rows.len();
    let x_of = |row: usize| -> i32 {
        if rows <= 1 {
            dots_w / 2
        } else {
            ((row as f64 / (rows - 1) as f64) * f64::from(dots_w - 1)).round() as i32
        }
    };
    let y_of =
        |score: f64| -> i32 { (((100.0 - score) / 100.0) * f64::from(dots_h - 1)).round() as i32 };

    for (trait_idx, _) in series.traits.iter().enumerate() {
        let color = palette::series_color(trait_idx);
        let mut prev: Option<(i32, i32)> = None;
        for (row_idx, row) in series.rows.iter().enumerate() {
            let point = (x_of(row_idx), y_of(row.scores[trait_idx]));
            if let Some((px, py)) = prev {
                painter.line(px, py, point.0, point.1, color);
            } else {
                painter.point(point.0, point.1, color);
            }
            prev = Some(point);
        }
    }
    painter.flush(buf);

    // Date labels: first and last rows on the bottom line.
    let date_row = area.bottom() - 1;
    if let Some(first) = series.rows.first() {
        buf.print(plot.x, date_row, &first.date, PackedRgba::GREY);
    }
    if series.rows.len() > 1 {
        if let Some(last) = series.rows.last() {
            let width = last.date.chars().count() as u16;
            buf.print(
                plot.right().saturating_sub(width),
                date_row,
                &last.date,
                PackedRgba::GREY,
            );
        }
    }
}

/// Render the per-trait legend under the chart: a colored marker and
/// the trait name, wrapping within `area`.
pub fn render_history_legend(buf: &mut Buffer, area: CellRect, series: &HistorySeries) {
    if area.is_empty() || series.traits.is_empty() {
        return;
    }
    let mut x = area.x;
    let mut y = area.y;
    for (idx, name) in series.traits.iter().enumerate() {
        let width = name.chars().count() as u16 + 4;
        if x + width > area.right() && x > area.x {
            x = area.x;
            y = y.saturating_add(1);
        }
        if y >= area.bottom() {
            break;
        }
        buf.set(x, y, '\u{2500}', palette::series_color(idx));
        buf.print(x + 2, y, name, PackedRgba::WHITE);
        x = x.saturating_add(width);
    }
}
