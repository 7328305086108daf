use engine::aggregate::{FULL_TURN, Slice};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        BarChart,
        canvas::{Canvas, Circle, Points},
    },
};

use crate::ui::{components::card::Card, theme::Theme};

/// Static heights of the weekly panel, as fractions of its height.
pub const WEEKLY_BARS: [f64; 5] = [0.4, 0.7, 0.5, 0.9, 0.6];

/// Sample points per unit of radius when filling the pie.
const PIE_RESOLUTION: usize = 48;

/// Clockwise angle of `(x, y)` from three o'clock, in `0.0..360.0`.
///
/// The canvas has y pointing up, so clockwise runs through negative y first.
#[must_use]
pub fn clockwise_angle(x: f64, y: f64) -> f64 {
    (-y.atan2(x)).to_degrees().rem_euclid(FULL_TURN)
}

/// Index of the slice covering `angle`, or `None` if no slice has area.
fn slice_at(slices: &[Slice], angle: f64) -> Option<usize> {
    slices
        .iter()
        .position(|s| {
            s.sweep_angle > 0.0 && angle >= s.start_angle && angle < s.start_angle + s.sweep_angle
        })
        // float drift can leave a sliver before 360
        .or_else(|| slices.iter().rposition(|s| s.sweep_angle > 0.0))
}

/// Fills the unit disk with a grid of points and buckets them by slice.
///
/// The result has one entry per slice, in slice order; a zero-sweep slice
/// gets an empty bucket.
#[must_use]
pub fn pie_points(slices: &[Slice], resolution: usize) -> Vec<Vec<(f64, f64)>> {
    let mut buckets = vec![Vec::new(); slices.len()];
    if resolution == 0 {
        return buckets;
    }

    let step = 1.0 / resolution as f64;
    let steps = 2 * resolution;
    for i in 0..=steps {
        let x = -1.0 + i as f64 * step;
        for j in 0..=steps {
            let y = -1.0 + j as f64 * step;
            if x * x + y * y > 1.0 {
                continue;
            }
            if let Some(index) = slice_at(slices, clockwise_angle(x, y)) {
                buckets[index].push((x, y));
            }
        }
    }
    buckets
}

/// "Categories" panel: filled pie, or a gray ring when nothing is spent.
pub fn render_pie(frame: &mut Frame<'_>, area: Rect, slices: &[Slice], theme: &Theme) {
    let card = Card::new("Categories", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // terminal cells are roughly twice as tall as wide
    let aspect = f64::from(inner.width) / (2.0 * f64::from(inner.height));
    let (x_half, y_half) = if aspect >= 1.0 {
        (1.1 * aspect, 1.1)
    } else {
        (1.1, 1.1 / aspect)
    };

    let buckets = pie_points(slices, PIE_RESOLUTION);
    let empty = buckets.iter().all(Vec::is_empty);
    let ring = theme.empty_ring;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.surface)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(|ctx| {
            if empty {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: ring,
                });
                return;
            }
            for (slice, coords) in slices.iter().zip(&buckets) {
                ctx.draw(&Points {
                    coords,
                    color: theme.chart_color(slice.palette_index),
                });
            }
        });

    frame.render_widget(canvas, inner);
}

/// "Weekly" panel: five primary-colored bars of fixed height.
pub fn render_weekly(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let card = Card::new("Weekly", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let data: Vec<(&str, u64)> = WEEKLY_BARS
        .iter()
        .map(|fraction| ("", (fraction * 100.0).round() as u64))
        .collect();

    let bars = WEEKLY_BARS.len() as u16;
    let bar_width = (inner.width.saturating_sub(bars - 1) / bars).max(1);

    let chart = BarChart::default()
        .data(data.as_slice())
        .max(100)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.primary))
        .value_style(Style::default().fg(theme.primary).bg(theme.primary))
        .label_style(Style::default().fg(theme.text_muted));

    frame.render_widget(chart, inner);
}
