//! Colored sensitivity heatmap widget.
//!
//! Each terminal cell is painted with the background color of the grid cell it
//! falls into. The palette runs red → yellow → green (low → high score) and is
//! scaled to the grid's own min/max, like a diverging heatmap color scale.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::SensitivityGrid;

/// Width of the row-label gutter.
const GUTTER: u16 = 5;

pub struct HeatmapWidget<'a> {
    pub grid: &'a SensitivityGrid,
    /// Current (ESG value, financial score) to mark with `+`, if inside the sweep.
    pub marker: Option<(f64, f64)>,
}

impl Widget for HeatmapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= GUTTER + 2 || area.height < 3 {
            buf.set_string(
                area.x,
                area.y,
                "Heatmap area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        let Some((lo, hi)) = self.grid.value_range() else {
            return;
        };

        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let plot_w = (area.width - GUTTER) as usize;
        // Bottom line holds the column labels.
        let plot_h = (area.height - 1) as usize;
        let label_style = Style::default().fg(Color::Gray);

        // Highest ESG value on top.
        for r in 0..plot_h {
            let i = rows - 1 - (r * rows / plot_h).min(rows - 1);
            let y = area.y + r as u16;

            if r == 0 || r == plot_h - 1 {
                let label = format!("{:>4}", self.grid.row_labels[i]);
                buf.set_string(area.x, y, label, label_style);
            }

            for x in 0..plot_w {
                let j = (x * cols / plot_w).min(cols - 1);
                let (red, green, blue) = rdylgn(normalize(self.grid.values[i][j], lo, hi));
                let cell_x = area.x + GUTTER + x as u16;
                buf.set_string(cell_x, y, " ", Style::default().bg(Color::Rgb(red, green, blue)));
            }
        }

        if let Some((esg, financial)) = self.marker {
            if let Some((mx, my)) = marker_cell(esg, financial, plot_w, plot_h) {
                buf.set_string(
                    area.x + GUTTER + mx as u16,
                    area.y + my as u16,
                    "+",
                    Style::default().fg(Color::Black),
                );
            }
        }

        let y = area.y + area.height - 1;
        if let (Some(first), Some(last)) = (self.grid.col_labels.first(), self.grid.col_labels.last()) {
            buf.set_string(area.x + GUTTER, y, first, label_style);
            let last_x = (area.x + area.width).saturating_sub(last.len() as u16);
            buf.set_string(last_x, y, last, label_style);
        }
    }
}

fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span > 0.0 { ((v - lo) / span).clamp(0.0, 1.0) } else { 1.0 }
}

/// Terminal cell for the current point, sweep domain `[0, 100]` on both axes.
fn marker_cell(esg: f64, financial: f64, plot_w: usize, plot_h: usize) -> Option<(usize, usize)> {
    if !(0.0..=100.0).contains(&esg) || !(0.0..=100.0).contains(&financial) {
        return None;
    }
    let x = ((financial / 100.0) * (plot_w as f64 - 1.0)).round() as usize;
    let y = ((1.0 - esg / 100.0) * (plot_h as f64 - 1.0)).round() as usize;
    Some((x, y))
}

/// Red-yellow-green ramp for `u` in `[0, 1]`.
pub fn rdylgn(u: f64) -> (u8, u8, u8) {
    const STOPS: [(f64, (f64, f64, f64)); 3] = [
        (0.0, (215.0, 48.0, 39.0)),
        (0.5, (255.0, 255.0, 191.0)),
        (1.0, (26.0, 152.0, 80.0)),
    ];
    let u = if u.is_finite() { u.clamp(0.0, 1.0) } else { 0.0 };
    let (a, b) = if u <= 0.5 { (STOPS[0], STOPS[1]) } else { (STOPS[1], STOPS[2]) };
    let t = (u - a.0) / (b.0 - a.0);
    let lerp = |x: f64, y: f64| (x + (y - x) * t).round() as u8;
    (lerp(a.1.0, b.1.0), lerp(a.1.1, b.1.1), lerp(a.1.2, b.1.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_endpoints() {
        assert_eq!(rdylgn(0.0), (215, 48, 39));
        assert_eq!(rdylgn(0.5), (255, 255, 191));
        assert_eq!(rdylgn(1.0), (26, 152, 80));
        assert_eq!(rdylgn(f64::NAN), (215, 48, 39));
    }

    #[test]
    fn marker_maps_corners() {
        assert_eq!(marker_cell(100.0, 0.0, 10, 5), Some((0, 0)));
        assert_eq!(marker_cell(0.0, 100.0, 10, 5), Some((9, 4)));
        assert_eq!(marker_cell(101.0, 0.0, 10, 5), None);
    }
}
