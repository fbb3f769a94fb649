//! Plotters-powered ESG radar chart widget for Ratatui.
//!
//! Three spokes (Environmental, Social, Governance) on a 0–100 radial scale,
//! with reference rings at 25/50/75/100 and a translucent filled polygon,
//! outlined, through the company's raw E/S/G scores.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Radial scale upper bound.
const RADIAL_MAX: f64 = 100.0;

pub struct EsgRadarChart {
    /// Raw `[E, S, G]` scores.
    pub radar: [f64; 3],
}

impl Widget for EsgRadarChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 6 {
            buf.set_string(
                area.x,
                area.y,
                "Radar area too small.",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let outline = radar_polygon(self.radar);

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(-1.15..1.15, -1.15..1.15)?;

            let grid_color = RGBColor(90, 90, 90);
            for ring in [0.25, 0.5, 0.75, 1.0] {
                chart.draw_series(LineSeries::new(ring_points(ring), &grid_color))?;
            }
            for k in 0..3 {
                let (x, y) = spoke(k, 1.0);
                chart.draw_series(LineSeries::new([(0.0, 0.0), (x, y)], &grid_color))?;
            }

            let outline_color = RGBColor(0, 255, 255); // cyan
            chart.draw_series(std::iter::once(Polygon::new(
                outline.clone(),
                outline_color.mix(0.3).filled(),
            )))?;
            chart.draw_series(LineSeries::new(outline.iter().copied(), &outline_color))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Unit-circle direction of spoke `k` (E at the top, then clockwise S and G).
fn spoke(k: usize, r: f64) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * k as f64 / 3.0;
    (r * angle.cos(), r * angle.sin())
}

/// Closed outline through the three scores (first point repeated at the end).
///
/// Scores are scaled to the unit radius and clamped to `[0, 100]` so
/// out-of-range inputs stay inside the chart.
pub fn radar_polygon(radar: [f64; 3]) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = radar
        .iter()
        .enumerate()
        .map(|(k, &v)| spoke(k, v.clamp(0.0, RADIAL_MAX) / RADIAL_MAX))
        .collect();
    if let Some(&p0) = pts.first() {
        pts.push(p0);
    }
    pts
}

fn ring_points(r: f64) -> Vec<(f64, f64)> {
    let n = 48usize;
    (0..=n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            (r * a.cos(), r * a.sin())
        })
        .collect()
}
