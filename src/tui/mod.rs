//! Ratatui-based terminal UI.
//!
//! The TUI provides an input panel (scores, weights, scheme, heatmap axis) that
//! is adjusted with the arrow keys like a set of sliders. Every change reruns
//! the scoring pipeline and redraws the credit score, rating, sensitivity
//! heatmap and ESG radar chart.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::pipeline::{ScoringOutput, run_scoring};
use crate::config::ScoringInputs;
use crate::domain::{Rating, SensitivityAxis, WeightScheme};
use crate::error::AppError;

mod fields;
mod heatmap;
mod radar_chart;

use fields::Field;
use heatmap::HeatmapWidget;
use radar_chart::EsgRadarChart;

/// Start the TUI with the given starting inputs.
pub fn run(inputs: ScoringInputs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(inputs);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    inputs: ScoringInputs,
    selected_field: usize,
    status: String,
    out: Option<ScoringOutput>,
}

impl App {
    fn new(inputs: ScoringInputs) -> Self {
        let mut app = Self {
            inputs,
            selected_field: 0,
            status: "Ready.".to_string(),
            out: None,
        };
        app.rescore();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < Field::ALL.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::PageDown => self.adjust_field(-10),
            KeyCode::PageUp => self.adjust_field(10),
            KeyCode::Char('a') => {
                self.inputs.axis = self.inputs.axis.next();
                self.rescore();
            }
            KeyCode::Char('w') => {
                self.inputs.scheme = match self.inputs.scheme {
                    WeightScheme::Derived => WeightScheme::Independent,
                    WeightScheme::Independent => WeightScheme::Derived,
                };
                self.rescore();
            }
            KeyCode::Char('r') => {
                self.inputs = ScoringInputs {
                    axis: self.inputs.axis,
                    ..ScoringInputs::default()
                };
                self.rescore();
                self.status = "Inputs reset to defaults.".to_string();
            }
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, steps: i32) {
        let field = Field::ALL[self.selected_field];
        if field.adjust(&mut self.inputs, steps) {
            self.rescore();
        } else {
            self.status = format!("{} is derived from α and β.", field.label());
        }
    }

    fn rescore(&mut self) {
        match self.inputs.to_config() {
            Ok(config) => {
                let out = run_scoring(&config);
                self.status = match &out.advisory {
                    Some(advisory) => format!("⚠ {advisory}"),
                    None => "Ready.".to_string(),
                };
                self.out = Some(out);
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("esgc", Style::default().fg(Color::Cyan)),
            Span::raw(" — ESG multi-factor credit score"),
        ]));

        if let Some(out) = &self.out {
            lines.push(Line::from(vec![
                Span::raw("Final credit score: "),
                Span::styled(
                    format!("{:.2}", out.credit_score),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  Rating: "),
                Span::styled(
                    out.rating.label(),
                    Style::default().fg(rating_color(out.rating)).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "ESG blend={:.2} | w1={:.2} w2={:.2} | α={:.2} β={:.2} γ={:.2}",
                    out.esg_blend,
                    out.weights.financial.financial(),
                    out.weights.financial.esg(),
                    out.weights.esg.alpha,
                    out.weights.esg.beta,
                    out.weights.esg.gamma,
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(Field::ALL.len() as u16 + 2), Constraint::Min(0)])
            .split(cols[0]);

        self.draw_settings(frame, left[0]);
        self.draw_radar(frame, left[1]);
        self.draw_heatmap(frame, cols[1]);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let derived = self.inputs.scheme == WeightScheme::Derived;
        let gamma = self.out.as_ref().map(|o| o.weights.esg.gamma);

        let items: Vec<ListItem> = Field::ALL
            .iter()
            .map(|field| {
                let value = field.display_value(&self.inputs, gamma);
                let item = ListItem::new(format!("{:<16} {value}", field.label()));
                if derived && *field == Field::Gamma {
                    item.style(Style::default().fg(Color::DarkGray))
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_heatmap(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = format!(
            "ESG vs Financial Score Sensitivity (rows: {}, cols: Financial Score)",
            self.inputs.axis.display_name()
        );
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(out) = &self.out else {
            let msg = Paragraph::new("No valid inputs.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let marker = swept_value(self.inputs.axis, &self.inputs).map(|esg| (esg, self.inputs.financial));
        frame.render_widget(HeatmapWidget { grid: &out.grid, marker }, inner);
    }

    fn draw_radar(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("ESG Radar").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(out) = &self.out else {
            return;
        };
        if inner.height < 2 {
            return;
        }

        let chart_rect = Rect {
            height: inner.height - 1,
            ..inner
        };
        frame.render_widget(EsgRadarChart { radar: out.radar }, chart_rect);

        let legend = Paragraph::new(format!(
            "E {:.0} | S {:.0} | G {:.0}",
            out.radar[0], out.radar[1], out.radar[2]
        ))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(
            legend,
            Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            },
        );
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  PgUp/PgDn ×10  a axis  w scheme  r reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Current value of the swept ESG dimension (no single value for the joint sweep).
fn swept_value(axis: SensitivityAxis, inputs: &ScoringInputs) -> Option<f64> {
    match axis {
        SensitivityAxis::E => Some(inputs.e),
        SensitivityAxis::S => Some(inputs.s),
        SensitivityAxis::G => Some(inputs.g),
        SensitivityAxis::Joint => None,
    }
}

fn rating_color(rating: Rating) -> Color {
    match rating {
        Rating::Aaa | Rating::Aa | Rating::A => Color::Green,
        Rating::Bbb | Rating::Bb => Color::Yellow,
        Rating::B | Rating::CccOrBelow => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_move_and_adjust() {
        let mut app = App::new(ScoringInputs::default());
        assert_eq!(app.out.as_ref().map(|o| o.rating), Some(Rating::Aa));

        // Financial score is the first field.
        app.handle_key(KeyCode::PageUp);
        assert_eq!(app.inputs.financial, 90.0);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.inputs.financial, 92.0);

        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_field, 0);
        for _ in 0..50 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_field, Field::ALL.len() - 1);
    }

    #[test]
    fn scheme_toggle_surfaces_advisory() {
        let mut app = App::new(ScoringInputs {
            alpha: 0.5,
            beta: 0.5,
            gamma: 0.5,
            ..ScoringInputs::default()
        });
        assert!(app.out.as_ref().unwrap().advisory.is_none());

        app.handle_key(KeyCode::Char('w'));
        assert_eq!(app.inputs.scheme, WeightScheme::Independent);
        assert!(app.out.as_ref().unwrap().advisory.is_some());
        assert!(app.status.contains("currently 1.50"));
    }

    #[test]
    fn axis_key_cycles_and_quit_exits() {
        let mut app = App::new(ScoringInputs::default());
        app.handle_key(KeyCode::Char('a'));
        assert_eq!(app.out.as_ref().unwrap().grid.axis, SensitivityAxis::S);
        assert!(app.handle_key(KeyCode::Char('q')));
    }
}
