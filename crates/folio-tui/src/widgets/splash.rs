use std::f64::consts::TAU;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::scroll::easing::ease_in_out_sine;

const RING_POINTS: usize = 12;
const RING_WIDTH: usize = 13;
const RING_HEIGHT: usize = 5;
/// One ring step per frame of this length
const STEP_MS: u128 = 90;
/// Period of the name's brightness pulse
const PULSE_MS: u128 = 1200;

pub struct SplashWidget;

impl SplashWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.theme.active();
        let head = (app.uptime().as_millis() / STEP_MS) as usize % RING_POINTS;

        let mut grid = vec![vec![(' ', Style::default()); RING_WIDTH]; RING_HEIGHT];
        for (i, (x, y)) in ring().into_iter().enumerate() {
            let behind = (head + RING_POINTS - i) % RING_POINTS;
            let (glyph, style) = match behind {
                0 => ('●', Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
                1 | 2 => ('•', Style::default().fg(theme.secondary)),
                _ => ('·', Style::default().fg(theme.border)),
            };
            grid[y][x] = (glyph, style);
        }

        let mut lines: Vec<Line<'static>> = grid
            .into_iter()
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|(c, style)| Span::styled(c.to_string(), style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        lines.push(Line::default());
        let name_style = if pulse(app.uptime().as_millis()) > 0.5 {
            theme.heading().fg(theme.primary)
        } else {
            theme.heading().fg(theme.secondary)
        };
        lines.push(Line::from(Span::styled(app.portfolio.profile.name, name_style)));
        lines.push(Line::from(Span::styled(
            "Loading Portfolio Experience...",
            theme.muted(),
        )));

        let height = lines.len() as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let inner = Rect::new(area.x, top, area.width, height.min(area.height));

        frame.render_widget(Paragraph::new("").style(theme.base()), area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(theme.base()),
            inner,
        );
    }
}

/// Looping 0 -> 1 -> 0 brightness over `PULSE_MS`
fn pulse(elapsed_ms: u128) -> f64 {
    let phase = (elapsed_ms % PULSE_MS) as f64 / PULSE_MS as f64;
    ease_in_out_sine(1.0 - (2.0 * phase - 1.0).abs())
}

/// Cells of an ellipse inscribed in the ring grid, clockwise from the top
fn ring() -> Vec<(usize, usize)> {
    let cx = (RING_WIDTH - 1) as f64 / 2.0;
    let cy = (RING_HEIGHT - 1) as f64 / 2.0;
    (0..RING_POINTS)
        .map(|i| {
            let theta = i as f64 * TAU / RING_POINTS as f64 - TAU / 4.0;
            let x = (cx + theta.cos() * cx).round() as usize;
            let y = (cy + theta.sin() * cy).round() as usize;
            (x.min(RING_WIDTH - 1), y.min(RING_HEIGHT - 1))
        })
        .collect()
}
