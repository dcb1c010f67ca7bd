use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct ScrollProgressWidget;

impl ScrollProgressWidget {
    /// Thin gradient bar under the header, hidden near the top of the page
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.theme.active();
        if !app.progress.visible() {
            frame.render_widget(Paragraph::new("").style(theme.base()), area);
            return;
        }

        let width = usize::from(area.width);
        let filled = ((width as f64) * app.progress.ratio()).round() as usize;
        let half = filled / 2;
        let line = Line::from(vec![
            Span::styled("━".repeat(half), Style::default().fg(theme.primary)),
            Span::styled("━".repeat(filled - half), Style::default().fg(theme.secondary)),
            Span::styled(" ".repeat(width.saturating_sub(filled)), theme.base()),
        ]);
        frame.render_widget(Paragraph::new(line).style(theme.base()), area);
    }
}
