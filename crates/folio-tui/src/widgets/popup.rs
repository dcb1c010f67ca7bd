use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::keymap::Keymap;

pub struct PopupWidget;

impl PopupWidget {
    /// Key binding overlay
    pub fn render_help(frame: &mut Frame, app: &App, keymap: &Keymap) {
        let theme = app.theme.active();
        let entries = keymap.help_entries();
        let key_width = entries.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

        let mut lines: Vec<Line> = entries
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!(" {:>key_width$}  ", key), theme.accent()),
                    Span::styled(*description, theme.base().bg(theme.surface)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" any key to close", theme.muted())));

        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;
        let area = centered_rect(width, height, frame.area());

        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(theme.card());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Collapsed navigation menu for narrow terminals
    pub fn render_menu(frame: &mut Frame, app: &App) {
        let theme = app.theme.active();
        let active = app.tracker.active();

        let lines: Vec<Line> = app
            .portfolio
            .nav
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == app.menu_cursor {
                    theme.pill()
                } else if item.target == active {
                    theme.accent()
                } else {
                    theme.card()
                };
                Line::from(Span::styled(format!(" {} {:<12}", i + 1, item.label), style))
            })
            .collect();

        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 2;
        let height = lines.len() as u16 + 2;
        let screen = frame.area();
        // drop down from the right end of the header
        let area = Rect::new(
            screen.x + screen.width.saturating_sub(width + 1),
            screen.y + 1,
            width.min(screen.width),
            height.min(screen.height.saturating_sub(1)),
        );

        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(theme.border())
            .style(theme.card());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(80, 40, area), area);
    }
}
