use folio_core::content::SectionId;
use folio_core::ThemeMode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::WIDE;
use crate::app::App;

pub struct HeaderWidget;

impl HeaderWidget {
    /// One-row sticky header. Records nav hit areas for mouse clicks.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.active().clone();
        let scrolled = app.tracker.scrolled();
        let active = app.tracker.active();

        let bar = if scrolled {
            Style::default().fg(theme.foreground).bg(theme.surface)
        } else {
            theme.base()
        };

        let logo = format!(" < {} /> ", app.portfolio.profile.name);
        let mut spans = vec![Span::styled(
            logo.clone(),
            bar.fg(theme.primary).add_modifier(Modifier::BOLD),
        )];
        let mut hits = vec![(Rect::new(area.x, area.y, logo.width() as u16, 1), SectionId::Hero)];

        let theme_icon = match app.theme.mode() {
            ThemeMode::Dark => " ☾ t ",
            ThemeMode::Light => " ☀ t ",
        };

        let mut nav: Vec<(String, Option<SectionId>)> = Vec::new();
        if area.width >= WIDE {
            for (i, item) in app.portfolio.nav.iter().enumerate() {
                nav.push((format!(" {} {} ", i + 1, item.label), Some(item.target)));
            }
        } else {
            nav.push((" ≡ m ".to_string(), None));
        }

        let nav_width: usize = nav.iter().map(|(label, _)| label.width() + 1).sum();
        let used = logo.width() + nav_width + theme_icon.width();
        let gap = usize::from(area.width).saturating_sub(used);
        spans.push(Span::styled(" ".repeat(gap), bar));

        let mut x = area.x + (logo.width() + gap) as u16;
        for (label, target) in nav {
            let style = match target {
                Some(id) if id == active => theme.pill(),
                _ if scrolled => bar.fg(theme.foreground),
                _ => bar.fg(theme.muted),
            };
            let width = label.width() as u16;
            if let Some(id) = target {
                hits.push((Rect::new(x, area.y, width, 1), id));
            }
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(" ", bar));
            x = x.saturating_add(width + 1);
        }
        spans.push(Span::styled(theme_icon, bar.fg(theme.primary)));

        app.nav_hits = hits;
        let style = if scrolled { bar.add_modifier(Modifier::BOLD) } else { bar };
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn row_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_wide_header_lists_nav() {
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|frame| HeaderWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        let text = row_text(&terminal);
        assert!(text.contains("< Ashman Malik />"));
        assert!(text.contains("Experience"));
        assert_eq!(app.nav_hits.len(), 1 + app.portfolio.nav.len());

        let (rect, id) = app.nav_hits[3];
        assert_eq!(id, SectionId::Skills);
        let cell_text: String = (rect.x..rect.x + rect.width)
            .map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
            .collect();
        assert!(cell_text.contains("Skills"));
    }

    #[test]
    fn test_narrow_header_collapses() {
        let mut app = App::new(AppConfig::default(), ThemeMode::Light, Instant::now()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| HeaderWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        let text = row_text(&terminal);
        assert!(text.contains("≡ m"));
        assert!(!text.contains("Experience"));
        assert!(text.contains('☀'));
        assert_eq!(app.nav_hits.len(), 1);
    }
}
