use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode, StatusLevel};
use crate::input::Prefix;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.theme.active();
        let bar = Style::default().fg(theme.foreground).bg(theme.surface);

        let mode_str = match app.mode {
            Mode::Normal => match app.pending_key {
                Some(Prefix::G) => "g-",
                Some(Prefix::Project) => "PROJECT #",
                Some(Prefix::Contact) => "CONTACT #",
                None => "NORMAL",
            },
            Mode::Help => "HELP",
            Mode::Menu => "MENU",
            Mode::Compose(_) => "COMPOSE",
        };

        let (status_text, status_style) = match &app.status {
            Some(msg) => (
                format!(" {}", msg.text),
                match msg.level {
                    StatusLevel::Info => bar.fg(theme.success),
                    StatusLevel::Error => bar.fg(theme.error).add_modifier(Modifier::BOLD),
                },
            ),
            None => (
                format!(
                    " {} | {} | {}/{}",
                    app.tracker.active().anchor(),
                    app.theme.mode(),
                    app.carousel.current() + 1,
                    app.carousel.len()
                ),
                bar.fg(theme.muted),
            ),
        };

        let help_hint = match app.mode {
            Mode::Compose(_) => " Tab:field Ctrl-S:send Esc:done ",
            Mode::Menu => " j/k:move Enter:go Esc:close ",
            _ => " q:quit j/k:scroll h/l:projects ?:help ",
        };
        let mode = format!(" {} ", mode_str);
        let padding = usize::from(area.width)
            .saturating_sub(mode.width() + status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(mode, theme.pill()),
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding), bar),
            Span::styled(help_hint, bar.fg(theme.muted)),
        ]);

        frame.render_widget(Paragraph::new(line).style(bar), area);
    }
}
