use folio_core::contact::{Field, Phase};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text;
use super::{SectionView, WIDE};
use crate::app::App;
use crate::theme::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Rows reserved for the message body
const MESSAGE_ROWS: usize = 4;

pub struct ContactSection;

impl ContactSection {
    pub fn build(app: &App, width: u16) -> SectionView {
        let theme = app.theme.active();
        let w = usize::from(width);
        let wide = width >= WIDE;

        let mut lines = text::section_heading(
            "Get In Touch",
            Some("Have a project in mind or want to discuss opportunities? Feel free to reach out."),
            w,
            theme,
        );

        let (info_width, form_width) = if wide {
            let info = (w.saturating_sub(6)) * 2 / 5;
            (info, w.saturating_sub(6 + info))
        } else {
            (w.saturating_sub(4), w.saturating_sub(4))
        };

        let info = info_card(app, info_width, theme);
        let form = form_card(app, form_width, theme);

        let body = if wide {
            text::columns(info, form, info_width, 2)
        } else {
            let mut stacked = info;
            stacked.push(Line::default());
            stacked.extend(form);
            stacked
        };
        lines.extend(body.into_iter().map(|l| text::indent(l, 2)));
        lines.push(Line::default());

        SectionView::new(lines)
    }
}

fn info_card(app: &App, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body = Vec::new();

    for (i, info) in app.portfolio.contact.iter().enumerate() {
        let key = if info.link.is_some() {
            Span::styled(format!("w{} ", i + 1), theme.accent())
        } else {
            Span::styled("   ", theme.muted())
        };
        body.push(Line::from(vec![
            key,
            Span::styled(format!("{} ", text::icon(info.icon)), theme.accent()),
            Span::styled(info.label, text::bold(theme.base())),
        ]));
        body.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(text::truncate(info.value, inner.saturating_sub(3)), theme.muted()),
        ]));
        body.push(Line::default());
    }
    body.pop();

    let title = Span::styled("Contact Information", text::bold(theme.accent()));
    text::card(Some(title), body, width, theme.border())
}

fn form_card(app: &App, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let focused = app.compose_field();
    let editable = app.contact.is_editable();
    let mut body = Vec::new();

    for field in Field::ALL {
        let is_focused = focused == Some(field);
        let label_style = if is_focused { text::bold(theme.accent()) } else { theme.muted() };
        let marker = if is_focused { "› " } else { "  " };
        body.push(Line::from(vec![
            Span::styled(marker, theme.accent()),
            Span::styled(field.label(), label_style),
        ]));

        let value = app.contact.value(field);
        let box_style = if is_focused {
            Style::default().fg(theme.foreground).bg(theme.surface)
        } else {
            Style::default().fg(theme.foreground)
        };
        let field_width = inner.saturating_sub(2);
        let mut rows = if field.multiline() {
            let mut rows = if value.is_empty() { Vec::new() } else { text::wrap(value, field_width) };
            // keep the tail visible while typing
            if rows.len() > MESSAGE_ROWS {
                rows.drain(..rows.len() - MESSAGE_ROWS);
            }
            rows.resize(MESSAGE_ROWS, String::new());
            rows
        } else {
            vec![tail(value, field_width)]
        };
        if is_focused && editable {
            let at = rows.iter().rposition(|r| !r.is_empty()).unwrap_or(0);
            if let Some(row) = rows.get_mut(at) {
                if row.width() < field_width {
                    row.push('▏');
                }
            }
        }
        for row in rows {
            let pad = field_width.saturating_sub(row.width());
            body.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(row, box_style),
                Span::styled(" ".repeat(pad), box_style),
            ]));
        }
    }

    body.push(Line::default());
    body.push(status_line(app, theme));

    let title = Span::styled("Send Me a Message", text::bold(theme.accent()));
    let border = if focused.is_some() { theme.accent() } else { theme.border() };
    text::card(Some(title), body, width, border)
}

fn status_line(app: &App, theme: &Theme) -> Line<'static> {
    match app.contact.phase() {
        Phase::Idle if app.compose_field().is_some() => Line::from(vec![
            Span::styled(" Send ", theme.pill()),
            Span::styled(" Ctrl-S  ·  Tab: next  ·  Esc", theme.muted()),
        ]),
        Phase::Idle => Line::from(vec![
            Span::styled(" Write a message ", theme.pill()),
            Span::styled(" c", theme.muted()),
        ]),
        Phase::Submitting => {
            let frame = (app.uptime().as_millis() / 80) as usize % SPINNER.len();
            Line::from(Span::styled(
                format!("{} Sending...", SPINNER[frame]),
                theme.accent().add_modifier(Modifier::ITALIC),
            ))
        }
        Phase::Submitted { .. } => Line::from(Span::styled(
            "✓ Message sent! I'll get back to you soon.",
            text::bold(Style::default().fg(theme.success)),
        )),
    }
}

/// Last `width` columns of a single-line value
fn tail(value: &str, width: usize) -> String {
    let mut out: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in value.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SubmitResult;
    use folio_core::{AppConfig, ThemeMode};
    use std::time::Instant;

    fn flat(view: &SectionView) -> String {
        view.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ready() -> App {
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        app.skip_splash();
        app
    }

    #[test]
    fn test_form_phases() {
        let mut app = ready();
        let idle = flat(&ContactSection::build(&app, 100));
        assert!(idle.contains("Write a message"));
        assert!(idle.contains("w1"));

        app.start_compose();
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Hello"),
            (Field::Message, "Nice work"),
        ] {
            app.contact.set(field, value);
        }
        let typing = flat(&ContactSection::build(&app, 100));
        assert!(typing.contains("ada@example.com"));
        assert!(typing.contains("Ctrl-S"));

        let submission = app.submit_contact().unwrap();
        assert!(flat(&ContactSection::build(&app, 100)).contains("Sending..."));

        app.on_submit_result(SubmitResult::Sent(submission));
        assert!(flat(&ContactSection::build(&app, 100)).contains("Message sent!"));
    }

    #[test]
    fn test_height_is_stable_while_typing() {
        let mut app = ready();
        let before = ContactSection::build(&app, 70).lines.len();
        app.contact.set(Field::Message, "word ".repeat(200));
        let after = ContactSection::build(&app, 70).lines.len();
        assert_eq!(before, after);
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("ab", 3), "ab");
    }

    #[test]
    fn test_rows_fit_width() {
        let app = ready();
        for width in [50u16, 100] {
            let view = ContactSection::build(&app, width);
            assert!(view.lines.iter().all(|l| l.width() <= usize::from(width)));
        }
    }
}
