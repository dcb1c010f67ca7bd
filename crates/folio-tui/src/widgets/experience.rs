use folio_core::content::{ExperienceEntry, SectionId};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::text;
use super::{SectionView, ENTRANCE_WINDOW, WIDE};
use crate::app::App;
use crate::scroll::timing::progress;
use crate::scroll::{EasingType, EasingTypeExt};
use crate::theme::Theme;
use crate::themes::accent;

pub struct ExperienceSection;

impl ExperienceSection {
    pub fn build(app: &App, width: u16) -> SectionView {
        let theme = app.theme.active();
        let w = usize::from(width);
        let wide = width >= WIDE;

        let mut lines = text::section_heading(
            "Experience",
            Some("My professional journey and the roles that shaped my expertise."),
            w,
            theme,
        );

        let card_width = if wide { w.saturating_sub(9) / 2 } else { w.saturating_sub(7) };
        let mut timeline: Vec<(Option<Style>, Line<'static>, Line<'static>)> = Vec::new();

        for (i, entry) in app.portfolio.experience.iter().enumerate() {
            let color = accent(entry.color, theme);
            let card = entry_card(entry, card_width, theme);
            let on_left = wide && i % 2 == 0;
            for (row, line) in card.into_iter().enumerate() {
                let marker = (row == 1).then(|| Style::default().fg(color));
                if on_left {
                    timeline.push((marker, line, Line::default()));
                } else {
                    timeline.push((marker, Line::default(), line));
                }
            }
            timeline.push((None, Line::default(), Line::default()));
        }

        // the spine grows downward once the section is revealed
        let grown = app
            .reveals
            .get(SectionId::Experience)
            .revealed_at()
            .map(|at| EasingType::Cubic.apply(progress(at, ENTRANCE_WINDOW, app.now())))
            .unwrap_or(0.0);
        let spine_rows = (timeline.len() as f64 * grown).ceil() as usize;

        for (row, (marker, left, right)) in timeline.into_iter().enumerate() {
            let spine = match marker {
                Some(style) if row < spine_rows => Span::styled("●", style),
                _ if row < spine_rows => Span::styled("│", theme.border()),
                _ => Span::raw(" "),
            };
            let line = if wide {
                let left = text::pad_line(text::indent(left, 2), card_width + 4, Style::default());
                let mut spans = left.spans;
                spans.push(spine);
                spans.push(Span::raw("  "));
                spans.extend(right.spans);
                Line::from(spans)
            } else {
                let mut spans = vec![Span::raw("  "), spine, Span::raw("  ")];
                spans.extend(right.spans);
                Line::from(spans)
            };
            lines.push(line);
        }

        SectionView::new(lines)
    }
}

fn entry_card(entry: &ExperienceEntry, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let color = accent(entry.color, theme);
    let inner = width.saturating_sub(4);

    let mut body = text::paragraph(entry.title, inner, text::bold(Style::default().fg(color)));
    body.push(Line::from(Span::styled(text::truncate(entry.organization, inner), theme.accent())));
    body.push(Line::from(Span::styled(
        text::truncate(&format!("{}  ·  {}", entry.period, entry.location), inner),
        theme.muted(),
    )));
    body.push(Line::default());
    body.extend(text::paragraph(entry.description, inner, theme.base()));
    body.push(Line::default());
    body.extend(text::tags(entry.tags, inner, Style::default().fg(color).bg(theme.surface)));

    text::card(None, body, width, Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, ThemeMode};
    use std::time::{Duration, Instant};

    fn spine_glyphs(view: &SectionView) -> usize {
        view.lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.content == "│" || s.content == "●")
            .count()
    }

    #[test]
    fn test_spine_grows_after_reveal() {
        let start = Instant::now();
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, start).unwrap();
        let hidden = ExperienceSection::build(&app, 100);
        assert_eq!(spine_glyphs(&hidden), 0);

        app.reveals.observe(SectionId::Experience, true, start);
        app.tick(start + Duration::from_millis(100));
        let partial = spine_glyphs(&ExperienceSection::build(&app, 100));
        app.tick(start + ENTRANCE_WINDOW);
        let full = ExperienceSection::build(&app, 100);
        assert!(partial > 0 && partial < spine_glyphs(&full));
        assert_eq!(hidden.lines.len(), full.lines.len());
    }

    #[test]
    fn test_rows_fit_width() {
        let app = App::new(AppConfig::default(), ThemeMode::Light, Instant::now()).unwrap();
        for width in [50u16, 80, 131] {
            let view = ExperienceSection::build(&app, width);
            assert!(view.lines.iter().all(|l| l.width() <= usize::from(width)));
        }
    }
}
