use folio_core::carousel::Direction;
use folio_core::content::Project;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::text;
use super::{SectionView, WIDE};
use crate::app::{App, PROJECT_TRANSITION};
use crate::scroll::{EasingType, EasingTypeExt};
use crate::theme::Theme;
use crate::themes::accent;

/// Columns the featured card slides across when the project changes
const SLIDE: usize = 3;
/// Tech tags shown on grid cards before collapsing into "+N"
const GRID_TAGS: usize = 2;

pub struct ProjectsSection;

impl ProjectsSection {
    pub fn build(app: &App, width: u16) -> SectionView {
        let theme = app.theme.active();
        let w = usize::from(width);
        let projects = app.portfolio.projects;
        let current = app.carousel.current();

        let mut lines = text::section_heading(
            "Featured Projects",
            Some("Open-source starter kits and developer tooling."),
            w,
            theme,
        );

        // slide in from the side the user navigated towards
        let shown = app.carousel.shown_for(app.now());
        let t = EasingType::Cubic.apply(shown.as_secs_f64() / PROJECT_TRANSITION.as_secs_f64());
        let travel = ((1.0 - t) * SLIDE as f64).round() as usize;
        let shift = match app.carousel.direction() {
            Direction::Forward => SLIDE + travel,
            Direction::Backward => SLIDE - travel.min(SLIDE),
        };

        let card_width = w.saturating_sub(4 + SLIDE * 2);
        let featured = featured_card(app.current_project(), card_width, app, theme);
        let start = lines.len();
        lines.extend(featured.into_iter().map(|l| text::indent(l, 2 + shift)));
        let hotspot = start as u16..lines.len() as u16;

        // one indicator per project, the current one filling over the interval
        let mut indicators = vec![Span::raw("  ")];
        let bar_width = (w.saturating_sub(8) / projects.len().max(1)).clamp(4, 16) - 2;
        for (i, project) in projects.iter().enumerate() {
            let color = accent(project.color, theme);
            let fill = if i == current { app.carousel.progress(app.now()) } else { 0.0 };
            indicators.push(Span::styled(
                format!("{} ", i + 1),
                if i == current { text::bold(Style::default().fg(color)) } else { theme.muted() },
            ));
            indicators.extend(text::bar(fill, bar_width.saturating_sub(2), Style::default().fg(color), theme.border()));
            indicators.push(Span::raw("  "));
        }
        lines.push(Line::default());
        lines.push(text::center(Line::from(indicators), w));

        let state = if app.carousel.state().is_held() {
            Span::styled("paused", theme.accent().add_modifier(Modifier::ITALIC))
        } else if app.carousel.is_auto() {
            Span::styled("auto", theme.muted())
        } else {
            Span::styled("manual", theme.muted())
        };
        lines.push(text::center(
            Line::from(vec![
                Span::styled("◀ h  ", theme.muted()),
                Span::styled(format!("{} / {}", current + 1, projects.len()), theme.heading()),
                Span::styled("  l ▶", theme.muted()),
                Span::raw("   "),
                state,
                Span::styled("   p<n>: jump", theme.muted()),
            ]),
            w,
        ));
        lines.push(Line::default());

        lines.push(text::center(Line::from(Span::styled("All Projects", theme.heading())), w));
        lines.push(Line::default());
        lines.extend(grid(app, w, theme));
        lines.push(Line::default());

        SectionView {
            lines,
            hotspot: Some(hotspot),
        }
    }
}

fn featured_card(project: &Project, width: usize, app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let color = accent(project.color, theme);
    let inner = width.saturating_sub(4);

    let mut body = Vec::new();
    body.extend(text::paragraph(project.description, inner, theme.base()));
    body.push(Line::default());
    body.push(Line::from(Span::styled("Key Features", text::bold(theme.base()))));
    for feature in project.features {
        for (i, row) in text::wrap(feature, inner.saturating_sub(2)).into_iter().enumerate() {
            let bullet = if i == 0 { "• " } else { "  " };
            body.push(Line::from(vec![
                Span::styled(bullet, Style::default().fg(color)),
                Span::styled(row, theme.base()),
            ]));
        }
    }
    body.push(Line::default());
    body.extend(text::tags(project.tech, inner, Style::default().fg(color).bg(theme.surface)));
    body.push(Line::default());
    body.push(Line::from(vec![
        Span::styled(" Live Demo ", theme.pill()),
        Span::styled(" o ", theme.muted()),
        Span::raw("  "),
        Span::styled(" Source ", theme.border().add_modifier(Modifier::REVERSED)),
        Span::styled(" r ", theme.muted()),
    ]));
    body.push(Line::from(Span::styled(
        text::truncate(&format!("preview: {}", project.image_url), inner),
        theme.muted().add_modifier(Modifier::DIM),
    )));

    let border = if app.is_hovering_carousel() {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let title = Span::styled(text::truncate(project.title, inner.saturating_sub(2)), text::bold(Style::default().fg(color)));
    text::card(Some(title), body, width, border)
}

fn grid(app: &App, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let projects = app.portfolio.projects;
    let per_row = if width >= WIDE as usize { projects.len().clamp(1, 3) } else { 1 };
    let card_width = width.saturating_sub(4 + (per_row - 1) * 2) / per_row;
    let mut lines = Vec::new();

    for (row_index, row) in projects.chunks(per_row).enumerate() {
        let cards = row.iter().enumerate().map(|(i, project)| {
            let index = row_index * per_row + i;
            let color = accent(project.color, theme);
            let selected = index == app.carousel.current();
            let inner = card_width.saturating_sub(4);

            let (shown, hidden) = project.tech_preview(GRID_TAGS);
            let mut tags: Vec<&str> = shown.to_vec();
            let more = format!("+{}", hidden);
            if hidden > 0 {
                tags.push(&more);
            }

            let mut body = vec![Line::from(Span::styled(
                text::truncate(project.title, inner),
                text::bold(Style::default().fg(color)),
            ))];
            body.extend(text::tags(&tags, inner, theme.muted().bg(theme.surface)));

            let border = if selected {
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
            } else {
                theme.border()
            };
            let label = Span::styled((index + 1).to_string(), if selected { theme.accent() } else { theme.muted() });
            text::card(Some(label), body, card_width, border)
        });

        let mut merged: Vec<Line<'static>> = Vec::new();
        for (i, card) in cards.enumerate() {
            merged = if i == 0 { card } else { text::columns(merged, card, card_width, 2) };
        }
        lines.extend(merged.into_iter().map(|l| text::indent(l, 2)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, ThemeMode};
    use std::time::{Duration, Instant};

    fn flat(view: &SectionView) -> String {
        view.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_featured_follows_carousel() {
        let start = Instant::now();
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, start).unwrap();
        let view = ProjectsSection::build(&app, 100);
        assert!(flat(&view).contains(app.portfolio.projects[0].features[0]));

        app.next_project();
        app.tick(start + Duration::from_secs(1));
        let view = ProjectsSection::build(&app, 100);
        let text = flat(&view);
        assert!(text.contains(app.portfolio.projects[1].features[0]));
        assert!(text.contains("2 / 3"));
    }

    #[test]
    fn test_hotspot_covers_featured_card() {
        let app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        let view = ProjectsSection::build(&app, 100);
        let hotspot = view.hotspot.clone().unwrap();
        let first = &view.lines[usize::from(hotspot.start)];
        let last = &view.lines[usize::from(hotspot.end) - 1];
        assert!(first.spans.iter().any(|s| s.content.contains('╭')));
        assert!(last.spans.iter().any(|s| s.content.contains('╰')));
    }

    #[test]
    fn test_grid_collapses_extra_tags() {
        let app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        let text = flat(&ProjectsSection::build(&app, 120));
        let hidden = app.portfolio.projects[0].tech.len() - GRID_TAGS;
        assert!(text.contains(&format!("+{}", hidden)));
    }

    #[test]
    fn test_rows_fit_width() {
        let app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        for width in [50u16, 80, 140] {
            let view = ProjectsSection::build(&app, width);
            assert!(view.lines.iter().all(|l| l.width() <= usize::from(width)), "width {}", width);
        }
    }
}
