use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text;
use super::{SectionView, WIDE};
use crate::app::App;
use crate::theme::Theme;
use crate::themes::accent;

pub struct SkillsSection;

impl SkillsSection {
    pub fn build(app: &App, width: u16) -> SectionView {
        let theme = app.theme.active();
        let portfolio = app.portfolio;
        let w = usize::from(width);

        let mut lines = text::section_heading(
            "Skills & Expertise",
            Some("Technologies, methods and tools I work with."),
            w,
            theme,
        );

        let per_row = if width >= WIDE { 2 } else { 1 };
        let card_width = w.saturating_sub(4 + (per_row - 1) * 2) / per_row;

        for row in portfolio.skill_categories.chunks(per_row) {
            let cards: Vec<Vec<Line<'static>>> = row
                .iter()
                .map(|category| {
                    let color = accent(category.color, theme);
                    let title = Span::styled(
                        format!("{} {}", text::icon(category.icon), category.name),
                        text::bold(Style::default().fg(color)),
                    );
                    let body = text::tags(
                        category.skills,
                        card_width.saturating_sub(4),
                        Style::default().fg(theme.foreground).bg(theme.surface),
                    );
                    text::card(Some(title), body, card_width, theme.border())
                })
                .collect();

            let mut cards = cards.into_iter();
            let mut merged = cards.next().unwrap_or_default();
            for card in cards {
                merged = text::columns(merged, card, card_width, 2);
            }
            lines.extend(merged.into_iter().map(|l| text::indent(l, 2)));
        }

        lines.push(Line::default());
        lines.extend(orbit(app, w));

        SectionView::new(lines)
    }
}

/// Filter chips plus level bars for the skills in the active group
fn orbit(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = app.theme.active();
    let portfolio = app.portfolio;
    let active = app.skill_group();

    let mut lines = vec![text::center(
        Line::from(vec![
            Span::styled("Skill Orbit", theme.heading()),
            Span::styled("   f: filter", theme.muted()),
        ]),
        width,
    )];

    let mut chips = vec![chip("All", active.is_none(), theme.primary, theme)];
    for group in portfolio.skill_groups {
        let selected = active.is_some_and(|g| g.id == group.id);
        chips.push(chip(group.name, selected, accent(group.color, theme), theme));
    }
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for c in chips {
        if used + c.width() + 1 > width.saturating_sub(4) && !row.is_empty() {
            lines.push(text::center(Line::from(std::mem::take(&mut row)), width));
            used = 0;
        }
        used += c.width() + 1;
        row.push(c);
        row.push(Span::raw(" "));
    }
    if !row.is_empty() {
        lines.push(text::center(Line::from(row), width));
    }
    lines.push(Line::default());

    let skills = portfolio.skills_in(active.map(|g| g.id));
    let name_width = skills.iter().map(|s| s.name.width()).max().unwrap_or(0);
    let bar_width = width.saturating_sub(name_width + 14).min(40);
    for skill in skills {
        let color = portfolio
            .skill_groups
            .iter()
            .find(|g| g.id == skill.group)
            .map_or(theme.primary, |g| accent(g.color, theme));
        let mut spans = vec![
            Span::raw("    "),
            Span::styled(format!("{:<name_width$}", skill.name), theme.base()),
            Span::raw("  "),
        ];
        spans.extend(text::bar(
            f64::from(skill.level),
            bar_width,
            Style::default().fg(color),
            theme.border(),
        ));
        spans.push(Span::styled(
            format!(" {:>3.0}%", skill.level * 100.0),
            theme.muted(),
        ));
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines
}

fn chip(label: &str, selected: bool, color: Color, theme: &Theme) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(theme.primary_foreground)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!(" {} ", label), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, ThemeMode};
    use std::time::Instant;

    fn bar_rows(view: &SectionView) -> usize {
        view.lines
            .iter()
            .filter(|l| l.spans.iter().any(|s| s.content.contains('%')))
            .count()
    }

    #[test]
    fn test_filter_limits_orbit() {
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        let all = bar_rows(&SkillsSection::build(&app, 100));
        assert_eq!(all, app.portfolio.skill_levels.len());

        app.cycle_skill_filter();
        let group = app.skill_group().map(|g| g.id);
        let filtered = bar_rows(&SkillsSection::build(&app, 100));
        assert_eq!(filtered, app.portfolio.skills_in(group).len());
        assert!(filtered < all);
    }

    #[test]
    fn test_rows_fit_width() {
        let app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        for width in [60u16, 100] {
            let view = SkillsSection::build(&app, width);
            assert!(view.lines.iter().all(|l| l.width() <= usize::from(width)));
        }
    }
}
