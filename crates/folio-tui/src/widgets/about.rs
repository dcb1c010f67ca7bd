use ratatui::text::{Line, Span};

use super::text;
use super::{SectionView, WIDE};
use crate::app::App;

pub struct AboutSection;

impl AboutSection {
    pub fn build(app: &App, width: u16) -> SectionView {
        let theme = app.theme.active();
        let profile = app.portfolio.profile;
        let w = usize::from(width);

        let mut lines = text::section_heading("About Me", Some(profile.about_heading), w, theme);

        let per_row = if width >= WIDE { 2 } else { 1 };
        let card_width = w.saturating_sub(4 + (per_row - 1) * 2) / per_row;

        for row in profile.about.chunks(per_row) {
            let mut cards: Vec<Vec<Line<'static>>> = row
                .iter()
                .map(|about| {
                    let title = Span::styled(
                        format!("{} {}", text::icon(about.icon), about.title),
                        text::bold(theme.accent()),
                    );
                    let body = text::paragraph(about.body, card_width.saturating_sub(4), theme.base());
                    text::card(Some(title), body, card_width, theme.border())
                })
                .collect();

            // equal heights so rows line up
            let tallest = cards.iter().map(Vec::len).max().unwrap_or(0);
            for card in &mut cards {
                stretch(card, tallest, card_width, theme.border());
            }

            let mut merged = cards.remove(0);
            for card in cards {
                merged = text::columns(merged, card, card_width, 2);
            }
            lines.extend(merged.into_iter().map(|l| text::indent(l, 2)));
            lines.push(Line::default());
        }

        SectionView::new(lines)
    }
}

/// Grow a card to `rows` by inserting blank body rows above the bottom border
fn stretch(card: &mut Vec<Line<'static>>, rows: usize, width: usize, border: ratatui::style::Style) {
    while card.len() < rows {
        let blank = Line::from(vec![
            Span::styled("│", border),
            Span::raw(" ".repeat(width.saturating_sub(2))),
            Span::styled("│", border),
        ]);
        let at = card.len().saturating_sub(1);
        card.insert(at, blank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, ThemeMode};
    use std::time::Instant;

    #[test]
    fn test_cards_fit_width() {
        let app = App::new(AppConfig::default(), ThemeMode::Dark, Instant::now()).unwrap();
        for width in [60u16, 100, 140] {
            let view = AboutSection::build(&app, width);
            assert!(view.lines.iter().all(|l| l.width() <= usize::from(width)), "width {}", width);
            let text: String = view
                .lines
                .iter()
                .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
                .collect();
            assert!(text.contains("Professional Profile"));
            assert!(text.contains("Languages & Education"));
        }
    }
}
