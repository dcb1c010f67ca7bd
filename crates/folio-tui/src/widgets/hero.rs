use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::text::{self, center};
use super::{SectionView, WIDE};
use crate::app::App;

pub struct HeroSection;

impl HeroSection {
    /// Size of the decorative scene for a page `width` columns wide
    pub fn scene_size(width: u16) -> (u16, u16) {
        if width >= WIDE {
            (width / 2 - 2, 16)
        } else {
            (width.saturating_sub(4), 10)
        }
    }

    pub fn build(app: &App, width: u16) -> SectionView {
        let theme = app.theme.active();
        let profile = app.portfolio.profile;
        let w = usize::from(width);
        let wide = width >= WIDE;
        let text_width = if wide { w / 2 - 2 } else { w.saturating_sub(4) };

        let mut intro = vec![
            Line::default(),
            Line::from(Span::styled("Hi, I'm", theme.muted())),
            Line::from(Span::styled(
                profile.name.to_string(),
                theme.heading().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
        ];
        intro.extend(text::paragraph(profile.headline, text_width, text::bold(theme.accent().fg(theme.secondary))));
        intro.push(Line::default());
        intro.extend(text::paragraph(profile.summary, text_width, theme.base()));
        intro.push(Line::default());
        intro.push(Line::from(vec![
            Span::styled(" View Projects ", theme.pill()),
            Span::styled(" 4 ", theme.muted()),
            Span::raw("  "),
            Span::styled(" Contact Me ", theme.border().add_modifier(Modifier::REVERSED)),
            Span::styled(" 5 ", theme.muted()),
        ]));
        intro.push(Line::default());

        let mut links = Vec::new();
        for link in profile.links {
            if !links.is_empty() {
                links.push(Span::styled("  ·  ", theme.muted()));
            }
            links.push(Span::styled(format!("{} ", text::icon(link.icon)), theme.accent()));
            links.push(Span::styled(link.label, theme.muted()));
        }
        intro.push(Line::from(links));
        intro.push(Line::default());
        intro.extend(text::tags(profile.highlights, text_width, theme.muted().add_modifier(Modifier::ITALIC)));

        let scene = app.scene_frame.clone();
        let mut lines = if wide {
            let top_pad = scene.len().saturating_sub(intro.len()) / 2;
            let mut left = vec![Line::default(); top_pad];
            left.extend(intro);
            let left = left.into_iter().map(|l| text::indent(l, 2)).collect();
            text::columns(left, scene, w / 2, 0)
        } else {
            let mut lines: Vec<Line<'static>> = intro.into_iter().map(|l| text::indent(l, 2)).collect();
            lines.extend(scene.into_iter().map(|l| text::indent(l, 2)));
            lines
        };

        lines.push(Line::default());
        lines.push(center(Line::from(Span::styled("scroll  ↓  j", theme.muted())), w));
        lines.push(Line::default());

        SectionView::new(lines)
    }
}
