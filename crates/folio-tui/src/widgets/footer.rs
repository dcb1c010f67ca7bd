use chrono::Datelike;
use ratatui::text::{Line, Span};

use super::text::{self, center};
use super::SectionView;
use crate::app::App;

pub struct FooterSection;

impl FooterSection {
    pub fn build(app: &App, width: u16) -> SectionView {
        Self::build_for_year(app, width, chrono::Local::now().year())
    }

    fn build_for_year(app: &App, width: u16, year: i32) -> SectionView {
        let theme = app.theme.active();
        let profile = app.portfolio.profile;
        let w = usize::from(width);

        let mut links = Vec::new();
        for link in profile.links {
            if !links.is_empty() {
                links.push(Span::styled("   ", theme.muted()));
            }
            links.push(Span::styled(format!("{} {}", text::icon(link.icon), link.label), theme.accent()));
        }

        let lines = vec![
            Line::from(Span::styled("─".repeat(w), theme.border())),
            Line::default(),
            center(Line::from(Span::styled(profile.name, theme.heading())), w),
            center(Line::from(Span::styled(text::truncate(profile.headline, w), theme.muted())), w),
            Line::default(),
            center(Line::from(links), w),
            Line::default(),
            center(
                Line::from(Span::styled(
                    text::truncate(&format!("© {} {}. All rights reserved.", year, profile.name), w),
                    theme.muted(),
                )),
                w,
            ),
            center(
                Line::from(vec![
                    Span::styled("↑ Back to top ", theme.accent()),
                    Span::styled("gg", theme.muted()),
                ]),
                w,
            ),
            Line::default(),
        ];

        SectionView::new(lines)
    }
}
