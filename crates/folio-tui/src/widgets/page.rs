use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{
    AboutSection, ContactSection, ExperienceSection, FooterSection, HeroSection, ProjectsSection,
    SectionView, SkillsSection,
};
use crate::app::App;
use crate::layout::{Block, PageLayout};
use folio_core::content::SectionId;

/// How long a section takes to finish easing in after it is revealed
pub const ENTRANCE_WINDOW: Duration = Duration::from_millis(500);
/// Delay between consecutive rows of one section
const ROW_STAGGER: Duration = Duration::from_millis(12);
/// Rows are dimmed for this long after they appear
const FADE: Duration = Duration::from_millis(150);

/// The scrolling page: every section stacked in order
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let (scene_width, scene_height) = HeroSection::scene_size(area.width);
        app.refresh_scene(scene_width, scene_height);

        let views: Vec<(Block, SectionView)> = Block::ALL
            .iter()
            .map(|&block| (block, build(block, app, area.width)))
            .collect();
        let layout = PageLayout::stack(views.iter().map(|(block, view)| (*block, view.height())));
        let offset = app.sync_layout(layout, area.height);

        let mut carousel_area = None;
        let bottom = offset.saturating_add(area.height);
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(usize::from(area.height));

        let slots = app.layout.slots().to_vec();
        for (slot, (block, view)) in slots.iter().zip(views) {
            if slot.bottom() <= offset || slot.top >= bottom {
                continue;
            }

            if let Some(hotspot) = &view.hotspot {
                carousel_area = clip(area, offset, slot.top + hotspot.start, slot.top + hotspot.end);
            }

            let since_reveal = match block {
                Block::Section(id) => app.reveals.get(id).elapsed(app.now()),
                Block::Footer => Some(ENTRANCE_WINDOW),
            };

            for (row, line) in view.lines.into_iter().enumerate() {
                let page_row = slot.top.saturating_add(row as u16);
                if page_row < offset || page_row >= bottom {
                    continue;
                }
                lines.push(entrance(line, row, since_reveal));
            }
        }

        app.set_carousel_area(carousel_area);

        let theme = app.theme.active();
        frame.render_widget(Paragraph::new(lines).style(theme.base()), area);
    }
}

fn build(block: Block, app: &App, width: u16) -> SectionView {
    match block {
        Block::Section(SectionId::Hero) => HeroSection::build(app, width),
        Block::Section(SectionId::About) => AboutSection::build(app, width),
        Block::Section(SectionId::Experience) => ExperienceSection::build(app, width),
        Block::Section(SectionId::Skills) => SkillsSection::build(app, width),
        Block::Section(SectionId::Projects) => ProjectsSection::build(app, width),
        Block::Section(SectionId::Contact) => ContactSection::build(app, width),
        Block::Footer => FooterSection::build(app, width),
    }
}

/// Staggered fade-in: rows appear top to bottom, dimmed at first
fn entrance(line: Line<'static>, row: usize, since_reveal: Option<Duration>) -> Line<'static> {
    let Some(elapsed) = since_reveal else {
        return Line::default();
    };
    if elapsed >= ENTRANCE_WINDOW {
        return line;
    }
    let delay = (ROW_STAGGER * row as u32).min(ENTRANCE_WINDOW - FADE);
    if elapsed < delay {
        Line::default()
    } else if elapsed < delay + FADE {
        line.patch_style(Modifier::DIM)
    } else {
        line
    }
}

/// Screen rect for page rows `[top, end)` at scroll `offset`, if any are visible
fn clip(area: Rect, offset: u16, top: u16, end: u16) -> Option<Rect> {
    let visible_top = top.max(offset);
    let visible_end = end.min(offset.saturating_add(area.height));
    (visible_top < visible_end).then(|| {
        Rect::new(
            area.x,
            area.y + (visible_top - offset),
            area.width,
            visible_end - visible_top,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneSupport;
    use folio_core::{AppConfig, ThemeMode};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::new(config, ThemeMode::Dark, Instant::now())
            .unwrap()
            .with_scene_support(&SceneSupport { term: Some("xterm-256color".into()) });
        app.skip_splash();
        app
    }

    #[test]
    fn test_entrance_hides_then_shows_rows() {
        let line = Line::from("content");
        assert_eq!(entrance(line.clone(), 0, None), Line::default());
        assert_eq!(entrance(line.clone(), 10, Some(Duration::ZERO)), Line::default());
        let dimmed = entrance(line.clone(), 0, Some(Duration::from_millis(10)));
        assert!(dimmed.style.add_modifier.contains(Modifier::DIM));
        assert_eq!(entrance(line.clone(), 500, Some(ENTRANCE_WINDOW)), line);
    }

    #[test]
    fn test_clip() {
        let area = Rect::new(0, 2, 80, 20);
        assert_eq!(clip(area, 0, 5, 10), Some(Rect::new(0, 7, 80, 5)));
        assert_eq!(clip(area, 8, 5, 10), Some(Rect::new(0, 2, 80, 2)));
        assert_eq!(clip(area, 0, 30, 40), None);
    }

    #[test]
    fn test_render_reveals_hero_and_tracks_projects() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| PageWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        assert!(app.reveals.get(SectionId::Hero).is_revealed());
        assert!(app.carousel_area().is_none());

        // once the entrance has played the hero copy is on screen
        app.tick(app.now() + ENTRANCE_WINDOW);
        terminal
            .draw(|frame| PageWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Ashman Malik"));

        app.goto_section(SectionId::Projects);
        terminal
            .draw(|frame| PageWidget::render(frame, frame.area(), &mut app))
            .unwrap();
        assert_eq!(app.tracker.active(), SectionId::Projects);
        assert!(app.carousel_area().is_some());
        assert!(app.tracker.scrolled());
    }
}
