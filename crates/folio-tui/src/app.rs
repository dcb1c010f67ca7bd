use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::carousel::CarouselController;
use folio_core::contact::{ContactForm, Field, FormError, Submission};
use folio_core::content::{Portfolio, Project, SectionId, SkillGroup, PORTFOLIO};
use folio_core::viewport::{RevealSet, ScrollProgress, ScrollTracker};
use folio_core::{AppConfig, Error, Preferences, ThemeMode};
use ratatui::layout::{Position, Rect};
use tracing::{info, warn};

use crate::event::SubmitResult;
use crate::input::Prefix;
use crate::layout::PageLayout;
use crate::scene::{self, SceneBoundary, SceneFrame, SceneSupport, SceneViewport};
use crate::scroll::PageScroll;
use crate::theme::ThemeContext;
use crate::widgets::page::ENTRANCE_WINDOW;

/// How long a status message stays in the status bar
const STATUS_TTL: Duration = Duration::from_secs(4);
/// Slide duration when the featured project changes
pub const PROJECT_TRANSITION: Duration = Duration::from_millis(350);
/// Rows per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Key binding overlay
    Help,
    /// Collapsed navigation menu
    Menu,
    /// Typing into the contact form
    Compose(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: Instant,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub portfolio: &'static Portfolio,
    pub theme: ThemeContext,
    pub scroll: PageScroll,
    pub tracker: ScrollTracker,
    pub progress: ScrollProgress,
    pub reveals: RevealSet,
    pub carousel: CarouselController,
    pub contact: ContactForm,
    pub mode: Mode,
    /// Pending first key of a two-key sequence
    pub pending_key: Option<Prefix>,
    /// Index into `portfolio.skill_groups`
    pub skill_filter: Option<usize>,
    pub menu_cursor: usize,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    /// Layout from the most recent frame
    pub layout: PageLayout,
    /// Screen rect of the featured project card, if on screen
    carousel_area: Option<Rect>,
    /// Screen rects of the header nav entries
    pub nav_hits: Vec<(Rect, SectionId)>,
    pub scene_frame: SceneFrame,
    scene: SceneBoundary,
    hovering_carousel: bool,
    /// Last known pointer cell
    pointer: Option<Position>,
    preferences: Option<Preferences>,
    splash_until: Option<Instant>,
    started: Instant,
    now: Instant,
}

impl App {
    pub fn new(config: AppConfig, theme_mode: ThemeMode, now: Instant) -> Result<Self> {
        let portfolio = &PORTFOLIO;
        let carousel = CarouselController::new(portfolio.projects.len(), &config.carousel, now)
            .context("Failed to set up the project carousel")?;
        let splash = Duration::from_millis(config.ui.splash_ms);

        Ok(Self {
            theme: ThemeContext::new(theme_mode, &config.ui.theme),
            scroll: PageScroll::new(config.ui.scroll.clone()),
            tracker: ScrollTracker::from_config(&config.ui),
            progress: ScrollProgress::new(config.ui.progress_threshold_rows),
            reveals: RevealSet::new(),
            carousel,
            contact: ContactForm::from_config(&config.contact),
            mode: Mode::Normal,
            pending_key: None,
            skill_filter: None,
            menu_cursor: 0,
            status: None,
            should_quit: false,
            layout: PageLayout::default(),
            carousel_area: None,
            nav_hits: Vec::new(),
            scene_frame: Vec::new(),
            scene: scene::boundary(config.ui.enable_scene, &SceneSupport::detect()),
            hovering_carousel: false,
            pointer: None,
            preferences: None,
            splash_until: (!splash.is_zero()).then(|| now + splash),
            started: now,
            now,
            portfolio,
            config,
        })
    }

    /// Persist theme toggles to this preferences file
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Rebuild the hero scene against explicit terminal capabilities
    pub fn with_scene_support(mut self, support: &SceneSupport) -> Self {
        self.scene = scene::boundary(self.config.ui.enable_scene, support);
        self
    }

    #[inline]
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn in_splash(&self) -> bool {
        self.splash_until.is_some()
    }

    /// Time since startup, drives spinners
    pub fn uptime(&self) -> Duration {
        self.now.saturating_duration_since(self.started)
    }

    pub fn skip_splash(&mut self) {
        if self.splash_until.take().is_some() {
            info!("Splash finished");
        }
    }

    /// Advance all timers to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        if self.splash_until.is_some_and(|until| now >= until) {
            self.skip_splash();
        }
        self.carousel.tick(now);
        if self.contact.tick(now) {
            info!("Contact form reset");
        }
        if self
            .status
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.at) >= STATUS_TTL)
        {
            self.status = None;
        }
    }

    /// Whether the loop should poll at animation frame rate
    pub fn needs_animation(&self) -> bool {
        if self.in_splash() || self.scroll.needs_update() {
            return true;
        }
        if self.carousel.shown_for(self.now) < PROJECT_TRANSITION {
            return true;
        }
        SectionId::ALL.into_iter().any(|id| {
            self.reveals
                .get(id)
                .elapsed(self.now)
                .is_some_and(|e| e < ENTRANCE_WINDOW)
        })
    }

    /// Apply a freshly computed layout: scroll extent, glide step, active
    /// section, reveal latches and progress. Returns the offset to draw at.
    pub fn sync_layout(&mut self, layout: PageLayout, viewport_height: u16) -> u16 {
        self.scroll.set_extent(layout.total_height(), viewport_height);
        let offset = self.scroll.update(self.now);

        let bounds = layout.bounds(offset);
        self.tracker.on_scroll(offset, &bounds);
        for b in &bounds {
            self.reveals.observe(b.id, b.intersects(viewport_height), self.now);
        }
        self.progress
            .update(offset, layout.total_height(), viewport_height);
        self.layout = layout;
        offset
    }

    /// Render the hero scene for this frame into `scene_frame`
    pub fn refresh_scene(&mut self, width: u16, height: u16) {
        let palette = self.theme.active();
        let viewport = SceneViewport {
            width,
            height,
            elapsed: self.now.saturating_duration_since(self.started),
            primary: palette.primary,
            secondary: palette.secondary,
            dim: palette.muted,
        };
        self.scene_frame = self.scene.render(&viewport);
    }

    // Scrolling

    pub fn goto_section(&mut self, id: SectionId) {
        if let Some(top) = self.layout.top_of(id) {
            self.scroll.glide_to(top, self.now);
        }
        self.mode = Mode::Normal;
    }

    pub fn next_section(&mut self) {
        if let Some(next) = self.tracker.active().next() {
            self.goto_section(next);
        }
    }

    pub fn prev_section(&mut self) {
        match self.tracker.active().prev() {
            Some(prev) => self.goto_section(prev),
            None => self.jump_to_top(),
        }
    }

    pub fn jump_to_top(&mut self) {
        self.scroll.top(self.now);
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll.bottom(self.now);
    }

    // Projects

    pub fn current_project(&self) -> &'static Project {
        let projects = self.portfolio.projects;
        &projects[self.carousel.current().min(projects.len().saturating_sub(1))]
    }

    pub fn next_project(&mut self) {
        self.carousel.next(self.now);
    }

    pub fn prev_project(&mut self) {
        self.carousel.previous(self.now);
    }

    pub fn goto_project(&mut self, index: usize) {
        if let Err(e) = self.carousel.go_to(index, self.now) {
            self.set_error(format!("No project {}: {}", index + 1, e));
        }
    }

    pub fn demo_url(&self) -> &'static str {
        self.current_project().demo_url
    }

    pub fn repo_url(&self) -> &'static str {
        self.current_project().repo_url
    }

    /// Link of the n-th contact entry (zero based)
    pub fn contact_link(&mut self, index: usize) -> Option<&'static str> {
        match self.portfolio.contact.get(index) {
            Some(info) => {
                if info.link.is_none() {
                    self.set_status(format!("{}: {}", info.label, info.value));
                }
                info.link
            }
            None => {
                self.set_error(format!("No contact entry {}", index + 1));
                None
            }
        }
    }

    // Theme

    pub fn toggle_theme(&mut self) {
        let mode = self.theme.toggle();
        info!(theme = %mode, "Theme toggled");
        if let Some(prefs) = self.preferences.as_mut() {
            if let Err(e) = prefs.set_theme(mode) {
                warn!(error = %e, "Failed to save theme preference");
                self.set_error(format!("Theme not saved: {}", e));
            }
        }
    }

    // Menu

    pub fn toggle_menu(&mut self) {
        self.mode = match self.mode {
            Mode::Menu => Mode::Normal,
            _ => {
                self.menu_cursor = self
                    .portfolio
                    .nav
                    .iter()
                    .position(|item| item.target == self.tracker.active())
                    .unwrap_or(0);
                Mode::Menu
            }
        };
    }

    pub fn menu_down(&mut self) {
        let len = self.portfolio.nav.len().max(1);
        self.menu_cursor = (self.menu_cursor + 1) % len;
    }

    pub fn menu_up(&mut self) {
        let len = self.portfolio.nav.len().max(1);
        self.menu_cursor = (self.menu_cursor + len - 1) % len;
    }

    pub fn menu_select(&mut self) {
        if let Some(item) = self.portfolio.nav.get(self.menu_cursor) {
            self.goto_section(item.target);
        }
        self.mode = Mode::Normal;
    }

    // Skills

    /// Step the category filter: all -> first -> ... -> last -> all
    pub fn cycle_skill_filter(&mut self) {
        let groups = self.portfolio.skill_groups.len();
        self.skill_filter = match self.skill_filter {
            None if groups > 0 => Some(0),
            Some(i) if i + 1 < groups => Some(i + 1),
            _ => None,
        };
    }

    pub fn skill_group(&self) -> Option<&'static SkillGroup> {
        self.skill_filter
            .and_then(|i| self.portfolio.skill_groups.get(i))
    }

    // Contact form

    pub fn start_compose(&mut self) {
        self.goto_section(SectionId::Contact);
        self.mode = Mode::Compose(Field::Name);
    }

    pub fn compose_field(&self) -> Option<Field> {
        match self.mode {
            Mode::Compose(field) => Some(field),
            _ => None,
        }
    }

    pub fn compose_input(&mut self, c: char) {
        if let Some(field) = self.compose_field() {
            self.contact.push(field, c);
        }
    }

    pub fn compose_backspace(&mut self) {
        if let Some(field) = self.compose_field() {
            self.contact.backspace(field);
        }
    }

    pub fn next_field(&mut self) {
        if let Some(field) = self.compose_field() {
            self.mode = Mode::Compose(field.next());
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(field) = self.compose_field() {
            self.mode = Mode::Compose(field.prev());
        }
    }

    /// Validate and move the form to `Submitting`. The caller sends the
    /// returned submission and reports back through `on_submit_result`.
    pub fn submit_contact(&mut self) -> Option<Submission> {
        match self.contact.begin_submit() {
            Ok(submission) => {
                self.mode = Mode::Normal;
                self.set_status("Sending message...");
                Some(submission)
            }
            Err(e) => {
                match e {
                    FormError::Missing(field) => self.mode = Mode::Compose(field),
                    FormError::InvalidEmail => self.mode = Mode::Compose(Field::Email),
                    FormError::Busy => {}
                }
                self.set_error(e.to_string());
                None
            }
        }
    }

    pub fn on_submit_result(&mut self, result: SubmitResult) {
        match result {
            SubmitResult::Sent(submission) => {
                info!(subject = %submission.subject, "Contact form submitted");
                self.contact.finish_submit(Ok(()), self.now);
                self.set_status("Message sent! I'll get back to you as soon as possible.");
            }
            SubmitResult::Failed { error } => {
                self.contact
                    .finish_submit(Err(Error::Submit(error.clone())), self.now);
                self.set_error(format!("Message not sent: {}", error));
            }
        }
    }

    // Mouse

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        self.pointer = Some(pos);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll.scroll_by(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((_, id)) = self.nav_hits.iter().find(|(rect, _)| rect.contains(pos)) {
                    self.goto_section(*id);
                }
            }
            _ => {}
        }
        self.update_hover();
    }

    pub fn carousel_area(&self) -> Option<Rect> {
        self.carousel_area
    }

    /// Record where the featured card landed this frame. The page may have
    /// moved under a resting pointer, so hover is re-checked.
    pub fn set_carousel_area(&mut self, area: Option<Rect>) {
        self.carousel_area = area;
        self.update_hover();
    }

    /// Pointer hold on the carousel
    fn update_hover(&mut self) {
        let inside = match (self.carousel_area, self.pointer) {
            (Some(area), Some(pos)) => area.contains(pos),
            _ => false,
        };
        if inside && !self.hovering_carousel {
            self.carousel.pause();
        } else if !inside && self.hovering_carousel {
            self.carousel.resume(self.now);
        }
        self.hovering_carousel = inside;
    }

    pub fn is_hovering_carousel(&self) -> bool {
        self.hovering_carousel
    }

    // Status

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            level: StatusLevel::Info,
            at: self.now,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            level: StatusLevel::Error,
            at: self.now,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Leave any overlay; in normal mode drop pending keys and the status
    pub fn exit_mode(&mut self) {
        match self.mode {
            Mode::Normal => {
                self.pending_key = None;
                self.clear_status();
            }
            _ => self.mode = Mode::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Block;
    use crossterm::event::KeyModifiers;
    use folio_core::carousel::AdvanceState;

    fn app() -> App {
        let now = Instant::now();
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, now)
            .unwrap()
            .with_scene_support(&SceneSupport { term: Some("xterm".into()) });
        app.skip_splash();
        app
    }

    fn uniform_layout(rows: u16) -> PageLayout {
        PageLayout::stack(Block::ALL.iter().map(|b| (*b, rows)))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_splash_ends_on_tick() {
        let start = Instant::now();
        let mut app = App::new(AppConfig::default(), ThemeMode::Dark, start).unwrap();
        assert!(app.in_splash());
        app.tick(start + Duration::from_millis(1499));
        assert!(app.in_splash());
        app.tick(start + Duration::from_millis(1500));
        assert!(!app.in_splash());
    }

    #[test]
    fn test_zero_splash_disabled() {
        let mut config = AppConfig::default();
        config.ui.splash_ms = 0;
        let app = App::new(config, ThemeMode::Light, Instant::now()).unwrap();
        assert!(!app.in_splash());
        assert_eq!(app.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_sync_layout_tracks_sections() {
        let mut app = app();
        let mut config = app.scroll.config().clone();
        config.smooth_enabled = false;
        app.scroll = PageScroll::new(config);

        app.sync_layout(uniform_layout(30), 20);
        assert_eq!(app.tracker.active(), SectionId::Hero);
        assert!(app.reveals.get(SectionId::Hero).is_revealed());
        assert!(!app.reveals.get(SectionId::Skills).is_revealed());

        app.goto_section(SectionId::Skills);
        let offset = app.sync_layout(uniform_layout(30), 20);
        assert_eq!(offset, 90);
        assert_eq!(app.tracker.active(), SectionId::Skills);
        assert!(app.tracker.scrolled());
        assert!(app.reveals.get(SectionId::Skills).is_revealed());
        // skipped over, never intersected
        assert!(!app.reveals.get(SectionId::About).is_revealed());
    }

    #[test]
    fn test_section_navigation() {
        let mut app = app();
        let mut config = app.scroll.config().clone();
        config.smooth_enabled = false;
        app.scroll = PageScroll::new(config);
        app.sync_layout(uniform_layout(30), 20);

        app.next_section();
        app.sync_layout(uniform_layout(30), 20);
        assert_eq!(app.tracker.active(), SectionId::About);

        app.prev_section();
        app.sync_layout(uniform_layout(30), 20);
        assert_eq!(app.tracker.active(), SectionId::Hero);
    }

    #[test]
    fn test_project_navigation_and_links() {
        let mut app = app();
        app.next_project();
        assert_eq!(app.carousel.current(), 1);
        assert_eq!(app.demo_url(), app.portfolio.projects[1].demo_url);
        app.goto_project(99);
        assert_eq!(app.carousel.current(), 1);
        assert_eq!(app.status.as_ref().map(|s| s.level), Some(StatusLevel::Error));
    }

    #[test]
    fn test_contact_link_without_url_shows_value() {
        let mut app = app();
        let location = app
            .portfolio
            .contact
            .iter()
            .position(|c| c.link.is_none())
            .unwrap();
        assert_eq!(app.contact_link(location), None);
        assert_eq!(app.status.as_ref().map(|s| s.level), Some(StatusLevel::Info));
        assert!(app.contact_link(0).is_some());
        assert_eq!(app.contact_link(40), None);
    }

    #[test]
    fn test_hover_pauses_carousel() {
        let mut app = app();
        app.set_carousel_area(Some(Rect::new(10, 10, 20, 5)));
        app.handle_mouse(mouse(MouseEventKind::Moved, 15, 12));
        assert!(app.is_hovering_carousel());
        assert!(app.carousel.state().is_held());

        let later = app.now() + Duration::from_secs(60);
        app.tick(later);
        assert_eq!(app.carousel.current(), 0);

        app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0));
        assert!(!app.is_hovering_carousel());
        assert_eq!(
            app.carousel.state(),
            AdvanceState::Auto { next_tick: later + Duration::from_secs(5) }
        );
    }

    #[test]
    fn test_wheel_scroll_away_releases_hold() {
        let mut app = app();
        app.set_carousel_area(Some(Rect::new(10, 10, 20, 5)));
        app.handle_mouse(mouse(MouseEventKind::Moved, 15, 12));
        assert!(app.carousel.state().is_held());

        // the card was drawn elsewhere after the page moved
        app.set_carousel_area(Some(Rect::new(10, 40, 20, 5)));
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 15, 12));
        assert!(!app.is_hovering_carousel());

        app.tick(app.now() + Duration::from_secs(600));
        assert!(!app.carousel.state().is_held());
        assert_ne!(app.carousel.current(), 0);
    }

    #[test]
    fn test_page_moving_under_resting_pointer_releases_hold() {
        let mut app = app();
        app.set_carousel_area(Some(Rect::new(10, 10, 20, 5)));
        app.handle_mouse(mouse(MouseEventKind::Moved, 15, 12));
        assert!(app.is_hovering_carousel());

        // keyboard scroll: no mouse event, only the next frame's layout
        app.set_carousel_area(None);
        assert!(!app.is_hovering_carousel());
        assert!(!app.carousel.state().is_held());

        // card scrolls back under the pointer
        app.set_carousel_area(Some(Rect::new(10, 11, 20, 5)));
        assert!(app.is_hovering_carousel());
        assert!(app.carousel.state().is_held());
    }

    #[test]
    fn test_skill_filter_cycles_and_clears() {
        let mut app = app();
        let groups = app.portfolio.skill_groups.len();
        for i in 0..groups {
            app.cycle_skill_filter();
            assert_eq!(app.skill_filter, Some(i));
        }
        app.cycle_skill_filter();
        assert_eq!(app.skill_filter, None);

        app.cycle_skill_filter();
        assert_eq!(app.skill_group().map(|g| g.id), Some(app.portfolio.skill_groups[0].id));
    }

    #[test]
    fn test_menu_wraps_and_selects() {
        let mut app = app();
        app.toggle_menu();
        assert_eq!(app.mode, Mode::Menu);
        app.menu_up();
        assert_eq!(app.menu_cursor, app.portfolio.nav.len() - 1);
        app.menu_down();
        assert_eq!(app.menu_cursor, 0);
        app.menu_select();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_compose_and_submit_flow() {
        let mut app = app();
        app.start_compose();
        assert_eq!(app.mode, Mode::Compose(Field::Name));

        assert!(app.submit_contact().is_none());
        assert_eq!(app.mode, Mode::Compose(Field::Name));

        for c in "Ada".chars() {
            app.compose_input(c);
        }
        app.next_field();
        for c in "ada@example.com".chars() {
            app.compose_input(c);
        }
        app.next_field();
        for c in "Hi".chars() {
            app.compose_input(c);
        }
        app.next_field();
        for c in "Hello there".chars() {
            app.compose_input(c);
        }
        app.compose_backspace();

        let submission = app.submit_contact().unwrap();
        assert_eq!(submission.message, "Hello ther");
        assert_eq!(app.mode, Mode::Normal);

        app.on_submit_result(SubmitResult::Sent(submission));
        assert!(matches!(
            app.contact.phase(),
            folio_core::contact::Phase::Submitted { .. }
        ));

        app.tick(app.now() + Duration::from_millis(3000));
        assert_eq!(app.contact.phase(), folio_core::contact::Phase::Idle);
        assert_eq!(app.contact.value(Field::Name), "");
    }

    #[test]
    fn test_status_expires() {
        let mut app = app();
        app.set_status("hello");
        app.tick(app.now() + Duration::from_secs(1));
        assert!(app.status.is_some());
        app.tick(app.now() + STATUS_TTL);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_exit_mode() {
        let mut app = app();
        app.mode = Mode::Help;
        app.exit_mode();
        assert_eq!(app.mode, Mode::Normal);
        app.pending_key = Some(Prefix::Project);
        app.exit_mode();
        assert_eq!(app.pending_key, None);
    }
}
