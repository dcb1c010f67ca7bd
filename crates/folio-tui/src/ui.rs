use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode};
use crate::keymap::Keymap;
use crate::widgets::{
    HeaderWidget, PageWidget, PopupWidget, ScrollProgressWidget, SplashWidget, StatusBarWidget,
};

/// Draw one frame: splash, or header + progress + page + status with overlays
pub fn draw(frame: &mut Frame, app: &mut App, keymap: &Keymap) {
    let size = frame.area();

    if app.in_splash() {
        SplashWidget::render(frame, size, app);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Scroll progress
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    // the page runs first so the header sees this frame's active section
    PageWidget::render(frame, rows[2], app);
    HeaderWidget::render(frame, rows[0], app);
    ScrollProgressWidget::render(frame, rows[1], app);
    StatusBarWidget::render(frame, rows[3], app);

    match app.mode {
        Mode::Help => PopupWidget::render_help(frame, app, keymap),
        Mode::Menu => PopupWidget::render_menu(frame, app),
        Mode::Normal | Mode::Compose(_) => {}
    }
}
