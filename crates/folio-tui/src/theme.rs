use folio_core::config::ThemeConfig;
use folio_core::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

use crate::themes;

/// Semantic colors for one mode
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    /// Second stop of the brand gradient
    pub secondary: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.foreground).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Filled pill, used for the active nav entry and buttons
    pub fn pill(&self) -> Style {
        Style::default()
            .fg(self.primary_foreground)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// Active theme mode plus both palettes, owned by the app
#[derive(Debug, Clone)]
pub struct ThemeContext {
    mode: ThemeMode,
    light: Theme,
    dark: Theme,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode, config: &ThemeConfig) -> Self {
        Self {
            mode,
            light: themes::load_palette(ThemeMode::Light, config),
            dark: themes::load_palette(ThemeMode::Dark, config),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip light/dark and return the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn active(&self) -> &Theme {
        match self.mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeMode::default(), &ThemeConfig::default())
    }
}
