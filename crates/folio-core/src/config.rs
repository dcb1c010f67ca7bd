use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::preferences::ThemeMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (preferences and log file live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long the splash screen stays up
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
    /// Render the animated hero scene (falls back to a static layout when off or failing)
    #[serde(default = "default_true")]
    pub enable_scene: bool,
    /// Scroll offset (rows) past which the header switches to its elevated style
    #[serde(default = "default_header_threshold")]
    pub header_threshold_rows: u16,
    /// Row (from the top of the page viewport) used to pick the active section
    #[serde(default = "default_reference_line")]
    pub reference_line_rows: u16,
    /// Scroll offset (rows) past which the progress bar is shown
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold_rows: u16,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            splash_ms: default_splash_ms(),
            enable_scene: default_true(),
            header_threshold_rows: default_header_threshold(),
            reference_line_rows: default_reference_line(),
            progress_threshold_rows: default_progress_threshold(),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Easing curve used by scroll and entrance animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    #[serde(rename = "ease_out")]
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (mode) or as a full struct with overrides
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThemeConfig {
    /// Mode used when no preference has been saved yet
    pub mode: ThemeMode,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (\"light\" or \"dark\") or a map with 'mode' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                let mode = value.parse::<ThemeMode>().map_err(E::custom)?;
                Ok(ThemeConfig {
                    mode,
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut mode: Option<ThemeMode> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "mode" => {
                            mode = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    mode: mode.unwrap_or_default(),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub background: Option<String>,
    /// Card / secondary section background
    pub surface: Option<String>,
    /// Primary foreground
    pub foreground: Option<String>,
    /// Dimmed foreground
    pub muted: Option<String>,
    /// Primary brand color
    pub primary: Option<String>,
    /// Text drawn on top of the primary color
    pub primary_foreground: Option<String>,
    /// Borders and separators
    pub border: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Error color
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Delay between automatic advances
    #[serde(default = "default_carousel_interval")]
    pub interval_ms: u64,
    /// How long manual navigation suspends automatic advance
    #[serde(default = "default_carousel_cooldown")]
    pub cooldown_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_carousel_interval(),
            cooldown_ms: default_carousel_cooldown(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Artificial delay before a simulated submission succeeds
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
    /// How long the success message stays before the form resets
    #[serde(default = "default_reset_delay")]
    pub reset_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            reset_delay_ms: default_reset_delay(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Page scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to the hero section
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the footer
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Section navigation
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,

    // Projects carousel
    #[serde(default = "default_key_next_project")]
    pub next_project: String,
    #[serde(default = "default_key_prev_project")]
    pub prev_project: String,
    /// Prefix key; the following digit jumps to that project
    #[serde(default = "default_key_goto_project")]
    pub goto_project: String,
    /// Open the current project's demo
    #[serde(default = "default_key_open_demo")]
    pub open_demo: String,
    /// Open the current project's repository
    #[serde(default = "default_key_open_repo")]
    pub open_repo: String,

    // Misc
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
    #[serde(default = "default_key_cycle_skill_filter")]
    pub cycle_skill_filter: String,
    /// Prefix key; the following digit opens that contact link
    #[serde(default = "default_key_open_contact")]
    pub open_contact: String,
    /// Start writing a message in the contact form
    #[serde(default = "default_key_compose")]
    pub compose: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            next_project: default_key_next_project(),
            prev_project: default_key_prev_project(),
            goto_project: default_key_goto_project(),
            open_demo: default_key_open_demo(),
            open_repo: default_key_open_repo(),
            toggle_theme: default_key_toggle_theme(),
            toggle_menu: default_key_toggle_menu(),
            cycle_skill_filter: default_key_cycle_skill_filter(),
            open_contact: default_key_open_contact(),
            compose: default_key_compose(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "}".to_string() }
fn default_key_prev_section() -> String { "{".to_string() }
fn default_key_next_project() -> String { "l".to_string() }
fn default_key_prev_project() -> String { "h".to_string() }
fn default_key_goto_project() -> String { "p".to_string() }
fn default_key_open_demo() -> String { "o".to_string() }
fn default_key_open_repo() -> String { "r".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_cycle_skill_filter() -> String { "f".to_string() }
fn default_key_open_contact() -> String { "w".to_string() }
fn default_key_compose() -> String { "c".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_splash_ms() -> u64 {
    1500
}

fn default_header_threshold() -> u16 {
    1
}

fn default_reference_line() -> u16 {
    3
}

fn default_progress_threshold() -> u16 {
    5
}

fn default_animation_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_carousel_interval() -> u64 {
    5000
}

fn default_carousel_cooldown() -> u64 {
    5000
}

fn default_submit_delay() -> u64 {
    2000
}

fn default_reset_delay() -> u64 {
    3000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the persisted preferences file path
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
