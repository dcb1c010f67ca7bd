use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::{Action, Prefix};

/// Parsed key binding (key code + modifiers)
///
/// Character keys never carry SHIFT: the case of the character already
/// encodes it, and terminals disagree on whether to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    pub fn from_event(key: &KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Runtime keymap for key-to-action lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action for a doubled `g` ("gg"), if configured that way
    pending_g_action: Option<Action>,
    /// Display strings for the help overlay, in binding order
    help: Vec<(String, &'static str)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;
        let mut help = Vec::new();

        let mut add_binding = |key_str: &str, action: Action, description: &'static str| {
            help.push((key_str.to_string(), description));

            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit, "Quit");
        add_binding(&config.scroll_down, Action::ScrollDown, "Scroll down");
        add_binding(&config.scroll_up, Action::ScrollUp, "Scroll up");
        add_binding(&config.scroll_half_down, Action::ScrollHalfPageDown, "Half page down");
        add_binding(&config.scroll_half_up, Action::ScrollHalfPageUp, "Half page up");
        add_binding(&config.scroll_page_down, Action::ScrollPageDown, "Page down");
        add_binding(&config.scroll_page_up, Action::ScrollPageUp, "Page up");
        add_binding(&config.jump_to_top, Action::JumpToTop, "Back to top");
        add_binding(&config.jump_to_bottom, Action::JumpToBottom, "Jump to bottom");
        add_binding(&config.next_section, Action::NextSection, "Next section");
        add_binding(&config.prev_section, Action::PrevSection, "Previous section");
        add_binding(&config.next_project, Action::NextProject, "Next project");
        add_binding(&config.prev_project, Action::PrevProject, "Previous project");
        add_binding(
            &config.goto_project,
            Action::Pending(Prefix::Project),
            "Go to project <n>",
        );
        add_binding(&config.open_demo, Action::OpenDemo, "Open project demo");
        add_binding(&config.open_repo, Action::OpenRepo, "Open project repository");
        add_binding(&config.toggle_theme, Action::ToggleTheme, "Toggle light/dark");
        add_binding(&config.toggle_menu, Action::ToggleMenu, "Navigation menu");
        add_binding(&config.cycle_skill_filter, Action::CycleSkillFilter, "Cycle skill filter");
        add_binding(
            &config.open_contact,
            Action::Pending(Prefix::Contact),
            "Open contact link <n>",
        );
        add_binding(&config.compose, Action::Compose, "Write a message");
        add_binding(&config.help, Action::Help, "Toggle help");

        // Always available
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::ScrollDown);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::ScrollUp);
        bindings.entry(KeyBinding::simple(KeyCode::PageDown)).or_insert(Action::ScrollPageDown);
        bindings.entry(KeyBinding::simple(KeyCode::PageUp)).or_insert(Action::ScrollPageUp);
        bindings.entry(KeyBinding::simple(KeyCode::Home)).or_insert(Action::JumpToTop);
        bindings.entry(KeyBinding::simple(KeyCode::End)).or_insert(Action::JumpToBottom);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::NextProject);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::PrevProject);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self {
            bindings,
            pending_g_action,
            help,
        }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Whether a single `g` should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }

    /// (key, description) pairs for the help overlay
    pub fn help_entries(&self) -> &[(String, &'static str)] {
        &self.help
    }
}

/// Parse Vim-style key notation into a KeyBinding
///
/// Supported: single characters ("j", "G", "?"), Ctrl/Shift notation
/// ("<C-d>", "<S-Tab>") and named keys ("<CR>", "<Esc>", "<Space>", ...).
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(&s[1..s.len() - 1]);
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeyBinding::simple(KeyCode::Char(c))),
        _ => None,
    }
}

fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(|code| match code {
            KeyCode::Tab => KeyBinding::shift(KeyCode::BackTab),
            KeyCode::Char(c) => KeyBinding::simple(KeyCode::Char(c.to_ascii_uppercase())),
            other => KeyBinding::shift(other),
        });
    }
    if let Some(rest) = inner.strip_prefix("A-").or_else(|| inner.strip_prefix("M-")) {
        return parse_key_name(rest).map(|code| KeyBinding::new(code, KeyModifiers::ALT));
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "del" | "delete" => Some(KeyCode::Delete),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}
