use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::content::SectionId;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// First key of a two-key sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// `g`, waiting for a second `g`
    G,
    /// Waiting for a project number
    Project,
    /// Waiting for a contact entry number
    Contact,
}

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    NextSection,
    PrevSection,
    GotoSection(SectionId),
    NextProject,
    PrevProject,
    /// Zero-based project index
    GotoProject(usize),
    OpenDemo,
    OpenRepo,
    /// Zero-based contact entry index
    OpenContact(usize),
    ToggleTheme,
    ToggleMenu,
    CycleSkillFilter,
    Compose,
    Help,
    Pending(Prefix),
    // Menu popup
    MenuUp,
    MenuDown,
    MenuSelect,
    // Contact form editing
    InputChar(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    SkipSplash,
    ExitMode,
    None,
}

/// Map a key event to an action for the current app state
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.in_splash() {
        return Action::SkipSplash;
    }

    match &app.mode {
        Mode::Help => return Action::ExitMode,
        Mode::Menu => return handle_menu_mode(key),
        Mode::Compose(_) => return handle_compose_mode(key),
        Mode::Normal => {}
    }

    let binding = KeyBinding::from_event(&key);

    if let Some(prefix) = app.pending_key {
        if let Some(action) = complete_sequence(prefix, &binding, keymap) {
            return action;
        }
    }

    if keymap.is_g_prefix(&binding) {
        return Action::Pending(Prefix::G);
    }

    if let Some(section) = digit(&binding).and_then(nav_section) {
        return Action::GotoSection(section);
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

fn complete_sequence(prefix: Prefix, binding: &KeyBinding, keymap: &Keymap) -> Option<Action> {
    match prefix {
        Prefix::G if keymap.is_g_prefix(binding) => keymap.get_pending_g_action().cloned(),
        Prefix::Project => digit(binding).map(|n| Action::GotoProject(n - 1)),
        Prefix::Contact => digit(binding).map(|n| Action::OpenContact(n - 1)),
        _ => None,
    }
}

/// 1-9 as a plain key press
fn digit(binding: &KeyBinding) -> Option<usize> {
    match (binding.code, binding.modifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE) => c
            .to_digit(10)
            .filter(|d| *d > 0)
            .map(|d| d as usize),
        _ => None,
    }
}

/// Number keys follow the nav bar order
fn nav_section(n: usize) -> Option<SectionId> {
    folio_core::content::PORTFOLIO
        .nav
        .get(n.checked_sub(1)?)
        .map(|item| item.target)
}

fn handle_menu_mode(key: KeyEvent) -> Action {
    let binding = KeyBinding::from_event(&key);
    if let Some(section) = digit(&binding).and_then(nav_section) {
        return Action::GotoSection(section);
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::MenuUp,
        KeyCode::Enter | KeyCode::Char(' ') => Action::MenuSelect,
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => Action::ExitMode,
        _ => Action::None,
    }
}

fn handle_compose_mode(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => Action::Submit,
        KeyCode::Enter if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Action::Submit,
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Enter => Action::InputChar('\n'),
        KeyCode::Char(c) if !ctrl => Action::InputChar(c),
        _ => Action::None,
    }
}
