use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use folio_core::contact::{Phase, SimulatedSubmitter, Submission, Submitter};
use folio_core::content::{link_kind, LinkKind};
use folio_core::{AppConfig, Preferences, ThemeMode};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler, SubmitResult},
    input::{handle_key_event, Action},
    keymap::Keymap,
    ui,
};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run(mut config: AppConfig, no_scene: bool, theme: Option<ThemeMode>) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    if no_scene {
        config.ui.enable_scene = false;
    }

    let preferences = Preferences::load(config.preferences_path())?;
    let mode = theme.unwrap_or_else(|| preferences.theme_or(config.ui.theme.mode));

    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );
    let submitter: Arc<dyn Submitter> = Arc::new(SimulatedSubmitter::from_config(&config.contact));

    let mut app = App::new(config, mode, Instant::now())?.with_preferences(preferences);
    info!(theme = %mode, "Starting portfolio");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Folio"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler, submitter).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Term,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
    submitter: Arc<dyn Submitter>,
) -> Result<()> {
    // Create channel for background contact submissions
    let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<SubmitResult>();

    // Fast polling while anything is animating; starts true for the splash
    let mut needs_fast_update = true;

    loop {
        // Process any completed submissions (non-blocking)
        while let Ok(result) = submit_rx.try_recv() {
            app.on_submit_result(result);
        }

        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app, keymap))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action, &submitter, &submit_tx);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                // layout is rebuilt for the new size on the next draw
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_animation() || app.contact.phase() == Phase::Submitting;

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}

fn handle_action(
    app: &mut App,
    action: Action,
    submitter: &Arc<dyn Submitter>,
    submit_tx: &mpsc::UnboundedSender<SubmitResult>,
) {
    // Any key other than a prefix ends a pending sequence
    if !matches!(action, Action::Pending(_)) {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll.line_down(),
        Action::ScrollUp => app.scroll.line_up(),
        Action::ScrollHalfPageDown => app.scroll.half_page_down(),
        Action::ScrollHalfPageUp => app.scroll.half_page_up(),
        Action::ScrollPageDown => app.scroll.page_down(),
        Action::ScrollPageUp => app.scroll.page_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::GotoSection(id) => app.goto_section(id),
        Action::NextProject => app.next_project(),
        Action::PrevProject => app.prev_project(),
        Action::GotoProject(index) => app.goto_project(index),
        Action::OpenDemo => {
            let url = app.demo_url();
            open_link(app, url);
        }
        Action::OpenRepo => {
            let url = app.repo_url();
            open_link(app, url);
        }
        Action::OpenContact(index) => {
            if let Some(url) = app.contact_link(index) {
                open_link(app, url);
            }
        }
        Action::ToggleTheme => app.toggle_theme(),
        Action::ToggleMenu => app.toggle_menu(),
        Action::CycleSkillFilter => app.cycle_skill_filter(),
        Action::Compose => app.start_compose(),
        Action::Help => app.mode = Mode::Help,
        Action::Pending(prefix) => app.pending_key = Some(prefix),
        Action::MenuUp => app.menu_up(),
        Action::MenuDown => app.menu_down(),
        Action::MenuSelect => app.menu_select(),
        Action::InputChar(c) => app.compose_input(c),
        Action::Backspace => app.compose_backspace(),
        Action::NextField => app.next_field(),
        Action::PrevField => app.prev_field(),
        Action::Submit => {
            if let Some(submission) = app.submit_contact() {
                spawn_submit(Arc::clone(submitter), submission, submit_tx.clone());
            }
        }
        Action::SkipSplash => app.skip_splash(),
        Action::ExitMode => app.exit_mode(),
        Action::None => {}
    }
}

fn open_link(app: &mut App, url: &str) {
    let kind = match link_kind(url) {
        Ok(kind) => kind,
        Err(e) => {
            warn!(url, error = %e, "Refusing to open link");
            app.set_error(format!("Can't open {}: {}", url, e));
            return;
        }
    };

    info!(url, ?kind, "Opening link");
    match open::that(url) {
        Ok(()) => match kind {
            LinkKind::Mail => {
                let address = url.trim_start_matches("mailto:");
                app.set_status(format!("Composing mail to {}", address));
            }
            LinkKind::Web => app.set_status(format!("Opened {}", url)),
        },
        Err(e) => {
            warn!(url, error = %e, "Failed to open link");
            app.set_error(format!("Failed to open {}: {}", url, e));
        }
    }
}

/// Send the message in the background and report back through the channel
fn spawn_submit(
    submitter: Arc<dyn Submitter>,
    submission: Submission,
    tx: mpsc::UnboundedSender<SubmitResult>,
) {
    tokio::spawn(async move {
        let result = match submitter.submit(&submission).await {
            Ok(()) => SubmitResult::Sent(submission),
            Err(e) => SubmitResult::Failed {
                error: e.to_string(),
            },
        };
        // the receiver is gone only if the app already quit
        let _ = tx.send(result);
    });
}
