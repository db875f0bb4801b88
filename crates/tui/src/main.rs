//! Keymapper TUI - terminal front-end for keymapperd remapping rules.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop, routing actions between the input task, the
//!   app state, and the side-effect tasks.
//!
//! Does NOT handle:
//! - Mapping formatting or file persistence (see `crates/core`).
//! - Headless operation (see `crates/cli`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Persisted UI state is saved exactly once, on quit.
//! - Path precedence: CLI args > persisted state > defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use keymapper_config::{PersistedState, StateManager, daemon_config_path, default_state_path};
use keymapper_core::MapCommand;
use keymapper_tui::action::Action;
use keymapper_tui::app::App;
use keymapper_tui::cli::Cli;
use keymapper_tui::runtime::{side_effects, terminal::TerminalGuard};

/// Bounded action channel capacity; ample for key bursts without letting the
/// queue grow unbounded.
const ACTION_CHANNEL_CAPACITY: usize = 64;

/// UI tick period for toast expiry.
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // File-based logging; stdout belongs to the TUI.
    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "keymapper-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration so logs are flushed.

    let state_path = match cli.state_path {
        Some(path) => path,
        None => default_state_path()?,
    };
    let state_manager = StateManager::new(state_path);
    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        state_manager.load()
    };

    // Path precedence: CLI args > persisted state > per-user default.
    let config_path = match cli.config_path {
        Some(path) => path,
        None => match persisted.config_path.clone() {
            Some(path) => path,
            None => daemon_config_path()?,
        },
    };

    let map_command = MapCommand::new(cli.map_command);
    let mut app = App::new(persisted, config_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Guard restores the terminal on panic/unwind; the explicit cleanup
    // below runs first on normal exit.
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(ACTION_CHANNEL_CAPACITY);

    // Input stream task. Key and resize events carry user intent, so they
    // use a blocking send rather than being dropped under load.
    let tx_input = tx.clone();
    tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    Some(Action::Input(key))
                }
                Ok(Event::Resize(width, height)) => Some(Action::Resize(width, height)),
                Ok(_) => None,
                Err(_) => break,
            };
            if let Some(action) = action {
                if tx_input.send(action).await.is_err() {
                    break;
                }
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if matches!(action, Action::Quit) {
                    save_state(&app, &state_manager);
                    break;
                }

                if let Action::Input(key) = action {
                    if let Some(a) = app.handle_input(key) {
                        if matches!(a, Action::Quit) {
                            save_state(&app, &state_manager);
                            break;
                        }
                        dispatch(a, &mut app, &map_command, &tx);
                    }
                } else {
                    dispatch(action, &mut app, &map_command, &tx);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Route an action: triggers go to the side-effect tasks, everything else
/// mutates app state.
fn dispatch(
    action: Action,
    app: &mut App,
    map_command: &MapCommand,
    tx: &tokio::sync::mpsc::Sender<Action>,
) {
    if action.is_trigger() {
        side_effects::handle(action, map_command.clone(), tx.clone());
    } else {
        app.update(action);
    }
}

fn save_state(app: &App, state_manager: &StateManager) {
    if let Err(e) = state_manager.save(&app.get_persisted_state()) {
        tracing::error!(error = %e, "Failed to save state");
    }
}
