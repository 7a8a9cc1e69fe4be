use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lead_console::{
    api::HttpLeadsApi,
    app::{update, AppState},
    config::Cli,
    event::AppEvent,
    logging,
    paths::Paths,
    runtime::Dispatcher,
    session::{FileSessionStore, SessionGuard},
    view::render,
    watcher,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn main() -> Result<()> {
    // Install color-eyre panic handler for better error messages
    color_eyre::install()?;

    let config = Cli::parse().into_config(&Paths::from_env());
    logging::init_logging(&config.log_file, "info")?;
    tracing::info!(api_url = %config.api_url, session_file = %config.session_file.display(), "starting");

    // Network effects run on tokio; the UI loop stays synchronous and only
    // needs the runtime context to spawn into.
    let rt = tokio::runtime::Runtime::new()?;
    let _rt_guard = rt.enter();

    let api = HttpLeadsApi::new(&config.api_url)?;
    let session = Arc::new(SessionGuard::new(Arc::new(FileSessionStore::new(
        config.session_file.clone(),
    ))));

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let dispatcher = Dispatcher::new(Arc::new(api), session, tx.clone());

    // Keep the watcher alive for the whole session; failure is not fatal.
    let _watcher = match watcher::watch_session_file(&config.session_file, tx.clone()) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "session watcher unavailable");
            let _ = tx.send(AppEvent::WatcherFailed(e));
            None
        }
    };

    let state = AppState::with_api_url(config.api_url.clone());

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, state, &mut rx, &dispatcher, config.tick_rate);

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state: AppState,
    rx: &mut UnboundedReceiver<AppEvent>,
    dispatcher: &Dispatcher,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Run side effects requested by the last round of updates
        for command in state.take_commands() {
            dispatcher.dispatch(command);
        }

        // Render current state
        terminal.draw(|frame| render(&state, frame))?;

        // Poll keyboard events with timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state = update(state, AppEvent::Key(key));
                }
            }
        }

        // Drain command results and watcher events
        while let Ok(event) = rx.try_recv() {
            state = update(state, event);
        }

        // Tick event
        if last_tick.elapsed() >= tick_rate {
            state = update(state, AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        // Check quit condition
        if state.should_quit {
            break;
        }
    }

    Ok(())
}
