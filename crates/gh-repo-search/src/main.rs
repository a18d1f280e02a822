//! gh-repo-search - search GitHub repositories from the terminal
//!
//! The main thread owns the terminal and the canonical state: it renders,
//! reads input, and reduces actions coming back from the background
//! worker. The worker runs the middleware chain (keyboard translation,
//! history persistence, search API calls).

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::fs::File;
use std::io;
use std::sync::{mpsc, Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod domain;
mod middleware;
mod paging;
mod reducers;
mod state;
#[cfg(test)]
mod test_support;
mod theme;
mod util;
mod views;

use actions::{Action, GlobalAction};
use background::{spawn_background_worker, SharedState};
use gh_search_client::{octocrab, resolve_token, OctocrabSearchClient, SearchClient};
use gh_search_config::AppConfig;
use middleware::{HistoryMiddleware, KeyboardMiddleware, Middleware, SearchMiddleware};
use state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging()?;
    log::info!("Starting gh-repo-search");

    let config = AppConfig::load();
    let client = build_client()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, client);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting gh-repo-search");
    result
}

/// The TUI owns the terminal, so logs go to a file in the config dir.
fn init_logging() -> anyhow::Result<()> {
    let path = gh_search_config::paths::log_file_path()?;
    simplelog::WriteLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        File::create(path)?,
    )?;
    Ok(())
}

fn build_client() -> anyhow::Result<Arc<dyn SearchClient>> {
    let builder = octocrab::Octocrab::builder();
    let octocrab = match resolve_token() {
        Some(token) => builder.personal_token(token).build()?,
        None => {
            log::warn!("No GitHub token found; searches run unauthenticated");
            builder.build()?
        }
    };
    Ok(Arc::new(OctocrabSearchClient::new(Arc::new(octocrab))))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    client: Arc<dyn SearchClient>,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let mut state = AppState::new(config, size.width, size.height);
    let shared: SharedState = Arc::new(RwLock::new(state.clone()));

    // Action channel feeds the worker; the result channel brings
    // unconsumed actions back for reducing.
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(KeyboardMiddleware::new()),
        Box::new(HistoryMiddleware::new(config.history_limit)),
        Box::new(SearchMiddleware::new(client)),
    ];
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    action_tx.send(Action::Global(GlobalAction::Bootstrap)).ok();

    loop {
        terminal.draw(|frame| views::render(&state, frame.area(), frame))?;

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    action_tx.send(Action::Key(key)).ok();
                }
                Event::Resize(width, height) => {
                    action_tx
                        .send(Action::Global(GlobalAction::Resize(width, height)))
                        .ok();
                }
                _ => {}
            }
        }

        // Apply everything the worker produced since the last frame.
        let mut dirty = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reducers::reduce(state, &action);
            dirty = true;
        }
        if dirty {
            if let Ok(mut guard) = shared.write() {
                *guard = state.clone();
            }
        }
    }

    drop(action_tx);
    worker.join().ok();
    Ok(())
}
