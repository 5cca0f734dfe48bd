//! TUI Application module

mod async_ops;
mod events;
mod state;
mod ui;

pub use state::AppState;
pub use state::{FocusedPanel, Mode, SidebarItem, View};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use crate::api::get_source;
use crate::config::Config;
use crate::db::Database;
use crate::demo;

use async_ops::{AsyncCommand, AsyncHandle, AsyncResult, spawn_worker};

/// Run the TUI application
pub fn run() -> Result<()> {
    let config = Config::load()?;

    // Two connections to the snapshot store: the worker writes refreshed
    // trends, the UI reads the cached copy at startup.
    let db = Database::open()?;
    let worker_db = Database::open()?;

    let source = get_source(&config.api_url, false);
    let async_handle = spawn_worker(source, worker_db);

    let state = AppState::new(config, db)?;
    run_loop(state, async_handle)
}

/// Run the TUI in demo mode with sample data (for screenshots)
pub fn run_demo() -> Result<()> {
    let config = Config::load()?;

    let db = Database::open()?;
    let worker_db = Database::open()?;

    let async_handle = spawn_worker(get_source(&config.api_url, true), worker_db);

    let mut state = AppState::new(config, db)?;
    state.trends = demo::demo_trends();
    state.trends_requested = true;
    state.set_status(format!(
        "Demo mode | {} posts | Press ? for help | q to quit",
        state.posts.len()
    ));

    run_loop(state, async_handle)
}

fn run_loop(mut state: AppState, mut async_handle: AsyncHandle) -> Result<()> {
    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut state, &mut async_handle);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    async_handle: &mut AsyncHandle,
) -> Result<()> {
    loop {
        // Process any async results
        while let Ok(result) = async_handle.result_rx.try_recv() {
            handle_async_result(state, result);
        }

        // Draw UI
        terminal.draw(|frame| ui::render(frame, state))?;

        // Handle events
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && let Some(cmd) = events::handle_key(state, key)
        {
            let _ = async_handle.cmd_tx.blocking_send(cmd);
        }

        // Tick for animations
        state.tick();

        if state.should_quit {
            // Shutdown async worker
            let _ = async_handle.cmd_tx.blocking_send(AsyncCommand::Shutdown);
            break;
        }
    }

    // Save config on exit
    state.config.save()?;

    Ok(())
}

fn handle_async_result(state: &mut AppState, result: AsyncResult) {
    match result {
        AsyncResult::TrendsRefreshed { trends } => {
            state.trends = trends;
            state.selected_trend = 0;
            state.loading = false;
            state.set_status(format!("Loaded {} trends", state.trends.len()));
        }
        AsyncResult::Shared { post_id: _ } => {
            state.set_status("✓ Shared post");
        }
        AsyncResult::ShareUnavailable => {
            state.set_status("ℹ Sharing is not available on this device");
        }
        AsyncResult::Error { message } => {
            state.set_status(format!("❌ {message}"));
            state.loading = false;
        }
        AsyncResult::Status { message } => {
            state.set_status(message);
        }
    }
}
