mod app;
mod config;
mod logging;
mod modules;
mod store;
mod ui;

use crate::app::action::Action;
use crate::app::effects::EffectRunner;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::modules::github::{GithubClient, GET_RATE_LIMIT};
use crate::modules::RootState;
use crate::store::{Dispatcher, Store};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init_tracing(&cfg.logging);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "application exited with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (dispatcher, mut action_rx) = Dispatcher::<Action>::channel();

    let client = GithubClient::new(&cfg.github).context("Failed to build GitHub client")?;
    let mut store = Store::new(RootState::new(&cfg), dispatcher);
    let effects = EffectRunner::install(&mut store, cfg.effects.mode, client);
    let mut state = AppState::new(cfg.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task for the loading spinner
    let tick_tx = event_tx.clone();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    effects.submit(&mut store, GET_RATE_LIMIT.request(()));

    terminal.draw(|f| ui::render(f, &state, store.state()))?;
    let mut rendered_version = store.version();

    // Main event loop
    loop {
        tokio::select! {
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                let loading = store.select(|s| &s.github.user_profile).loading;
                for action in handler::handle_event(&mut state, event, loading) {
                    match action {
                        Action::Quit => state.should_quit = true,
                        action => effects.submit(&mut store, action),
                    }
                }
            }
            action = action_rx.recv() => {
                let Some(action) = action else { break };
                store.dispatch(action);
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty || store.version() != rendered_version {
            terminal.draw(|f| ui::render(f, &state, store.state()))?;
            state.dirty = false;
            rendered_version = store.version();
        }
    }

    tracing::info!(mode = effects.mode().label(), "shutting down");
    Ok(())
}
