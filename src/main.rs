mod app;
mod calc;
mod config;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::RngExt;
use ratatui::prelude::*;
use std::collections::VecDeque;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "tallypad starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg);

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let mut state = AppState::new(cfg);
    let mut queue: VecDeque<AppEvent> = VecDeque::new();

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        queue.push_back(AppEvent::Terminal(event::read()?));

        // Actions may feed follow-up events back into the queue
        while let Some(event) = queue.pop_front() {
            let actions = handler::handle_event(&mut state, event);
            for action in actions {
                match action {
                    Action::Randomize => {
                        let (a, b) = draw_pair(&state);
                        queue.push_back(AppEvent::Randomized { a, b });
                    }
                    Action::Quit => state.should_quit = true,
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn draw_pair(state: &AppState) -> (i32, i32) {
    let (lo, hi) = state.config.behavior.random_span();
    let mut rng = rand::rng();
    (rng.random_range(lo..hi), rng.random_range(lo..hi))
}
