// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

pub fn run(config: &Config) -> Result<()> {
    // Leave the alternate screen before any panic message is printed.
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous_hook(info);
    }));

    // --- TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(config);
    log::info!("UI started on {}", app_state.active_screen());

    let result = event_loop(&mut terminal, &mut app_state);

    // --- CLEANUP ---
    restore_terminal()?;
    terminal.show_cursor()?;
    log::info!(
        "UI closed with {} notes and {} tasks",
        app_state.store.notes().len(),
        app_state.store.tasks().len()
    );
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
) -> Result<()> {
    loop {
        handlers::process_store_events(app_state);
        terminal.draw(|f| draw(f, app_state))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app_state.next(),
                MouseEventKind::ScrollUp => app_state.previous(),
                _ => {}
            },
            Event::Key(key) => {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if let Some(action) = handlers::handle_key_event(key, app_state)
                    && !handlers::apply_action(app_state, action)
                {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}
