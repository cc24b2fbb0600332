//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::editor::RecordEditor;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
///
/// `startup_warning` is shown in the status bar, typically the reason the
/// data file could not be loaded.
pub fn run_tui(
    editor: RecordEditor,
    confirm_on_exit: bool,
    startup_warning: Option<String>,
) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(editor, confirm_on_exit);
    if let Some(warning) = startup_warning {
        app.set_error(warning);
    }

    let events = EventHandler::default();
    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}
