//! Event handling for the TUI
//!
//! A background thread polls crossterm and forwards key and resize events
//! over a channel. The main loop is the only consumer and the only code that
//! touches the editor.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use log::warn;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic redraws
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                Some(Event::Resize(width, height))
                            }
                            Ok(_) => None,
                            Err(e) => {
                                warn!("Failed to read terminal event: {}", e);
                                return;
                            }
                        };
                        if let Some(event) = forwarded {
                            if sender.send(event).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        warn!("Failed to poll terminal events: {}", e);
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
