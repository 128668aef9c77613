//! Main TUI application.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::models::VesselSource;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    source: VesselSource,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over already loaded state. `source` is read again on reload.
    pub fn new(source: VesselSource, mut state: AppState) -> Self {
        state.clamp_cursors();
        Self {
            source,
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Rows arrive behind a short loading state, as after a fetch
        self.state.start_loading(Instant::now());

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.state.tick(Instant::now()),
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key, Instant::now()) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Reload => self.reload(),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(..)) => self.state.clamp_cursors(),
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        info!("dashboard closed");
        Ok(())
    }

    /// Re-reads the rows and shows the loading state again.
    fn reload(&mut self) {
        let now = Instant::now();
        match self.source.load() {
            Ok(rows) => {
                info!(count = rows.len(), "rows reloaded");
                self.state.table.set_rows(rows);
                self.state.status_message = None;
            }
            Err(e) => {
                warn!(error = %e, "reload failed, keeping previous rows");
                self.state.status_message = Some(format!("Reload failed: {}", e));
            }
        }
        self.state.start_loading(now);
        self.state.clamp_cursors();
    }
}
