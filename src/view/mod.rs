//! TUI rendering and terminal management (impure shell)
//!
//! The shell owns the terminal, the screen stack and the fetch dispatcher.
//! Each tick it reads at most one terminal event, drains finished fetches
//! into the stack, and redraws when a store raised the redraw flag.

mod alert;
pub mod constants;
mod detail;
mod help;
mod helpers;
mod home;
mod layout;
mod picker;
mod points;
mod status_bar;
mod styles;

pub use detail::ADDRESS_HEADING;
pub use help::render_help_overlay;
pub use home::{CITY_PLACEHOLDER, SUBMIT_LABEL, UF_PLACEHOLDER};
pub use layout::render_layout;
pub use styles::{ColorConfig, Theme};

use crate::config::KeyBindings;
use crate::controller::{handle_action, Effect, ScreenStack};
use crate::dispatch::FetchDispatcher;
use crate::links::LinkOpener;
use crate::logging::Diagnostics;
use crate::model::{KeyAction, PointId};
use crate::state::{FetchOutcome, FetchRequest, RedrawFlag, Route};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Event loop tick: how long to wait for a key before draining fetches.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Everything the shell needs besides a terminal.
pub struct AppServices {
    /// Runs fetches in the background.
    pub dispatcher: FetchDispatcher,
    /// Receiving end of the dispatcher's outcome channel.
    pub outcomes: Receiver<FetchOutcome>,
    /// Platform URI launcher.
    pub opener: Box<dyn LinkOpener>,
    /// Warning sink honoring the suppression list.
    pub diagnostics: Diagnostics,
    /// Key map.
    pub key_bindings: KeyBindings,
    /// Color on/off.
    pub colors: ColorConfig,
    /// Open this point's Detail screen on top of Home at startup.
    pub start_point: Option<PointId>,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    stack: ScreenStack,
    dispatcher: FetchDispatcher,
    outcomes: Receiver<FetchOutcome>,
    opener: Box<dyn LinkOpener>,
    diagnostics: Diagnostics,
    key_bindings: KeyBindings,
    theme: Theme,
    redraw: RedrawFlag,
    help_visible: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(services: AppServices) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, services))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(_, _) => self.redraw.raise(),
                    _ => {}
                }
            }

            self.pump_outcomes();

            if self.redraw.take() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app on an existing terminal and mount the first screens.
    ///
    /// Home is always the root. With `start_point` set, its Detail screen is
    /// pushed on top so that going back lands on Home.
    pub fn with_terminal(terminal: Terminal<B>, services: AppServices) -> Self {
        let AppServices {
            dispatcher,
            outcomes,
            opener,
            diagnostics,
            key_bindings,
            colors,
            start_point,
        } = services;

        let redraw = RedrawFlag::new();
        let mut app = Self {
            terminal,
            stack: ScreenStack::new(redraw.clone()),
            dispatcher,
            outcomes,
            opener,
            diagnostics,
            key_bindings,
            theme: Theme::with_color_config(colors),
            redraw,
            help_visible: false,
        };

        let request = app.stack.navigate(Route::Home);
        app.dispatcher.dispatch(request);
        if let Some(point_id) = start_point {
            let request = app.stack.navigate(Route::Detail { point_id });
            app.dispatcher.dispatch(request);
        }
        app
    }

    /// Handle one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            debug!(?key, "unbound key");
            return false;
        };

        if self.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help | KeyAction::Back => {
                    self.help_visible = false;
                    self.redraw.raise();
                }
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.help_visible = true,
            action => {
                let effect = match self.stack.current_mut() {
                    Some(screen) => handle_action(screen, action, self.opener.as_ref()),
                    None => None,
                };
                match effect {
                    Some(Effect::Fetch(request)) => self.dispatch(request),
                    Some(Effect::Navigate(navigate)) => {
                        if let Some(request) = self.stack.apply(navigate) {
                            self.dispatch(request);
                        }
                    }
                    None => {}
                }
            }
        }

        // Form focus and popups live outside the stores.
        self.redraw.raise();
        false
    }

    /// Apply every finished fetch. Returns how many outcomes were drained.
    ///
    /// Failures are reported through [`Diagnostics`] and still handed to
    /// the stack so the owning controller can observe them.
    pub fn pump_outcomes(&mut self) -> usize {
        let mut drained = 0;
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    drained += 1;
                    if let Err(e) = &outcome.result {
                        self.diagnostics
                            .warn(&format!("Failed to fetch {}: {e}", outcome.kind));
                    }
                    self.stack.deliver(outcome);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("fetch channel closed");
                    break;
                }
            }
        }
        drained
    }

    /// Render the current frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let stack = &self.stack;
        let theme = &self.theme;
        let help_visible = self.help_visible;
        self.terminal
            .draw(|frame| render_layout(frame, stack, theme, help_visible))?;
        Ok(())
    }

    /// Screen stack.
    pub fn stack(&self) -> &ScreenStack {
        &self.stack
    }

    /// Terminal, for buffer inspection.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Whether the help overlay is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    fn dispatch(&self, request: FetchRequest) {
        self.dispatcher.dispatch(request);
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(services: AppServices) -> Result<(), TuiError> {
    let mut app = TuiApp::new(services)?;
    info!("tui started");

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
