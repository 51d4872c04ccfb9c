//! TUI rendering and terminal management (impure shell)

pub mod card;
pub mod constants;
pub mod feed_list;
pub mod layout;
pub mod mood_bar;
pub mod styles;
pub mod tabs;

pub use styles::{ColorConfig, FeedStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_mood_action, handle_scroll_action, handle_tab_action, AppState};
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: FeedStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Enters raw mode and the alternate screen. Call [`restore_terminal`]
    /// when done, whether or not this succeeded.
    pub fn new(app_state: AppState, key_bindings: KeyBindings) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(
            terminal,
            app_state,
            key_bindings,
            FeedStyles::new(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws only after an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let poll_interval = Duration::from_millis(constants::EVENT_POLL_MILLIS);

        self.draw()?;

        loop {
            if !event::poll(poll_interval)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create the application on any backend.
    ///
    /// The feed viewport is sized from the terminal immediately, which also
    /// clamps a restored scroll offset.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut app_state: AppState,
        key_bindings: KeyBindings,
        styles: FeedStyles,
    ) -> Self {
        if let Ok(size) = terminal.size() {
            app_state.set_viewport_height(layout::feed_viewport_height(size.height));
        }
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
        }
    }

    /// Application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    #[cfg(test)]
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Refresh => {
                debug!("Refreshing ranking");
                self.app_state.refresh(Utc::now());
            }
            KeyAction::NextMode | KeyAction::PrevMode | KeyAction::SelectMode(_) => {
                handle_tab_action(&mut self.app_state, action, Utc::now());
            }
            KeyAction::CycleMood | KeyAction::ClearMood => {
                handle_mood_action(&mut self.app_state, action, Utc::now());
            }
            action if action.is_scroll() => handle_scroll_action(&mut self.app_state, action),
            _ => {}
        }
        false
    }

    /// Handle a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.app_state
            .set_viewport_height(layout::feed_viewport_height(height));
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.app_state
            .set_viewport_height(layout::feed_viewport_height(size.height));

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

/// Run the feed on the real terminal until the user quits.
///
/// The terminal is restored even if setup or the event loop fails.
pub fn run(app_state: AppState, key_bindings: KeyBindings) -> Result<(), TuiError> {
    let result = TuiApp::new(app_state, key_bindings).and_then(|mut app| app.run());
    restore_terminal()?;
    result
}

/// Leave raw mode and the alternate screen.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
