//! Acceptance test harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with methods for simulating user
//! interactions against an in-memory session store.

use crate::config::keybindings::KeyBindings;
use crate::model::{Mood, Post, PostId};
use crate::state::{AppState, DynStorage, FeedStateStore, MemoryStorage};
use crate::view::{ColorConfig, FeedStyles, TuiApp};
use crate::view_state::LayoutParams;
use chrono::{DateTime, Duration, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing whitespace is trimmed and empty rows are dropped.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Fixed evaluation instant for deterministic rankings.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// `n` posts, one hour apart (p0 newest), with likes equal to their index
/// and moods cycling through every mood plus untagged.
pub fn sample_posts(n: usize) -> Vec<Post> {
    let moods = [
        Some(Mood::Hype),
        Some(Mood::Emotional),
        Some(Mood::PlotTwist),
        Some(Mood::Dark),
        None,
    ];
    (0..n)
        .map(|i| {
            Post::new(
                PostId::new(format!("p{i}")).unwrap(),
                fixed_now() - Duration::hours(i as i64),
            )
            .with_title(format!("Post {i}"))
            .with_likes(i as u64)
            .with_mood(moods[i % moods.len()])
        })
        .collect()
}

/// Test harness for acceptance testing
pub struct FeedTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl FeedTestHarness {
    /// Harness over `posts` with an 80x24 terminal and fresh memory storage.
    pub fn new(posts: Vec<Post>) -> Self {
        Self::with_size(posts, 80, 24)
    }

    /// Harness with a custom terminal size.
    pub fn with_size(posts: Vec<Post>, width: u16, height: u16) -> Self {
        let store = FeedStateStore::open(Box::new(MemoryStorage::new()) as DynStorage);
        Self::with_store(posts, store, width, height)
    }

    /// Harness over an existing store (to test restoration).
    pub fn with_store(
        posts: Vec<Post>,
        store: FeedStateStore<DynStorage>,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let state = AppState::new(posts, store, LayoutParams::default(), fixed_now());
        let app = TuiApp::with_terminal(
            terminal,
            state,
            KeyBindings::default(),
            FeedStyles::with_color_config(ColorConfig::new(false)),
        );
        Self { app, running: true }
    }

    /// Send a key without modifiers. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send a key with modifiers. Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        if self.app.handle_key(KeyEvent::new(key, mods)) {
            self.running = false;
        }
        !self.running
    }

    /// Send a sequence of character keys.
    pub fn type_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Simulate a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize(width, height);
    }

    /// Current app state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render a frame and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
