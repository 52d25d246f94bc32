use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::session_log::SessionLog;
use crate::model::{Config, Intent, TaskId, UiConfig};
use crate::ops::{Projection, Store};

use super::input;
use super::render;
use super::theme::Theme;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The draft input box
    Input,
    /// The task list
    List,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    pub ui: UiConfig,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the edit cursor in the draft
    pub draft_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: Store::new(),
            focus: Focus::Input,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            ui: config.ui.clone(),
            cursor: 0,
            scroll_offset: 0,
            draft_cursor: 0,
            show_help: false,
        }
    }

    /// Derived values for the current state
    pub fn projection(&self) -> Projection<'_> {
        Projection::new(self.store.state())
    }

    /// Send an intent to the store, then keep both cursors in range
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let changed = self.store.dispatch(intent);
        self.clamp_cursors();
        changed
    }

    /// ID of the task under the list cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.projection().visible.get(self.cursor).map(|t| t.id)
    }

    /// Move the list cursor onto the task with this ID, if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        let found = self.projection().visible.iter().position(|t| t.id == id);
        if let Some(idx) = found {
            self.cursor = idx;
        }
    }

    fn clamp_cursors(&mut self) {
        let visible = self.projection().visible.len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));

        let draft = self.store.state().draft();
        let mut at = self.draft_cursor.min(draft.len());
        while !draft.is_char_boundary(at) {
            at -= 1;
        }
        self.draft_cursor = at;
    }
}

/// Run the TUI application
pub fn run(config: Config, log: Option<SessionLog>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);
    if let Some(log) = log {
        log.attach(&mut app.store);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
