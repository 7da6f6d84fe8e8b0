//! TUI application state and event loop
//!
//! The shell owns the session plus everything time-related: the transient
//! notice auto-clear deadline and the poll cadence. The session itself
//! never blocks and never sees a clock.

use crate::game::{Difficulty, GameSession, Input};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient notice stays visible
const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Idle poll cadence when no deadline is pending
const TICK: Duration = Duration::from_millis(250);

/// Which screen is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Settings,
}

/// Application state wrapping one live session
pub struct App<R: Rng> {
    pub session: GameSession<R>,
    pub screen: Screen,
    /// Highlighted mode on the settings screen
    pub selected: Difficulty,
    pub should_quit: bool,
    notice_deadline: Option<Instant>,
    seen_notice_seq: u64,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: GameSession<R>) -> Self {
        let seen_notice_seq = session.notice_seq();
        let selected = session.difficulty();
        Self {
            session,
            screen: Screen::Game,
            selected,
            should_quit: false,
            notice_deadline: None,
            seen_notice_seq,
        }
    }

    /// Map one key press onto a session transition or a shell action
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Game => self.handle_game_key(key.code),
            Screen::Settings => self.handle_settings_key(key.code),
        }

        self.sync_notice();
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.selected = self.session.difficulty();
                self.screen = Screen::Settings;
            }
            KeyCode::Char(' ') => self.session.handle(Input::Space),
            KeyCode::Char(c) => self.session.handle(Input::Letter(c)),
            KeyCode::Backspace => self.session.handle(Input::Backspace),
            KeyCode::Enter => self.session.handle(Input::Enter),
            KeyCode::Left => self.session.handle(Input::ArrowLeft),
            KeyCode::Right => self.session.handle(Input::ArrowRight),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Tab => self.screen = Screen::Game,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.selected = match self.selected {
                    Difficulty::Normal => Difficulty::Hard,
                    Difficulty::Hard => Difficulty::Normal,
                };
            }
            KeyCode::Enter => {
                // A no-op in the session when the mode is unchanged
                self.session.handle(Input::SetDifficulty(self.selected));
                self.screen = Screen::Game;
            }
            _ => {}
        }
    }

    /// Arm or re-arm the auto-clear deadline when a new notice appeared
    fn sync_notice(&mut self) {
        if self.session.notice_seq() != self.seen_notice_seq {
            self.seen_notice_seq = self.session.notice_seq();
            self.notice_deadline = Some(Instant::now() + NOTICE_TTL);
        } else if self.session.notice().is_none() {
            self.notice_deadline = None;
        }
    }

    /// Expire the notice once its deadline passes
    pub fn tick(&mut self) {
        if let Some(deadline) = self.notice_deadline
            && Instant::now() >= deadline
        {
            self.session.clear_notice();
            self.notice_deadline = None;
        }
    }

    /// How long the event loop may sleep before the next tick matters
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        self.notice_deadline.map_or(TICK, |deadline| {
            deadline
                .saturating_duration_since(Instant::now())
                .min(TICK)
        })
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout())?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;
    use crate::prefs::MemoryPrefs;
    use crate::wordlists::{Dictionary, WordPool, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App<StdRng> {
        let dictionary = Dictionary::new(&words_from_slice(&["crane", "candy"]));
        let pool = WordPool::new(words_from_slice(&["crane"]));
        let session = GameSession::new(
            dictionary,
            pool,
            Box::new(MemoryPrefs::default()),
            StdRng::seed_from_u64(42),
        );
        App::new(session)
    }

    #[test]
    fn letter_keys_reach_the_session() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('r')));

        assert_eq!(app.session.board().cell(0, 1), Some('r'));
        assert_eq!(app.session.cursor(), 2);
    }

    #[test]
    fn space_key_restarts() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('r')));
        app.handle_key(press(KeyCode::Char(' ')));

        assert_eq!(app.session.board().cell(0, 1), None);
        assert_eq!(app.session.cursor(), 1);
    }

    #[test]
    fn tab_toggles_settings() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Game);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Settings);
        assert_eq!(app.selected, Difficulty::Normal);

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Game);
    }

    #[test]
    fn settings_apply_difficulty() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected, Difficulty::Hard);

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn settings_swallow_letters() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('x')));

        assert_eq!(app.session.board().cell(0, 1), None);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.session.board().cell(0, 1), None, "no letter written");
    }

    #[test]
    fn esc_quits_game_screen() {
        let mut app = app();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn notice_arms_deadline_and_tick_preserves_until_due() {
        let mut app = app();
        for c in "zzzz".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));

        assert!(app.session.notice().is_some());
        assert!(app.notice_deadline.is_some());
        assert!(app.poll_timeout() <= TICK);

        // Deadline is two seconds out; an immediate tick must not clear
        app.tick();
        assert!(app.session.notice().is_some());
    }

    #[test]
    fn enter_submits_and_wins() {
        let mut app = app();
        for c in "rane".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.session.status(), Status::Won);
    }
}
