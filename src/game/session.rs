//! Game session state machine
//!
//! One `GameSession` is live at a time. It owns the board, the grade
//! matrix, the hidden target, the cursor and line, the difficulty mode and
//! the terminal status, and defines a transition (possibly a no-op) for
//! every input event in every state. All transitions are synchronous; no
//! intermediate state is ever observable.

use crate::core::{GradeResult, WORD_LEN, Word, grade};
use crate::game::board::{Board, Grade, GradeMatrix, MAX_GUESSES};
use crate::prefs::PreferenceStore;
use crate::wordlists::{Dictionary, WordPool};
use rand::Rng;

/// Feedback granularity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    /// Full positional feedback
    #[default]
    Normal,
    /// Anonymized counts only, compacted from column 0
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    /// Parse a stored preference value; anything unrecognized means normal
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("hard") {
            Self::Hard
        } else {
            Self::Normal
        }
    }

    /// Settings-screen description of the mode
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Letters are marked whether they are right or in the wrong spot.",
            Self::Hard => {
                "You are only told the number of letters in the right and wrong spot, \
                 not including the first letter."
            }
        }
    }
}

/// Terminal status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// The closed set of input events driving the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A typed letter key
    Letter(char),
    Backspace,
    Enter,
    ArrowLeft,
    ArrowRight,
    /// Unconditional new-game escape hatch, valid mid-game
    Space,
    /// Explicit new-game request
    NewGame,
    /// Difficulty selection; a no-op when the mode is unchanged
    SetDifficulty(Difficulty),
}

/// The aggregate root owning all mutable game state
pub struct GameSession<R: Rng> {
    dictionary: Dictionary,
    pool: WordPool,
    prefs: Box<dyn PreferenceStore>,
    rng: R,
    board: Board,
    grades: GradeMatrix,
    target: Word,
    line: usize,
    cursor: usize,
    difficulty: Difficulty,
    status: Status,
    notice: Option<String>,
    notice_seq: u64,
}

impl<R: Rng> GameSession<R> {
    /// Start a session with a freshly drawn target
    ///
    /// The initial difficulty comes from the preference store, defaulting
    /// to normal. Word data must already be loaded; nothing here blocks.
    ///
    /// # Panics
    /// Panics if the pool is empty (a startup precondition, validated by
    /// the caller).
    pub fn new(
        dictionary: Dictionary,
        pool: WordPool,
        prefs: Box<dyn PreferenceStore>,
        mut rng: R,
    ) -> Self {
        let difficulty = prefs
            .get()
            .map_or(Difficulty::Normal, |v| Difficulty::from_name(&v));
        let target = pool.pick(&mut rng);

        let mut board = Board::default();
        board.prepare_row(0, target.first_letter());

        Self {
            dictionary,
            pool,
            prefs,
            rng,
            board,
            grades: GradeMatrix::default(),
            target,
            line: 0,
            cursor: 1,
            difficulty,
            status: Status::InProgress,
            notice: None,
            notice_seq: 0,
        }
    }

    /// Apply one input event
    ///
    /// Every event has a defined transition in every state; events that do
    /// not apply are no-ops.
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Space | Input::NewGame => self.new_game(),
            Input::SetDifficulty(mode) => self.set_difficulty(mode),
            Input::Enter if self.status != Status::InProgress => self.new_game(),
            _ if self.status != Status::InProgress => {}
            Input::Letter(c) => self.letter(c),
            Input::Backspace => self.backspace(),
            Input::Enter => self.submit(),
            Input::ArrowLeft => {
                if self.cursor > 1 {
                    self.cursor -= 1;
                }
            }
            Input::ArrowRight => {
                if self.cursor < WORD_LEN - 1 {
                    self.cursor += 1;
                }
            }
        }
    }

    /// Replace the session state atomically with a fresh game
    pub fn new_game(&mut self) {
        self.target = self.pool.pick(&mut self.rng);
        self.board = Board::default();
        self.grades = GradeMatrix::default();
        self.board.prepare_row(0, self.target.first_letter());
        self.line = 0;
        self.cursor = 1;
        self.status = Status::InProgress;
        self.notice = None;
    }

    fn set_difficulty(&mut self, mode: Difficulty) {
        if mode == self.difficulty {
            return;
        }
        self.difficulty = mode;
        // Fire-and-forget: a failed save never interrupts play
        let _ = self.prefs.set(mode.as_str());
        self.new_game();
    }

    fn letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        // The cursor parks on the last column; reject only once that cell
        // is occupied
        if self.cursor == WORD_LEN - 1 && self.board.cell(self.line, self.cursor).is_some() {
            return;
        }
        self.board
            .set(self.line, self.cursor, c.to_ascii_lowercase());
        if self.cursor < WORD_LEN - 1 {
            self.cursor += 1;
        }
    }

    fn backspace(&mut self) {
        if self.board.cell(self.line, self.cursor).is_some() {
            self.board.clear_cell(self.line, self.cursor);
        } else if self.cursor > 1 {
            self.cursor -= 1;
            self.board.clear_cell(self.line, self.cursor);
        }
    }

    fn submit(&mut self) {
        let Some(submitted) = self.board.row_word(self.line) else {
            return;
        };

        if !self.dictionary.contains(&submitted) {
            self.board.prepare_row(self.line, self.target.first_letter());
            self.cursor = 1;
            self.show_notice(format!("{} is not a valid word.", submitted.to_uppercase()));
            return;
        }

        // Cells only ever hold lowercase ASCII letters
        let Ok(guess) = Word::new(&submitted) else {
            return;
        };
        let result = grade(&guess, &self.target);
        self.place_grades(&result);

        if result.is_win() {
            if self.difficulty == Difficulty::Hard {
                // Hard mode withholds one right-spot credit; compensate on
                // the winning row so it reads fully solved
                self.grades.set(self.line, WORD_LEN - 1, Grade::RightSpot);
            }
            self.status = Status::Won;
            self.show_notice("Nice!".to_string());
        } else if self.line == MAX_GUESSES - 1 {
            self.status = Status::Lost;
            self.show_notice(format!(
                "The word was {}.",
                self.target.text().to_uppercase()
            ));
        } else {
            self.line += 1;
            self.board.prepare_row(self.line, self.target.first_letter());
            self.cursor = 1;
        }
    }

    fn place_grades(&mut self, result: &GradeResult) {
        match self.difficulty {
            Difficulty::Normal => {
                for &i in &result.right_spot {
                    self.grades.set(self.line, i, Grade::RightSpot);
                }
                for &i in &result.wrong_spot {
                    self.grades.set(self.line, i, Grade::WrongSpot);
                }
            }
            Difficulty::Hard => {
                // Compacted, anonymized feedback. One right-spot credit is
                // withheld: the pre-filled first letter is not re-counted.
                let mut pointer = 0;
                for _ in result.right_spot.iter().skip(1) {
                    self.grades.set(self.line, pointer, Grade::RightSpot);
                    pointer += 1;
                }
                for _ in &result.wrong_spot {
                    self.grades.set(self.line, pointer, Grade::WrongSpot);
                    pointer += 1;
                }
            }
        }
    }

    fn show_notice(&mut self, text: String) {
        self.notice = Some(text);
        self.notice_seq += 1;
    }

    /// Clear the transient notice; called by the shell when its auto-clear
    /// deadline passes
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // Presentation boundary: everything a renderer needs after a transition.
    // Grid accessors return copies.

    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub const fn grades(&self) -> GradeMatrix {
        self.grades
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Monotonic counter bumped on every new notice; the shell watches it
    /// to supersede a pending auto-clear
    #[must_use]
    pub const fn notice_seq(&self) -> u64 {
        self.notice_seq
    }

    /// The hidden target word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}
