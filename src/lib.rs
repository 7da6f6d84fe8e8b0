//! Lingo
//!
//! A terminal word-guessing game: one hidden five-letter target, five
//! attempts, the first letter always revealed, and two difficulty modes
//! that vary how much of the grading is shown.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo::core::{Word, grade};
//!
//! let guess = Word::new("react").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let result = grade(&guess, &target);
//! assert_eq!(result.right_spot, vec![2]);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Difficulty preference storage
pub mod prefs;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
