//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external
//! collaborators. All types here are pure, testable, and have clear
//! mathematical properties.

mod grade;
mod word;

pub use grade::{GradeResult, grade};
pub use word::{WORD_LEN, Word, WordError};
