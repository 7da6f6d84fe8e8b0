//! Command implementations

pub mod grade;

pub use grade::{GradeReport, grade_words, print_grade_report};
