//! One-shot grading from the command line
//!
//! `lingo grade <guess> <target>` prints the per-letter classification of a
//! single guess, colored the way the board would show it.

use crate::core::{GradeResult, WORD_LEN, Word, WordError, grade};
use colored::Colorize;

/// Result of grading one guess against one target
#[derive(Debug, Clone)]
pub struct GradeReport {
    pub guess: Word,
    pub target: Word,
    pub result: GradeResult,
}

/// Grade a guess/target pair given as strings
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid five-letter word.
pub fn grade_words(guess: &str, target: &str) -> Result<GradeReport, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let result = grade(&guess, &target);

    Ok(GradeReport {
        guess,
        target,
        result,
    })
}

/// Print a report with green right-spot and yellow wrong-spot letters
pub fn print_grade_report(report: &GradeReport) {
    let mut cells = Vec::with_capacity(WORD_LEN);
    for i in 0..WORD_LEN {
        let letter = (report.guess.char_at(i) as char).to_ascii_uppercase();
        let cell = format!(" {letter} ");
        let colored_cell = if report.result.right_spot.contains(&i) {
            cell.as_str().black().on_green()
        } else if report.result.wrong_spot.contains(&i) {
            cell.as_str().black().on_yellow()
        } else {
            cell.as_str().white().on_bright_black()
        };
        cells.push(colored_cell.to_string());
    }

    println!(
        "\n{} vs {}",
        report.guess.text().to_uppercase(),
        report.target.text().to_uppercase()
    );
    println!("\n  {}\n", cells.join(" "));
    println!(
        "  {} right spot, {} wrong spot",
        report.result.right_spot.len(),
        report.result.wrong_spot.len()
    );
}
