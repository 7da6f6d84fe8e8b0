//! Guess grading with duplicate-letter multiset semantics
//!
//! Comparing a guess to the target happens in three passes:
//! 1. Exact pass: indices where the letters agree are right-spot; the rest
//!    of both words is collected, in order, into pruned residues.
//! 2. Multiset pass: both residues are sorted and walked with two pointers,
//!    crediting each letter `min(count in pruned guess, count in pruned
//!    target)` wrong-spot uses.
//! 3. Assignment pass: the guess is walked left to right, spending credits
//!    on non-exact positions.
//!
//! The multiset pass is what keeps duplicates honest: a single "does the
//! target contain this letter anywhere" check would credit a guess with
//! more repeats of a letter than the target actually has.

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Positional classification of one graded guess
///
/// Both index lists are in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeResult {
    /// Indices where the guess letter sits in the correct position
    pub right_spot: Vec<usize>,
    /// Indices whose letter exists elsewhere in the target, within
    /// duplicate-letter multiset limits
    pub wrong_spot: Vec<usize>,
}

impl GradeResult {
    /// True when every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.right_spot.len() == WORD_LEN
    }
}

/// Grade `guess` against `target`
///
/// Pure and deterministic: repeated calls with the same inputs yield
/// identical results.
///
/// # Examples
/// ```
/// use lingo::core::{Word, grade};
///
/// let guess = Word::new("sassy").unwrap();
/// let target = Word::new("grass").unwrap();
/// let result = grade(&guess, &target);
///
/// // Only one extra S in the target remains for wrong-spot credit
/// assert_eq!(result.right_spot, vec![3]);
/// assert_eq!(result.wrong_spot, vec![0, 1]);
/// ```
#[must_use]
pub fn grade(guess: &Word, target: &Word) -> GradeResult {
    let mut result = GradeResult::default();

    // Exact-position pass, collecting the non-matching residues in order
    let mut pruned_guess: Vec<u8> = Vec::with_capacity(WORD_LEN);
    let mut pruned_target: Vec<u8> = Vec::with_capacity(WORD_LEN);
    for i in 0..WORD_LEN {
        if guess.char_at(i) == target.char_at(i) {
            result.right_spot.push(i);
        } else {
            pruned_guess.push(guess.char_at(i));
            pruned_target.push(target.char_at(i));
        }
    }

    // Multiset-intersection pass over the sorted residues: a two-pointer
    // walk that computes min(count in pruned guess, count in pruned target)
    // per letter
    let mut sorted_guess = pruned_guess;
    let mut sorted_target = pruned_target;
    sorted_guess.sort_unstable();
    sorted_target.sort_unstable();

    let mut credits: FxHashMap<u8, u8> = FxHashMap::default();
    let mut guess_ptr = 0;
    let mut target_ptr = 0;
    while guess_ptr < sorted_guess.len() && target_ptr < sorted_target.len() {
        match sorted_guess[guess_ptr].cmp(&sorted_target[target_ptr]) {
            std::cmp::Ordering::Equal => {
                *credits.entry(sorted_guess[guess_ptr]).or_insert(0) += 1;
                guess_ptr += 1;
                target_ptr += 1;
            }
            std::cmp::Ordering::Less => guess_ptr += 1,
            std::cmp::Ordering::Greater => target_ptr += 1,
        }
    }

    // Assignment pass: spend credits left to right on non-exact positions
    for i in 0..WORD_LEN {
        if guess.char_at(i) == target.char_at(i) {
            continue;
        }
        if let Some(count) = credits.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result.wrong_spot.push(i);
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn grade_all_right() {
        let result = grade(&w("crane"), &w("crane"));
        assert_eq!(result.right_spot, vec![0, 1, 2, 3, 4]);
        assert!(result.wrong_spot.is_empty());
        assert!(result.is_win());
    }

    #[test]
    fn grade_no_overlap() {
        let result = grade(&w("lucky"), &w("thorn"));
        assert!(result.right_spot.is_empty());
        assert!(result.wrong_spot.is_empty());
    }

    #[test]
    fn grade_react_vs_crane() {
        // R-E-A-C-T vs C-R-A-N-E: the shared A at index 2 is exact, and
        // R, E, C are all elsewhere in the target; T is absent
        let result = grade(&w("react"), &w("crane"));
        assert_eq!(result.right_spot, vec![2]);
        assert_eq!(result.wrong_spot, vec![0, 1, 3]);
    }

    #[test]
    fn grade_right_spot_is_agreement_indices() {
        for (guess, target) in [
            ("crane", "slate"),
            ("speed", "steel"),
            ("robot", "floor"),
            ("aaaaa", "ababa"),
        ] {
            let guess = w(guess);
            let target = w(target);
            let expected: Vec<usize> = (0..WORD_LEN)
                .filter(|&i| guess.char_at(i) == target.char_at(i))
                .collect();
            assert_eq!(grade(&guess, &target).right_spot, expected);
        }
    }

    #[test]
    fn grade_duplicate_letters_bounded_by_target() {
        // ERASE vs SPEED: no exact matches; the two E's in the guess are
        // both credited because SPEED also has two, S once, R and A never
        let result = grade(&w("erase"), &w("speed"));
        assert!(result.right_spot.is_empty());
        assert_eq!(result.wrong_spot, vec![0, 3, 4]);

        let guess = w("erase");
        let e_wrong = result
            .wrong_spot
            .iter()
            .filter(|&&i| guess.char_at(i) == b'e')
            .count();
        assert!(e_wrong <= 2);
    }

    #[test]
    fn grade_duplicate_letters_no_overcount() {
        // SASSY vs GRASS: index 3 S is exact; only one further S exists in
        // the target, so exactly one of the remaining S's earns wrong-spot
        let result = grade(&w("sassy"), &w("grass"));
        assert_eq!(result.right_spot, vec![3]);
        assert_eq!(result.wrong_spot, vec![0, 1]);
    }

    #[test]
    fn grade_exact_match_consumes_letter() {
        // GEESE vs THOSE: S and E match exactly at 3 and 4; the remaining
        // G, E, E find nothing left in T, H, O
        let result = grade(&w("geese"), &w("those"));
        assert_eq!(result.right_spot, vec![3, 4]);
        assert!(result.wrong_spot.is_empty());
    }

    #[test]
    fn grade_is_pure() {
        let guess = w("speed");
        let target = w("erase");
        let first = grade(&guess, &target);
        let second = grade(&guess, &target);
        assert_eq!(first, second);
    }

    #[test]
    fn grade_ordering_ascending() {
        let result = grade(&w("react"), &w("crane"));
        let mut sorted_right = result.right_spot.clone();
        sorted_right.sort_unstable();
        assert_eq!(result.right_spot, sorted_right);

        let mut sorted_wrong = result.wrong_spot.clone();
        sorted_wrong.sort_unstable();
        assert_eq!(result.wrong_spot, sorted_wrong);
    }
}
