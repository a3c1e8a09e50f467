//! Character frequency counting.

use std::collections::HashMap;

/// Frequency map from character to number of occurrences.
pub type LetterCounts = HashMap<char, usize>;

/// Count how many times each character occurs in `input`.
///
/// Every character is counted, including whitespace and punctuation. An
/// empty input yields an empty map.
///
/// # Examples
///
/// ```
/// use string_utils::letter_count;
///
/// let counts = letter_count("mississippi");
/// assert_eq!(counts.get(&'i'), Some(&4));
/// assert_eq!(counts.get(&'p'), Some(&2));
/// assert!(letter_count("").is_empty());
/// ```
#[must_use]
pub fn letter_count(input: &str) -> LetterCounts {
    let mut counts = LetterCounts::new();
    for character in input.chars() {
        *counts.entry(character).or_insert(0) += 1;
    }
    counts
}
